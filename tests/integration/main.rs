//! End-to-end tests: world files in, whole sessions through the REPL.

mod sessions;
mod world_files;
