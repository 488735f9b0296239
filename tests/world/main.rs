//! Integration tests for Layer 1: World
//!
//! Tests for world construction, validation, and lookups.

mod construction;
