//! Questline CLI entry point.

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use questline_engine::State;
use questline_runtime::logging::init_logging;
use questline_runtime::{ReaderEditor, Repl, RuntimeConfig};
use tracing::error;

/// The game failed while running.
const EXIT_GAME_ERROR: u8 = 1;

/// The game could not be started.
const EXIT_INIT_ERROR: u8 = 2;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    world: Option<PathBuf>,
    no_banner: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("ERROR: {message}");
            eprintln!("Try 'questline --help' for more information.");
            return ExitCode::from(EXIT_INIT_ERROR);
        }
    };

    if cli.show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.show_version {
        println!("questline {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let mut config = RuntimeConfig::default().with_banner(!cli.no_banner);
    if let Some(path) = cli.world {
        config = config.with_world_path(path);
    }

    init_logging(&config.log_filter);
    run(&config)
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.no_banner = true,
            "-w" | "--world" => {
                i += 1;
                if i >= args.len() {
                    return Err(format!("{} requires a file", args[i - 1]));
                }
                config.world = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with("--world=") => {
                config.world = Some(PathBuf::from(&arg["--world=".len()..]));
            }
            arg => return Err(format!("unknown option: {arg}")),
        }
        i += 1;
    }

    Ok(config)
}

fn run(config: &RuntimeConfig) -> ExitCode {
    let state = match config
        .load_world()
        .and_then(|loaded| State::new(&loaded.world, &loaded.start))
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "could not start game");
            eprintln!("ERROR: {e}");
            if let Some(context) = &e.context {
                eprintln!("  {context}");
            }
            return ExitCode::from(EXIT_INIT_ERROR);
        }
    };

    let result = if io::stdin().is_terminal() {
        let mut repl = match Repl::new(state, config) {
            Ok(repl) => repl,
            Err(e) => {
                eprintln!("ERROR: {e}");
                return ExitCode::from(EXIT_INIT_ERROR);
            }
        };
        repl.run()
    } else {
        let editor = ReaderEditor::new(io::stdin().lock());
        Repl::with_editor(editor, io::stdout(), state)
            .with_config(config)
            .run()
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "game stopped");
            eprintln!("ERROR: {e}");
            ExitCode::from(EXIT_GAME_ERROR)
        }
    }
}

fn print_help() {
    println!(
        "\x1b[1mQuestline\x1b[0m - A small text adventure

\x1b[1mUSAGE:\x1b[0m
    questline [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -w, --world FILE    Play the world defined in a JSON file
                        (default: the built-in house)
    --no-banner         Skip the opening room description

\x1b[1mENVIRONMENT:\x1b[0m
    QUESTLINE_LOG       Log filter, e.g. 'debug' (falls back to RUST_LOG)

\x1b[1mEXIT STATUS:\x1b[0m
    0    The player quit or input ended
    1    The game failed while running
    2    The game could not be started

Type HELP at the prompt for the list of game commands."
    );
}
