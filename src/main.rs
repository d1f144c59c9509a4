//! `game-launcher` command-line entry point.
//!
//! Parses arguments, loads configuration, installs logging, runs one command
//! against the library and prints the rendered outcome. Rejected or failed
//! commands exit with status 1.

use clap::Parser;
use game_launcher::infrastructure::get_config_path;
use game_launcher::observability::init_tracing;
use game_launcher::ui::{render, Painter};
use game_launcher::{execute, open_library, Cli, Config, Outcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(get_config_path);
    let (config, config_error) = match Config::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let config = config.with_cli(&cli);

    init_tracing(&config);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "using default configuration");
    }

    let theme = config.theme();
    let painter = Painter::new(&theme, !config.no_color);

    let outcome = match open_library(&config) {
        Ok(mut library) => execute(&mut library, cli.command),
        Err(e) => Outcome::Failed(e.to_string()),
    };

    let text = render(&outcome, &painter);
    if outcome.is_failure() {
        eprintln!("{text}");
        ExitCode::FAILURE
    } else {
        println!("{text}");
        ExitCode::SUCCESS
    }
}
