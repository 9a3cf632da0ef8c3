use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use card_validator_cli::render::{Color, Palette};
use card_validator_cli::{run, Cli, EXIT_FATAL};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let palette = Palette::detect(cli.no_color);
    let mut stdout = std::io::stdout().lock();

    match run(&cli, palette, &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{}", palette.paint(format!("{e:#}"), Color::Red));
            ExitCode::from(EXIT_FATAL)
        }
    }
}
