//! rpi-eui - locally-administered LoRaWAN EUI-64 for Raspberry Pi boards
//!
//! Prints `02` + revision + serial as 16 hex characters.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use commands::generate::OutputFormat;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

/// rpi-eui - derive a LoRaWAN device EUI from the board serial and revision
#[derive(Parser, Debug)]
#[command(name = "rpi-eui")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error) or filter directive
    #[arg(long, env = "RPI_EUI_LOG", default_value = "warn")]
    log_level: String,

    #[command(flatten)]
    generate: commands::generate::GenerateArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries only the EUI; diagnostics go to stderr.
    let stderr_is_terminal = std::io::stderr().is_terminal();
    tracing_subscriber::registry()
        .with(log_filter(&cli.log_level, cli.generate.format))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(stderr_is_terminal)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("failed to initialize logging")?;

    let exit_code = commands::generate::run_generate(&cli.generate);
    std::process::exit(i32::from(exit_code));
}

/// Builds the log filter for `log_level`.
///
/// Invalid directives fall back to `warn`. JSON output turns logging off so
/// stderr holds nothing but the JSON diagnostic.
fn log_filter(log_level: &str, format: OutputFormat) -> EnvFilter {
    match format {
        OutputFormat::Json => EnvFilter::new("off"),
        OutputFormat::Text => {
            EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
        },
    }
}
