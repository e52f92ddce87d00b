//! EUI generation command.
//!
//! Reads the hardware descriptor, derives the EUI-64 and prints it. This is
//! the only command; `rpi-eui` with no arguments runs it against
//! `/proc/cpuinfo`.
//!
//! # Output
//!
//! - text: `02a0208210000000` followed by a newline
//! - json: pretty-printed `{"eui": ..., "revision": ..., "serial": ..., "model": ...}`
//!
//! On failure stdout stays empty and the diagnostic goes to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Hardware descriptor unavailable
//! - 3: Required field missing
//! - 4: Field is not valid hex

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use rpi_eui_core::{
    CpuInfoSource, DEFAULT_CPUINFO_PATH, Eui64, EuiError, HardwareIdentity, HardwareSource,
    format_eui,
};
use serde::Serialize;
use tracing::info;

/// Exit codes for the generate command.
///
/// 2 is left to clap for usage errors.
pub mod exit_codes {
    /// Success exit code.
    pub const SUCCESS: u8 = 0;
    /// The hardware descriptor could not be read.
    pub const HARDWARE_UNAVAILABLE: u8 = 1;
    /// `Serial` or `Revision` is missing from the descriptor.
    pub const FIELD_NOT_FOUND: u8 = 3;
    /// `Serial` or `Revision` is not a valid hex string.
    pub const INVALID_FORMAT: u8 = 4;
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare EUI on one line.
    #[default]
    Text,
    /// JSON object with the EUI and the values it was derived from.
    Json,
}

/// Arguments for EUI generation.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Hardware descriptor to read `Serial` and `Revision` from
    #[arg(long, env = "RPI_EUI_CPUINFO", default_value = DEFAULT_CPUINFO_PATH)]
    pub cpuinfo: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the EUI in upper case
    #[arg(long)]
    pub uppercase: bool,
}

// ============================================================================
// Response Types for JSON output
// ============================================================================

/// Successful generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    /// The derived EUI-64.
    pub eui: String,
    /// Raw revision code as read.
    pub revision: String,
    /// Raw serial number as read.
    pub serial: String,
    /// Board model, if the descriptor reports one.
    pub model: Option<String>,
}

/// Error response for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

// ============================================================================
// Command execution
// ============================================================================

/// Runs the generate command against the configured descriptor, returning an
/// exit code.
pub fn run_generate(args: &GenerateArgs) -> u8 {
    let source = CpuInfoSource::new(&args.cpuinfo);
    run_with_source(&source, args.format, args.uppercase)
}

/// Runs the generate command against an arbitrary source.
pub fn run_with_source(source: &dyn HardwareSource, format: OutputFormat, uppercase: bool) -> u8 {
    match generate(source) {
        Ok((identity, eui)) => {
            info!(eui = %eui, "generated EUI");
            println!("{}", render_success(&identity, &eui, format, uppercase));
            exit_codes::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", render_error(&e, format));
            exit_code_for(&e)
        },
    }
}

fn generate(source: &dyn HardwareSource) -> Result<(HardwareIdentity, Eui64), EuiError> {
    let identity = source.read()?;
    let eui = format_eui(&identity)?;
    Ok((identity, eui))
}

// ============================================================================
// Helper functions
// ============================================================================

/// Renders a successful result.
pub fn render_success(
    identity: &HardwareIdentity,
    eui: &Eui64,
    format: OutputFormat,
    uppercase: bool,
) -> String {
    let eui = if uppercase {
        eui.to_hex_upper()
    } else {
        eui.to_hex()
    };

    match format {
        OutputFormat::Text => eui,
        OutputFormat::Json => {
            let response = GenerateResponse {
                eui,
                revision: identity.revision().to_string(),
                serial: identity.serial_number().to_string(),
                model: identity.model().map(str::to_string),
            };
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
        },
    }
}

/// Renders an error diagnostic.
pub fn render_error(error: &EuiError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Error: {error}"),
        OutputFormat::Json => {
            let response = ErrorResponse {
                code: error.code().to_string(),
                message: error.to_string(),
            };
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
        },
    }
}

/// Maps an error to its exit code.
pub const fn exit_code_for(error: &EuiError) -> u8 {
    match error {
        EuiError::HardwareUnavailable { .. } => exit_codes::HARDWARE_UNAVAILABLE,
        EuiError::FieldNotFound { .. } => exit_codes::FIELD_NOT_FOUND,
        EuiError::InvalidFormat { .. } => exit_codes::INVALID_FORMAT,
        _ => exit_codes::HARDWARE_UNAVAILABLE,
    }
}
