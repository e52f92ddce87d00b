//! Error types for descriptor reading and EUI formatting.

use std::fmt;

use thiserror::Error;

/// A hardware identifier field that feeds the EUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HardwareField {
    /// The board serial number (`Serial` line).
    Serial,
    /// The board revision code (`Revision` line).
    Revision,
}

impl HardwareField {
    /// Returns the descriptor key this field is read from.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Serial => "Serial",
            Self::Revision => "Revision",
        }
    }
}

impl fmt::Display for HardwareField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors that can occur while deriving an EUI-64.
///
/// Every variant is terminal for the invocation that produced it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EuiError {
    /// The hardware descriptor could not be opened or read.
    #[error("hardware descriptor '{path}' is unavailable: {source}")]
    HardwareUnavailable {
        /// The descriptor path.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A required field is absent from the descriptor.
    #[error("field '{field}' not found in hardware descriptor")]
    FieldNotFound {
        /// The missing field.
        field: HardwareField,
    },

    /// A field is present but is not a usable hex string.
    #[error("field '{field}' has invalid value '{value}': {reason}")]
    InvalidFormat {
        /// The offending field.
        field: HardwareField,
        /// The raw value as read.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl EuiError {
    /// Stable snake-case code for machine-readable diagnostics.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::HardwareUnavailable { .. } => "hardware_unavailable",
            Self::FieldNotFound { .. } => "field_not_found",
            Self::InvalidFormat { .. } => "invalid_format",
        }
    }
}

/// Result type for EUI operations.
pub type EuiResult<T> = Result<T, EuiError>;
