//! EUI-64 assembly from a [`HardwareIdentity`].
//!
//! # Layout
//!
//! ```text
//! +---------+-----------------------+-------------------------------+
//! | 0x02    | revision (3 bytes)    | serial (4 bytes)              |
//! +---------+-----------------------+-------------------------------+
//!   02        RR RR RR                NN NN NN NN
//! ```
//!
//! The first octet `0x02` has the U/L bit set (locally administered) and the
//! I/G bit clear (unicast), so the identifier cannot collide with a
//! registry-assigned EUI.
//!
//! Revision and serial are right-aligned into their slots: shorter values are
//! zero-padded on the left, longer values keep their least-significant
//! characters.

pub mod padding;

#[cfg(test)]
mod proptest_eui;

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

pub use self::padding::{pad_left, truncate_right_aligned};
use crate::error::{EuiError, EuiResult, HardwareField};
use crate::hardware::HardwareIdentity;

/// First octet of every generated EUI.
pub const LOCAL_ADMIN_OCTET: u8 = 0x02;

/// Width of the revision slot in hex characters (3 bytes).
pub const REVISION_HEX_WIDTH: usize = 6;

/// Width of the serial slot in hex characters (4 bytes).
pub const SERIAL_HEX_WIDTH: usize = 8;

/// Length of an EUI-64 in hex characters.
pub const EUI64_HEX_LEN: usize = 16;

/// Serial length Raspberry Pi firmware reports (64 bits, high half usually
/// `00000000` or `10000000`).
pub const REPORTED_SERIAL_HEX_LEN: usize = 16;

/// U/L bit of the first octet.
const LOCAL_BIT: u8 = 0x02;

/// I/G bit of the first octet.
const GROUP_BIT: u8 = 0x01;

/// A 64-bit extended unique identifier.
///
/// Renders as 16 lower-case hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Eui64([u8; 8]);

impl Eui64 {
    /// Wraps raw bytes.
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Returns the lower-case hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the upper-case hex form.
    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Whether the U/L bit marks this identifier as locally administered.
    pub const fn is_locally_administered(&self) -> bool {
        self.0[0] & LOCAL_BIT != 0
    }

    /// Whether the I/G bit marks this identifier as unicast.
    pub const fn is_unicast(&self) -> bool {
        self.0[0] & GROUP_BIT == 0
    }
}

impl fmt::Display for Eui64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Eui64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Derives the locally-administered EUI-64 for `identity`.
///
/// The result is `02` followed by the revision fitted to 6 hex characters and
/// the serial fitted to 8 hex characters.
///
/// # Errors
///
/// Returns [`EuiError::InvalidFormat`] if either field is empty or contains a
/// character outside `[0-9a-fA-F]`. The whole field is checked, including
/// any part that truncation would drop.
pub fn format_eui(identity: &HardwareIdentity) -> EuiResult<Eui64> {
    let mut bytes = [0u8; 8];
    bytes[0] = LOCAL_ADMIN_OCTET;

    let (revision_slot, serial_slot) = bytes[1..].split_at_mut(REVISION_HEX_WIDTH / 2);
    decode_field(HardwareField::Revision, identity.revision(), revision_slot)?;
    decode_field(HardwareField::Serial, identity.serial_number(), serial_slot)?;

    Ok(Eui64(bytes))
}

/// Validates `raw`, fits it to `slot`, and decodes it into `slot`.
fn decode_field(field: HardwareField, raw: &str, slot: &mut [u8]) -> EuiResult<()> {
    let invalid = |reason: String| EuiError::InvalidFormat {
        field,
        value: raw.to_string(),
        reason,
    };

    validate_hex(raw).map_err(invalid)?;

    let width = slot.len() * 2;
    let kept = truncate_right_aligned(raw, width);
    if kept.len() < raw.len() {
        if is_reported_length(field, raw.len()) {
            debug!(field = %field, value = raw, kept, "using low-order half of {field}");
        } else {
            warn!(
                field = %field,
                value = raw,
                kept,
                "{field} is longer than {width} hex characters, keeping the least-significant ones"
            );
        }
    }

    let fitted = pad_left(kept, width, '0');
    hex::decode_to_slice(&fitted, slot).map_err(|e| invalid(e.to_string()))
}

/// Whether `len` is a length the hardware normally reports for `field`.
///
/// Truncating such a value is routine; anything else is worth a warning.
const fn is_reported_length(field: HardwareField, len: usize) -> bool {
    match field {
        HardwareField::Serial => len == SERIAL_HEX_WIDTH || len == REPORTED_SERIAL_HEX_LEN,
        HardwareField::Revision => len == REVISION_HEX_WIDTH,
    }
}

fn validate_hex(raw: &str) -> Result<(), String> {
    if raw.is_empty() {
        return Err("value is empty".to_string());
    }
    match raw.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        Some((position, c)) => Err(format!("non-hex character '{c}' at position {position}")),
        None => Ok(()),
    }
}
