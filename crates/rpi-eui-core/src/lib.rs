#![allow(clippy::doc_markdown)]

//! rpi-eui-core - locally-administered LoRaWAN EUI-64 derivation
//!
//! Boards without a network interface MAC address still need a stable,
//! reasonably unique device EUI to join a LoRaWAN network. This crate builds
//! one from the board's serial number and revision code:
//!
//! ```text
//! 02 RRRRRR NNNNNNNN
//! |  |      +-- serial, 4 bytes (least-significant)
//! |  +--------- revision, 3 bytes
//! +------------ locally administered, unicast
//! ```
//!
//! # Modules
//!
//! - [`hardware`]: [`HardwareSource`] trait, `/proc/cpuinfo` reader and
//!   descriptor parser
//! - [`eui`]: [`Eui64`] and [`format_eui`], plus the padding helpers
//! - [`error`]: [`EuiError`]
//!
//! # Example
//!
//! ```
//! use rpi_eui_core::{HardwareIdentity, StaticSource, generate_eui};
//!
//! let source = StaticSource::new(HardwareIdentity::new("10000000", "a02082"));
//! let eui = generate_eui(&source).unwrap();
//! assert_eq!(eui.to_string(), "02a0208210000000");
//! ```

pub mod error;
pub mod eui;
pub mod hardware;

pub use error::{EuiError, EuiResult, HardwareField};
pub use eui::{Eui64, format_eui};
pub use hardware::{
    CpuInfoSource, DEFAULT_CPUINFO_PATH, HardwareIdentity, HardwareSource, StaticSource,
    parse_descriptor,
};

/// Reads the identity from `source` and derives its EUI-64.
///
/// # Errors
///
/// Propagates the source's read error, or [`EuiError::InvalidFormat`] from
/// [`format_eui`].
pub fn generate_eui(source: &dyn HardwareSource) -> EuiResult<Eui64> {
    let identity = source.read()?;
    format_eui(&identity)
}
