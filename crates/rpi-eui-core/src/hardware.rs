//! Hardware identity sources.
//!
//! The EUI is derived from two values the board reports about itself: its
//! serial number and its revision code. On Raspberry Pi OS both are exposed
//! as `key : value` lines in `/proc/cpuinfo`:
//!
//! ```text
//! Hardware        : BCM2835
//! Revision        : a02082
//! Serial          : 00000000a1b2c3d4
//! Model           : Raspberry Pi 3 Model B Rev 1.2
//! ```
//!
//! Access goes through the [`HardwareSource`] trait so callers can swap the
//! host descriptor for a fixed identity ([`StaticSource`]).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{EuiError, EuiResult, HardwareField};

/// Default hardware descriptor on Linux hosts.
pub const DEFAULT_CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Maximum number of bytes read from a descriptor (64 KiB).
///
/// `/proc/cpuinfo` on a quad-core board is a few KiB.
pub const MAX_DESCRIPTOR_SIZE: u64 = 64 * 1024;

/// Descriptor key for the optional board model line.
pub const MODEL_KEY: &str = "Model";

/// Identifiers reported by the hardware, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardwareIdentity {
    /// Raw serial number, e.g. `00000000a1b2c3d4`.
    #[serde(rename = "serial")]
    serial_number: String,
    /// Raw revision code, e.g. `a02082`.
    revision: String,
    /// Board model string, when the descriptor has one.
    model: Option<String>,
}

impl HardwareIdentity {
    /// Creates an identity from a serial number and revision code.
    pub fn new(serial_number: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            serial_number: serial_number.into().trim().to_string(),
            revision: revision.into().trim().to_string(),
            model: None,
        }
    }

    /// Attaches a board model string.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into().trim().to_string());
        self
    }

    /// Returns the raw serial number.
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Returns the raw revision code.
    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Returns the board model, if known.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}

/// A provider of [`HardwareIdentity`].
pub trait HardwareSource {
    /// Reads the hardware identity.
    ///
    /// # Errors
    ///
    /// Returns [`EuiError::HardwareUnavailable`] if the underlying source
    /// cannot be read and [`EuiError::FieldNotFound`] if it lacks a
    /// `Serial` or `Revision` entry.
    fn read(&self) -> EuiResult<HardwareIdentity>;
}

impl<S: HardwareSource + ?Sized> HardwareSource for &S {
    fn read(&self) -> EuiResult<HardwareIdentity> {
        (**self).read()
    }
}

impl<S: HardwareSource + ?Sized> HardwareSource for Box<S> {
    fn read(&self) -> EuiResult<HardwareIdentity> {
        (**self).read()
    }
}

/// Reads the identity from a cpuinfo-style descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuInfoSource {
    path: PathBuf,
}

impl CpuInfoSource {
    /// Creates a source backed by the descriptor at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a source backed by [`DEFAULT_CPUINFO_PATH`].
    pub fn system() -> Self {
        Self::new(DEFAULT_CPUINFO_PATH)
    }

    /// Returns the descriptor path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CpuInfoSource {
    fn default() -> Self {
        Self::system()
    }
}

impl HardwareSource for CpuInfoSource {
    fn read(&self) -> EuiResult<HardwareIdentity> {
        let content = read_descriptor(&self.path)?;
        let identity = parse_descriptor(&content)?;
        debug!(
            path = %self.path.display(),
            serial = identity.serial_number(),
            revision = identity.revision(),
            model = identity.model(),
            "read hardware descriptor"
        );
        Ok(identity)
    }
}

/// A fixed, in-memory identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    identity: HardwareIdentity,
}

impl StaticSource {
    /// Creates a source that always yields `identity`.
    pub const fn new(identity: HardwareIdentity) -> Self {
        Self { identity }
    }
}

impl HardwareSource for StaticSource {
    fn read(&self) -> EuiResult<HardwareIdentity> {
        Ok(self.identity.clone())
    }
}

/// Parses `key : value` descriptor content into a [`HardwareIdentity`].
///
/// Keys are matched exactly after trimming. When a key repeats, the last
/// occurrence wins. Lines without a `:` are ignored.
///
/// # Errors
///
/// Returns [`EuiError::FieldNotFound`] if `Serial` or `Revision` is absent.
pub fn parse_descriptor(content: &str) -> EuiResult<HardwareIdentity> {
    let mut serial = None;
    let mut revision = None;
    let mut model = None;

    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            k if k == HardwareField::Serial.key() => serial = Some(value),
            k if k == HardwareField::Revision.key() => revision = Some(value),
            MODEL_KEY => model = Some(value),
            _ => {},
        }
    }

    let serial = serial.ok_or(EuiError::FieldNotFound {
        field: HardwareField::Serial,
    })?;
    let revision = revision.ok_or(EuiError::FieldNotFound {
        field: HardwareField::Revision,
    })?;

    let identity = HardwareIdentity::new(serial, revision);
    Ok(match model {
        Some(model) => identity.with_model(model),
        None => identity,
    })
}

/// Reads at most [`MAX_DESCRIPTOR_SIZE`] bytes from `path`.
fn read_descriptor(path: &Path) -> EuiResult<String> {
    let unavailable = |source| EuiError::HardwareUnavailable {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let mut reader = BufReader::new(file).take(MAX_DESCRIPTOR_SIZE);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(unavailable)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
