//! Descriptor files on disk through to a formatted EUI.

use std::path::{Path, PathBuf};

use rpi_eui_core::hardware::MAX_DESCRIPTOR_SIZE;
use rpi_eui_core::{CpuInfoSource, EuiError, HardwareField, HardwareSource, generate_eui};
use tempfile::TempDir;

const PI4_CPUINFO: &str = "\
processor\t: 0
BogoMIPS\t: 108.00
Features\t: fp asimd evtstrm crc32 cpuid
CPU implementer\t: 0x41
CPU architecture: 8
CPU variant\t: 0x0
CPU part\t: 0xd08
CPU revision\t: 3

Revision\t: c03111
Serial\t\t: 10000000b2e4c5f1
Model\t\t: Raspberry Pi 4 Model B Rev 1.1
";

fn write_descriptor(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("cpuinfo");
    std::fs::write(&path, content).expect("write descriptor");
    path
}

fn generate_from(path: &Path) -> Result<String, EuiError> {
    generate_eui(&CpuInfoSource::new(path)).map(|eui| eui.to_string())
}

#[test]
fn pi4_descriptor_yields_expected_eui() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_descriptor(&dir, PI4_CPUINFO);

    // "CPU revision" must not shadow "Revision".
    assert_eq!(generate_from(&path).unwrap(), "02c03111b2e4c5f1");
}

#[test]
fn model_is_carried_through() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_descriptor(&dir, PI4_CPUINFO);

    let identity = CpuInfoSource::new(&path).read().unwrap();
    assert_eq!(identity.model(), Some("Raspberry Pi 4 Model B Rev 1.1"));
}

#[test]
fn crlf_line_endings_are_accepted() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_descriptor(&dir, "Revision : a02082\r\nSerial : 10000000\r\n");

    assert_eq!(generate_from(&path).unwrap(), "02a0208210000000");
}

#[test]
fn missing_revision_line() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_descriptor(&dir, "Hardware : BCM2835\nSerial : 10000000\n");

    let err = generate_from(&path).unwrap_err();
    assert!(matches!(
        err,
        EuiError::FieldNotFound {
            field: HardwareField::Revision
        }
    ));
}

#[test]
fn invalid_serial_value() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_descriptor(&dir, "Revision : a02082\nSerial : 12g4\n");

    let err = generate_from(&path).unwrap_err();
    assert!(matches!(
        err,
        EuiError::InvalidFormat {
            field: HardwareField::Serial,
            ..
        }
    ));
}

#[test]
fn nonexistent_path_is_unavailable() {
    let dir = TempDir::new().expect("temp dir");

    let err = generate_from(&dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, EuiError::HardwareUnavailable { .. }));
    assert_eq!(err.code(), "hardware_unavailable");
}

#[test]
fn directory_path_is_unavailable() {
    let dir = TempDir::new().expect("temp dir");

    let err = generate_from(dir.path()).unwrap_err();
    assert!(matches!(err, EuiError::HardwareUnavailable { .. }));
}

#[test]
fn fields_past_the_read_limit_are_not_seen() {
    let dir = TempDir::new().expect("temp dir");
    let filler = "x".repeat(usize::try_from(MAX_DESCRIPTOR_SIZE).unwrap());
    let path = write_descriptor(&dir, &format!("{filler}\nRevision : 1\nSerial : 1\n"));

    let err = generate_from(&path).unwrap_err();
    assert!(matches!(
        err,
        EuiError::FieldNotFound {
            field: HardwareField::Serial
        }
    ));
}
