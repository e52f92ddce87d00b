//! Property-based tests for EUI assembly.

use proptest::prelude::*;

use super::{EUI64_HEX_LEN, format_eui};
use crate::error::{EuiError, HardwareField};
use crate::hardware::HardwareIdentity;

/// Non-empty hex strings of mixed case, including oversized ones.
fn hex_field() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{1,20}"
}

/// Strings that contain at least one non-hex character.
fn non_hex_field() -> impl Strategy<Value = String> {
    ("[0-9a-f]{0,6}", "[g-zG-Z_:.-]", "[0-9a-f]{0,6}")
        .prop_map(|(head, bad, tail)| format!("{head}{bad}{tail}"))
}

proptest! {
    /// Property: every valid input yields 16 lower-case hex characters
    /// starting with `02`.
    #[test]
    fn prop_output_shape(serial in hex_field(), revision in hex_field()) {
        let eui = format_eui(&HardwareIdentity::new(serial, revision)).unwrap();
        let text = eui.to_string();

        prop_assert_eq!(text.len(), EUI64_HEX_LEN);
        prop_assert!(text.starts_with("02"));
        prop_assert!(text.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        prop_assert!(eui.is_locally_administered());
        prop_assert!(eui.is_unicast());
    }

    /// Property: formatting is deterministic.
    #[test]
    fn prop_idempotent(serial in hex_field(), revision in hex_field()) {
        let identity = HardwareIdentity::new(serial, revision);
        let first = format_eui(&identity).unwrap();
        let second = format_eui(&identity).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: the serial occupies the last 8 characters, right-aligned.
    #[test]
    fn prop_serial_low_order_preserved(serial in hex_field(), revision in hex_field()) {
        let eui = format_eui(&HardwareIdentity::new(serial.clone(), revision)).unwrap();
        let text = eui.to_string();
        let serial = serial.to_ascii_lowercase();

        let expected_tail = if serial.len() >= 8 {
            serial[serial.len() - 8..].to_string()
        } else {
            format!("{serial:0>8}")
        };
        prop_assert_eq!(&text[8..], expected_tail.as_str());
    }

    /// Property: case of the input does not affect the output.
    #[test]
    fn prop_case_insensitive(serial in hex_field(), revision in hex_field()) {
        let lower = format_eui(&HardwareIdentity::new(
            serial.to_ascii_lowercase(),
            revision.to_ascii_lowercase(),
        ))
        .unwrap();
        let upper = format_eui(&HardwareIdentity::new(
            serial.to_ascii_uppercase(),
            revision.to_ascii_uppercase(),
        ))
        .unwrap();
        prop_assert_eq!(lower, upper);
    }

    /// Property: any non-hex character in the serial is rejected.
    #[test]
    fn prop_non_hex_serial_rejected(serial in non_hex_field(), revision in hex_field()) {
        let err = format_eui(&HardwareIdentity::new(serial, revision)).unwrap_err();
        let is_serial_error = matches!(
            err,
            EuiError::InvalidFormat { field: HardwareField::Serial, .. }
        );
        prop_assert!(is_serial_error);
    }
}
