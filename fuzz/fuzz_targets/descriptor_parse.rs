//! Fuzz harness for `parse_descriptor` and `format_eui`.
//!
//! Arbitrary bytes are decoded lossily, the way `CpuInfoSource` decodes a
//! descriptor file. Parsing and formatting must never panic, and every EUI
//! that does come out must be local, unicast and 16 hex characters long.

#![no_main]
use libfuzzer_sys::fuzz_target;
use rpi_eui_core::{format_eui, parse_descriptor};

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);

    if let Ok(identity) = parse_descriptor(&content) {
        if let Ok(eui) = format_eui(&identity) {
            assert_eq!(eui.to_hex().len(), 16);
            assert!(eui.is_locally_administered());
            assert!(eui.is_unicast());
        }
    }
});
