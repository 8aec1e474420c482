//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockField setup so tests across the
//! crate and tests/ directory can reuse the same tags and bridges.
#![allow(dead_code)]

use crate::bridge::CommandBridge;
use crate::config::BridgeConfig;
use crate::driver::mock::MockField;
use crate::host::{FunctionTable, SharedBridge, install, share};
use crate::keys::MemoryKeyStore;
use crate::session::SessionManager;
use crate::types::TagRecord;
use crate::utils::bytes_to_hex_spaced;

/// An NTAG213 as the reader prints it: 45 pages, 36 of them user data.
#[doc(hidden)]
pub fn sample_tag() -> TagRecord {
    TagRecord {
        uid: bytes_to_hex_spaced(&[0x04, 0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0x80]),
        tag_type: "NTAG213".to_string(),
        sak: "00".to_string(),
        atqa: "00 44".to_string(),
        bcc: "8E".to_string(),
        pages: "Page 00: 04 A1 B2 8E\nPage 01: C3 D4 E5 80\nPage 04: 03 0B D1 01\n".to_string(),
        total_pages: 45,
        data_pages: 36,
    }
}

/// A different tag type, for mismatch tests.
#[doc(hidden)]
pub fn sample_ultralight() -> TagRecord {
    TagRecord {
        uid: bytes_to_hex_spaced(&[0x04, 0x10, 0x20, 0x30, 0x40, 0x50, 0x60]),
        tag_type: "MIFARE Ultralight".to_string(),
        sak: "00".to_string(),
        atqa: "00 44".to_string(),
        bcc: "A4".to_string(),
        pages: "Page 00: 04 10 20 A4\n".to_string(),
        total_pages: 16,
        data_pages: 12,
    }
}

/// Bridge with default configuration over `field`.
#[doc(hidden)]
pub fn bridge_over(field: &MockField) -> CommandBridge {
    bridge_with_config(field, BridgeConfig::default())
}

/// Bridge with `config` over `field`, using an in-memory key store.
#[doc(hidden)]
pub fn bridge_with_config(field: &MockField, config: BridgeConfig) -> CommandBridge {
    CommandBridge::new(
        SessionManager::new(Box::new(field.factory())),
        Box::new(MemoryKeyStore::new()),
        config,
    )
}

/// Shared bridge plus the global and namespace tables it was registered
/// into, the way an engine would see them.
#[doc(hidden)]
pub fn registered(bridge: CommandBridge) -> (SharedBridge, FunctionTable, FunctionTable) {
    let shared = share(bridge);
    let name = shared.borrow().config().namespace.clone();
    let mut globals = FunctionTable::new();
    install(&shared, &mut globals);
    let namespace = globals.take_module(&name).unwrap_or_default();
    (shared, globals, namespace)
}
