// tagbridge/src/keys.rs

//! MIFARE Classic key storage.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::MifareKey;
use crate::{Error, Result};

/// Persistent store of MIFARE Classic keys that drivers try during
/// authentication. Backed by the device's global configuration in firmware.
pub trait KeyStore {
    /// Validate and record key material. Re-adding a known key is not an
    /// error. Returns `true` when the key was new.
    fn add_mifare_key(&mut self, key: &str) -> Result<bool>;

    /// Keys currently known, in insertion order.
    fn mifare_keys(&self) -> Vec<MifareKey>;
}

/// In-memory key store. Seeded with the factory default key.
#[derive(Debug, Clone)]
pub struct MemoryKeyStore {
    keys: Vec<MifareKey>,
}

impl MemoryKeyStore {
    /// Store holding only `MifareKey::DEFAULT`.
    pub fn new() -> Self {
        Self {
            keys: vec![MifareKey::DEFAULT],
        }
    }

    /// Store without the default key, for tests that count additions.
    pub fn empty() -> Self {
        Self { keys: Vec::new() }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key is stored.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether `key` is stored.
    pub fn contains(&self, key: &MifareKey) -> bool {
        self.keys.contains(key)
    }
}

impl Default for MemoryKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStore for MemoryKeyStore {
    fn add_mifare_key(&mut self, key: &str) -> Result<bool> {
        let parsed = MifareKey::try_from(key)?;
        if self.keys.contains(&parsed) {
            log::debug!("mifare key {} already known", parsed);
            return Ok(false);
        }
        log::info!("added mifare key {}", parsed);
        self.keys.push(parsed);
        Ok(true)
    }

    fn mifare_keys(&self) -> Vec<MifareKey> {
        self.keys.clone()
    }
}

/// Lets a caller keep a handle on the store after giving it to a bridge.
impl<K: KeyStore> KeyStore for Rc<RefCell<K>> {
    fn add_mifare_key(&mut self, key: &str) -> Result<bool> {
        self.try_borrow_mut()
            .map_err(|_| Error::Storage("key store is busy".into()))?
            .add_mifare_key(key)
    }

    fn mifare_keys(&self) -> Vec<MifareKey> {
        self.borrow().mifare_keys()
    }
}
