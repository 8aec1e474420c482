// tagbridge/src/bridge/builder.rs

//! Builder for `CommandBridge`.

use crate::bridge::CommandBridge;
use crate::config::BridgeConfig;
use crate::driver::SessionFactory;
use crate::keys::{KeyStore, MemoryKeyStore};
use crate::session::SessionManager;
use crate::{Error, Result};

/// Helper to construct a CommandBridge with optional configuration.
pub struct BridgeBuilder {
    factory: Option<Box<dyn SessionFactory>>,
    keys: Option<Box<dyn KeyStore>>,
    config: BridgeConfig,
}

impl BridgeBuilder {
    /// Builder with default config and no factory.
    pub fn new() -> Self {
        Self {
            factory: None,
            keys: None,
            config: BridgeConfig::default(),
        }
    }

    /// Factory used for both the cached session and UID probes.
    pub fn with_factory(mut self, factory: impl SessionFactory + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Key store for `addMifareKey`. Defaults to an in-memory store.
    pub fn with_key_store(mut self, keys: impl KeyStore + 'static) -> Self {
        self.keys = Some(Box::new(keys));
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. Requires a session factory; otherwise returns
    /// NoSessionFactory.
    pub fn build(self) -> Result<CommandBridge> {
        let factory = self.factory.ok_or(Error::NoSessionFactory)?;
        let keys = self
            .keys
            .unwrap_or_else(|| Box::new(MemoryKeyStore::new()));
        log::debug!(
            "building bridge with {} command(s), uid probe {:?}",
            self.config.surface.len(),
            self.config.uid_probe
        );
        Ok(CommandBridge::new(
            SessionManager::new(factory),
            keys,
            self.config,
        ))
    }
}

impl Default for BridgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
