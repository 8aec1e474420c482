// tagbridge/src/bridge/mod.rs

//! The command bridge: argument validation, session handling and result
//! encoding for each script-visible command.

pub mod args;
pub mod builder;
pub mod commands;
pub mod encode;

pub use builder::BridgeBuilder;
pub use commands::Command;
pub use encode::{CommandResult, StatusRecord, TagShape};

use std::time::Duration;

use crate::config::{BridgeConfig, UidProbe};
use crate::keys::KeyStore;
use crate::session::SessionManager;
use crate::value::Value;

/// Runs commands against the cached reader session.
///
/// Every command returns a value; driver failures, timeouts and bad
/// arguments come back as `null`, an empty string or a `success: false`
/// record. Nothing here panics or returns an error to the engine.
pub struct CommandBridge {
    sessions: SessionManager,
    keys: Box<dyn KeyStore>,
    config: BridgeConfig,
}

impl CommandBridge {
    /// Bridge over `sessions` and `keys`. See `BridgeBuilder` for defaults.
    pub fn new(sessions: SessionManager, keys: Box<dyn KeyStore>, config: BridgeConfig) -> Self {
        Self {
            sessions,
            keys,
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Session manager, for inspecting session state.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Key store `addMifareKey` forwards to.
    pub fn key_store(&self) -> &dyn KeyStore {
        self.keys.as_ref()
    }

    /// Run `cmd` with raw script arguments and encode the outcome.
    pub fn dispatch(&mut self, cmd: Command, args: &[Value]) -> Value {
        log::debug!("dispatch {} with {} argument(s)", cmd, args.len());
        self.run(cmd, args).into_value()
    }

    /// Like `dispatch`, but returns the typed result.
    pub fn run(&mut self, cmd: Command, args: &[Value]) -> CommandResult {
        let timeout = |cfg: &BridgeConfig| {
            let default = cfg.default_timeout(cmd).unwrap_or(Duration::ZERO);
            args::timeout(args, 0, default)
        };
        match cmd {
            Command::Read => self.read(timeout(&self.config)),
            Command::ReadUid => self.read_uid(timeout(&self.config)),
            Command::Write => self.write(timeout(&self.config)),
            Command::Save => match args::string(args, 0, cmd) {
                Ok(name) => self.save(name),
                Err(e) => {
                    log::debug!("{} (got {})", e, args::arg(args, 0).type_name());
                    CommandResult::Null
                }
            },
            Command::Load => match args::string(args, 0, cmd) {
                Ok(name) => self.load(name),
                Err(e) => {
                    log::debug!("{} (got {})", e, args::arg(args, 0).type_name());
                    CommandResult::Null
                }
            },
            Command::Clear => self.clear(),
            Command::AddMifareKey => match args::string(args, 0, cmd) {
                Ok(key) => self.add_mifare_key(key),
                Err(e) => {
                    log::debug!("{} (got {})", e, args::arg(args, 0).type_name());
                    encode::key_type_error()
                }
            },
        }
    }

    /// Blocking full read on the cached session. Null on timeout.
    pub fn read(&mut self, timeout: Duration) -> CommandResult {
        let session = self.sessions.acquire();
        if let Err(e) = session.read_tag(timeout) {
            log::debug!("read returned nothing within {:?}: {}", timeout, e);
            return CommandResult::Null;
        }
        let result = encode::tag_result(session.current_tag(), TagShape::Read);
        match result.tag() {
            Some(tag) => log::info!("read tag {} ({})", tag.uid, tag.tag_type),
            None => log::warn!("driver reported a read but holds no tag record"),
        }
        result
    }

    /// UID probe. Always a string; empty when nothing answered.
    pub fn read_uid(&mut self, timeout: Duration) -> CommandResult {
        let outcome = match self.config.uid_probe {
            UidProbe::Disposable => self.sessions.open_disposable().read_uid(timeout),
            UidProbe::Shared => self.sessions.acquire().read_uid(timeout),
        };
        match outcome {
            Ok(uid) => CommandResult::Uid(uid),
            Err(e) => {
                log::debug!("uid probe returned nothing within {:?}: {}", timeout, e);
                CommandResult::Uid(String::new())
            }
        }
    }

    /// Write the session's current record onto the tag in the field.
    pub fn write(&mut self, timeout: Duration) -> CommandResult {
        let status = self.sessions.acquire().write_tag(timeout);
        log::debug!("write finished with {}", status);
        encode::write_result(status)
    }

    /// Persist the session's current record under `name`.
    pub fn save(&mut self, name: &str) -> CommandResult {
        let result = encode::save_result(self.sessions.acquire().save_file(name));
        if let Some(path) = result.status().and_then(|s| s.filepath.as_deref()) {
            if !path.is_empty() {
                log::info!("saved tag to {}", path);
            }
        }
        result
    }

    /// Load a saved record into the session. Null unless the load succeeded.
    pub fn load(&mut self, name: &str) -> CommandResult {
        let session = self.sessions.acquire();
        let status = session.load_file(name);
        if !status.is_success() {
            log::debug!("load of {:?} finished with {}", name, status);
            return CommandResult::Null;
        }
        let result = encode::tag_result(session.current_tag(), TagShape::Load);
        if result.is_null() {
            log::warn!("driver reported a load but holds no tag record");
        } else {
            log::info!("loaded tag from {:?}", name);
        }
        result
    }

    /// Drop the cached session; the next command opens a fresh one.
    pub fn clear(&mut self) -> CommandResult {
        self.sessions.release();
        CommandResult::Undefined
    }

    /// Forward key material to the key store. The store validates it; the
    /// script is told the key was processed either way.
    pub fn add_mifare_key(&mut self, key: &str) -> CommandResult {
        match self.keys.add_mifare_key(key) {
            Ok(true) => {}
            Ok(false) => log::debug!("mifare key {:?} already stored", key),
            Err(e) => log::warn!("mifare key {:?} not stored: {}", key, e),
        }
        encode::key_result(key)
    }
}

impl std::fmt::Debug for CommandBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandBridge")
            .field("sessions", &self.sessions)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
