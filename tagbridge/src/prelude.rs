// tagbridge/src/prelude.rs

//! Commonly used types for hosts embedding the bridge.

pub use crate::bridge::{BridgeBuilder, Command, CommandBridge, CommandResult, StatusRecord, TagShape};
pub use crate::config::{BridgeConfig, CommandSurface, UidProbe};
pub use crate::driver::{ReaderDriver, SessionFactory, SessionMode};
pub use crate::host::{
    FunctionTable, NativeFn, ScriptHost, ScriptNamespace, SharedBridge, install, put_methods,
    register_globals, share,
};
pub use crate::keys::{KeyStore, MemoryKeyStore};
pub use crate::session::SessionManager;
pub use crate::value::{Object, Value};
pub use crate::{Error, MifareKey, Result, StatusCode, TagRecord};

// Re-export small utilities for convenience
pub use crate::utils::{default_tag_timeout, default_uid_timeout, secs};
