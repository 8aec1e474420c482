// tagbridge/src/error.rs

//! Error type shared by drivers, key stores and hosts.

use thiserror::Error;

/// Common error type for driver, key store and host seams.
///
/// Commands never surface these to scripts; the bridge folds every variant
/// into a failure record or a null/empty sentinel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Nothing answered before the timeout.
    #[error("operation timed out")]
    Timeout,

    /// No tag in range.
    #[error("no tag present in the field")]
    TagNotPresent,

    /// The session has nothing read or loaded.
    #[error("session holds no tag data")]
    NoTagData,

    /// File or key storage failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Key material is not 12 hex digits.
    #[error("invalid mifare key: {0}")]
    InvalidKey(String),

    /// A script argument has the wrong type.
    #[error("invalid argument for {command}: expected {expected}")]
    InvalidArgument {
        /// Script name of the command.
        command: &'static str,
        /// Expected argument type.
        expected: &'static str,
    },

    /// No command or function by that name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// `BridgeBuilder::build` without a factory.
    #[error("no session factory configured")]
    NoSessionFactory,

    /// Reader driver failure.
    #[error("driver error: {0}")]
    Driver(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
