// tagbridge/src/lib.rs

//! tagbridge
//!
//! Blocking command bridge between an embedded scripting engine and an RFID
//! reader session. Scripts call `rfidRead`, `rfidWrite`, `rfidSave` and
//! friends; the bridge validates arguments, drives the cached reader session
//! and answers with a uniform result value.
#![warn(missing_docs)]

pub mod bridge;
pub mod config;
pub mod driver;
pub mod error;
pub mod host;
pub mod keys;
pub mod prelude;
pub mod session;
pub mod test_support;
pub mod types;
pub mod utils;
pub mod value;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the records in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
