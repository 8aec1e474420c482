//! Utilities for tagbridge: small, reusable helpers used across the crate.
//!
//! Hex conversion for key material and tag identifiers, and the timeout
//! defaults and conversions shared by the bridge and the drivers.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
