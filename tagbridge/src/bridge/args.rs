// tagbridge/src/bridge/args.rs

//! Argument extraction. Nothing here touches a session: a bad argument is
//! rejected before any driver call is made.

use std::time::Duration;

use crate::bridge::Command;
use crate::utils::script_secs;
use crate::value::Value;
use crate::{Error, Result};

/// Argument at `index`, reading missing positions as `undefined`.
pub fn arg(args: &[Value], index: usize) -> &Value {
    static UNDEFINED: Value = Value::Undefined;
    args.get(index).unwrap_or(&UNDEFINED)
}

/// Timeout in seconds at `index`, or `default` when the argument is missing
/// or not a number. Fractions truncate toward zero; negatives clamp to zero.
pub fn timeout(args: &[Value], index: usize, default: Duration) -> Duration {
    match arg(args, index).as_int() {
        Some(secs) => script_secs(secs),
        None => default,
    }
}

/// Required string argument at `index`.
pub fn string(args: &[Value], index: usize, cmd: Command) -> Result<&str> {
    arg(args, index).as_str().ok_or(Error::InvalidArgument {
        command: cmd.script_name(),
        expected: "string",
    })
}
