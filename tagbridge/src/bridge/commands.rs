// tagbridge/src/bridge/commands.rs

//! Script-visible command names.

use std::str::FromStr;

use derive_more::Display;

use crate::Error;

/// Every command the bridge knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Command {
    /// Full read of the tag in range.
    #[display(fmt = "read")]
    Read,
    /// UID probe.
    #[display(fmt = "readUID")]
    ReadUid,
    /// Write the current record onto the tag in range.
    #[display(fmt = "write")]
    Write,
    /// Save the current record to a file.
    #[display(fmt = "save")]
    Save,
    /// Load a saved record into the session.
    #[display(fmt = "load")]
    Load,
    /// Release the cached session.
    #[display(fmt = "clear")]
    Clear,
    /// Add a MIFARE Classic key.
    #[display(fmt = "addMifareKey")]
    AddMifareKey,
}

impl Command {
    /// Every command, in registration order.
    pub const ALL: [Command; 7] = [
        Command::Read,
        Command::ReadUid,
        Command::Write,
        Command::Save,
        Command::Load,
        Command::Clear,
        Command::AddMifareKey,
    ];

    /// Method name on the namespace object (`rfid.read`).
    pub fn script_name(self) -> &'static str {
        match self {
            Command::Read => "read",
            Command::ReadUid => "readUID",
            Command::Write => "write",
            Command::Save => "save",
            Command::Load => "load",
            Command::Clear => "clear",
            Command::AddMifareKey => "addMifareKey",
        }
    }

    /// Bare global function name (`rfidRead`).
    pub fn global_name(self) -> &'static str {
        match self {
            Command::Read => "rfidRead",
            Command::ReadUid => "rfidReadUID",
            Command::Write => "rfidWrite",
            Command::Save => "rfidSave",
            Command::Load => "rfidLoad",
            Command::Clear => "rfidClear",
            Command::AddMifareKey => "rfidAddMifareKey",
        }
    }

    /// Declared argument count reported to the engine.
    pub fn arity(self) -> usize {
        match self {
            Command::Clear => 0,
            _ => 1,
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    /// Accepts either the script name or the global name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Command::ALL
            .into_iter()
            .find(|c| c.script_name() == name || c.global_name() == name)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()))
    }
}
