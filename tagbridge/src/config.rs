// tagbridge/src/config.rs

//! Deployment configuration for a bridge: which commands get registered,
//! the default timeouts, and how UID probes obtain a session.

use std::str::FromStr;
use std::time::Duration;

use crate::Error;
use crate::bridge::Command;
use crate::utils::{default_tag_timeout, default_uid_timeout};

/// How `readUID` gets its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UidProbe {
    /// Open a throwaway session per probe so cached tag data is never
    /// disturbed.
    #[default]
    Disposable,
    /// Probe through the cached session.
    Shared,
}

/// The set of commands a deployment exposes to scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSurface {
    commands: Vec<Command>,
}

impl CommandSurface {
    /// All seven commands.
    pub fn full() -> Self {
        Self {
            commands: Command::ALL.to_vec(),
        }
    }

    /// Everything except key management, for builds without a writable
    /// global configuration.
    pub fn reduced() -> Self {
        Self::full().without(Command::AddMifareKey)
    }

    /// No commands; build one up with `with`.
    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command. Adding one twice is a no-op.
    pub fn with(mut self, cmd: Command) -> Self {
        if !self.commands.contains(&cmd) {
            self.commands.push(cmd);
            self.commands.sort();
        }
        self
    }

    /// Remove a command.
    pub fn without(mut self, cmd: Command) -> Self {
        self.commands.retain(|c| *c != cmd);
        self
    }

    /// Whether `cmd` is exposed.
    pub fn contains(&self, cmd: Command) -> bool {
        self.commands.contains(&cmd)
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        self.commands.iter().copied()
    }

    /// Number of exposed commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing is exposed.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandSurface {
    fn default() -> Self {
        Self::full()
    }
}

impl FromStr for CommandSurface {
    type Err = Error;

    /// `"full"`, `"reduced"`, or a comma-separated list of command names
    /// (script or global form).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "full" => Ok(Self::full()),
            "reduced" => Ok(Self::reduced()),
            list => list
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .try_fold(Self::empty(), |surface, part| {
                    Ok(surface.with(part.parse::<Command>()?))
                }),
        }
    }
}

/// Bridge configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Commands registered with the host.
    pub surface: CommandSurface,
    /// `read` timeout when the script passes none.
    pub read_timeout: Duration,
    /// `write` timeout when the script passes none.
    pub write_timeout: Duration,
    /// `readUID` timeout when the script passes none.
    pub uid_timeout: Duration,
    /// Session used by `readUID`.
    pub uid_probe: UidProbe,
    /// Name of the module object `host::install` puts methods on.
    pub namespace: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            surface: CommandSurface::full(),
            read_timeout: default_tag_timeout(),
            write_timeout: default_tag_timeout(),
            uid_timeout: default_uid_timeout(),
            uid_probe: UidProbe::Disposable,
            namespace: "rfid".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Replace the command surface.
    pub fn with_surface(mut self, surface: CommandSurface) -> Self {
        self.surface = surface;
        self
    }

    /// Replace the UID probe mode.
    pub fn with_uid_probe(mut self, probe: UidProbe) -> Self {
        self.uid_probe = probe;
        self
    }

    /// Default timeout for a command, if it takes one.
    pub fn default_timeout(&self, cmd: Command) -> Option<Duration> {
        match cmd {
            Command::Read => Some(self.read_timeout),
            Command::Write => Some(self.write_timeout),
            Command::ReadUid => Some(self.uid_timeout),
            _ => None,
        }
    }
}
