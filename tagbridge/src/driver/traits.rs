// tagbridge/src/driver/traits.rs

//! Reader driver seam.

use std::time::Duration;

use crate::Result;
use crate::types::{StatusCode, TagRecord};

/// How a session is opened. Scripts always get headless sessions; the
/// interactive mode exists for drivers shared with an on-device UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// No UI; what the bridge always asks for.
    Headless,
    /// Driven from the device's own menus.
    Interactive,
}

/// One live reader session. Every call blocks the calling thread until the
/// driver finishes or the timeout elapses; there is no way to cancel early.
pub trait ReaderDriver {
    /// Wait for a tag and read it in full. On success the record is
    /// available through `current_tag` until the next read or load.
    fn read_tag(&mut self, timeout: Duration) -> Result<()>;

    /// Wait for a tag and return only its UID. Does not touch the current
    /// tag record.
    fn read_uid(&mut self, timeout: Duration) -> Result<String>;

    /// Write the current tag record onto the tag in the field.
    fn write_tag(&mut self, timeout: Duration) -> StatusCode;

    /// Persist the current tag record under `name`. Returns the path the
    /// driver wrote to.
    fn save_file(&mut self, name: &str) -> Result<String>;

    /// Load a previously saved record and make it the current tag.
    fn load_file(&mut self, name: &str) -> StatusCode;

    /// Record produced by the last successful read or load, if any.
    fn current_tag(&self) -> Option<&TagRecord>;
}

/// Constructs driver sessions. Construction is assumed not to fail; a
/// driver that cannot reach its hardware reports that from its operations.
pub trait SessionFactory {
    /// Open a new session in `mode`.
    fn open(&self, mode: SessionMode) -> Box<dyn ReaderDriver>;
}

impl<F> SessionFactory for F
where
    F: Fn(SessionMode) -> Box<dyn ReaderDriver>,
{
    fn open(&self, mode: SessionMode) -> Box<dyn ReaderDriver> {
        self(mode)
    }
}
