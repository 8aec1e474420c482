// tagbridge/src/driver/mock.rs

//! Simulated reader for tests and benches.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use crate::driver::traits::{ReaderDriver, SessionFactory, SessionMode};
use crate::types::{StatusCode, TagRecord};
use crate::{Error, Result};

/// Directory the mock pretends to save into.
pub const MOCK_SAVE_DIR: &str = "/BruceRFID";

/// Operation recorded by a mock session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverOp {
    /// `read_tag` with its timeout.
    ReadTag(Duration),
    /// `read_uid` with its timeout.
    ReadUid(Duration),
    /// `write_tag` with its timeout.
    WriteTag(Duration),
    /// `save_file` with the requested name.
    SaveFile(String),
    /// `load_file` with the requested name.
    LoadFile(String),
}

/// One recorded call: which session made it and what it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverCall {
    /// 1-based id of the session, in the order sessions were opened.
    pub session: usize,
    /// What the session was asked to do.
    pub op: DriverOp,
}

#[derive(Debug, Default)]
struct FieldState {
    tag: Option<TagRecord>,
    forced_writes: VecDeque<StatusCode>,
    forced_loads: VecDeque<StatusCode>,
    save_failures: usize,
    files: HashMap<String, TagRecord>,
    sessions_opened: usize,
    sessions_closed: usize,
    last_mode: Option<SessionMode>,
    calls: Vec<DriverCall>,
}

/// Simulated RF field and storage shared by every mock session.
///
/// The field (which tag is in range) and the file store outlive sessions,
/// just like the physical tag and the SD card do. Each `MockDriver` keeps
/// its own current tag, so dropping a session forgets what it read.
#[derive(Debug, Clone, Default)]
pub struct MockField {
    state: Rc<RefCell<FieldState>>,
}

impl MockField {
    /// Empty field with no saved files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Field with `tag` already in range.
    pub fn with_tag(tag: TagRecord) -> Self {
        let field = Self::new();
        field.present(tag);
        field
    }

    /// Put a tag in range, replacing any previous one.
    pub fn present(&self, tag: TagRecord) {
        self.state.borrow_mut().tag = Some(tag);
    }

    /// Take the tag out of range.
    pub fn remove_tag(&self) -> Option<TagRecord> {
        self.state.borrow_mut().tag.take()
    }

    /// Tag currently in range, including anything written to it.
    pub fn field_tag(&self) -> Option<TagRecord> {
        self.state.borrow().tag.clone()
    }

    /// Queue an outcome for the next write, overriding the simulation.
    pub fn force_write_status(&self, status: StatusCode) {
        self.state.borrow_mut().forced_writes.push_back(status);
    }

    /// Queue an outcome for the next load, overriding the simulation.
    pub fn force_load_status(&self, status: StatusCode) {
        self.state.borrow_mut().forced_loads.push_back(status);
    }

    /// Make the next `n` saves fail with a storage error.
    pub fn fail_saves(&self, n: usize) {
        self.state.borrow_mut().save_failures = n;
    }

    /// Pre-seed a saved file.
    pub fn store_file(&self, name: &str, tag: TagRecord) {
        self.state
            .borrow_mut()
            .files
            .insert(file_key(name).to_string(), tag);
    }

    /// Saved record under `name`; a `.rfid` suffix is optional.
    pub fn file(&self, name: &str) -> Option<TagRecord> {
        self.state.borrow().files.get(file_key(name)).cloned()
    }

    /// Sessions opened on this field so far.
    pub fn sessions_opened(&self) -> usize {
        self.state.borrow().sessions_opened
    }

    /// Sessions opened and not yet dropped.
    pub fn live_sessions(&self) -> usize {
        let state = self.state.borrow();
        state.sessions_opened - state.sessions_closed
    }

    /// Mode of the most recently opened session.
    pub fn last_mode(&self) -> Option<SessionMode> {
        self.state.borrow().last_mode
    }

    /// Every driver call so far, in order.
    pub fn calls(&self) -> Vec<DriverCall> {
        self.state.borrow().calls.clone()
    }

    /// Forget recorded calls; long-running loops would otherwise grow the
    /// log without bound.
    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Open a session on this field.
    pub fn session(&self, mode: SessionMode) -> MockDriver {
        let mut state = self.state.borrow_mut();
        state.sessions_opened += 1;
        state.last_mode = Some(mode);
        MockDriver {
            field: self.clone(),
            id: state.sessions_opened,
            current: None,
        }
    }

    /// Factory that opens sessions on this field.
    pub fn factory(&self) -> MockFactory {
        MockFactory {
            field: self.clone(),
        }
    }

    fn record(&self, session: usize, op: DriverOp) {
        self.state.borrow_mut().calls.push(DriverCall { session, op });
    }
}

fn file_key(name: &str) -> &str {
    name.strip_suffix(".rfid").unwrap_or(name)
}

/// Session factory over a `MockField`.
#[derive(Debug, Clone)]
pub struct MockFactory {
    field: MockField,
}

impl SessionFactory for MockFactory {
    fn open(&self, mode: SessionMode) -> Box<dyn ReaderDriver> {
        Box::new(self.field.session(mode))
    }
}

/// Mock session. Reads succeed immediately when a tag is in the field and
/// time out immediately otherwise; no real waiting happens.
#[derive(Debug)]
pub struct MockDriver {
    field: MockField,
    id: usize,
    current: Option<TagRecord>,
}

impl ReaderDriver for MockDriver {
    fn read_tag(&mut self, timeout: Duration) -> Result<()> {
        self.field.record(self.id, DriverOp::ReadTag(timeout));
        let tag = self.field.field_tag().ok_or(Error::Timeout)?;
        self.current = Some(tag);
        Ok(())
    }

    fn read_uid(&mut self, timeout: Duration) -> Result<String> {
        self.field.record(self.id, DriverOp::ReadUid(timeout));
        self.field
            .field_tag()
            .map(|tag| tag.uid)
            .ok_or(Error::Timeout)
    }

    fn write_tag(&mut self, timeout: Duration) -> StatusCode {
        self.field.record(self.id, DriverOp::WriteTag(timeout));
        let mut state = self.field.state.borrow_mut();
        if let Some(forced) = state.forced_writes.pop_front() {
            return forced;
        }
        let Some(source) = self.current.as_ref() else {
            return StatusCode::OtherError;
        };
        let Some(target) = state.tag.as_mut() else {
            return StatusCode::TagNotPresent;
        };
        if target.tag_type != source.tag_type {
            return StatusCode::TagNotMatch;
        }
        // UID and manufacturer bytes stay with the physical tag.
        target.pages = source.pages.clone();
        target.data_pages = source.data_pages;
        StatusCode::Success
    }

    fn save_file(&mut self, name: &str) -> Result<String> {
        self.field
            .record(self.id, DriverOp::SaveFile(name.to_string()));
        let mut state = self.field.state.borrow_mut();
        if state.save_failures > 0 {
            state.save_failures -= 1;
            return Err(Error::Storage("write failed".into()));
        }
        let tag = self.current.clone().ok_or(Error::NoTagData)?;
        let key = file_key(name);
        if key.is_empty() {
            return Err(Error::Storage("empty file name".into()));
        }
        state.files.insert(key.to_string(), tag);
        Ok(format!("{}/{}.rfid", MOCK_SAVE_DIR, key))
    }

    fn load_file(&mut self, name: &str) -> StatusCode {
        self.field
            .record(self.id, DriverOp::LoadFile(name.to_string()));
        let mut state = self.field.state.borrow_mut();
        if let Some(forced) = state.forced_loads.pop_front() {
            return forced;
        }
        match state.files.get(file_key(name)) {
            Some(tag) => {
                self.current = Some(tag.clone());
                StatusCode::Success
            }
            None => StatusCode::OtherError,
        }
    }

    fn current_tag(&self) -> Option<&TagRecord> {
        self.current.as_ref()
    }
}

impl Drop for MockDriver {
    fn drop(&mut self) {
        // try_borrow_mut: a session dropped while the field is borrowed
        // (only possible in a panicking test) must not double-panic.
        if let Ok(mut state) = self.field.state.try_borrow_mut() {
            state.sessions_closed += 1;
        }
    }
}
