// tagbridge/src/bridge/encode.rs

//! Result encoding.
//!
//! Every command produces exactly one `CommandResult`, which becomes
//! exactly one script `Value`. Objects are assembled completely before they
//! are handed over; there is no path that returns half a record.

use std::borrow::Cow;

use crate::Result;
use crate::types::{StatusCode, TagRecord};
use crate::value::{Object, Value};

/// `write` succeeded.
pub const MSG_WRITE_OK: &str = "Tag written successfully";
/// `write` found no tag.
pub const MSG_NO_TAG: &str = "No tag present";
/// `write` found a tag of another type.
pub const MSG_TAG_MISMATCH: &str = "Tag types do not match";
/// `write` failed otherwise.
pub const MSG_WRITE_ERROR: &str = "Error writing data to tag";
/// `save` succeeded.
pub const MSG_SAVE_OK: &str = "File saved successfully";
/// `save` failed.
pub const MSG_SAVE_ERROR: &str = "Error saving file";
/// `addMifareKey` got a string.
pub const MSG_KEY_OK: &str = "Key processed";
/// `addMifareKey` got something else.
pub const MSG_KEY_TYPE_ERROR: &str = "Invalid parameter: key must be a string";

/// Which tag fields a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagShape {
    /// uid, type, sak, atqa, bcc, pages, totalPages
    Read,
    /// The read fields plus dataPages.
    Load,
}

/// `success`/`message` record with the optional per-command extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    /// Whether the command did what was asked.
    pub success: bool,
    /// Fixed human-readable outcome.
    pub message: Cow<'static, str>,
    /// Saved file path (`save` only).
    pub filepath: Option<String>,
    /// Echoed key material (`addMifareKey` only).
    pub key: Option<String>,
}

impl StatusRecord {
    /// Successful record.
    pub fn ok(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: true,
            message: message.into(),
            filepath: None,
            key: None,
        }
    }

    /// Failed record.
    pub fn failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: false,
            ..Self::ok(message)
        }
    }

    /// Attach a `filepath` field.
    pub fn with_filepath(mut self, path: impl Into<String>) -> Self {
        self.filepath = Some(path.into());
        self
    }

    /// Attach a `key` field.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Script object with fields in `success, message, filepath, key` order.
    pub fn to_object(&self) -> Object {
        let mut obj = Object::new()
            .with("success", self.success)
            .with("message", self.message.as_ref());
        if let Some(path) = &self.filepath {
            obj.insert("filepath", path.as_str());
        }
        if let Some(key) = &self.key {
            obj.insert("key", key.as_str());
        }
        obj
    }
}

/// The outcome of one command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Nothing returned (`undefined`).
    Undefined,
    /// Absent result (`null`).
    Null,
    /// A UID string; empty when no tag answered.
    Uid(String),
    /// A `success`/`message` record.
    Status(StatusRecord),
    /// A tag record.
    Tag {
        /// Snapshot taken from the session.
        record: TagRecord,
        /// Which fields the script sees.
        shape: TagShape,
    },
}

impl CommandResult {
    /// Whether this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, CommandResult::Null)
    }

    /// Status record, if this is one.
    pub fn status(&self) -> Option<&StatusRecord> {
        match self {
            CommandResult::Status(status) => Some(status),
            _ => None,
        }
    }

    /// Tag record, if this is one.
    pub fn tag(&self) -> Option<&TagRecord> {
        match self {
            CommandResult::Tag { record, .. } => Some(record),
            _ => None,
        }
    }

    /// Script value for this result.
    pub fn into_value(self) -> Value {
        match self {
            CommandResult::Undefined => Value::Undefined,
            CommandResult::Null => Value::Null,
            CommandResult::Uid(uid) => Value::Str(uid),
            CommandResult::Status(status) => Value::Object(status.to_object()),
            CommandResult::Tag { record, shape } => Value::Object(tag_object(&record, shape)),
        }
    }
}

impl From<CommandResult> for Value {
    fn from(result: CommandResult) -> Self {
        result.into_value()
    }
}

/// Script object for a tag record.
pub fn tag_object(record: &TagRecord, shape: TagShape) -> Object {
    let obj = Object::new()
        .with("uid", record.uid.as_str())
        .with("type", record.tag_type.as_str())
        .with("sak", record.sak.as_str())
        .with("atqa", record.atqa.as_str())
        .with("bcc", record.bcc.as_str())
        .with("pages", record.pages.as_str())
        .with("totalPages", record.total_pages);
    match shape {
        TagShape::Read => obj,
        TagShape::Load => obj.with("dataPages", record.data_pages),
    }
}

/// Message and success flag for a write outcome.
pub fn write_message(status: StatusCode) -> (bool, &'static str) {
    match status {
        StatusCode::Success => (true, MSG_WRITE_OK),
        StatusCode::TagNotPresent => (false, MSG_NO_TAG),
        StatusCode::TagNotMatch => (false, MSG_TAG_MISMATCH),
        StatusCode::OtherError => (false, MSG_WRITE_ERROR),
    }
}

/// Record for a write status.
pub fn write_result(status: StatusCode) -> CommandResult {
    let (success, message) = write_message(status);
    let record = if success {
        StatusRecord::ok(message)
    } else {
        StatusRecord::failed(message)
    };
    CommandResult::Status(record)
}

/// A save succeeds only with a non-empty path; failures still carry an
/// empty `filepath` so scripts can read the field unconditionally.
pub fn save_result(outcome: Result<String>) -> CommandResult {
    match outcome {
        Ok(path) if !path.is_empty() => {
            CommandResult::Status(StatusRecord::ok(MSG_SAVE_OK).with_filepath(path))
        }
        Ok(_) => {
            log::warn!("driver reported save without a path");
            CommandResult::Status(StatusRecord::failed(MSG_SAVE_ERROR).with_filepath(""))
        }
        Err(e) => {
            log::warn!("save failed: {}", e);
            CommandResult::Status(StatusRecord::failed(MSG_SAVE_ERROR).with_filepath(""))
        }
    }
}

/// Tag record result, or null when the session has nothing to show.
pub fn tag_result(record: Option<&TagRecord>, shape: TagShape) -> CommandResult {
    match record {
        Some(record) => CommandResult::Tag {
            record: record.clone(),
            shape,
        },
        None => CommandResult::Null,
    }
}

/// Record echoing processed key material.
pub fn key_result(key: &str) -> CommandResult {
    CommandResult::Status(StatusRecord::ok(MSG_KEY_OK).with_key(key))
}

/// Record for a non-string key argument.
pub fn key_type_error() -> CommandResult {
    CommandResult::Status(StatusRecord::failed(MSG_KEY_TYPE_ERROR))
}
