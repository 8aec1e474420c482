// tagbridge/src/types.rs

//! Tag records, status codes and MIFARE keys.

use crate::Error;
use derive_more::Display;

/// Snapshot of the last tag a session read or loaded.
///
/// Drivers replace the record wholesale on every successful read or load;
/// the bridge only ever sees it through a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TagRecord {
    /// UID as spaced hex, e.g. `04 A1 B2 C3`.
    pub uid: String,
    /// Human-readable tag type, e.g. `NTAG213`. Scripts see it as `type`.
    pub tag_type: String,
    /// SAK byte as hex.
    pub sak: String,
    /// ATQA bytes as spaced hex.
    pub atqa: String,
    /// UID check byte as hex.
    pub bcc: String,
    /// Concatenated page dump, one page per line.
    pub pages: String,
    /// Pages on the tag.
    pub total_pages: u32,
    /// Pages carrying user data. Only reported to scripts by `load`.
    pub data_pages: u32,
}

/// Driver-reported outcome of a write or load.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum StatusCode {
    /// Operation completed.
    #[display(fmt = "SUCCESS")]
    Success = 0,
    /// No tag in range.
    #[display(fmt = "TAG_NOT_PRESENT")]
    TagNotPresent = 1,
    /// Tag in range has a different type than the record.
    #[display(fmt = "TAG_NOT_MATCH")]
    TagNotMatch = 2,
    /// Anything else, including unknown driver codes.
    #[display(fmt = "OTHER_ERROR")]
    OtherError = 3,
}

impl StatusCode {
    /// Map a raw driver code. Unknown codes become `OtherError`.
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::Success,
            1 => Self::TagNotPresent,
            2 => Self::TagNotMatch,
            3 => Self::OtherError,
            other => {
                log::debug!("unrecognized driver status {}, treating as OTHER_ERROR", other);
                Self::OtherError
            }
        }
    }

    /// Numeric code as drivers report it.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Whether this is `Success`.
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        Self::from_raw(code)
    }
}

/// MIFARE Classic sector key - Newtype Pattern (6 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Factory default key, `FFFFFFFFFFFF`.
    pub const DEFAULT: Self = Self([0xff; 6]);

    /// Key from raw bytes.
    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Upper-case hex without separators, the form key files store.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }
}

impl std::fmt::Display for MifareKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&str> for MifareKey {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        // parse_hex skips whitespace, so the digit count is only known after
        // parsing.
        let bytes = crate::utils::parse_hex(text).map_err(Error::InvalidKey)?;
        let arr = <[u8; 6]>::try_from(bytes.as_slice()).map_err(|_| {
            Error::InvalidKey(format!("expected 12 hex digits, got {}", bytes.len() * 2))
        })?;
        Ok(Self(arr))
    }
}
