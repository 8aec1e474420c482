// fixtures.rs: provides commonly used tags and result accessors

use tagbridge::TagRecord;
use tagbridge::value::{Object, Value};

pub use tagbridge::test_support::sample_tag;

/// Blank NTAG213 with a different UID, ready to be written.
pub fn blank_ntag213() -> TagRecord {
    TagRecord {
        uid: "04 11 22 33 44 55 66".to_string(),
        pages: String::new(),
        data_pages: 0,
        ..sample_tag()
    }
}

pub fn object(value: &Value) -> &Object {
    value
        .as_object()
        .unwrap_or_else(|| panic!("expected object, got {:?}", value))
}

pub fn success(value: &Value) -> bool {
    object(value)
        .get("success")
        .and_then(Value::as_bool)
        .expect("success field")
}

pub fn message(value: &Value) -> &str {
    object(value)
        .get("message")
        .and_then(Value::as_str)
        .expect("message field")
}

pub fn string_field<'a>(value: &'a Value, name: &str) -> &'a str {
    object(value)
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("string field {}", name))
}
