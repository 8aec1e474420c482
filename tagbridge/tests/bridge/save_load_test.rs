#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{message, object, sample_tag, string_field, success};
use common::helpers::Engine;
use tagbridge::StatusCode;
use tagbridge::driver::mock::MockField;
use tagbridge::value::Value;

#[test]
fn save_after_read_reports_path() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));
    engine.global("rfidRead", &[Value::Int(1)]);

    let result = engine.global("rfidSave", &[Value::from("tag1")]);
    assert!(success(&result));
    assert_eq!(message(&result), "File saved successfully");
    assert_eq!(string_field(&result, "filepath"), "/BruceRFID/tag1.rfid");
    assert_eq!(engine.field.file("tag1"), Some(sample_tag()));
}

#[test]
fn save_without_tag_data_fails_with_empty_path() {
    let engine = Engine::new(MockField::new());
    let result = engine.method("save", &[Value::from("tag1")]);
    assert!(!success(&result));
    assert_eq!(message(&result), "Error saving file");
    assert_eq!(string_field(&result, "filepath"), "");
}

#[test]
fn save_storage_failure_fails_with_empty_path() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));
    engine.global("rfidRead", &[Value::Int(1)]);
    engine.field.fail_saves(1);

    let result = engine.global("rfidSave", &[Value::from("tag1")]);
    assert!(!success(&result));
    assert_eq!(string_field(&result, "filepath"), "");
}

#[test]
fn save_with_non_string_is_null_and_side_effect_free() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));
    assert_eq!(engine.global("rfidSave", &[Value::Int(5)]), Value::Null);
    assert_eq!(engine.global("rfidSave", &[]), Value::Null);
    assert_eq!(engine.field.sessions_opened(), 0);
}

#[test]
fn load_returns_record_with_data_pages() {
    let field = MockField::new();
    field.store_file("tag1", sample_tag());
    let engine = Engine::new(field);

    let result = engine.global("rfidLoad", &[Value::from("tag1.rfid")]);
    let record = object(&result);
    assert_eq!(record.len(), 8);
    assert_eq!(record.get("uid"), Some(&Value::from("04 A1 B2 C3 D4 E5 80")));
    assert_eq!(record.get("totalPages"), Some(&Value::Int(45)));
    assert_eq!(record.get("dataPages"), Some(&Value::Int(36)));
}

#[test]
fn load_null_for_missing_file_and_non_success() {
    let field = MockField::new();
    field.store_file("tag1", sample_tag());
    let engine = Engine::new(field);

    assert_eq!(engine.global("rfidLoad", &[Value::from("nope")]), Value::Null);

    for status in [
        StatusCode::TagNotPresent,
        StatusCode::TagNotMatch,
        StatusCode::OtherError,
    ] {
        engine.field.force_load_status(status);
        assert_eq!(engine.method("load", &[Value::from("tag1")]), Value::Null);
    }
}

#[test]
fn load_null_for_non_string() {
    let engine = Engine::new(MockField::new());
    assert_eq!(engine.global("rfidLoad", &[Value::Bool(true)]), Value::Null);
    assert_eq!(engine.field.sessions_opened(), 0);
}

#[test]
fn load_then_write_clones_saved_dump() {
    let field = MockField::new();
    field.store_file("tag1", sample_tag());
    field.present(common::fixtures::blank_ntag213());
    let engine = Engine::new(field);

    assert!(!engine.global("rfidLoad", &[Value::from("tag1")]).is_null());
    let written = engine.global("rfidWrite", &[Value::Int(1)]);
    assert!(success(&written));
    assert_eq!(engine.field.field_tag().unwrap().pages, sample_tag().pages);
}
