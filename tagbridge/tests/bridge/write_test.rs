#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use common::fixtures::{blank_ntag213, message, object, sample_tag, success};
use common::helpers::Engine;
use tagbridge::StatusCode;
use tagbridge::driver::mock::{DriverOp, MockField};
use tagbridge::test_support::sample_ultralight;
use tagbridge::value::Value;

#[test]
fn clone_read_tag_onto_blank() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));
    assert!(!engine.global("rfidRead", &[Value::Int(1)]).is_null());

    engine.field.present(blank_ntag213());
    let result = engine.global("rfidWrite", &[Value::Int(1)]);

    assert!(success(&result));
    assert_eq!(message(&result), "Tag written successfully");
    assert_eq!(object(&result).len(), 2);
    assert_eq!(engine.field.field_tag().unwrap().pages, sample_tag().pages);
}

#[test]
fn write_without_tag_in_field() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));
    engine.global("rfidRead", &[Value::Int(1)]);
    engine.field.remove_tag();

    let result = engine.method("write", &[]);
    assert!(!success(&result));
    assert_eq!(message(&result), "No tag present");
}

#[test]
fn write_onto_different_tag_type() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));
    engine.global("rfidRead", &[Value::Int(1)]);
    engine.field.present(sample_ultralight());

    let result = engine.global("rfidWrite", &[Value::Int(1)]);
    assert!(!success(&result));
    assert_eq!(message(&result), "Tag types do not match");
}

#[test]
fn write_with_nothing_to_write_is_generic_error() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));
    let result = engine.global("rfidWrite", &[Value::Int(1)]);
    assert!(!success(&result));
    assert_eq!(message(&result), "Error writing data to tag");
}

#[test]
fn unrecognized_driver_code_maps_to_generic_error() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));
    engine.field.force_write_status(StatusCode::from_raw(7));

    let result = engine.global("rfidWrite", &[Value::Int(1)]);
    assert!(!success(&result));
    assert_eq!(message(&result), "Error writing data to tag");
}

#[test]
fn write_default_timeout_is_ten_seconds() {
    let engine = Engine::new(MockField::new());
    engine.global("rfidWrite", &[]);
    assert_eq!(
        engine.field.calls()[0].op,
        DriverOp::WriteTag(Duration::from_secs(10))
    );
}
