#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use common::fixtures::{object, sample_tag};
use common::helpers::Engine;
use tagbridge::driver::mock::{DriverOp, MockField};
use tagbridge::value::Value;

#[test]
fn read_returns_seven_field_record() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));

    let result = engine.global("rfidRead", &[Value::Int(1)]);
    let record = object(&result);

    assert_eq!(record.len(), 7);
    assert_eq!(record.get("uid"), Some(&Value::from("04 A1 B2 C3 D4 E5 80")));
    assert_eq!(record.get("type"), Some(&Value::from("NTAG213")));
    assert_eq!(record.get("sak"), Some(&Value::from("00")));
    assert_eq!(record.get("atqa"), Some(&Value::from("00 44")));
    assert_eq!(record.get("bcc"), Some(&Value::from("8E")));
    assert_eq!(record.get("pages"), Some(&Value::from(sample_tag().pages)));
    assert_eq!(record.get("totalPages"), Some(&Value::Int(45)));
    assert!(!record.contains_key("dataPages"));
}

#[test]
fn read_times_out_to_null() {
    let engine = Engine::new(MockField::new());
    assert_eq!(engine.global("rfidRead", &[Value::Int(1)]), Value::Null);
    assert_eq!(engine.method("read", &[]), Value::Null);
}

#[test]
fn read_default_timeout_is_ten_seconds() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));
    engine.global("rfidRead", &[]);
    engine.global("rfidRead", &[Value::from("soon")]);
    engine.global("rfidRead", &[Value::Number(2.5)]);

    let ops: Vec<_> = engine.field.calls().into_iter().map(|c| c.op).collect();
    assert_eq!(
        ops,
        vec![
            DriverOp::ReadTag(Duration::from_secs(10)),
            DriverOp::ReadTag(Duration::from_secs(10)),
            DriverOp::ReadTag(Duration::from_secs(2)),
        ]
    );
}

#[test]
fn read_uid_is_never_null() {
    let engine = Engine::new(MockField::new());
    assert_eq!(engine.global("rfidReadUID", &[Value::Int(1)]), Value::from(""));

    engine.field.present(sample_tag());
    assert_eq!(
        engine.method("readUID", &[]),
        Value::from("04 A1 B2 C3 D4 E5 80")
    );
}

#[test]
fn read_uid_defaults_to_five_seconds_on_a_disposable_session() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));

    engine.global("rfidRead", &[Value::Int(1)]);
    engine.global("rfidReadUID", &[]);
    engine.global("rfidReadUID", &[]);

    let calls = engine.field.calls();
    assert_eq!(calls[1].op, DriverOp::ReadUid(Duration::from_secs(5)));
    // cached session is #1; each probe got its own session
    assert_eq!(calls[0].session, 1);
    assert_eq!(calls[1].session, 2);
    assert_eq!(calls[2].session, 3);
    assert_eq!(engine.field.live_sessions(), 1);
    assert!(engine.bridge.borrow().sessions().is_live());
}

#[test]
fn read_uid_does_not_disturb_cached_tag() {
    let engine = Engine::new(MockField::with_tag(sample_tag()));
    engine.global("rfidRead", &[Value::Int(1)]);

    engine.field.remove_tag();
    assert_eq!(engine.global("rfidReadUID", &[Value::Int(1)]), Value::from(""));

    // the cached read is still there to save
    let saved = engine.global("rfidSave", &[Value::from("after_probe")]);
    assert_eq!(object(&saved).get("success"), Some(&Value::Bool(true)));
}
