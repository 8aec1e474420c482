#[path = "../common/mod.rs"]
mod common;

use common::fixtures::sample_tag;
use common::helpers::Engine;
use tagbridge::bridge::Command;
use tagbridge::config::{BridgeConfig, CommandSurface};
use tagbridge::driver::mock::MockField;
use tagbridge::value::Value;

#[test]
fn full_surface_registers_both_styles() {
    let engine = Engine::new(MockField::new());
    assert_eq!(
        engine.globals.names(),
        vec![
            "rfidAddMifareKey",
            "rfidClear",
            "rfidLoad",
            "rfidRead",
            "rfidReadUID",
            "rfidSave",
            "rfidWrite",
        ]
    );
    assert_eq!(
        engine.rfid.names(),
        vec!["addMifareKey", "clear", "load", "read", "readUID", "save", "write"]
    );
    for cmd in Command::ALL {
        assert_eq!(engine.globals.arity(cmd.global_name()), Some(cmd.arity()));
        assert_eq!(engine.rfid.arity(cmd.script_name()), Some(cmd.arity()));
    }
}

#[test]
fn global_and_method_give_identical_results() {
    let field = MockField::with_tag(sample_tag());
    let engine = Engine::new(field);

    let args = [Value::Int(1)];
    for cmd in [Command::Read, Command::ReadUid, Command::Write] {
        let via_global = engine.global(cmd.global_name(), &args);
        let via_method = engine.method(cmd.script_name(), &args);
        assert_eq!(via_global, via_method, "{} differs between styles", cmd);
    }

    let bad = [Value::Int(9)];
    assert_eq!(
        engine.global("rfidAddMifareKey", &bad),
        engine.method("addMifareKey", &bad)
    );
}

#[test]
fn reduced_surface_leaves_key_management_out() {
    let config = BridgeConfig::default().with_surface(CommandSurface::reduced());
    let engine = Engine::with_config(MockField::new(), config);

    assert_eq!(engine.globals.len(), 6);
    assert!(!engine.globals.contains("rfidAddMifareKey"));
    assert!(!engine.rfid.contains("addMifareKey"));
    assert!(engine.globals.call("rfidAddMifareKey", &[]).is_err());
}

#[test]
fn surface_parsed_from_deployment_string() -> anyhow::Result<()> {
    let surface: CommandSurface = "readUID,clear".parse()?;
    let config = BridgeConfig::default().with_surface(surface);
    let engine = Engine::with_config(MockField::with_tag(sample_tag()), config);

    assert_eq!(engine.globals.names(), vec!["rfidClear", "rfidReadUID"]);
    assert_eq!(
        engine.method("readUID", &[]),
        Value::from("04 A1 B2 C3 D4 E5 80")
    );
    Ok(())
}
