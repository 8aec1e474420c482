// helpers.rs: wires a bridge over a mock field into function tables

use tagbridge::config::BridgeConfig;
use tagbridge::driver::mock::MockField;
use tagbridge::host::{FunctionTable, SharedBridge};
use tagbridge::test_support::{bridge_with_config, registered};
use tagbridge::value::Value;

/// What a script sees: globals, the `rfid` module object, and the field
/// the mock reader is pointed at.
pub struct Engine {
    pub field: MockField,
    pub bridge: SharedBridge,
    pub globals: FunctionTable,
    pub rfid: FunctionTable,
}

impl Engine {
    pub fn new(field: MockField) -> Self {
        Self::with_config(field, BridgeConfig::default())
    }

    pub fn with_config(field: MockField, config: BridgeConfig) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let (bridge, globals, rfid) = registered(bridge_with_config(&field, config));
        Self {
            field,
            bridge,
            globals,
            rfid,
        }
    }

    /// Call a global function, e.g. `engine.global("rfidRead", &[Value::Int(1)])`.
    pub fn global(&self, name: &str, args: &[Value]) -> Value {
        self.globals.call(name, args).expect("registered global")
    }

    /// Call a module method, e.g. `engine.method("read", &[])`.
    pub fn method(&self, name: &str, args: &[Value]) -> Value {
        self.rfid.call(name, args).expect("registered method")
    }
}
