// tagbridge/src/host.rs

//! Registration of the command surface with a scripting engine.
//!
//! Engines expose native functions in two styles: bare globals
//! (`rfidRead(5)`) and methods on a module object (`rfid.read(5)`). Both
//! styles are wired to the same `CommandBridge::dispatch`, so a script sees
//! identical behaviour whichever it uses.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::bridge::{Command, CommandBridge};
use crate::value::Value;
use crate::{Error, Result};

/// Bridge handle shared by every registered native function.
pub type SharedBridge = Rc<RefCell<CommandBridge>>;

/// Native function as seen by the engine.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> Value>;

/// An engine that can bind global functions.
pub trait ScriptHost {
    /// Bind `f` as a global function called `name`.
    fn register_global(&mut self, name: &str, arity: usize, f: NativeFn);

    /// Module object called `name`, created on first use.
    fn namespace(&mut self, name: &str) -> &mut dyn ScriptNamespace;
}

/// A module object that can carry methods.
pub trait ScriptNamespace {
    /// Attach `f` as a method called `name`.
    fn put_method(&mut self, name: &str, arity: usize, f: NativeFn);
}

/// Wrap a bridge so every registered function can reach it.
pub fn share(bridge: CommandBridge) -> SharedBridge {
    Rc::new(RefCell::new(bridge))
}

/// Native function for one command.
///
/// The engine runs one call at a time, so the bridge is never borrowed
/// when a call arrives. If it is (a driver calling back into the script),
/// the call yields null instead of panicking.
pub fn native_fn(bridge: &SharedBridge, cmd: Command) -> NativeFn {
    let bridge = Rc::clone(bridge);
    Rc::new(move |args: &[Value]| match bridge.try_borrow_mut() {
        Ok(mut bridge) => bridge.dispatch(cmd, args),
        Err(_) => {
            log::error!("re-entrant call to {} while a command is running", cmd);
            Value::Null
        }
    })
}

/// Register every command of the configured surface as a global function.
/// Returns the number of functions registered.
pub fn register_globals<H: ScriptHost + ?Sized>(bridge: &SharedBridge, host: &mut H) -> usize {
    let surface = bridge.borrow().config().surface.clone();
    for cmd in surface.iter() {
        host.register_global(cmd.global_name(), cmd.arity(), native_fn(bridge, cmd));
    }
    log::debug!("registered {} global rfid function(s)", surface.len());
    surface.len()
}

/// Put every command of the configured surface on a module object.
/// Returns the number of methods added.
pub fn put_methods<N: ScriptNamespace + ?Sized>(bridge: &SharedBridge, namespace: &mut N) -> usize {
    let surface = bridge.borrow().config().surface.clone();
    for cmd in surface.iter() {
        namespace.put_method(cmd.script_name(), cmd.arity(), native_fn(bridge, cmd));
    }
    surface.len()
}

/// Register both styles: globals, then methods on the module object named
/// by `BridgeConfig::namespace`. Returns the number of commands exposed.
pub fn install<H: ScriptHost + ?Sized>(bridge: &SharedBridge, host: &mut H) -> usize {
    let count = register_globals(bridge, host);
    let namespace = bridge.borrow().config().namespace.clone();
    put_methods(bridge, host.namespace(&namespace));
    log::debug!("installed rfid module as {:?}", namespace);
    count
}

/// Name-indexed function table. Serves as a minimal host for tools and
/// tests, and as either registration target.
#[derive(Default, Clone)]
pub struct FunctionTable {
    entries: HashMap<String, (usize, NativeFn)>,
    modules: HashMap<String, FunctionTable>,
}

impl FunctionTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call a registered function by name.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let (_, f) = self
            .entries
            .get(name)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()))?;
        Ok(f(args))
    }

    /// Declared arity of `name`, if registered.
    pub fn arity(&self, name: &str) -> Option<usize> {
        self.entries.get(name).map(|(arity, _)| *arity)
    }

    /// Whether a function called `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered functions, not counting module methods.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no function is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Module object created through `ScriptHost::namespace`.
    pub fn module(&self, name: &str) -> Option<&FunctionTable> {
        self.modules.get(name)
    }

    /// Detach a module object from the table.
    pub fn take_module(&mut self, name: &str) -> Option<FunctionTable> {
        self.modules.remove(name)
    }

    fn insert(&mut self, name: &str, arity: usize, f: NativeFn) {
        if self.entries.insert(name.to_string(), (arity, f)).is_some() {
            log::warn!("function {} registered twice, keeping the latest", name);
        }
    }
}

impl ScriptHost for FunctionTable {
    fn register_global(&mut self, name: &str, arity: usize, f: NativeFn) {
        self.insert(name, arity, f);
    }

    fn namespace(&mut self, name: &str) -> &mut dyn ScriptNamespace {
        self.modules.entry(name.to_string()).or_default()
    }
}

impl ScriptNamespace for FunctionTable {
    fn put_method(&mut self, name: &str, arity: usize, f: NativeFn) {
        self.insert(name, arity, f);
    }
}

impl std::fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTable")
            .field("names", &self.names())
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .finish()
    }
}
