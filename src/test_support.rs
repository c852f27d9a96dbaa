//! Test doubles shared by the unit tests.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::delegate::{SettingValue, SettingsDelegate};
use crate::keys::CORE_THREAD_PRIORITY;
use crate::memory::MemoryDelegate;
use crate::stack::StackSettings;

#[derive(Debug, Clone, PartialEq)]
pub enum DelegateCall {
    Get { key: String, kind: &'static str },
    Set { key: String, value: SettingValue },
    Clear(String),
}

/// Delegate backed by a `MemoryDelegate` that records every call.
#[derive(Default)]
pub struct RecordingDelegate {
    store: MemoryDelegate,
    calls: Mutex<Vec<DelegateCall>>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without recording a call.
    pub fn with(self, key: &str, value: impl Into<SettingValue>) -> Self {
        match value.into() {
            SettingValue::String(v) => self.store.set_string(key, &v),
            SettingValue::Int(v) => self.store.set_int(key, v),
            SettingValue::UInt(v) => self.store.set_uint(key, v),
            SettingValue::Bool(v) => self.store.set_bool(key, v),
            SettingValue::Float(v) => self.store.set_float(key, v),
            SettingValue::Double(v) => self.store.set_double(key, v),
        }
        self
    }

    pub fn calls(&self) -> Vec<DelegateCall> {
        self.calls.lock().clone()
    }

    pub fn writes(&self) -> Vec<(String, SettingValue)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                DelegateCall::Set { key, value } => Some((key.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn value(&self, key: &str) -> Option<SettingValue> {
        self.store.value(key)
    }

    fn record_get(&self, key: &str, kind: &'static str) {
        self.calls.lock().push(DelegateCall::Get {
            key: key.to_string(),
            kind,
        });
    }

    fn record_set(&self, key: &str, value: SettingValue) {
        self.calls.lock().push(DelegateCall::Set {
            key: key.to_string(),
            value,
        });
    }
}

impl SettingsDelegate for RecordingDelegate {
    fn get_string(&self, key: &str) -> String {
        self.record_get(key, "string");
        self.store.get_string(key)
    }

    fn get_int(&self, key: &str) -> i64 {
        self.record_get(key, "int");
        self.store.get_int(key)
    }

    fn get_uint(&self, key: &str) -> u64 {
        self.record_get(key, "uint");
        self.store.get_uint(key)
    }

    fn get_bool(&self, key: &str) -> bool {
        self.record_get(key, "bool");
        self.store.get_bool(key)
    }

    fn get_float(&self, key: &str) -> f32 {
        self.record_get(key, "float");
        self.store.get_float(key)
    }

    fn get_double(&self, key: &str) -> f64 {
        self.record_get(key, "double");
        self.store.get_double(key)
    }

    fn set_string(&self, key: &str, value: &str) {
        self.record_set(key, SettingValue::from(value));
        self.store.set_string(key, value);
    }

    fn set_int(&self, key: &str, value: i64) {
        self.record_set(key, SettingValue::Int(value));
        self.store.set_int(key, value);
    }

    fn set_uint(&self, key: &str, value: u64) {
        self.record_set(key, SettingValue::UInt(value));
        self.store.set_uint(key, value);
    }

    fn set_bool(&self, key: &str, value: bool) {
        self.record_set(key, SettingValue::Bool(value));
        self.store.set_bool(key, value);
    }

    fn set_float(&self, key: &str, value: f32) {
        self.record_set(key, SettingValue::Float(value));
        self.store.set_float(key, value);
    }

    fn set_double(&self, key: &str, value: f64) {
        self.record_set(key, SettingValue::Double(value));
        self.store.set_double(key, value);
    }

    fn clear(&self, key: &str) {
        self.calls.lock().push(DelegateCall::Clear(key.to_string()));
        self.store.clear(key);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StackCall {
    Setup { has_delegate: bool },
    ApplyDefaults,
    Apply(String),
}

/// Lower layer that records calls and keeps the delegate it was handed.
///
/// On `setup` with a delegate it reads the core thread priority back through
/// that delegate, the way a real lower layer would on install. A facade that
/// still held its lock while notifying would deadlock here.
pub struct RecordingStack {
    accept: bool,
    calls: Mutex<Vec<StackCall>>,
    probes: Mutex<Vec<String>>,
    delegate: Mutex<Option<Arc<dyn SettingsDelegate>>>,
}

impl RecordingStack {
    pub fn accepting() -> Self {
        Self::new(true)
    }

    pub fn rejecting() -> Self {
        Self::new(false)
    }

    fn new(accept: bool) -> Self {
        Self {
            accept,
            calls: Mutex::new(Vec::new()),
            probes: Mutex::new(Vec::new()),
            delegate: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> Vec<StackCall> {
        self.calls.lock().clone()
    }

    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().clone()
    }

    pub fn delegate(&self) -> Option<Arc<dyn SettingsDelegate>> {
        self.delegate.lock().clone()
    }

    pub fn count(&self, call: &StackCall) -> usize {
        self.calls.lock().iter().filter(|c| *c == call).count()
    }
}

impl StackSettings for RecordingStack {
    fn setup(&self, delegate: Option<Arc<dyn SettingsDelegate>>) {
        self.calls.lock().push(StackCall::Setup {
            has_delegate: delegate.is_some(),
        });
        if let Some(delegate) = &delegate {
            let value = delegate.get_string(CORE_THREAD_PRIORITY);
            self.probes.lock().push(value);
        }
        *self.delegate.lock() = delegate;
    }

    fn apply_defaults(&self) {
        self.calls.lock().push(StackCall::ApplyDefaults);
    }

    fn apply(&self, json_settings: &str) -> bool {
        self.calls
            .lock()
            .push(StackCall::Apply(json_settings.to_string()));
        self.accept
    }
}
