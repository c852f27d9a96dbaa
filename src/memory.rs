//! In-memory settings delegate.
//!
//! Keeps typed values in a map guarded by a `parking_lot::RwLock`. Nothing is
//! persisted; the contents live as long as the delegate does.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::delegate::{SettingValue, SettingsDelegate};

/// Thread-safe, non-persistent `SettingsDelegate`.
///
/// Reading a missing key, or a key holding a value of another type, yields the
/// zero value for the requested type.
#[derive(Debug, Default)]
pub struct MemoryDelegate {
    values: RwLock<HashMap<String, SettingValue>>,
}

impl MemoryDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raw stored value for a key.
    pub fn value(&self, key: &str) -> Option<SettingValue> {
        self.values.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Render all stored values as a JSON object keyed by setting key.
    pub fn snapshot(&self) -> serde_json::Value {
        let values = self.values.read();
        let map = values
            .iter()
            .map(|(key, value)| {
                let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
                (key.clone(), json)
            })
            .collect();
        serde_json::Value::Object(map)
    }

    fn insert(&self, key: &str, value: SettingValue) {
        tracing::trace!(key, kind = value.type_name(), "Storing setting");
        self.values.write().insert(key.to_string(), value);
    }
}

impl FromIterator<(String, SettingValue)> for MemoryDelegate {
    fn from_iter<I: IntoIterator<Item = (String, SettingValue)>>(iter: I) -> Self {
        Self {
            values: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl SettingsDelegate for MemoryDelegate {
    fn get_string(&self, key: &str) -> String {
        match self.values.read().get(key) {
            Some(SettingValue::String(v)) => v.clone(),
            _ => String::new(),
        }
    }

    fn get_int(&self, key: &str) -> i64 {
        match self.values.read().get(key) {
            Some(SettingValue::Int(v)) => *v,
            _ => 0,
        }
    }

    fn get_uint(&self, key: &str) -> u64 {
        match self.values.read().get(key) {
            Some(SettingValue::UInt(v)) => *v,
            _ => 0,
        }
    }

    fn get_bool(&self, key: &str) -> bool {
        matches!(self.values.read().get(key), Some(SettingValue::Bool(true)))
    }

    fn get_float(&self, key: &str) -> f32 {
        match self.values.read().get(key) {
            Some(SettingValue::Float(v)) => *v,
            _ => 0.0,
        }
    }

    fn get_double(&self, key: &str) -> f64 {
        match self.values.read().get(key) {
            Some(SettingValue::Double(v)) => *v,
            _ => 0.0,
        }
    }

    fn set_string(&self, key: &str, value: &str) {
        self.insert(key, SettingValue::String(value.to_string()));
    }

    fn set_int(&self, key: &str, value: i64) {
        self.insert(key, SettingValue::Int(value));
    }

    fn set_uint(&self, key: &str, value: u64) {
        self.insert(key, SettingValue::UInt(value));
    }

    fn set_bool(&self, key: &str, value: bool) {
        self.insert(key, SettingValue::Bool(value));
    }

    fn set_float(&self, key: &str, value: f32) {
        self.insert(key, SettingValue::Float(value));
    }

    fn set_double(&self, key: &str, value: f64) {
        self.insert(key, SettingValue::Double(value));
    }

    fn clear(&self, key: &str) {
        self.values.write().remove(key);
    }
}
