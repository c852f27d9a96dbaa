//! The delegate capability supplied by the embedding application.
//!
//! A delegate owns the actual settings values. The facade never stores values
//! itself; it forwards every typed read and write to whichever delegate is
//! currently installed.

use serde::{Deserialize, Serialize};

/// Typed key/value access implemented by the embedding application.
///
/// Keys are opaque strings with no enforced namespace. A missing key is not an
/// error: getters return the type's zero value (empty string, `0`, `false`,
/// `0.0`).
///
/// # Thread Safety
/// Implementors must be `Send + Sync`; the facade calls into the delegate from
/// whichever thread asked for the setting, without holding any lock.
pub trait SettingsDelegate: Send + Sync {
    fn get_string(&self, key: &str) -> String;
    fn get_int(&self, key: &str) -> i64;
    fn get_uint(&self, key: &str) -> u64;
    fn get_bool(&self, key: &str) -> bool;
    fn get_float(&self, key: &str) -> f32;
    fn get_double(&self, key: &str) -> f64;

    fn set_string(&self, key: &str, value: &str);
    fn set_int(&self, key: &str, value: i64);
    fn set_uint(&self, key: &str, value: u64);
    fn set_bool(&self, key: &str, value: bool);
    fn set_float(&self, key: &str, value: f32);
    fn set_double(&self, key: &str, value: f64);

    /// Remove a key. Clearing an unknown key is accepted silently.
    fn clear(&self, key: &str);
}

/// A single typed setting value.
///
/// Used by delegate implementations that keep values in a map, and by test
/// doubles that record what was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SettingValue {
    String(String),
    Int(i64),
    UInt(u64),
    Bool(bool),
    Float(f32),
    Double(f64),
}

impl SettingValue {
    /// Name of the value's type, as used in log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::String(_) => "string",
            SettingValue::Int(_) => "int",
            SettingValue::UInt(_) => "uint",
            SettingValue::Bool(_) => "bool",
            SettingValue::Float(_) => "float",
            SettingValue::Double(_) => "double",
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<u64> for SettingValue {
    fn from(value: u64) -> Self {
        SettingValue::UInt(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<f32> for SettingValue {
    fn from(value: f32) -> Self {
        SettingValue::Float(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Double(value)
    }
}
