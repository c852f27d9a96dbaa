//! Static settings API.
//!
//! Free functions that resolve the process-wide facade and forward to it.
//! When the singleton is gone every call degrades to a no-op; nothing here
//! returns an error.

use std::sync::Arc;

use crate::delegate::SettingsDelegate;
use crate::facade::SettingsFacade;
use crate::stack;

/// Install (`Some`) or remove (`None`) the process-wide delegate.
pub fn setup(delegate: Option<Arc<dyn SettingsDelegate>>) {
    if let Some(facade) = SettingsFacade::singleton() {
        facade.setup(delegate);
    }
}

/// Apply the built-in defaults through the process-wide facade.
pub fn apply_defaults() {
    if let Some(facade) = SettingsFacade::singleton() {
        facade.apply_defaults();
    }
}

/// Called once by the stack during startup so settings are never missing.
pub fn apply_defaults_if_no_delegate_present() {
    if let Some(facade) = SettingsFacade::singleton() {
        facade.apply_defaults_if_no_delegate_present();
    }
}

/// Pass a JSON settings document straight to the lower layer.
///
/// Returns the lower layer's verdict, or `false` when none is installed.
pub fn apply(json_settings: &str) -> bool {
    stack::apply(json_settings)
}

pub fn set_string(key: &str, value: &str) {
    if let Some(facade) = SettingsFacade::singleton() {
        facade.set_string(key, value);
    }
}

pub fn set_int(key: &str, value: i64) {
    if let Some(facade) = SettingsFacade::singleton() {
        facade.set_int(key, value);
    }
}

pub fn set_uint(key: &str, value: u64) {
    if let Some(facade) = SettingsFacade::singleton() {
        facade.set_uint(key, value);
    }
}

pub fn set_bool(key: &str, value: bool) {
    if let Some(facade) = SettingsFacade::singleton() {
        facade.set_bool(key, value);
    }
}

pub fn set_float(key: &str, value: f32) {
    if let Some(facade) = SettingsFacade::singleton() {
        facade.set_float(key, value);
    }
}

pub fn set_double(key: &str, value: f64) {
    if let Some(facade) = SettingsFacade::singleton() {
        facade.set_double(key, value);
    }
}

pub fn clear(key: &str) {
    if let Some(facade) = SettingsFacade::singleton() {
        facade.clear(key);
    }
}
