//! Seam to the lower-layer settings system.
//!
//! The lower layer keeps its own settings contract. This crate only tells it
//! when a delegate is installed or removed, asks it to apply its own defaults,
//! and passes raw JSON settings through to it. One implementation can be
//! installed per process; with nothing installed every call is a no-op.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::delegate::SettingsDelegate;

/// Capability exposed by the lower-layer settings system.
pub trait StackSettings: Send + Sync {
    /// Install (`Some`) or remove (`None`) the delegate the lower layer reads
    /// its settings through.
    fn setup(&self, delegate: Option<Arc<dyn SettingsDelegate>>);

    /// Apply the lower layer's built-in defaults.
    fn apply_defaults(&self);

    /// Apply a JSON settings document. The grammar and the meaning of the
    /// returned flag belong to the implementation.
    fn apply(&self, json_settings: &str) -> bool;
}

static INSTALLED: RwLock<Option<Arc<dyn StackSettings>>> = parking_lot::const_rwlock(None);

/// Install the process-wide lower layer, replacing any previous one.
pub fn install(stack: Arc<dyn StackSettings>) {
    *INSTALLED.write() = Some(stack);
    tracing::debug!("Stack settings installed");
}

/// Remove the process-wide lower layer, returning it if one was installed.
pub fn uninstall() -> Option<Arc<dyn StackSettings>> {
    let previous = INSTALLED.write().take();
    if previous.is_some() {
        tracing::debug!("Stack settings uninstalled");
    }
    previous
}

/// The currently installed lower layer, if any.
pub fn installed() -> Option<Arc<dyn StackSettings>> {
    INSTALLED.read().clone()
}

/// Forward a delegate change to the installed lower layer.
pub fn setup(delegate: Option<Arc<dyn SettingsDelegate>>) {
    match installed() {
        Some(stack) => stack.setup(delegate),
        None => tracing::warn!(
            has_delegate = delegate.is_some(),
            "No stack settings installed, delegate change not forwarded"
        ),
    }
}

/// Ask the installed lower layer to apply its defaults.
pub fn apply_defaults() {
    match installed() {
        Some(stack) => stack.apply_defaults(),
        None => tracing::warn!("No stack settings installed, defaults not forwarded"),
    }
}

/// Pass a JSON settings document to the installed lower layer.
///
/// Returns `false` when nothing is installed.
pub fn apply(json_settings: &str) -> bool {
    match installed() {
        Some(stack) => stack.apply(json_settings),
        None => {
            tracing::warn!("No stack settings installed, settings document ignored");
            false
        }
    }
}
