//! The process-wide settings facade.
//!
//! `SettingsFacade` owns no settings values. It holds the currently installed
//! delegate and forwards every typed read and write to it. With no delegate
//! installed, reads yield the type's zero value and writes are dropped, so code
//! throughout the stack can read and write settings unconditionally.
//!
//! # Locking
//! A single non-reentrant `parking_lot::Mutex` guards the delegate reference and
//! the defaults-applied flag. Every operation copies what it needs out of the
//! lock and releases it before calling the delegate or the lower layer, so a
//! delegate (or lower layer) may call straight back into the facade.
//!
//! # Singleton
//! `SettingsFacade::singleton()` lazily creates one shared instance per process.
//! The process-wide slot owns it until `release_singleton()` is called at stack
//! shutdown; lookups only hold a `Weak` handle, so once the last external `Arc`
//! is gone the singleton reports as absent instead of being recreated.

use std::sync::{Arc, OnceLock, Weak};

use parking_lot::Mutex;
use uuid::Uuid;

use crate::delegate::SettingsDelegate;
use crate::keys::{self, ThreadPriority};
use crate::stack::{self, StackSettings};

#[derive(Default)]
struct FacadeState {
    /// Delegate all reads and writes are forwarded to
    delegate: Option<Arc<dyn SettingsDelegate>>,

    /// Set once defaults were applied; never cleared
    defaults_applied: bool,
}

/// Single point of access for typed settings.
///
/// The facade implements `SettingsDelegate` itself: getters, setters and
/// `clear` come from that trait. On `setup` the lower layer receives a
/// `FacadeHandle` forwarding to the facade, never an owning reference.
pub struct SettingsFacade {
    /// Diagnostic identity, attached to every log line
    id: Uuid,

    /// Handle to our own `Arc`, wrapped in a `FacadeHandle` for the lower layer
    this: Weak<SettingsFacade>,

    /// Lower layer bound at construction; `None` uses the process-wide one
    stack: Option<Arc<dyn StackSettings>>,

    state: Mutex<FacadeState>,
}

impl SettingsFacade {
    /// Create an independent facade with no delegate, notifying the
    /// process-wide lower layer.
    pub fn create() -> Arc<Self> {
        Self::build(None)
    }

    /// Create an independent facade bound to a specific lower layer.
    pub fn with_stack(stack: Arc<dyn StackSettings>) -> Arc<Self> {
        Self::build(Some(stack))
    }

    fn build(stack: Option<Arc<dyn StackSettings>>) -> Arc<Self> {
        let facade = Arc::new_cyclic(|this| Self {
            id: Uuid::new_v4(),
            this: this.clone(),
            stack,
            state: Mutex::new(FacadeState::default()),
        });
        tracing::debug!(id = %facade.id, "Settings facade created");
        facade
    }

    /// The shared process-wide facade, created on first use.
    ///
    /// Returns `None` once the singleton has been released and every external
    /// holder has dropped it. Callers treat that as "no settings available".
    pub fn singleton() -> Option<Arc<Self>> {
        let result = singleton_slot().instance.upgrade();
        if result.is_none() {
            tracing::warn!("Settings singleton gone");
        }
        result
    }

    /// Diagnostic identity of this instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether a delegate is currently installed.
    pub fn has_delegate(&self) -> bool {
        self.state.lock().delegate.is_some()
    }

    /// Whether defaults were applied at any point in this instance's life.
    pub fn defaults_applied(&self) -> bool {
        self.state.lock().defaults_applied
    }

    /// Install (`Some`) or remove (`None`) the delegate.
    ///
    /// The lower layer is notified after the lock is released. It receives a
    /// `FacadeHandle` to this facade when a delegate was installed, and `None`
    /// otherwise. The defaults-applied flag is left untouched.
    pub fn setup(&self, delegate: Option<Arc<dyn SettingsDelegate>>) {
        let has_delegate = delegate.is_some();
        {
            let mut state = self.state.lock();
            state.delegate = delegate;
            tracing::debug!(id = %self.id, has_delegate, "Settings setup called");
        }

        let forwarded = if has_delegate {
            Some(Arc::new(FacadeHandle(self.this.clone())) as Arc<dyn SettingsDelegate>)
        } else {
            None
        };
        self.notify_setup(forwarded);
    }

    /// Write the built-in defaults and ask the lower layer to apply its own.
    ///
    /// Marks defaults as applied before any write is attempted.
    pub fn apply_defaults(&self) {
        self.state.lock().defaults_applied = true;
        self.write_defaults();
    }

    /// Apply defaults unless a delegate is installed or they were already
    /// applied.
    ///
    /// The check and the flag update share one critical section, so concurrent
    /// callers apply defaults at most once.
    pub fn apply_defaults_if_no_delegate_present(&self) {
        {
            let mut state = self.state.lock();
            if state.delegate.is_some() || state.defaults_applied {
                return;
            }
            state.defaults_applied = true;
        }

        tracing::warn!(
            id = %self.id,
            "No settings delegate installed, applying default settings. \
             Install a settings delegate to supply settings externally."
        );

        self.write_defaults();
    }

    /// Read a thread priority key.
    ///
    /// Returns `None` when the key is unset or holds an unrecognized level.
    pub fn thread_priority(&self, key: &str) -> Option<ThreadPriority> {
        let value = self.get_string(key);
        if value.is_empty() {
            return None;
        }

        match value.parse() {
            Ok(priority) => Some(priority),
            Err(e) => {
                tracing::debug!(id = %self.id, key, error = %e, "Ignoring thread priority");
                None
            }
        }
    }

    fn write_defaults(&self) {
        for (key, priority) in keys::DEFAULTS {
            tracing::debug!(id = %self.id, key = *key, value = %priority, "Applying default");
            self.set_string(key, priority.as_str());
        }

        match &self.stack {
            Some(stack) => stack.apply_defaults(),
            None => stack::apply_defaults(),
        }
    }

    fn notify_setup(&self, delegate: Option<Arc<dyn SettingsDelegate>>) {
        match &self.stack {
            Some(stack) => stack.setup(delegate),
            None => stack::setup(delegate),
        }
    }

    /// Snapshot the delegate; the lock is released on return.
    fn delegate(&self) -> Option<Arc<dyn SettingsDelegate>> {
        self.state.lock().delegate.clone()
    }

    fn read<T: Default>(&self, read: impl FnOnce(&dyn SettingsDelegate) -> T) -> T {
        match self.delegate() {
            Some(delegate) => read(delegate.as_ref()),
            None => T::default(),
        }
    }

    fn write(&self, write: impl FnOnce(&dyn SettingsDelegate)) {
        if let Some(delegate) = self.delegate() {
            write(delegate.as_ref());
        }
    }
}

impl SettingsDelegate for SettingsFacade {
    fn get_string(&self, key: &str) -> String {
        self.read(|d| d.get_string(key))
    }

    fn get_int(&self, key: &str) -> i64 {
        self.read(|d| d.get_int(key))
    }

    fn get_uint(&self, key: &str) -> u64 {
        self.read(|d| d.get_uint(key))
    }

    fn get_bool(&self, key: &str) -> bool {
        self.read(|d| d.get_bool(key))
    }

    fn get_float(&self, key: &str) -> f32 {
        self.read(|d| d.get_float(key))
    }

    fn get_double(&self, key: &str) -> f64 {
        self.read(|d| d.get_double(key))
    }

    fn set_string(&self, key: &str, value: &str) {
        self.write(|d| d.set_string(key, value));
    }

    fn set_int(&self, key: &str, value: i64) {
        self.write(|d| d.set_int(key, value));
    }

    fn set_uint(&self, key: &str, value: u64) {
        self.write(|d| d.set_uint(key, value));
    }

    fn set_bool(&self, key: &str, value: bool) {
        self.write(|d| d.set_bool(key, value));
    }

    fn set_float(&self, key: &str, value: f32) {
        self.write(|d| d.set_float(key, value));
    }

    fn set_double(&self, key: &str, value: f64) {
        self.write(|d| d.set_double(key, value));
    }

    fn clear(&self, key: &str) {
        self.write(|d| d.clear(key));
    }
}

/// What the lower layer holds as its delegate.
///
/// Forwards to the facade through a `Weak`, so a lower layer keeping it does
/// not keep the facade alive. Once the facade is gone, reads yield zero values
/// and writes are dropped.
struct FacadeHandle(Weak<SettingsFacade>);

impl FacadeHandle {
    fn read<T: Default>(&self, read: impl FnOnce(&SettingsFacade) -> T) -> T {
        match self.0.upgrade() {
            Some(facade) => read(facade.as_ref()),
            None => T::default(),
        }
    }

    fn write(&self, write: impl FnOnce(&SettingsFacade)) {
        if let Some(facade) = self.0.upgrade() {
            write(facade.as_ref());
        }
    }
}

impl SettingsDelegate for FacadeHandle {
    fn get_string(&self, key: &str) -> String {
        self.read(|f| f.get_string(key))
    }

    fn get_int(&self, key: &str) -> i64 {
        self.read(|f| f.get_int(key))
    }

    fn get_uint(&self, key: &str) -> u64 {
        self.read(|f| f.get_uint(key))
    }

    fn get_bool(&self, key: &str) -> bool {
        self.read(|f| f.get_bool(key))
    }

    fn get_float(&self, key: &str) -> f32 {
        self.read(|f| f.get_float(key))
    }

    fn get_double(&self, key: &str) -> f64 {
        self.read(|f| f.get_double(key))
    }

    fn set_string(&self, key: &str, value: &str) {
        self.write(|f| f.set_string(key, value));
    }

    fn set_int(&self, key: &str, value: i64) {
        self.write(|f| f.set_int(key, value));
    }

    fn set_uint(&self, key: &str, value: u64) {
        self.write(|f| f.set_uint(key, value));
    }

    fn set_bool(&self, key: &str, value: bool) {
        self.write(|f| f.set_bool(key, value));
    }

    fn set_float(&self, key: &str, value: f32) {
        self.write(|f| f.set_float(key, value));
    }

    fn set_double(&self, key: &str, value: f64) {
        self.write(|f| f.set_double(key, value));
    }

    fn clear(&self, key: &str) {
        self.write(|f| f.clear(key));
    }
}

impl Drop for SettingsFacade {
    fn drop(&mut self) {
        tracing::debug!(id = %self.id, "Settings facade destroyed");
    }
}

// ============================================================================
// Process-wide singleton
// ============================================================================

struct Singleton {
    /// Owning reference, dropped by `release_singleton`
    owner: Mutex<Option<Arc<SettingsFacade>>>,

    /// What lookups hand out
    instance: Weak<SettingsFacade>,
}

static SINGLETON: OnceLock<Singleton> = OnceLock::new();

fn singleton_slot() -> &'static Singleton {
    SINGLETON.get_or_init(|| {
        let facade = SettingsFacade::create();
        Singleton {
            instance: Arc::downgrade(&facade),
            owner: Mutex::new(Some(facade)),
        }
    })
}

/// Drop the process-wide owning reference to the singleton.
///
/// The instance is destroyed once every external holder has dropped it; it is
/// never recreated afterwards. Does nothing if the singleton was never created.
pub fn release_singleton() {
    let Some(slot) = SINGLETON.get() else {
        return;
    };

    let released = slot.owner.lock().take();
    if let Some(facade) = released {
        tracing::debug!(id = %facade.id, "Settings singleton released");
    }
}
