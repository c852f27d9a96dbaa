//! Process-wide typed settings for the communications stack.
//!
//! The stack reads and writes settings through one facade. The facade stores
//! nothing itself: the embedding application installs a `SettingsDelegate`
//! that owns the values, and the facade forwards to it. Until a delegate is
//! installed, reads return zero values and writes are dropped, so no caller
//! ever has to handle "settings unavailable".
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use stack_settings::{api, keys, MemoryDelegate, SettingsDelegate, SettingsFacade};
//!
//! let delegate = Arc::new(MemoryDelegate::new());
//! api::setup(Some(delegate.clone()));
//! api::apply_defaults();
//!
//! let facade = SettingsFacade::singleton().expect("singleton alive");
//! assert_eq!(facade.get_string(keys::CORE_THREAD_PRIORITY), "normal");
//! ```

pub mod api;
pub mod delegate;
pub mod error;
pub mod facade;
pub mod keys;
pub mod logging;
pub mod memory;
pub mod stack;

#[cfg(test)]
mod test_support;

pub use delegate::{SettingValue, SettingsDelegate};
pub use error::{Result, SettingsError};
pub use facade::{release_singleton, SettingsFacade};
pub use keys::ThreadPriority;
pub use memory::MemoryDelegate;
pub use stack::StackSettings;
