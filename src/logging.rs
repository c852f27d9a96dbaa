//! Logging setup for hosts that do not install their own subscriber.

use tracing_subscriber::EnvFilter;

use crate::error::{Result, SettingsError};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "stack_settings=info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| SettingsError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Either this call or an earlier one installed the subscriber
        let _ = init();
        let err = init().unwrap_err();
        assert!(matches!(err, SettingsError::Logging(_)));
    }
}
