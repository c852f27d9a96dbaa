//! Well-known setting keys and the built-in defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Priority of the stack's core processing thread.
pub const CORE_THREAD_PRIORITY: &str = "stack-core-thread-priority";

/// Priority of the stack's media processing thread.
pub const MEDIA_THREAD_PRIORITY: &str = "stack-media-thread-priority";

/// Values written when defaults are applied, in write order.
pub const DEFAULTS: &[(&str, ThreadPriority)] = &[
    (CORE_THREAD_PRIORITY, ThreadPriority::Normal),
    (MEDIA_THREAD_PRIORITY, ThreadPriority::RealTime),
];

/// Thread priority levels understood by the stack's thread-priority keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThreadPriority {
    Idle,
    Lowest,
    Low,
    Normal,
    High,
    Highest,
    RealTime,
}

impl ThreadPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadPriority::Idle => "idle",
            ThreadPriority::Lowest => "lowest",
            ThreadPriority::Low => "low",
            ThreadPriority::Normal => "normal",
            ThreadPriority::High => "high",
            ThreadPriority::Highest => "highest",
            ThreadPriority::RealTime => "real-time",
        }
    }
}

impl fmt::Display for ThreadPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThreadPriority {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "idle" => Ok(ThreadPriority::Idle),
            "lowest" => Ok(ThreadPriority::Lowest),
            "low" => Ok(ThreadPriority::Low),
            "normal" => Ok(ThreadPriority::Normal),
            "high" => Ok(ThreadPriority::High),
            "highest" => Ok(ThreadPriority::Highest),
            "real-time" => Ok(ThreadPriority::RealTime),
            other => Err(SettingsError::UnknownPriority(other.to_string())),
        }
    }
}
