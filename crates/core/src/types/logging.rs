//! Revision log routing options

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum level of entries shipped to the log group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    #[default]
    LevelUnspecified,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::LevelUnspecified,
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Numeric code used by the logging API
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a level by numeric code
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Wire name of the level
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::LevelUnspecified => "LEVEL_UNSPECIFIED",
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Look up a level by wire name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.name() == name)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where revision logs are shipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogDestination {
    LogGroupId(String),
    FolderId(String),
}

/// Log options attached to a revision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogOptions {
    pub disabled: bool,
    #[serde(flatten)]
    pub destination: Option<LogDestination>,
    pub min_level: LogLevel,
}
