//! Severity levels understood by the logger.

use std::{fmt, str::FromStr};

use log::{Level, LevelFilter};
use thiserror::Error;

/// How severe a message is.
///
/// Variants are declared from most to least severe, so the derived ordering
/// compares ordinals: `Fatal < Error < Warning < Info < Debug`. A message is
/// written when its severity is less than or equal to the logger threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Fatal = 0,
    Error,
    Warning,
    Info,
    #[default]
    Debug,
}

impl Severity {
    /// Every severity, most severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
    ];

    /// Upper-case tag printed between the brackets of every line.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// ANSI style applied to the tag when colors are enabled.
    pub(crate) fn color(self) -> &'static str {
        match self {
            Severity::Fatal => "\x1b[1;37;41m",
            Severity::Error => "\x1b[1;37;45m",
            Severity::Warning => "\x1b[1;37;43m",
            Severity::Info => "\x1b[1;37;42m",
            Severity::Debug => "\x1b[1;36m",
        }
    }

    // Ordinals past the end saturate to the most permissive level.
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::Fatal,
            1 => Severity::Error,
            2 => Severity::Warning,
            3 => Severity::Info,
            _ => Severity::Debug,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a severity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity `{0}`, expected one of: fatal, error, warning, info, debug")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fatal" => Ok(Severity::Fatal),
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(ParseSeverityError(s.to_owned())),
        }
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warning,
            Level::Info => Severity::Info,
            Level::Debug | Level::Trace => Severity::Debug,
        }
    }
}

impl From<Severity> for LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Fatal | Severity::Error => LevelFilter::Error,
            Severity::Warning => LevelFilter::Warn,
            Severity::Info => LevelFilter::Info,
            // trace records map onto Debug, so let them through the facade
            Severity::Debug => LevelFilter::Trace,
        }
    }
}
