//! Command-line interface for the `dqk-log` binary.
//!
//! Every logger setting can come from a flag or from an environment
//! variable, so scripts can fix the level and label once and then call the
//! binary with just a message.

use clap::{Parser, ValueEnum};
use dqk_log::{ColorMode, Severity};

/// Command-line arguments for emitting log lines.
#[derive(Parser)]
#[clap(author, version, about = "Leveled, colorized console logger")]
pub struct Args {
    /// Least severe level that is still written
    /// (fatal, error, warning, info, debug).
    #[clap(short, long, env = "DQK_LOG_LEVEL", default_value = "debug")]
    pub level: Severity,

    /// Label printed in front of every message.
    #[clap(short = 'L', long, env = "DQK_LOG_LABEL")]
    pub label: Option<String>,

    /// When to color tags: auto, always or never.
    #[clap(short, long, env = "DQK_LOG_COLOR", default_value = "auto")]
    pub color: ColorMode,

    /// Severity the messages are emitted at. Fatal exits with status 1.
    #[clap(short, long, default_value = "info")]
    pub severity: Severity,

    /// Which entry points carry the messages.
    #[clap(short, long, value_enum, default_value = "emit")]
    pub form: Form,

    /// Leave out the date and time.
    #[clap(long)]
    pub no_timestamp: bool,

    /// Report the outcome of an operation with this description.
    #[clap(long)]
    pub check: Option<String>,

    /// Error text for --check; without it the operation succeeded.
    #[clap(long, requires = "check")]
    pub error: Option<String>,

    /// Treat a --check error as fatal.
    #[clap(long, requires = "check")]
    pub must: bool,

    /// Messages to write, one line each.
    pub messages: Vec<String>,
}

/// Entry points a message can be written through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Form {
    /// `Logger::emit` on the default logger.
    Emit,
    /// The per-severity methods of the default logger (`fatal`, `error`, ...).
    Method,
    /// The value-list free functions (`fatal`, `error_`, ...).
    Values,
    /// The template macros (`fatalf!`, `errorf!`, ...).
    Template,
}
