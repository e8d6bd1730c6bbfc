//! Leveled console logging with colored severity tags.
//!
//! Use the free functions for the process-wide default logger, or build
//! independent [`Logger`]s with [`Builder`].
//!
//! ```no_run
//! use dqk_log::{infof, Severity};
//!
//! dqk_log::set_log_level(Severity::Info);
//! dqk_log::set_log_label("worker-1");
//!
//! dqk_log::info(&[&"listening on port", &8080]);
//! infof!("{} jobs queued", 3);
//! dqk_log::check("db connect", &Ok::<(), std::io::Error>(()));
//! ```

mod bridge;
mod global;
mod logger;
mod macros;
mod severity;

pub use bridge::install;
pub use global::{
    check, debug, debugf, default_logger, error_, errorf, fatal, fatalf, info, infof, must,
    set_log_label, set_log_level, warn, warnf, InitError,
};
pub use logger::{Builder, ColorMode, Logger, ParseColorModeError, Target};
pub use severity::{ParseSeverityError, Severity};

#[cfg(test)]
mod tests;
