//! The process-wide default logger and the free functions forwarding to it.
//!
//! The default is created on first use (or by [`Builder::try_init`]) and
//! lives until the process exits.
//!
//! [`Builder::try_init`]: crate::Builder::try_init
use std::{fmt, sync::OnceLock};

use thiserror::Error;

use crate::{logger::Logger, severity::Severity};

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Returned by [`Builder::try_init`](crate::Builder::try_init) when the
/// default logger already exists.
#[derive(Debug, Error)]
#[error("the default logger has already been initialized")]
pub struct InitError;

/// The process-wide default logger.
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

pub(crate) fn set_default(logger: Logger) -> Result<(), InitError> {
    DEFAULT.set(logger).map_err(|_| InitError)
}

/// Sets the threshold of the default logger.
pub fn set_log_level(severity: Severity) {
    default_logger().set_threshold(severity);
}

/// Sets the label of the default logger. An empty string clears it.
pub fn set_log_label(label: impl Into<String>) {
    default_logger().set_label(label);
}

/// Writes `values` at Fatal and exits with status 1.
#[track_caller]
pub fn fatal(values: &[&dyn fmt::Display]) -> ! {
    default_logger().fatal_values(values)
}

/// Template form of [`fatal`].
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf(args)
}

/// Writes `values` at Error.
#[track_caller]
pub fn error_(values: &[&dyn fmt::Display]) {
    default_logger().emit_values(Severity::Error, values);
}

/// Template form of [`error_`].
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

/// Writes `values` at Warning.
#[track_caller]
pub fn warn(values: &[&dyn fmt::Display]) {
    default_logger().emit_values(Severity::Warning, values);
}

/// Template form of [`warn`].
#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

/// Writes `values` at Info.
#[track_caller]
pub fn info(values: &[&dyn fmt::Display]) {
    default_logger().emit_values(Severity::Info, values);
}

/// Template form of [`info`].
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

/// Writes `values` at Debug.
#[track_caller]
pub fn debug(values: &[&dyn fmt::Display]) {
    default_logger().emit_values(Severity::Debug, values);
}

/// Template form of [`debug`].
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

/// See [`Logger::check`].
#[track_caller]
pub fn check<T, E: fmt::Display>(description: &str, outcome: &Result<T, E>) {
    default_logger().check(description, outcome);
}

/// See [`Logger::must`].
#[track_caller]
pub fn must<T, E: fmt::Display>(description: &str, outcome: &Result<T, E>) {
    default_logger().must(description, outcome);
}
