//! Leveled, colorized line logger.
//!
//! A [`Logger`] owns a severity threshold, an optional label and a
//! destination. Every emitted message becomes exactly one line of the form
//!
//! ```text
//! 2026/10/19 08:30:00 main.rs:42: [INFO] |worker-1| started
//! ```
//!
//! where the timestamp, call site and label segments are each optional.
//! Fatal messages terminate the process with status 1 once written.
use std::{
    ffi::OsStr,
    fmt::{self, Write as _},
    io::{self, IsTerminal, Write as _},
    panic::Location,
    path::Path,
    process,
    str::FromStr,
    sync::{
        atomic::{AtomicU8, Ordering},
        Mutex, PoisonError, RwLock,
    },
};

use chrono::Local;
use thiserror::Error;

use crate::severity::Severity;

const COLOR_END: &str = "\x1b[0m";
const LABEL_COLOR: &str = "\x1b[1;37;44m";
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Where formatted lines are written.
pub enum Target {
    Stdout,
    Stderr,
    /// Any writer, e.g. a file or an in-memory buffer. Never colored in
    /// [`ColorMode::Auto`].
    Pipe(Box<dyn io::Write + Send>),
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Stdout => f.write_str("Stdout"),
            Target::Stderr => f.write_str("Stderr"),
            Target::Pipe(_) => f.write_str("Pipe(..)"),
        }
    }
}

/// Whether severity tags and labels get ANSI colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Returned when a string does not name a [`ColorMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color mode `{0}`, expected one of: auto, always, never")]
pub struct ParseColorModeError(pub String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ParseColorModeError(s.to_owned())),
        }
    }
}

/// Configures and constructs a [`Logger`].
///
/// ```no_run
/// use dqk_log::{Builder, ColorMode, Severity};
///
/// let logger = Builder::new()
///     .threshold(Severity::Warning)
///     .label("worker-1")
///     .color(ColorMode::Never)
///     .build();
/// logger.warn("queue is filling up");
/// ```
#[derive(Debug)]
pub struct Builder {
    threshold: Severity,
    label: Option<String>,
    target: Target,
    color: ColorMode,
    timestamp: bool,
    location: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            threshold: Severity::Debug,
            label: None,
            target: Target::Stdout,
            color: ColorMode::Auto,
            timestamp: true,
            location: true,
        }
    }
}

impl Builder {
    /// Builder for a stdout logger at threshold Debug, no label, auto colors,
    /// with timestamp and call site.
    pub fn new() -> Self {
        Self::default()
    }

    /// Least severe level that is still written.
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Label injected into every line. An empty label means none.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = non_empty(label.into());
        self
    }

    /// Destination for formatted lines.
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// When to color the severity tag and label.
    pub fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Prefix lines with the local date and time.
    pub fn timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    /// Prefix lines with the `file:line` of the call site.
    pub fn location(mut self, enabled: bool) -> Self {
        self.location = enabled;
        self
    }

    /// Builds an independent logger. [`ColorMode::Auto`] is resolved here.
    pub fn build(self) -> Logger {
        let color = match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => match self.target {
                Target::Stdout => io::stdout().is_terminal(),
                Target::Stderr => io::stderr().is_terminal(),
                Target::Pipe(_) => false,
            },
        };
        let out: Box<dyn io::Write + Send> = match self.target {
            Target::Stdout => Box::new(io::stdout()),
            Target::Stderr => Box::new(io::stderr()),
            Target::Pipe(writer) => writer,
        };

        Logger {
            threshold: AtomicU8::new(self.threshold as u8),
            label: RwLock::new(self.label),
            out: Mutex::new(out),
            color,
            timestamp: self.timestamp,
            location: self.location,
        }
    }

    /// Installs the built logger as the process-wide default.
    ///
    /// # Errors
    ///
    /// Fails if the default logger was already created, either by an earlier
    /// call or by a log call that used the default before this one.
    pub fn try_init(self) -> Result<(), crate::InitError> {
        crate::global::set_default(self.build())
    }
}

/// A leveled logger writing one line per message.
///
/// Loggers are independent: setting the threshold or label on one never
/// affects another, including the process-wide default returned by
/// [`default_logger`](crate::default_logger).
pub struct Logger {
    threshold: AtomicU8,
    label: RwLock<Option<String>>,
    out: Mutex<Box<dyn io::Write + Send>>,
    color: bool,
    timestamp: bool,
    location: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("label", &self.label())
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger writing to stdout with threshold Debug and no label.
    pub fn new() -> Self {
        Builder::new().build()
    }

    /// Same as [`Builder::new`].
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Current threshold.
    pub fn threshold(&self) -> Severity {
        Severity::from_u8(self.threshold.load(Ordering::Acquire))
    }

    /// Replaces the threshold; the next emit reads the new value.
    pub fn set_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold as u8, Ordering::Release);
    }

    /// Current label, `None` when unset or cleared.
    pub fn label(&self) -> Option<String> {
        self.label
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the label. An empty string clears it.
    pub fn set_label(&self, label: impl Into<String>) {
        *self.label.write().unwrap_or_else(PoisonError::into_inner) = non_empty(label.into());
    }

    /// Whether a message of `severity` would be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity <= self.threshold()
    }

    /// Writes `message` at `severity`, exiting with status 1 if it is Fatal.
    #[track_caller]
    pub fn emit(&self, severity: Severity, message: &str) {
        self.emit_fmt(severity, format_args!("{message}"));
    }

    /// Template form of [`emit`](Self::emit), taking `format_args!` output.
    #[track_caller]
    pub fn emit_fmt(&self, severity: Severity, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.record(severity, Some((caller.file(), caller.line())), args);
        if severity == Severity::Fatal {
            terminate();
        }
    }

    /// Value-list form: the values are rendered and joined with spaces.
    #[track_caller]
    pub fn emit_values(&self, severity: Severity, values: &[&dyn fmt::Display]) {
        self.emit_fmt(severity, format_args!("{}", Joined(values)));
    }

    /// Writes `message` at Fatal and exits with status 1.
    #[track_caller]
    pub fn fatal(&self, message: &str) -> ! {
        self.fatalf(format_args!("{message}"))
    }

    /// Template form of [`fatal`](Self::fatal).
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let caller = Location::caller();
        self.record(Severity::Fatal, Some((caller.file(), caller.line())), args);
        terminate()
    }

    #[track_caller]
    pub(crate) fn fatal_values(&self, values: &[&dyn fmt::Display]) -> ! {
        self.fatalf(format_args!("{}", Joined(values)))
    }

    #[track_caller]
    pub fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Error, args);
    }

    #[track_caller]
    pub fn warn(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Warning, args);
    }

    #[track_caller]
    pub fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Info, args);
    }

    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Debug, args);
    }

    /// Reports the outcome of an operation.
    ///
    /// `Ok` is logged at Info as `"<description> ok"`, `Err(e)` at Warning
    /// as `"<description><e>"`. An error never terminates the process; use
    /// [`must`](Self::must) for that.
    #[track_caller]
    pub fn check<T, E: fmt::Display>(&self, description: &str, outcome: &Result<T, E>) {
        match outcome {
            Ok(_) => self.emit_fmt(Severity::Info, format_args!("{description} ok")),
            Err(err) => self.emit_fmt(Severity::Warning, format_args!("{description}{err}")),
        }
    }

    /// Like [`check`](Self::check), but an error is Fatal and exits with
    /// status 1.
    #[track_caller]
    pub fn must<T, E: fmt::Display>(&self, description: &str, outcome: &Result<T, E>) {
        match outcome {
            Ok(_) => self.emit_fmt(Severity::Info, format_args!("{description} ok")),
            Err(err) => self.fatalf(format_args!("{description} {err}")),
        }
    }

    /// Filters, formats and writes one line. Never exits.
    pub(crate) fn record(
        &self,
        severity: Severity,
        site: Option<(&str, u32)>,
        args: fmt::Arguments<'_>,
    ) {
        if !self.enabled(severity) {
            return;
        }
        let line = self.compose(severity, site, args);

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // write failures are not the caller's problem
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    pub(crate) fn flush(&self) {
        let _ = self
            .out
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush();
    }

    fn compose(
        &self,
        severity: Severity,
        site: Option<(&str, u32)>,
        args: fmt::Arguments<'_>,
    ) -> String {
        let mut line = String::with_capacity(64);

        if self.timestamp {
            let _ = write!(line, "{} ", Local::now().format(TIMESTAMP_FORMAT));
        }
        if let Some((file, no)) = site.filter(|_| self.location) {
            let _ = write!(line, "{}:{}: ", short_file(file), no);
        }

        if self.color {
            let _ = write!(line, "[{}{}{}] ", severity.color(), severity, COLOR_END);
        } else {
            let _ = write!(line, "[{}] ", severity);
        }

        if let Some(label) = self
            .label
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_deref()
        {
            if self.color {
                let _ = write!(line, "{LABEL_COLOR}|{label}|{COLOR_END} ");
            } else {
                let _ = write!(line, "|{label}| ");
            }
        }

        let _ = line.write_fmt(args);
        line.push('\n');
        line
    }
}

/// The single exit point for Fatal messages.
fn terminate() -> ! {
    process::exit(1)
}

fn non_empty(label: String) -> Option<String> {
    (!label.is_empty()).then_some(label)
}

fn short_file(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or(file)
}

struct Joined<'a>(&'a [&'a dyn fmt::Display]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
