//! Routes records from the `log` facade through a [`Logger`].
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::{global::default_logger, logger::Logger};

/// Registers the default logger as the `log` facade backend.
///
/// After this, `log::info!` and friends (including those in dependencies)
/// are filtered and formatted like direct calls.
///
/// The facade's max level is opened all the way; the logger threshold is
/// the only filter, so later threshold changes apply to facade records too.
///
/// # Errors
///
/// Fails if another `log` backend has already been installed.
pub fn install() -> Result<(), SetLoggerError> {
    log::set_logger(default_logger())?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    // `log` has no fatal level, so this never exits.
    fn log(&self, record: &Record<'_>) {
        let site = record.file().zip(record.line());
        self.record(record.level().into(), site, *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}
