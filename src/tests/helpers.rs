use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use crate::{Builder, ColorMode, Logger, Severity, Target};

/// In-memory destination shared between a logger and the test reading it.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Destination that rejects every write.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

/// Uncolored builder without timestamp or call site, writing into `buf`.
pub fn plain_builder(buf: &SharedBuf) -> Builder {
    Builder::new()
        .target(Target::Pipe(Box::new(buf.clone())))
        .color(ColorMode::Never)
        .timestamp(false)
        .location(false)
}

pub fn capture(threshold: Severity) -> (Logger, SharedBuf) {
    let buf = SharedBuf::default();
    let logger = plain_builder(&buf).threshold(threshold).build();
    (logger, buf)
}
