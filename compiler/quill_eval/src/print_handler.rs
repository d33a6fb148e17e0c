//! Destinations for `Print` output.
//!
//! - stdout for the command-line runner (default)
//! - an in-memory buffer for tests and embedding hosts
//! - silent, which drops every line
//!
//! Enum dispatch keeps the per-line path free of vtable calls.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes each line to the process stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Write `line` followed by a newline.
    ///
    /// A closed stdout is ignored; output is best-effort.
    pub fn print_line(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// Accumulates lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_line(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Everything printed so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return the captured output and empty the buffer.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

/// Output destination of an interpreter.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards output.
    Silent,
}

impl PrintHandlerImpl {
    pub fn print_line(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.print_line(line),
            Self::Buffer(h) => h.print_line(line),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Drain captured output; empty for handlers that do not capture.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Print handler shared between a host and its interpreters.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
