//! Console implementations.
//!
//! Two sinks are provided:
//! 1. **`StdConsole`:** Writes each value as a decimal line to stdout (or stderr).
//! 2. **`CaptureConsole`:** Records values in a shared buffer for inspection after a run.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::rc::Rc;

use crate::soc::traits::Console;

/// Console attached to the host's standard output streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole {
    to_stderr: bool,
}

impl StdConsole {
    /// Creates a console writing to stdout, or to stderr when `to_stderr` is set.
    pub const fn new(to_stderr: bool) -> Self {
        Self { to_stderr }
    }
}

impl Console for StdConsole {
    fn emit(&mut self, value: u8) -> io::Result<()> {
        if self.to_stderr {
            writeln!(io::stderr().lock(), "{value}")
        } else {
            writeln!(io::stdout().lock(), "{value}")
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.to_stderr {
            io::stderr().flush()
        } else {
            io::stdout().flush()
        }
    }
}

/// Console that keeps every printed value in memory.
///
/// Cloning yields another handle onto the same buffer, so a caller can keep
/// one handle while the machine owns the other.
#[derive(Debug, Clone, Default)]
pub struct CaptureConsole {
    values: Rc<RefCell<Vec<u8>>>,
}

impl CaptureConsole {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values printed so far, in order.
    pub fn values(&self) -> Vec<u8> {
        self.values.borrow().clone()
    }

    /// Printed output exactly as [`StdConsole`] would have written it.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for value in self.values.borrow().iter() {
            let _ = writeln!(out, "{value}");
        }
        out
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

impl Console for CaptureConsole {
    fn emit(&mut self, value: u8) -> io::Result<()> {
        self.values.borrow_mut().push(value);
        Ok(())
    }
}
