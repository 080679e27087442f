//! Output devices.
//!
//! The LS-8 has a single device: the console that PRN writes to.

/// Stdout/stderr and in-memory console sinks.
pub mod console;

pub use console::{CaptureConsole, StdConsole};
