//! Console trait for program output.
//!
//! PRN is the only instruction with an externally visible effect. Its output
//! goes through this trait so that the CLI can route it to a terminal while
//! tests and embedders capture it in memory.

use std::fmt::Debug;
use std::io;

/// Line-oriented sink receiving the values printed by the running program.
pub trait Console: Debug {
    /// Emits one printed value. Implementations write it as a decimal line.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying writer.
    fn emit(&mut self, value: u8) -> io::Result<()>;

    /// Flushes buffered output. The default does nothing.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying writer.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
