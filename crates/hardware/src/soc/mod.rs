//! Machine components outside the CPU.
//!
//! This module organizes the pieces the CPU is wired to: the flat RAM and the
//! console device that receives program output.

/// Console implementations.
pub mod devices;

/// Flat byte-addressable RAM.
pub mod memory;

/// Console trait definition.
pub mod traits;

pub use devices::{CaptureConsole, StdConsole};
pub use memory::Ram;
pub use traits::Console;
