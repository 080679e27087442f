//! Common types and constants shared across the simulator.
//!
//! This module provides the building blocks every other component uses:
//! 1. **Constants:** Memory size, register count, opcode bit layout, flag bits.
//! 2. **Error Handling:** Traps, load errors, and configuration errors.
//! 3. **Register Management:** The eight-register file with the stack pointer convention.

/// Architectural constants.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP, SP_INIT};
pub use error::{ConfigError, LoadError, SimError, Trap};
pub use reg::RegisterFile;
