//! LS-8 instruction-set simulator library.
//!
//! This crate implements an 8-bit machine with 256 bytes of memory and eight
//! byte registers:
//! 1. **Core:** Fetch/decode/execute engine, flags, stack and subroutine convention.
//! 2. **ALU:** Wrapping byte arithmetic, bitwise operations and comparison.
//! 3. **ISA:** Opcode encodings, the operand-arity rule and the dispatch table.
//! 4. **SoC:** Flat RAM and the console PRN writes to.
//! 5. **Simulation:** Program-image loader, configuration and statistics.

/// Common types and constants (registers, traps, errors).
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (state, ALU, execution).
pub mod core;
/// Instruction set (opcodes, decode, dispatch).
pub mod isa;
/// Program loader and simulator driver.
pub mod sim;
/// RAM and console.
pub mod soc;
/// Run statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type.
pub use crate::core::Cpu;
/// Simulator wrapping a CPU with statistics and tracing.
pub use crate::sim::Simulator;
