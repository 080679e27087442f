//! CPU core: architectural state, functional units and the execution engine.

/// Flags register.
pub mod arch;

/// CPU state and the fetch/decode/execute loop.
pub mod cpu;

/// Functional units (ALU).
pub mod units;

pub use cpu::{Cpu, RunState, StepOutcome};
