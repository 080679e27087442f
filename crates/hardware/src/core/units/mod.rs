//! Functional units.

/// Arithmetic Logic Unit.
pub mod alu;
