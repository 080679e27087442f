//! Program loading and run driving.
//!
//! Provides the program-image loader and the `Simulator` that wraps a CPU
//! with statistics and tracing.

/// Program-image parsing.
pub mod loader;

/// Run driver with statistics and tracing.
pub mod simulator;

pub use simulator::Simulator;
