//! Architectural state that is not general-purpose storage.
//!
//! The register file itself lives in [`crate::common::reg`]; this module holds
//! the comparison flags register.

/// Comparison flags (`FL`).
pub mod flags;

pub use flags::Flags;
