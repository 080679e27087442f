//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight byte-wide
//! registers of the LS-8. It provides:
//! 1. **Storage:** Registers `R0`-`R7`, with `R7` reserved as the stack pointer.
//! 2. **Bounds Checking:** Out-of-range indices raise a trap instead of panicking.
//! 3. **Observability:** Hex dump of the register state for traces.

use std::fmt::Write as _;

use super::constants::{NUM_REGISTERS, SP};
use super::error::Trap;

/// The LS-8 register file.
///
/// Registers hold raw bytes. Arithmetic on them is performed by the ALU with
/// wrapping semantics, so the file itself never observes overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Creates a register file with the stack pointer set to `sp`.
    pub fn with_stack_pointer(sp: u8) -> Self {
        let mut regs = Self::new();
        regs.set_sp(sp);
        regs
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::RegisterOutOfBounds`] if `idx` is not in `0..8`.
    pub fn read(&self, idx: usize) -> Result<u8, Trap> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(Trap::RegisterOutOfBounds(idx))
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::RegisterOutOfBounds`] if `idx` is not in `0..8`.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), Trap> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(Trap::RegisterOutOfBounds(idx))?;
        *slot = val;
        Ok(())
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Overwrites the stack pointer (`R7`).
    #[inline]
    pub fn set_sp(&mut self, val: u8) {
        self.regs[SP] = val;
    }

    /// All registers in index order.
    pub fn as_slice(&self) -> &[u8] {
        &self.regs
    }

    /// Formats every register as ` XX` pairs, `R0` first.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(NUM_REGISTERS * 3);
        for val in self.regs {
            let _ = write!(out, " {val:02X}");
        }
        out
    }
}
