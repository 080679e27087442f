//! Instruction decoding.
//!
//! The operand count of every instruction is carried in the two high bits of
//! its opcode. [`arity`] is the one place that rule lives; the engine and the
//! PC advance both derive instruction length from it.

use crate::common::constants::{ARITY_SHIFT, MAX_OPERANDS};
use crate::common::error::Trap;
use crate::soc::memory::Ram;

/// Number of operand bytes following `opcode` (`opcode >> 6`).
///
/// The field is two bits wide, so the result is in `0..=3`; no defined
/// opcode uses 3.
#[inline]
pub const fn arity(opcode: u8) -> usize {
    (opcode >> ARITY_SHIFT) as usize
}

/// A fetched instruction: its opcode and exactly `arity(opcode)` operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The raw opcode byte.
    pub opcode: u8,
    operands: [u8; MAX_OPERANDS],
    count: usize,
}

impl Instruction {
    /// Builds an instruction from an opcode and the operand bytes that follow it.
    ///
    /// Extra bytes beyond the opcode's arity are ignored; missing ones read as 0.
    pub fn new(opcode: u8, operands: &[u8]) -> Self {
        let count = arity(opcode).min(MAX_OPERANDS);
        let mut buf = [0; MAX_OPERANDS];
        for (slot, byte) in buf.iter_mut().zip(operands.iter().take(count)) {
            *slot = *byte;
        }
        Self {
            opcode,
            operands: buf,
            count,
        }
    }

    /// The operands, `arity` bytes long.
    pub fn operands(&self) -> &[u8] {
        &self.operands[..self.count]
    }

    /// Operand `idx`; 0 if the instruction has fewer operands.
    #[inline]
    pub fn operand(&self, idx: usize) -> u8 {
        self.operands().get(idx).copied().unwrap_or(0)
    }

    /// Operand `idx` interpreted as a register index.
    #[inline]
    pub fn reg(&self, idx: usize) -> usize {
        usize::from(self.operand(idx))
    }

    /// Encoded length in bytes: opcode plus operands.
    #[inline]
    pub const fn len(&self) -> usize {
        1 + self.count
    }

    /// Always `false`; an instruction is at least its opcode.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Reads the operands of an already-fetched `opcode` located at `pc`.
///
/// # Errors
///
/// Returns [`Trap::AddressOutOfBounds`] if an operand lies past the end of memory.
pub fn fetch_operands(ram: &Ram, pc: usize, opcode: u8) -> Result<Instruction, Trap> {
    let count = arity(opcode).min(MAX_OPERANDS);
    let mut operands = [0; MAX_OPERANDS];
    for (i, slot) in operands.iter_mut().take(count).enumerate() {
        *slot = ram.read(pc + 1 + i)?;
    }
    Ok(Instruction::new(opcode, &operands))
}
