//! Opcode dispatch table.
//!
//! Maps every opcode byte to the handler that executes it. The table is built
//! once when a machine is constructed and never changes afterwards; the run
//! loop performs a single indexed lookup per instruction.

use std::fmt;

use super::opcodes as op;
use crate::common::error::Trap;

/// Predicate a conditional jump tests against the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Equal flag set.
    Equal,
    /// Equal flag clear.
    NotEqual,
    /// Greater-than flag set.
    Greater,
    /// Less-than flag set.
    Less,
    /// Less-than or equal flag set.
    LessOrEqual,
    /// Greater-than or equal flag set.
    GreaterOrEqual,
}

/// Handler selected for an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Stop the machine.
    Halt,
    /// Load an immediate into a register.
    LoadImmediate,
    /// Print a register.
    Print,
    /// Two-register ALU operation; the ALU decodes which one from the opcode.
    Alu,
    /// Push a register.
    Push,
    /// Pop into a register.
    Pop,
    /// Call a subroutine.
    Call,
    /// Return from a subroutine.
    Return,
    /// Unconditional jump.
    Jump,
    /// Conditional jump.
    JumpIf(Condition),
}

/// Opcode assignments of the standard instruction set.
const STANDARD: &[(u8, Op)] = &[
    (op::HLT, Op::Halt),
    (op::LDI, Op::LoadImmediate),
    (op::PRN, Op::Print),
    (op::ADD, Op::Alu),
    (op::SUB, Op::Alu),
    (op::MUL, Op::Alu),
    (op::CMP, Op::Alu),
    (op::AND, Op::Alu),
    (op::OR, Op::Alu),
    (op::XOR, Op::Alu),
    (op::PUSH, Op::Push),
    (op::POP, Op::Pop),
    (op::CALL, Op::Call),
    (op::RET, Op::Return),
    (op::JMP, Op::Jump),
    (op::JEQ, Op::JumpIf(Condition::Equal)),
    (op::JNE, Op::JumpIf(Condition::NotEqual)),
    (op::JGT, Op::JumpIf(Condition::Greater)),
    (op::JLT, Op::JumpIf(Condition::Less)),
    (op::JLE, Op::JumpIf(Condition::LessOrEqual)),
    (op::JGE, Op::JumpIf(Condition::GreaterOrEqual)),
];

/// Immutable opcode-to-handler mapping.
#[derive(Clone, PartialEq, Eq)]
pub struct DispatchTable {
    entries: [Option<Op>; 256],
}

impl DispatchTable {
    /// Builds a table from explicit `(opcode, handler)` pairs.
    ///
    /// Later pairs win if an opcode is listed twice.
    pub fn from_entries(pairs: &[(u8, Op)]) -> Self {
        let mut entries = [None; 256];
        for &(opcode, handler) in pairs {
            entries[usize::from(opcode)] = Some(handler);
        }
        Self { entries }
    }

    /// The standard LS-8 instruction set.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD)
    }

    /// Handler for `opcode`, if one is registered.
    #[inline]
    pub fn lookup(&self, opcode: u8) -> Option<Op> {
        self.entries[usize::from(opcode)]
    }

    /// Handler for `opcode` fetched from `pc`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::UnknownOpcode`] if no handler is registered.
    #[inline]
    pub fn resolve(&self, opcode: u8, pc: usize) -> Result<Op, Trap> {
        self.lookup(opcode)
            .ok_or(Trap::UnknownOpcode { opcode, pc })
    }

    /// Number of registered opcodes.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether no opcode is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered `(opcode, handler)` pairs in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Op)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(opcode, entry)| entry.map(|h| (opcode as u8, h)))
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(opcode, h)| (format!("{opcode:#04x}"), h)))
            .finish()
    }
}
