//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains the LS-8 opcode encodings and everything derived from them:
//!
//! * `opcodes`: numeric encodings and mnemonics.
//! * `decode`: the operand-arity rule and instruction fetch.
//! * `dispatch`: the immutable opcode-to-handler table.

/// Instruction decoding and the operand-arity rule.
pub mod decode;

/// Opcode-to-handler dispatch table.
pub mod dispatch;

/// Opcode encodings.
pub mod opcodes;

pub use decode::{Instruction, arity};
pub use dispatch::{Condition, DispatchTable, Op};
