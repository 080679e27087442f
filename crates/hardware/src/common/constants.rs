//! Machine-wide constants.
//!
//! This module collects the architectural constants of the LS-8. It defines:
//! 1. **Memory:** Size of the flat address space.
//! 2. **Registers:** Register count and the stack pointer convention.
//! 3. **Decode:** Bit layout used to derive operand counts from opcodes.
//! 4. **Flags:** Bit positions of the comparison flags.

/// Number of byte cells in the default address space.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Register reserved by convention as the stack pointer (`R7`).
pub const SP: usize = NUM_REGISTERS - 1;

/// Initial stack pointer value; the stack grows down from just below the top of memory.
pub const SP_INIT: u8 = 0xF4;

/// Shift that moves the operand-count field of an opcode into the low bits.
pub const ARITY_SHIFT: u32 = 6;

/// Maximum number of operand bytes any instruction carries.
pub const MAX_OPERANDS: usize = 2;

/// Less-than flag (`00000L00`).
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Greater-than flag (`000000G0`).
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Equal flag (`0000000E`).
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Prefix written at the start of every trace line.
pub const TRACE_PREFIX: &str = "TRACE:";
