//! LS-8 opcode encodings.
//!
//! Opcodes follow the `AABCDDDD` layout:
//! - `AA`: number of operand bytes that follow (0-2).
//! - `B`: 1 if the ALU performs the operation.
//! - `C`: 1 if the instruction sets PC directly.
//! - `DDDD`: instruction identifier within its group.

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;
/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;
/// Print a register in decimal.
pub const PRN: u8 = 0b0100_0111;

/// `regA = regA + regB`.
pub const ADD: u8 = 0b1010_0000;
/// `regA = regA - regB`.
pub const SUB: u8 = 0b1010_0001;
/// `regA = regA * regB`.
pub const MUL: u8 = 0b1010_0010;
/// Compare `regA` with `regB`, updating the flags.
pub const CMP: u8 = 0b1010_0111;
/// `regA = regA & regB`.
pub const AND: u8 = 0b1010_1000;
/// `regA = regA | regB`.
pub const OR: u8 = 0b1010_1010;
/// `regA = regA ^ regB`.
pub const XOR: u8 = 0b1010_1011;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;
/// Return from a subroutine.
pub const RET: u8 = 0b0001_0001;
/// Jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;
/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;
/// Jump if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;
/// Jump if the greater-than flag is set.
pub const JGT: u8 = 0b0101_0111;
/// Jump if the less-than flag is set.
pub const JLT: u8 = 0b0101_1000;
/// Jump if the less-than or equal flag is set.
pub const JLE: u8 = 0b0101_1001;
/// Jump if the greater-than or equal flag is set.
pub const JGE: u8 = 0b0101_1010;

/// Mnemonic for an opcode, or `None` if the opcode is not part of the instruction set.
pub const fn mnemonic(opcode: u8) -> Option<&'static str> {
    Some(match opcode {
        HLT => "HLT",
        LDI => "LDI",
        PRN => "PRN",
        ADD => "ADD",
        SUB => "SUB",
        MUL => "MUL",
        CMP => "CMP",
        AND => "AND",
        OR => "OR",
        XOR => "XOR",
        PUSH => "PUSH",
        POP => "POP",
        CALL => "CALL",
        RET => "RET",
        JMP => "JMP",
        JEQ => "JEQ",
        JNE => "JNE",
        JGT => "JGT",
        JLT => "JLT",
        JLE => "JLE",
        JGE => "JGE",
        _ => return None,
    })
}
