//! ALU bitwise operations.

use super::AluOp;

/// Executes a bitwise operation.
///
/// Returns `None` for non-bitwise operations.
pub const fn execute(op: AluOp, a: u8, b: u8) -> Option<u8> {
    match op {
        AluOp::And => Some(a & b),
        AluOp::Or => Some(a | b),
        AluOp::Xor => Some(a ^ b),
        _ => None,
    }
}
