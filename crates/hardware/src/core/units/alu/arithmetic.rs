//! ALU arithmetic operations.
//!
//! Addition, subtraction and multiplication on unsigned bytes. Results wrap
//! modulo 256, matching fixed-width register semantics.

use super::AluOp;

/// Executes an arithmetic operation.
///
/// Returns `None` for non-arithmetic operations.
pub const fn execute(op: AluOp, a: u8, b: u8) -> Option<u8> {
    match op {
        AluOp::Add => Some(a.wrapping_add(b)),
        AluOp::Sub => Some(a.wrapping_sub(b)),
        AluOp::Mul => Some(a.wrapping_mul(b)),
        _ => None,
    }
}
