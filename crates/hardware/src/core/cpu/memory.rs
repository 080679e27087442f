//! Stack access.
//!
//! The stack is not a separate structure: it is the region of RAM below the
//! initial stack pointer, growing downward. The stack pointer wraps like any
//! other byte register, and nothing separates stack from program data.

use super::Cpu;
use crate::common::error::Trap;

impl Cpu {
    /// Stores `val` in the cell below SP, then decrements SP to point at it.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfBounds`] if the new top of stack lies past
    /// the end of memory; SP is left unchanged in that case.
    pub fn push_byte(&mut self, val: u8) -> Result<(), Trap> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.ram.write(usize::from(sp), val)?;
        self.regs.set_sp(sp);
        Ok(())
    }

    /// Loads the top of stack, then increments SP.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfBounds`] if SP points past the end of
    /// memory; SP is left unchanged in that case.
    pub fn pop_byte(&mut self) -> Result<u8, Trap> {
        let sp = self.regs.sp();
        let val = self.ram.read(usize::from(sp))?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(val)
    }
}
