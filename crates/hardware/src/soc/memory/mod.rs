//! Main Memory.
//!
//! This module implements the flat byte-addressable RAM of the LS-8. It provides:
//! 1. **Storage:** A zero-filled byte array fixed in size at construction.
//! 2. **Access:** Bounds-checked single-byte reads and writes.
//! 3. **Loading:** Bulk placement of a program image starting at address 0.
//!
//! There is no alignment, no word size beyond one byte, and no protection:
//! the stack and program data share this one address space.

use crate::common::error::Trap;

/// Flat byte-addressable memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ram {
    cells: Box<[u8]>,
}

impl Ram {
    /// Allocates `size` zeroed cells.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size].into_boxed_slice(),
        }
    }

    /// Number of addressable cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfBounds`] if `addr` is not below [`Ram::size`].
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, Trap> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(Trap::AddressOutOfBounds(addr))
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfBounds`] if `addr` is not below [`Ram::size`].
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Trap> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(Trap::AddressOutOfBounds(addr))?;
        *cell = val;
        Ok(())
    }

    /// Non-faulting read used by diagnostics; `None` past the end of memory.
    #[inline]
    pub fn peek(&self, addr: usize) -> Option<u8> {
        self.cells.get(addr).copied()
    }

    /// Copies `image` into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfBounds`] carrying the first address that
    /// does not fit if the image is larger than memory. Memory is untouched
    /// in that case.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), Trap> {
        if image.len() > self.cells.len() {
            return Err(Trap::AddressOutOfBounds(self.cells.len()));
        }
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Read-only view of every cell.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
