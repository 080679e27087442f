//! Comparison flags register.
//!
//! The `FL` register holds the outcome of the most recent `CMP` in the
//! `00000LGE` layout. After a comparison exactly one of the three bits is
//! set; before the first comparison the register is zero.

use std::fmt;

use crate::common::constants::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};
use crate::isa::dispatch::Condition;

/// The `FL` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    /// Flags describing `a < b`.
    pub const LESS: Self = Self(FLAG_LESS);
    /// Flags describing `a > b`.
    pub const GREATER: Self = Self(FLAG_GREATER);
    /// Flags describing `a == b`.
    pub const EQUAL: Self = Self(FLAG_EQUAL);

    /// Flags from raw bits; bits outside `00000LGE` are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & (FLAG_LESS | FLAG_GREATER | FLAG_EQUAL))
    }

    /// Raw register value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Three-way comparison of two unsigned bytes.
    pub const fn compare(a: u8, b: u8) -> Self {
        if a > b {
            Self::GREATER
        } else if a == b {
            Self::EQUAL
        } else {
            Self::LESS
        }
    }

    /// `L` bit.
    #[inline]
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }

    /// `G` bit.
    #[inline]
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }

    /// `E` bit.
    #[inline]
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Whether a conditional jump on `cond` is taken with these flags.
    pub const fn satisfies(self, cond: Condition) -> bool {
        match cond {
            Condition::Equal => self.equal(),
            Condition::NotEqual => !self.equal(),
            Condition::Greater => self.greater(),
            Condition::Less => self.less(),
            Condition::LessOrEqual => self.less() || self.equal(),
            Condition::GreaterOrEqual => self.greater() || self.equal(),
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
