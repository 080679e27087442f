//! Trap and error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Traps:** Fatal run-time conditions raised while executing a program.
//! 2. **Load Errors:** Failures reading or parsing a program image.
//! 3. **Config Errors:** Failures deserializing or validating a configuration.
//! 4. **Simulation Errors:** A single umbrella type for the CLI boundary.
//!
//! None of these are recoverable within a run; a trap always stops the machine.

use std::io;
use std::path::PathBuf;

/// Fatal conditions raised by the execution engine.
///
/// A trap ends the current run and is latched by the CPU: every later step
/// returns the same trap. PC has already moved past a faulting instruction
/// whose handler raised the trap, but registers, SP, flags and memory hold
/// the values they had before that instruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Trap {
    /// The fetched opcode has no entry in the dispatch table.
    #[error("unknown opcode {opcode:#04x} at address {pc:#04x}")]
    UnknownOpcode {
        /// The raw opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: usize,
    },

    /// A memory access fell outside the address space.
    #[error("memory address {0:#x} out of bounds")]
    AddressOutOfBounds(usize),

    /// A register operand named a register that does not exist.
    #[error("register index {0} out of bounds")]
    RegisterOutOfBounds(usize),

    /// The ALU was asked to perform an operation it does not implement.
    #[error("unsupported ALU operation {0:#04x}")]
    UnsupportedOperation(u8),

    /// The console rejected a write.
    #[error("console write failed: {0}")]
    ConsoleFailure(String),
}

/// Failures while turning a program image into memory contents.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line did not hold a valid base-2 byte literal.
    #[error("line {line}: '{token}' is not an 8-bit binary literal")]
    Parse {
        /// 1-based line number in the image.
        line: usize,
        /// The offending token after comment stripping.
        token: String,
    },

    /// The image holds more bytes than memory has cells.
    #[error("program is {size} bytes but memory holds {capacity}")]
    TooLarge {
        /// Number of bytes in the image.
        size: usize,
        /// Number of cells in memory.
        capacity: usize,
    },
}

impl LoadError {
    /// Returns `true` if the image file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Failures while building a [`Config`](crate::config::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for the schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("could not read configuration: {0}")]
    Io(#[from] io::Error),

    /// A field holds a value the machine cannot honour.
    #[error("invalid configuration value for `{field}`: {reason}")]
    Invalid {
        /// Dotted name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Any error surfaced by a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Loading the program failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The machine trapped while running.
    #[error(transparent)]
    Trap(#[from] Trap),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
