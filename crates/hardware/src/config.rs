//! Configuration system for the LS-8 simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine constants (memory size, initial stack pointer).
//! 2. **Structures:** `general` (tracing, statistics) and `machine` (memory, stack, console) sections.
//! 3. **Loading:** JSON deserialization from text or file, followed by validation.
//!
//! Every field is optional in JSON; missing fields take the values in [`defaults`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Number of memory cells (256 bytes).
    pub const MEMORY_SIZE: usize = constants::MEMORY_SIZE;

    /// Initial stack pointer value (`0xF4`).
    pub const STACK_POINTER: u8 = constants::SP_INIT;
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Tracing and reporting options.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Machine shape: memory, stack, console routing.
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that the configuration describes a machine that can exist.
    ///
    /// Memory must hold between 1 and 256 cells (addresses are a single byte)
    /// and the initial stack pointer may not exceed the memory size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.machine.memory_size;
        if size == 0 || size > defaults::MEMORY_SIZE {
            return Err(ConfigError::Invalid {
                field: "machine.memory_size",
                reason: format!("{size} is not in 1..={}", defaults::MEMORY_SIZE),
            });
        }
        if usize::from(self.machine.stack_pointer) > size {
            return Err(ConfigError::Invalid {
                field: "machine.stack_pointer",
                reason: format!(
                    "{:#04x} lies above the {size}-byte address space",
                    self.machine.stack_pointer
                ),
            });
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Write a trace line to stderr before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Print retired-instruction statistics when the machine halts.
    #[serde(default)]
    pub print_stats: bool,
}

/// Machine shape.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// Number of memory cells.
    #[serde(default = "MachineConfig::default_memory_size")]
    pub memory_size: usize,

    /// Value loaded into `R7` at reset.
    #[serde(default = "MachineConfig::default_stack_pointer")]
    pub stack_pointer: u8,

    /// When true, PRN output goes to stderr instead of stdout.
    #[serde(default)]
    pub console_to_stderr: bool,
}

impl MachineConfig {
    fn default_memory_size() -> usize {
        defaults::MEMORY_SIZE
    }

    fn default_stack_pointer() -> u8 {
        defaults::STACK_POINTER
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            memory_size: defaults::MEMORY_SIZE,
            stack_pointer: defaults::STACK_POINTER,
            console_to_stderr: false,
        }
    }
}
