//! Simulator: owns the CPU together with statistics and the trace channel.
//!
//! The CPU knows nothing about reporting; the simulator drives it one
//! instruction at a time so it can trace before and count after each step.

use std::path::Path;

use crate::common::error::{LoadError, Trap};
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::soc::traits::Console;
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// Machine state.
    pub cpu: Cpu,
    /// Statistics for the current run.
    pub stats: SimStats,
    /// Write a trace line to stderr before every instruction.
    pub trace: bool,
}

impl Simulator {
    /// Creates a simulator printing to the configured standard stream.
    pub fn new(config: &Config) -> Self {
        Self::from_cpu(Cpu::new(config), config)
    }

    /// Creates a simulator printing to `console`.
    pub fn with_console(config: &Config, console: Box<dyn Console>) -> Self {
        Self::from_cpu(Cpu::with_console(config, console), config)
    }

    fn from_cpu(cpu: Cpu, config: &Config) -> Self {
        Self {
            cpu,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Places a program image in memory.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image does not fit in memory.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let capacity = self.cpu.ram.size();
        self.cpu.load(image).map_err(|_| LoadError::TooLarge {
            size: image.len(),
            capacity,
        })
    }

    /// Reads a program image file and places it in memory.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`] from reading, parsing or placing the image.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let image = loader::load_program(path)?;
        self.load_image(&image)
    }

    /// Executes one instruction, tracing and counting it.
    ///
    /// Returns `Ok(false)` once the machine has halted.
    ///
    /// # Errors
    ///
    /// The [`Trap`] raised by the instruction.
    pub fn tick(&mut self) -> Result<bool, Trap> {
        if self.trace && !self.cpu.is_halted() && self.cpu.fault().is_none() {
            eprintln!("{}", self.cpu.trace_line());
        }
        match self.cpu.step()? {
            Some(step) => {
                self.stats.record(&step);
                Ok(!self.cpu.is_halted())
            }
            None => Ok(false),
        }
    }

    /// Runs until `HLT`.
    ///
    /// # Errors
    ///
    /// The first [`Trap`]; the console is flushed before it is returned.
    pub fn run(&mut self) -> Result<&SimStats, Trap> {
        let result = loop {
            match self.tick() {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(trap) => break Err(trap),
            }
        };
        let flushed = self.cpu.flush_console();
        if let Err(trap) = &result {
            tracing::error!(pc = self.cpu.pc, %trap, "machine trapped");
        }
        result?;
        flushed?;
        Ok(&self.stats)
    }
}
