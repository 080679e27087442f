//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single owner of all
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, flags and run state.
//! 2. **Memory:** The flat RAM the program and the stack share.
//! 3. **Dispatch:** The opcode table consulted on every cycle.
//! 4. **Output:** The console PRN writes to.
//!
//! Handlers are methods taking `&mut self`, so every mutation goes through the
//! one exclusive borrow of the machine.

/// Fetch/decode/execute loop and instruction handlers.
pub mod execution;

/// Stack operations on top of RAM.
pub mod memory;

use crate::common::RegisterFile;
use crate::common::constants::TRACE_PREFIX;
use crate::common::error::Trap;
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::isa::dispatch::DispatchTable;
use crate::soc::devices::StdConsole;
use crate::soc::memory::Ram;
use crate::soc::traits::Console;

pub use execution::StepOutcome;

/// Whether the machine is still executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// Stopped by `HLT`.
    Halted,
}

/// Main CPU structure containing all machine state.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: RegisterFile,
    /// Address of the next instruction.
    pub pc: usize,
    /// Comparison flags.
    pub flags: Flags,
    /// Main memory.
    pub ram: Ram,
    /// Run state.
    pub state: RunState,
    fault: Option<Trap>,
    dispatch: DispatchTable,
    console: Box<dyn Console>,
}

impl Cpu {
    /// Creates a CPU whose console is stdout (or stderr, per configuration).
    pub fn new(config: &Config) -> Self {
        let console = StdConsole::new(config.machine.console_to_stderr);
        Self::with_console(config, Box::new(console))
    }

    /// Creates a CPU printing to `console`.
    ///
    /// Memory is zero-filled, every register is zero except the stack
    /// pointer, PC is 0 and the machine is `Running`.
    pub fn with_console(config: &Config, console: Box<dyn Console>) -> Self {
        Self {
            regs: RegisterFile::with_stack_pointer(config.machine.stack_pointer),
            pc: 0,
            flags: Flags::default(),
            ram: Ram::new(config.machine.memory_size),
            state: RunState::Running,
            fault: None,
            dispatch: DispatchTable::standard(),
            console,
        }
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfBounds`] if the image does not fit.
    pub fn load(&mut self, image: &[u8]) -> Result<(), Trap> {
        self.ram.load_image(image)
    }

    /// Whether `HLT` has executed.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// The trap that stopped the machine, if any.
    #[inline]
    pub fn fault(&self) -> Option<&Trap> {
        self.fault.as_ref()
    }

    /// The dispatch table this CPU was built with.
    pub fn dispatch(&self) -> &DispatchTable {
        &self.dispatch
    }

    /// Flushes the console.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::ConsoleFailure`] if the console cannot be flushed.
    pub fn flush_console(&mut self) -> Result<(), Trap> {
        self.console
            .flush()
            .map_err(|e| Trap::ConsoleFailure(e.to_string()))
    }

    /// One-line state dump: PC, the next three memory cells, every register.
    ///
    /// Format: `TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4`. Cells past
    /// the end of memory print as `--`.
    pub fn trace_line(&self) -> String {
        let cell = |offset: usize| {
            self.ram
                .peek(self.pc + offset)
                .map_or_else(|| "--".to_string(), |b| format!("{b:02X}"))
        };
        format!(
            "{TRACE_PREFIX} {:02X} | {} {} {} |{}",
            self.pc,
            cell(0),
            cell(1),
            cell(2),
            self.regs.dump()
        )
    }

    /// Writes the full machine state to stderr for post-mortem debugging.
    pub fn dump_state(&self) {
        eprintln!("{}", self.trace_line());
        eprintln!("  FL={} state={:?}", self.flags, self.state);
        if let Some(trap) = &self.fault {
            eprintln!("  fault: {trap}");
        }
        for (row, chunk) in self.ram.as_slice().chunks(16).enumerate() {
            let bytes: Vec<String> = chunk.iter().map(|b| format!("{b:02X}")).collect();
            eprintln!("  {:02X}: {}", row * 16, bytes.join(" "));
        }
    }
}
