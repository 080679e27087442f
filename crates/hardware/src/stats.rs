//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run executed. It provides:
//! 1. **Totals:** Retired instructions and host time.
//! 2. **Instruction mix:** Counts by category (data, ALU, stack, control, I/O).
//! 3. **Control flow:** Conditional jumps seen and taken.

use std::fmt::Write as _;
use std::time::Instant;

use crate::core::cpu::StepOutcome;
use crate::isa::dispatch::Op;

/// Statistics for one run.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed, including the final `HLT`.
    pub instructions_retired: u64,
    /// `LDI` count.
    pub inst_data: u64,
    /// ALU instruction count (`ADD`, `MUL`, `CMP`, ...).
    pub inst_alu: u64,
    /// `PUSH`/`POP` count.
    pub inst_stack: u64,
    /// `CALL`/`RET`/`JMP` and conditional jump count.
    pub inst_control: u64,
    /// `PRN` count.
    pub inst_io: u64,
    /// `HLT` count.
    pub inst_system: u64,
    /// Conditional jumps executed.
    pub branches: u64,
    /// Conditional jumps that transferred control.
    pub branches_taken: u64,
    /// Deepest call nesting reached.
    pub max_call_depth: u64,
    call_depth: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_data: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_control: 0,
            inst_io: 0,
            inst_system: 0,
            branches: 0,
            branches_taken: 0,
            max_call_depth: 0,
            call_depth: 0,
        }
    }
}

impl SimStats {
    /// Counts one executed instruction.
    pub fn record(&mut self, step: &StepOutcome) {
        self.instructions_retired += 1;
        match step.op {
            Op::Halt => self.inst_system += 1,
            Op::LoadImmediate => self.inst_data += 1,
            Op::Print => self.inst_io += 1,
            Op::Alu => self.inst_alu += 1,
            Op::Push | Op::Pop => self.inst_stack += 1,
            Op::Call => {
                self.inst_control += 1;
                self.call_depth += 1;
                self.max_call_depth = self.max_call_depth.max(self.call_depth);
            }
            Op::Return => {
                self.inst_control += 1;
                self.call_depth = self.call_depth.saturating_sub(1);
            }
            Op::Jump => self.inst_control += 1,
            Op::JumpIf(_) => {
                self.inst_control += 1;
                self.branches += 1;
                if step.jumped {
                    self.branches_taken += 1;
                }
            }
        }
    }

    /// Renders the statistics report.
    pub fn report(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        let mut out = String::new();
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "LS-8 SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "host_seconds             {seconds:.4} s");
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "INSTRUCTION MIX");
        for (name, count) in [
            ("op.data", self.inst_data),
            ("op.alu", self.inst_alu),
            ("op.stack", self.inst_stack),
            ("op.control", self.inst_control),
            ("op.io", self.inst_io),
            ("op.system", self.inst_system),
        ] {
            let _ = writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count));
        }
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "CONTROL FLOW");
        let _ = writeln!(out, "  branch.count           {}", self.branches);
        let _ = writeln!(out, "  branch.taken           {}", self.branches_taken);
        let _ = writeln!(out, "  call.max_depth         {}", self.max_call_depth);
        let _ = writeln!(out, "==========================================================");
        out
    }
}
