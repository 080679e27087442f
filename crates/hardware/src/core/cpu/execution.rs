//! Main Execution Loop.
//!
//! This module implements the fetch/decode/execute cycle. Each step:
//! 1. **Fetch:** Reads the opcode at PC and resolves its handler.
//! 2. **Decode:** Derives the operand count from the opcode and reads the operands.
//! 3. **Advance:** Moves PC past the instruction *before* the handler runs.
//! 4. **Execute:** Runs the handler, which may overwrite PC (CALL, RET, jumps).
//!
//! Advancing first is what lets CALL push "the instruction after CALL" by
//! reading PC, and lets control transfers simply overwrite it. Handlers never
//! advance PC themselves.

use super::{Cpu, RunState};
use crate::common::constants::NUM_REGISTERS;
use crate::common::error::Trap;
use crate::core::units::alu::Alu;
use crate::isa::decode::{self, Instruction};
use crate::isa::dispatch::{Condition, Op};
use crate::isa::opcodes;

/// Record of one executed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Address the instruction was fetched from.
    pub pc: usize,
    /// The instruction as fetched.
    pub instruction: Instruction,
    /// Handler that executed it.
    pub op: Op,
    /// For jumps, whether PC was transferred to the target.
    pub jumped: bool,
}

impl Cpu {
    /// Executes one instruction.
    ///
    /// Returns `Ok(None)` without doing anything if the machine is halted.
    ///
    /// # Errors
    ///
    /// Any [`Trap`] raised while fetching or executing. The trap is latched:
    /// once raised, every later call returns it again and executes nothing.
    pub fn step(&mut self) -> Result<Option<StepOutcome>, Trap> {
        if let Some(trap) = &self.fault {
            return Err(trap.clone());
        }
        if self.is_halted() {
            return Ok(None);
        }

        self.cycle().map(Some).inspect_err(|trap| {
            self.fault = Some(trap.clone());
        })
    }

    /// Fetches, decodes and executes the instruction at PC.
    fn cycle(&mut self) -> Result<StepOutcome, Trap> {
        let pc = self.pc;
        let opcode = self.ram.read(pc)?;
        let op = self.dispatch.resolve(opcode, pc)?;
        let inst = decode::fetch_operands(&self.ram, pc, opcode)?;

        tracing::trace!(
            pc,
            op = opcodes::mnemonic(opcode).unwrap_or("???"),
            operands = ?inst.operands(),
            "execute"
        );

        self.pc = pc + inst.len();
        let jumped = self.execute(op, &inst)?;

        Ok(StepOutcome {
            pc,
            instruction: inst,
            op,
            jumped,
        })
    }

    /// Runs until `HLT`, returning the number of instructions executed.
    ///
    /// # Errors
    ///
    /// The first [`Trap`] raised; execution stops there.
    pub fn run(&mut self) -> Result<u64, Trap> {
        let mut retired = 0;
        while self.step()?.is_some() {
            retired += 1;
        }
        Ok(retired)
    }

    /// Dispatches a decoded instruction to its handler.
    ///
    /// Returns whether a jump transferred control.
    fn execute(&mut self, op: Op, inst: &Instruction) -> Result<bool, Trap> {
        match op {
            Op::Halt => self.op_hlt(),
            Op::LoadImmediate => self.regs.write(inst.reg(0), inst.operand(1))?,
            Op::Print => self.op_prn(inst)?,
            Op::Alu => self.op_alu(inst)?,
            Op::Push => self.op_push(inst)?,
            Op::Pop => self.op_pop(inst)?,
            Op::Call => self.op_call(inst)?,
            Op::Return => self.op_ret()?,
            Op::Jump => {
                self.jump_to(inst)?;
                return Ok(true);
            }
            Op::JumpIf(cond) => return self.op_jump_if(cond, inst),
        }
        Ok(false)
    }

    fn op_hlt(&mut self) {
        self.state = RunState::Halted;
        tracing::info!(pc = self.pc, "halted");
    }

    fn op_prn(&mut self, inst: &Instruction) -> Result<(), Trap> {
        let val = self.regs.read(inst.reg(0))?;
        self.console
            .emit(val)
            .map_err(|e| Trap::ConsoleFailure(e.to_string()))
    }

    fn op_alu(&mut self, inst: &Instruction) -> Result<(), Trap> {
        let (ra, rb) = (inst.reg(0), inst.reg(1));
        let a = self.regs.read(ra)?;
        let b = self.regs.read(rb)?;
        let outcome = Alu::apply(inst.opcode, a, b)?;
        if let Some(result) = outcome.result {
            self.regs.write(ra, result)?;
        }
        if let Some(flags) = outcome.flags {
            self.flags = flags;
        }
        Ok(())
    }

    fn op_push(&mut self, inst: &Instruction) -> Result<(), Trap> {
        let reg = inst.reg(0);
        let val = self.regs.read(reg)?;
        self.push_byte(val)?;
        tracing::debug!(reg, val, sp = self.regs.sp(), "push");
        Ok(())
    }

    fn op_pop(&mut self, inst: &Instruction) -> Result<(), Trap> {
        let reg = inst.reg(0);
        if reg >= NUM_REGISTERS {
            return Err(Trap::RegisterOutOfBounds(reg));
        }
        let val = self.pop_byte()?;
        self.regs.write(reg, val)?;
        tracing::debug!(reg, val, sp = self.regs.sp(), "pop");
        Ok(())
    }

    fn op_call(&mut self, inst: &Instruction) -> Result<(), Trap> {
        let target = self.regs.read(inst.reg(0))?;
        let ret = u8::try_from(self.pc).map_err(|_| Trap::AddressOutOfBounds(self.pc))?;
        self.push_byte(ret)?;
        tracing::debug!(target, ret, "call");
        self.pc = usize::from(target);
        Ok(())
    }

    fn op_ret(&mut self) -> Result<(), Trap> {
        let ret = self.pop_byte()?;
        tracing::debug!(ret, "ret");
        self.pc = usize::from(ret);
        Ok(())
    }

    fn op_jump_if(&mut self, cond: Condition, inst: &Instruction) -> Result<bool, Trap> {
        if self.flags.satisfies(cond) {
            self.jump_to(inst)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn jump_to(&mut self, inst: &Instruction) -> Result<(), Trap> {
        let target = self.regs.read(inst.reg(0))?;
        self.pc = usize::from(target);
        Ok(())
    }
}
