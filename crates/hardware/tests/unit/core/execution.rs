//! # Execution Engine Tests
//!
//! Fetch/decode/execute behaviour: PC advance, LDI/PRN, ALU write-back,
//! halting and the traps the engine raises.

use ls8_core::common::Trap;
use ls8_core::config::Config;
use ls8_core::core::{Cpu, RunState};
use ls8_core::isa::Op;
use ls8_core::isa::opcodes::*;
use ls8_core::soc::CaptureConsole;
use pretty_assertions::assert_eq;

use crate::common::mocks::BrokenConsole;
use crate::common::{ProgramBuilder, TestContext};

#[test]
fn test_reset_state() {
    let ctx = TestContext::new();
    let cpu = ctx.cpu();
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.flags.bits(), 0);
    assert_eq!(cpu.state, RunState::Running);
    assert_eq!(cpu.regs.as_slice(), &[0, 0, 0, 0, 0, 0, 0, 0xF4]);
    assert!(cpu.ram.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_print8_end_to_end() {
    let mut ctx = TestContext::new().load_program(&[LDI, 0, 8, PRN, 0, HLT]);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.output(), vec![8]);
    assert_eq!(ctx.console.text(), "8\n");
    assert_eq!(ctx.cpu().pc, 6);
    assert!(ctx.cpu().is_halted());
}

#[test]
fn test_pc_advances_by_one_plus_arity() {
    let image = ProgramBuilder::new()
        .ldi(0, 1) // 3 bytes
        .prn(0) // 2 bytes
        .add(0, 0) // 3 bytes
        .hlt() // 1 byte
        .build();
    let mut ctx = TestContext::new().load_program(&image);

    let expected = [3, 5, 8, 9];
    for pc in expected {
        let _ = ctx.step(1);
        assert_eq!(ctx.cpu().pc, pc);
    }
}

#[test]
fn test_step_reports_what_executed() {
    let mut ctx = TestContext::new().load_program(&[LDI, 2, 42, HLT]);
    let step = ctx.cpu_mut().step().unwrap().unwrap();
    assert_eq!(step.pc, 0);
    assert_eq!(step.op, Op::LoadImmediate);
    assert_eq!(step.instruction.operands(), &[2, 42]);
    assert!(!step.jumped);
    assert_eq!(ctx.reg(2), 42);
}

#[test]
fn test_step_after_halt_is_a_no_op() {
    let mut ctx = TestContext::new().load_program(&[HLT]);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.cpu_mut().step(), Ok(None));
    assert_eq!(ctx.cpu().pc, 1);
}

#[test]
fn test_cpu_run_counts_retired_instructions() {
    let config = Config::default();
    let mut cpu = Cpu::with_console(&config, Box::new(CaptureConsole::new()));
    cpu.load(&[LDI, 0, 8, PRN, 0, HLT]).unwrap();
    assert_eq!(cpu.run(), Ok(3));
}

#[test]
fn test_ldi_overwrites_register() {
    let image = ProgramBuilder::new().ldi(3, 1).ldi(3, 200).hlt().build();
    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.reg(3), 200);
}

#[test]
fn test_mult_writes_back_to_first_register() {
    let image = ProgramBuilder::new()
        .ldi(0, 8)
        .ldi(1, 9)
        .mul(0, 1)
        .prn(0)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.output(), vec![72]);
    assert_eq!(ctx.reg(0), 72);
    assert_eq!(ctx.reg(1), 9);
}

#[test]
fn test_add_wraps() {
    let image = ProgramBuilder::new()
        .ldi(0, 200)
        .ldi(1, 100)
        .add(0, 1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.reg(0), 44);
}

#[test]
fn test_cmp_leaves_registers_untouched() {
    let image = ProgramBuilder::new()
        .ldi(0, 3)
        .ldi(1, 7)
        .cmp(0, 1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.reg(0), 3);
    assert_eq!(ctx.reg(1), 7);
    assert_eq!(ctx.cpu().flags.bits(), 0b100);
}

#[test]
fn test_bitwise_ops() {
    let image = ProgramBuilder::new()
        .ldi(0, 0b1100)
        .ldi(1, 0b1010)
        .ldi(2, 0b1100)
        .ldi(3, 0b1100)
        .alu(AND, 0, 1)
        .alu(OR, 2, 1)
        .alu(XOR, 3, 1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.reg(0), 0b1000);
    assert_eq!(ctx.reg(2), 0b1110);
    assert_eq!(ctx.reg(3), 0b0110);
}

#[test]
fn test_unknown_opcode_traps_at_its_address() {
    let mut ctx = TestContext::new().load_program(&[LDI, 0, 1, 0xFF]);
    assert_eq!(
        ctx.run(),
        Err(Trap::UnknownOpcode {
            opcode: 0xFF,
            pc: 3
        })
    );
    assert_eq!(ctx.cpu().pc, 3);
    assert_eq!(ctx.cpu().state, RunState::Running);
    assert_eq!(
        ctx.cpu().fault(),
        Some(&Trap::UnknownOpcode {
            opcode: 0xFF,
            pc: 3
        })
    );
}

#[test]
fn test_trap_is_latched() {
    let image = ProgramBuilder::new().ldi(9, 5).ldi(0, 7).prn(0).hlt().build();
    let mut ctx = TestContext::new().load_program(&image);

    assert_eq!(ctx.sim.tick(), Err(Trap::RegisterOutOfBounds(9)));
    for _ in 0..3 {
        assert_eq!(ctx.sim.tick(), Err(Trap::RegisterOutOfBounds(9)));
    }
    assert_eq!(ctx.cpu_mut().step(), Err(Trap::RegisterOutOfBounds(9)));

    assert!(ctx.output().is_empty());
    assert!(!ctx.cpu().is_halted());
    assert_eq!(ctx.cpu().pc, 3);
    assert_eq!(ctx.reg(0), 0);
    assert_eq!(ctx.sim.stats.instructions_retired, 0);
}

#[test]
fn test_run_after_trap_returns_the_same_trap() {
    let mut ctx = TestContext::new().load_program(&[0xFF]);
    let first = ctx.run();
    assert_eq!(first, Err(Trap::UnknownOpcode { opcode: 0xFF, pc: 0 }));
    assert_eq!(ctx.run(), first);
}

#[test]
fn test_no_fault_after_clean_halt() {
    let mut ctx = TestContext::new().load_program(&[HLT]);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.cpu().fault(), None);
}

#[test]
fn test_zero_byte_is_unknown() {
    // Running off the end of a program lands on zero-filled memory.
    let mut ctx = TestContext::new().load_program(&[LDI, 0, 1]);
    assert_eq!(
        ctx.run(),
        Err(Trap::UnknownOpcode { opcode: 0, pc: 3 })
    );
}

#[test]
fn test_register_operand_out_of_range_traps() {
    let mut ctx = TestContext::new().load_program(&[LDI, 8, 1, HLT]);
    assert_eq!(ctx.run(), Err(Trap::RegisterOutOfBounds(8)));
}

#[test]
fn test_prn_register_out_of_range_traps() {
    let mut ctx = TestContext::new().load_program(&[PRN, 9, HLT]);
    assert_eq!(ctx.run(), Err(Trap::RegisterOutOfBounds(9)));
    assert!(ctx.output().is_empty());
}

#[test]
fn test_unimplemented_alu_opcode_is_unknown() {
    // DIV is an ALU-group encoding with no handler in the table.
    let mut ctx = TestContext::new().load_program(&[0xA3, 0, 1, HLT]);
    assert_eq!(
        ctx.run(),
        Err(Trap::UnknownOpcode {
            opcode: 0xA3,
            pc: 0
        })
    );
}

#[test]
fn test_console_failure_traps() {
    let config = Config::default();
    let mut cpu = Cpu::with_console(&config, Box::new(BrokenConsole));
    cpu.load(&[LDI, 0, 8, PRN, 0, HLT]).unwrap();
    let err = cpu.run().unwrap_err();
    assert!(matches!(err, Trap::ConsoleFailure(ref msg) if msg.contains("unplugged")));
}

#[test]
fn test_trailing_instruction_at_end_of_memory() {
    // HLT in the last cell needs no operand bytes beyond it.
    let mut image = vec![0; 256];
    image[0] = LDI;
    image[1] = 0;
    image[2] = 255;
    image[3] = JMP;
    image[4] = 0;
    image[255] = HLT;
    let mut ctx = TestContext::new().load_program(&image);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.cpu().pc, 256);
}

#[test]
fn test_operand_past_end_of_memory_traps() {
    let mut image = vec![0; 256];
    image[0] = LDI;
    image[1] = 0;
    image[2] = 255;
    image[3] = JMP;
    image[4] = 0;
    image[255] = PRN;
    let mut ctx = TestContext::new().load_program(&image);
    assert_eq!(ctx.run(), Err(Trap::AddressOutOfBounds(256)));
}

#[test]
fn test_trace_line_format() {
    let ctx = TestContext::new().load_program(&[LDI, 0, 8, PRN, 0, HLT]);
    assert_eq!(
        ctx.cpu().trace_line(),
        "TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4"
    );
}

#[test]
fn test_trace_line_past_end_of_memory() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pc = 0xFE;
    assert_eq!(
        ctx.cpu().trace_line(),
        "TRACE: FE | 00 00 -- | 00 00 00 00 00 00 00 F4"
    );
}
