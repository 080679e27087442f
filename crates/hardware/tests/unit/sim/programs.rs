//! # Sample Program Tests
//!
//! Runs every program shipped under `programs/` and checks its output.

use std::path::PathBuf;

use ls8_core::Simulator;
use ls8_core::config::Config;
use ls8_core::soc::CaptureConsole;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn program_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../programs")
        .join(name)
}

fn run_program(name: &str) -> (Simulator, CaptureConsole) {
    let console = CaptureConsole::new();
    let mut sim = Simulator::with_console(&Config::default(), Box::new(console.clone()));
    sim.load_file(program_path(name)).unwrap();
    let _ = sim.run().unwrap();
    (sim, console)
}

#[rstest]
#[case("print8.ls8", vec![8])]
#[case("mult.ls8", vec![72])]
#[case("stack.ls8", vec![2, 4, 1])]
#[case("call.ls8", vec![20, 30, 36, 60])]
#[case("countdown.ls8", vec![5, 4, 3, 2, 1])]
fn test_program_output(#[case] name: &str, #[case] expected: Vec<u8>) {
    let (sim, console) = run_program(name);
    assert_eq!(console.values(), expected);
    assert!(sim.cpu.is_halted());
    assert_eq!(sim.cpu.regs.sp(), 0xF4);
}

#[test]
fn test_print8_final_state() {
    let (sim, console) = run_program("print8.ls8");
    assert_eq!(console.text(), "8\n");
    assert_eq!(sim.cpu.pc, 6);
    assert_eq!(sim.stats.instructions_retired, 3);
}

#[test]
fn test_call_program_depth() {
    let (sim, _) = run_program("call.ls8");
    assert_eq!(sim.stats.max_call_depth, 1);
    assert_eq!(sim.stats.inst_control, 8);
}

#[test]
fn test_countdown_branches() {
    let (sim, _) = run_program("countdown.ls8");
    assert_eq!(sim.stats.branches, 5);
    assert_eq!(sim.stats.branches_taken, 4);
}
