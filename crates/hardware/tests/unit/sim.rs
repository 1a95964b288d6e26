//! Simulation driver tests.

use crate::common::builder::InstructionBuilder;
use mipsim_core::config::Config;
use mipsim_core::sim::RunOutcome;
use mipsim_core::{Exception, Simulator};
use pretty_assertions::assert_eq;

fn inst() -> InstructionBuilder {
    InstructionBuilder::new()
}

#[test]
fn new_simulator_honours_config() {
    let config = Config {
        memory_bytes: 4096,
        pc_start: 0x100,
    };
    let sim = Simulator::new(&config);
    assert_eq!(sim.cpu.pc, 0x100);
    assert_eq!(sim.cpu.mem.size_bytes(), 4096);
}

#[test]
fn load_program_points_pc_at_image() {
    let mut sim = Simulator::new(&Config::default());
    assert_eq!(sim.load_program(0x80, &[inst().addi(1, 0, 1).build()]), Ok(()));
    assert_eq!(sim.cpu.pc, 0x80);
}

#[test]
fn load_program_rejects_oversized_image() {
    let config = Config {
        memory_bytes: 8,
        pc_start: 0,
    };
    let mut sim = Simulator::new(&config);
    assert_eq!(
        sim.load_program(0, &[1, 2, 3]),
        Err(Exception::InvalidMemoryAddress(8))
    );
}

#[test]
fn run_stops_at_halting_instruction() {
    let mut sim = Simulator::new(&Config::default());
    assert_eq!(
        sim.load_program(
            0,
            &[
                inst().addi(1, 0, 5).build(),
                inst().addi(2, 1, 5).build(),
                inst().opcode(0x3F).build(),
            ],
        ),
        Ok(())
    );

    let outcome = sim.run(100);

    assert_eq!(outcome, RunOutcome::Halted(Exception::UnsupportedOpcode(0x3F)));
    assert_eq!(sim.cpu.regs.read(2), 10);
    assert_eq!(sim.cpu.stats.instructions_retired, 2);
}

#[test]
fn run_respects_step_limit() {
    // j 0 spins forever.
    let mut sim = Simulator::new(&Config::default());
    assert_eq!(sim.load_program(0, &[inst().j(0).build()]), Ok(()));

    assert_eq!(sim.run(10), RunOutcome::LimitReached);
    assert_eq!(sim.cpu.stats.instructions_retired, 10);
    assert_eq!(sim.cpu.pc, 0);
}

#[test]
fn run_with_zero_limit_does_nothing() {
    let mut sim = Simulator::new(&Config::default());
    assert_eq!(sim.run(0), RunOutcome::LimitReached);
    assert_eq!(sim.cpu.stats.instructions_retired, 0);
}

#[test]
fn halted_core_reports_the_same_exception_again() {
    // Stepping past a halt re-runs the same faulting instruction.
    let mut sim = Simulator::new(&Config::default());
    assert_eq!(sim.load_program(0, &[inst().opcode(0x3F).build()]), Ok(()));

    assert_eq!(sim.step(), Err(Exception::UnsupportedOpcode(0x3F)));
    assert_eq!(sim.step(), Err(Exception::UnsupportedOpcode(0x3F)));
}
