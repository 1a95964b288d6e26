//! Control-signal generation tests.

use mipsim_core::Exception;
use mipsim_core::core::pipeline::signals::{AluOp, AluSel, ControlSignals};
use mipsim_core::core::pipeline::stages::decode;
use rstest::rstest;

fn ctrl(opcode: u32) -> ControlSignals {
    match decode(opcode) {
        Ok(c) => c,
        Err(e) => panic!("opcode {opcode:#04x} should decode: {e}"),
    }
}

#[test]
fn r_type_sets_reg_dst_and_funct_dispatch() {
    let c = ctrl(0x00);
    assert!(c.reg_dst);
    assert!(c.reg_write);
    assert_eq!(c.alu, AluSel::Funct);
    assert!(!c.alu_src && !c.mem_to_reg && !c.mem_read && !c.mem_write);
    assert!(!c.branch && !c.jump);
}

#[test]
fn addi_selects_immediate_operand() {
    let c = ctrl(0x08);
    assert!(c.alu_src);
    assert!(c.reg_write);
    assert!(!c.reg_dst && !c.mem_to_reg && !c.mem_read && !c.mem_write);
    assert_eq!(c.alu, AluSel::Direct(AluOp::Add));
}

#[test]
fn lw_reads_memory_into_register() {
    let c = ctrl(0x23);
    assert!(c.alu_src && c.mem_to_reg && c.reg_write && c.mem_read);
    assert!(!c.mem_write && !c.reg_dst && !c.branch && !c.jump);
}

#[test]
fn sw_writes_memory_only() {
    let c = ctrl(0x2B);
    assert!(c.alu_src && c.mem_write);
    assert!(!c.reg_write && !c.mem_read && !c.mem_to_reg);
}

#[test]
fn beq_subtracts_for_equality() {
    let c = ctrl(0x04);
    assert!(c.branch);
    assert_eq!(c.alu, AluSel::Direct(AluOp::Sub));
    assert!(!c.reg_write && !c.mem_read && !c.mem_write && !c.jump);
}

#[test]
fn jump_sets_only_jump() {
    let c = ctrl(0x02);
    assert!(c.jump);
    assert_eq!(
        ControlSignals {
            jump: true,
            ..ControlSignals::default()
        },
        c
    );
}

#[rstest]
#[case(0x01)]
#[case(0x03)]
#[case(0x05)]
#[case(0x09)]
#[case(0x22)]
#[case(0x2A)]
#[case(0x3F)]
fn unsupported_opcodes_halt(#[case] opcode: u32) {
    assert_eq!(decode(opcode), Err(Exception::UnsupportedOpcode(opcode)));
}

/// Decode is a pure function of the opcode: no flag set by one decode can
/// leak into the next.
#[test]
fn no_carry_over_between_decodes() {
    let lw = ctrl(0x23);
    assert!(lw.mem_read);
    let jump = ctrl(0x02);
    assert!(!jump.mem_read && !jump.reg_write && !jump.alu_src);
    assert_eq!(ctrl(0x23), lw);
}
