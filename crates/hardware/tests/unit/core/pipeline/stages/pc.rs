//! Program-counter update tests.

use mipsim_core::core::pipeline::signals::ControlSignals;
use mipsim_core::core::pipeline::stages::pc_update;
use mipsim_core::isa::sign_extend;

fn branch_ctrl() -> ControlSignals {
    ControlSignals {
        branch: true,
        ..ControlSignals::default()
    }
}

fn jump_ctrl() -> ControlSignals {
    ControlSignals {
        jump: true,
        ..ControlSignals::default()
    }
}

#[test]
fn sequential_advance_by_four() {
    let ctrl = ControlSignals::default();
    assert_eq!(pc_update(0, &ctrl, false, 0, 0), 4);
    assert_eq!(pc_update(0x100, &ctrl, true, 0, 0), 0x104);
}

#[test]
fn branch_taken_adds_shifted_offset() {
    // next = (pc + 4) + (offset << 2)
    assert_eq!(pc_update(0x100, &branch_ctrl(), true, 0, 5), 0x104 + 20);
}

#[test]
fn branch_not_taken_is_sequential() {
    assert_eq!(pc_update(0x100, &branch_ctrl(), false, 0, 5), 0x104);
}

#[test]
fn branch_backwards_with_negative_offset() {
    // offset -4 words: target = pc + 4 - 16
    let extended = sign_extend(0xFFFC);
    assert_eq!(pc_update(0x100, &branch_ctrl(), true, 0, extended), 0x0F4);
}

#[test]
fn jump_combines_target_with_pc_segment() {
    // next = (target << 2) | ((pc + 4) & 0xF000_0000)
    assert_eq!(pc_update(0x100, &jump_ctrl(), false, 0x40, 0), 0x100);
    assert_eq!(
        pc_update(0x5000_0100, &jump_ctrl(), false, 0x40, 0),
        0x5000_0100
    );
}

#[test]
fn jump_ignores_zero_flag() {
    assert_eq!(pc_update(0, &jump_ctrl(), true, 0x10, 0), 0x40);
}

#[test]
fn jump_target_spans_full_26_bits() {
    assert_eq!(
        pc_update(0, &jump_ctrl(), false, 0x03FF_FFFF, 0),
        0x0FFF_FFFC
    );
}
