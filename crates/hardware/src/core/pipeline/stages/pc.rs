//! Program-Counter Update stage.
//!
//! Computes the next program counter from the control vector and the results
//! of the execute stage. The sequential increment always happens first; a
//! jump then replaces the PC, and a taken branch adjusts it, in that fixed
//! order.
//!
//! The jump target combines the 26-bit target field, shifted into word
//! addressing, with the top four bits of the already-incremented PC — the
//! segment convention of the modeled architecture.

use crate::common::constants::{BRANCH_TARGET_SHIFT, JUMP_SEGMENT_MASK, WORD_BYTES};
use crate::core::pipeline::signals::ControlSignals;

/// Computes the next program counter.
///
/// # Arguments
///
/// * `pc`       - Program counter of the instruction that just executed.
/// * `ctrl`     - Control vector from decode.
/// * `zero`     - ALU zero flag (the branch equality result).
/// * `target`   - 26-bit jump-target field.
/// * `extended` - Sign-extended branch offset.
///
/// # Returns
///
/// The program counter for the next instruction.
pub fn pc_update(pc: u32, ctrl: &ControlSignals, zero: bool, target: u32, extended: u32) -> u32 {
    let mut next = pc.wrapping_add(WORD_BYTES);
    if ctrl.jump {
        next = (target << BRANCH_TARGET_SHIFT) | (next & JUMP_SEGMENT_MASK);
    }
    if ctrl.branch && zero {
        next = next.wrapping_add(extended << BRANCH_TARGET_SHIFT);
    }
    tracing::trace!("PC  {:#010x} -> {:#010x}", pc, next);
    next
}
