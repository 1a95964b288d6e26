//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execute stage. It
//! handles addition, subtraction, signed and unsigned comparison, bitwise
//! AND/OR/NOT, and the left-shift-by-16 used for upper-immediate formation.
//!
//! Arithmetic is modulo 2^32: results wrap and no overflow is trapped,
//! matching the datapath this simulator models. The operation selector is a
//! closed enumeration, so there is no unreachable fall-through case.

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit for 32-bit integer operations.
#[derive(Clone, Copy, Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand.
    ///
    /// # Returns
    ///
    /// The 32-bit result and the zero flag (`result == 0`), which the
    /// PC-update logic consumes for branch decisions.
    pub fn execute(op: AluOp, a: u32, b: u32) -> (u32, bool) {
        let result = match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Slt => u32::from((a as i32) < (b as i32)),
            AluOp::Sltu => u32::from(a < b),
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Sll16 => b << 16,
            AluOp::Not => !a,
        };
        (result, result == 0)
    }
}
