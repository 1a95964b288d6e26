//! Instruction Decode (ID) stage.
//!
//! This module implements the control-signal generator. It maps the 6-bit
//! opcode field to a complete [`ControlSignals`] vector; the vector fully
//! determines the behavior of every later stage and is the single control
//! interface between decode and execution.
//!
//! Decoding is a pure, stateless function of the opcode alone. A fresh
//! vector is built for every instruction, so no flag can carry over from a
//! previous decode.

use crate::common::Exception;
use crate::core::pipeline::signals::{AluOp, AluSel, ControlSignals};
use crate::isa::opcodes;

/// Maps an opcode to its control-signal vector.
///
/// All flags not named for an opcode stay false and the ALU selector stays
/// `Add`, matching the inactive state of a hardware decoder.
///
/// # Arguments
///
/// * `opcode` - The 6-bit opcode field.
///
/// # Errors
///
/// Returns [`Exception::UnsupportedOpcode`] for any opcode outside the
/// supported set; architectural state is untouched in that case.
pub fn decode(opcode: u32) -> Result<ControlSignals, Exception> {
    let ctrl = match opcode {
        opcodes::OP_RTYPE => ControlSignals {
            reg_dst: true,
            reg_write: true,
            alu: AluSel::Funct,
            ..ControlSignals::default()
        },
        opcodes::OP_ADDI => ControlSignals {
            alu_src: true,
            reg_write: true,
            ..ControlSignals::default()
        },
        opcodes::OP_LW => ControlSignals {
            alu_src: true,
            mem_to_reg: true,
            reg_write: true,
            mem_read: true,
            ..ControlSignals::default()
        },
        opcodes::OP_SW => ControlSignals {
            alu_src: true,
            mem_write: true,
            ..ControlSignals::default()
        },
        opcodes::OP_BEQ => ControlSignals {
            branch: true,
            alu: AluSel::Direct(AluOp::Sub),
            ..ControlSignals::default()
        },
        opcodes::OP_J => ControlSignals {
            jump: true,
            ..ControlSignals::default()
        },
        _ => return Err(Exception::UnsupportedOpcode(opcode)),
    };
    tracing::trace!("ID  op={:#04x} ctrl={:?}", opcode, ctrl);
    Ok(ctrl)
}
