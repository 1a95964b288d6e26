//! Execute (EX) stage.
//!
//! This module implements ALU-operation dispatch. It performs the following:
//! 1. **Operand Selection:** Chooses the ALU's second operand — the
//!    sign-extended immediate when `ALUSrc` is set, the second register value
//!    otherwise.
//! 2. **Function-Field Dispatch:** For register-format instructions, resolves
//!    the actual ALU operation from the function field via a fixed table.
//! 3. **ALU Invocation:** Runs the ALU and forwards its result and zero flag
//!    to the memory and PC-update logic.

use crate::common::Exception;
use crate::core::pipeline::signals::{AluOp, AluSel, ControlSignals};
use crate::core::units::alu::Alu;
use crate::isa::funct;

/// Resolves the ALU operation for a register-format function field.
///
/// # Errors
///
/// Returns [`Exception::UnsupportedFunction`] for any function field outside
/// the fixed table.
fn funct_op(funct: u32) -> Result<AluOp, Exception> {
    match funct {
        funct::FUNCT_ADD => Ok(AluOp::Add),
        funct::FUNCT_SUB => Ok(AluOp::Sub),
        funct::FUNCT_SLT => Ok(AluOp::Slt),
        funct::FUNCT_SLTU => Ok(AluOp::Sltu),
        funct::FUNCT_AND => Ok(AluOp::And),
        funct::FUNCT_OR => Ok(AluOp::Or),
        _ => Err(Exception::UnsupportedFunction(funct)),
    }
}

/// Executes the ALU operation for one instruction.
///
/// # Arguments
///
/// * `ctrl`     - Control vector from decode.
/// * `data1`    - First register operand.
/// * `data2`    - Second register operand.
/// * `extended` - Sign-extended immediate.
/// * `funct`    - Function field (consulted only for register-format ops).
///
/// # Returns
///
/// The ALU result and zero flag.
///
/// # Errors
///
/// Returns [`Exception::UnsupportedFunction`] when a register-format
/// instruction carries a function field with no defined operation.
pub fn execute(
    ctrl: &ControlSignals,
    data1: u32,
    data2: u32,
    extended: u32,
    funct: u32,
) -> Result<(u32, bool), Exception> {
    let b = if ctrl.alu_src { extended } else { data2 };
    let op = match ctrl.alu {
        AluSel::Funct => funct_op(funct)?,
        AluSel::Direct(op) => op,
    };
    let (result, zero) = Alu::execute(op, data1, b);
    tracing::trace!(
        "EX  op={:?} a={:#010x} b={:#010x} result={:#010x} zero={}",
        op,
        data1,
        b,
        result,
        zero
    );
    Ok((result, zero))
}
