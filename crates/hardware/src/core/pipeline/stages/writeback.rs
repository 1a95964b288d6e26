//! Writeback (WB) stage.
//!
//! The final data stage of the datapath. When `RegWrite` is set it commits
//! exactly one value into the register file: the memory value when
//! `MemtoReg` is set, the ALU result otherwise, into the register named by
//! `rd` when `RegDst` is set or `rt` otherwise. When `RegWrite` is clear the
//! register file is untouched. The stage has no failure mode.

use crate::common::RegisterFile;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::InstructionFields;

/// Commits the instruction's result to the register file, if requested.
///
/// # Arguments
///
/// * `ctrl`       - Control vector from decode.
/// * `fields`     - Instruction fields (for the destination register).
/// * `mem_data`   - Word loaded by the memory stage, when there was one.
/// * `alu_result` - Result of the execute stage.
/// * `regs`       - The register file.
pub fn write_back(
    ctrl: &ControlSignals,
    fields: &InstructionFields,
    mem_data: Option<u32>,
    alu_result: u32,
    regs: &mut RegisterFile,
) {
    if !ctrl.reg_write {
        return;
    }

    let dest = if ctrl.reg_dst { fields.rd } else { fields.rt };
    // Well-formed control vectors only set MemtoReg together with MemRead,
    // so a loaded word is always present when it is selected.
    let value = match (ctrl.mem_to_reg, mem_data) {
        (true, Some(word)) => word,
        _ => alu_result,
    };
    tracing::trace!("WB  r{} <= {:#010x}", dest, value);
    regs.write(dest as usize, value);
}
