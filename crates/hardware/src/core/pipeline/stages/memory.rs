//! Memory Access (MEM) stage.
//!
//! The fourth stage of the datapath. Using the ALU result as the effective
//! address, it performs the conditional load and/or store requested by the
//! control vector. An instruction that requests no access passes through
//! without touching memory — and without validating the ALU result as an
//! address, since it is not one.

use crate::common::{AccessType, Exception, Memory};
use crate::core::pipeline::signals::ControlSignals;

/// Performs the memory access requested by the control vector, if any.
///
/// Address validation happens only for accesses actually requested. If the
/// effective address is invalid for a requested access, the stage halts
/// before applying either access, so a faulting instruction never partially
/// mutates memory.
///
/// # Arguments
///
/// * `ctrl`       - Control vector from decode.
/// * `alu_result` - Effective address computed by the ALU.
/// * `data2`      - Second register operand (the store data).
/// * `mem`        - The data memory.
///
/// # Returns
///
/// The loaded word when `MemRead` was set, `None` otherwise.
///
/// # Errors
///
/// Returns [`Exception::InvalidMemoryAddress`] when a requested access has a
/// misaligned or out-of-bounds effective address.
pub fn memory_access(
    ctrl: &ControlSignals,
    alu_result: u32,
    data2: u32,
    mem: &mut Memory,
) -> Result<Option<u32>, Exception> {
    if !ctrl.mem_read && !ctrl.mem_write {
        return Ok(None);
    }

    let mut loaded = None;
    if ctrl.mem_read {
        let word = mem.read(alu_result, AccessType::Read)?;
        tracing::trace!("MEM addr={:#010x} load={:#010x}", alu_result, word);
        loaded = Some(word);
    }
    if ctrl.mem_write {
        mem.write(alu_result, data2)?;
        tracing::trace!("MEM addr={:#010x} store={:#010x}", alu_result, data2);
    }
    Ok(loaded)
}
