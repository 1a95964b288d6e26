//! Instruction Fetch (IF) stage.
//!
//! The first stage of the datapath. It reads the 32-bit instruction word at
//! the current program counter. The read is pure: fetching never mutates any
//! architectural state.

use crate::common::{AccessType, Exception, Memory};

/// Fetches the instruction word at the current program counter.
///
/// # Arguments
///
/// * `pc`  - Current program counter (byte address).
/// * `mem` - The data/instruction memory.
///
/// # Errors
///
/// Returns [`Exception::InvalidFetchAddress`] when `pc` is not a multiple of
/// the word size or is at or beyond the memory bound. The fetch at the last
/// valid word (`bound - 4`) succeeds; the fetch exactly at the bound halts.
pub fn fetch(pc: u32, mem: &Memory) -> Result<u32, Exception> {
    let inst = mem.read(pc, AccessType::Fetch)?;
    tracing::trace!("IF  pc={:#010x} inst={:#010x}", pc, inst);
    Ok(inst)
}
