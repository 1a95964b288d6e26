//! Instruction field partition and sign extension.
//!
//! This module implements the pure bit-field extraction performed between
//! fetch and decode. It provides:
//! 1. **Partition:** Extraction of every sub-field of a 32-bit instruction
//!    word into an [`InstructionFields`] record.
//! 2. **Sign Extension:** Widening of the 16-bit offset/immediate field to a
//!    32-bit value preserving its signed value.
//!
//! Neither operation validates its input or fails; both are total functions
//! of the raw instruction bits.

use crate::common::constants::{
    OFFSET_MASK, OFFSET_SIGN_BIT, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT,
    RT_SHIFT, SIGN_EXTEND_FILL, TARGET_MASK,
};

/// The sub-fields of one 32-bit instruction word.
///
/// Produced once per instruction by [`InstructionFields::partition`] and
/// read-only afterwards. Register fields are 5 bits wide and therefore always
/// valid register indices; the opcode and function fields are 6 bits wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionFields {
    /// Opcode field (bits 31-26).
    pub opcode: u32,
    /// First source register field (bits 25-21).
    pub rs: u32,
    /// Second source register field (bits 20-16).
    pub rt: u32,
    /// Destination register field (bits 15-11).
    pub rd: u32,
    /// Function field (bits 5-0).
    pub funct: u32,
    /// Offset/immediate field (bits 15-0).
    pub offset: u32,
    /// Jump-target field (bits 25-0).
    pub target: u32,
}

impl InstructionFields {
    /// Partitions a 32-bit instruction word into its sub-fields.
    ///
    /// Pure bit-field extraction; always succeeds.
    pub fn partition(inst: u32) -> Self {
        Self {
            opcode: (inst >> OPCODE_SHIFT) & OPCODE_MASK,
            rs: (inst >> RS_SHIFT) & REG_MASK,
            rt: (inst >> RT_SHIFT) & REG_MASK,
            rd: (inst >> RD_SHIFT) & REG_MASK,
            funct: inst & OPCODE_MASK,
            offset: inst & OFFSET_MASK,
            target: inst & TARGET_MASK,
        }
    }
}

/// Sign-extends a 16-bit offset/immediate field to 32 bits.
///
/// If bit 15 of `offset` is set, bits 31-16 of the result are all ones;
/// otherwise they are all zeros. Bits above 15 of the input are ignored.
pub fn sign_extend(offset: u32) -> u32 {
    let offset = offset & OFFSET_MASK;
    if offset & OFFSET_SIGN_BIT != 0 {
        offset | SIGN_EXTEND_FILL
    } else {
        offset
    }
}
