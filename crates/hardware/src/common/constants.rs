//! Global system constants.
//!
//! This module defines system-wide constants used across the simulator. It
//! includes:
//! 1. **Memory Constants:** The architectural memory bound and word size.
//! 2. **Instruction Constants:** Field masks and shifts for instruction
//!    partition.
//! 3. **PC Constants:** Masks used by program-counter update.

/// Architectural memory bound in bytes (64 KiB).
pub const MEM_SIZE_BYTES: u32 = 65536;

/// Size of one memory word (and one instruction) in bytes.
pub const WORD_BYTES: u32 = 4;

/// Bit mask for the 6-bit opcode and function fields.
pub const OPCODE_MASK: u32 = 0x3F;

/// Bit position shift for the opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;

/// Bit mask for the 5-bit register index fields.
pub const REG_MASK: u32 = 0x1F;

/// Bit position shift for the first source register field (bits 25-21).
pub const RS_SHIFT: u32 = 21;

/// Bit position shift for the second source register field (bits 20-16).
pub const RT_SHIFT: u32 = 16;

/// Bit position shift for the destination register field (bits 15-11).
pub const RD_SHIFT: u32 = 11;

/// Bit mask for the 16-bit offset/immediate field (bits 15-0).
pub const OFFSET_MASK: u32 = 0xFFFF;

/// Bit mask for the 26-bit jump-target field (bits 25-0).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Bit position of the sign bit within the 16-bit offset field.
pub const OFFSET_SIGN_BIT: u32 = 0x8000;

/// Upper-half fill applied when sign-extending a negative 16-bit offset.
pub const SIGN_EXTEND_FILL: u32 = 0xFFFF_0000;

/// High-order PC bits preserved when forming a jump target address.
pub const JUMP_SEGMENT_MASK: u32 = 0xF000_0000;

/// Left shift applied to branch offsets and jump targets (word addressing).
pub const BRANCH_TARGET_SHIFT: u32 = 2;
