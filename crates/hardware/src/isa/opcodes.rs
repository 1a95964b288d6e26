//! Opcode constants.
//!
//! The 6-bit opcode values (instruction bits 31-26) with a defined
//! control-signal mapping. Any other opcode halts the simulation with
//! [`Exception::UnsupportedOpcode`](crate::common::Exception::UnsupportedOpcode).

/// Register-format operation; the ALU operation comes from the function field.
pub const OP_RTYPE: u32 = 0x00;

/// Unconditional jump.
pub const OP_J: u32 = 0x02;

/// Branch on equal.
pub const OP_BEQ: u32 = 0x04;

/// Add immediate.
pub const OP_ADDI: u32 = 0x08;

/// Load word.
pub const OP_LW: u32 = 0x23;

/// Store word.
pub const OP_SW: u32 = 0x2B;
