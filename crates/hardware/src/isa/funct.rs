//! Function-field constants.
//!
//! The 6-bit function-field values (instruction bits 5-0) that select the ALU
//! operation for register-format instructions. Any other value halts the
//! simulation with
//! [`Exception::UnsupportedFunction`](crate::common::Exception::UnsupportedFunction).

/// Integer addition.
pub const FUNCT_ADD: u32 = 0x20;

/// Integer subtraction.
pub const FUNCT_SUB: u32 = 0x22;

/// Bitwise AND.
pub const FUNCT_AND: u32 = 0x24;

/// Bitwise OR.
pub const FUNCT_OR: u32 = 0x25;

/// Set on less than (signed).
pub const FUNCT_SLT: u32 = 0x2A;

/// Set on less than (unsigned).
pub const FUNCT_SLTU: u32 = 0x2B;
