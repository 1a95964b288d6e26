//! Instruction set definitions.
//!
//! This module defines the reduced MIPS-style instruction set understood by
//! the datapath. It includes:
//! 1. **Fields:** Instruction field partition and sign extension.
//! 2. **Opcodes:** The 6-bit opcode values with a defined control mapping.
//! 3. **Function Codes:** The R-format function-field values with a defined
//!    ALU operation.

/// Instruction field partition and sign extension.
pub mod fields;

/// Function-field constants for register-format instructions.
pub mod funct;

/// Opcode constants.
pub mod opcodes;

pub use fields::{InstructionFields, sign_extend};
