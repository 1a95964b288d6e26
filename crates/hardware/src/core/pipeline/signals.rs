//! Datapath control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It
//! performs:
//! 1. **Operation Classification:** The closed set of ALU operations.
//! 2. **Operation Selection:** How the execute stage resolves the ALU
//!    operation (directly from decode, or from the function field).
//! 3. **Datapath Control:** The boolean flags consumed by the operand-select,
//!    memory, writeback, and PC-update logic.
//!
//! The control vector is an immutable value fully determined by the opcode
//! field alone; decode returns a fresh vector per instruction, so no state
//! carries over between instructions.

/// ALU operation types.
///
/// A closed enumeration: every selector value the execute stage can produce
/// is a defined operation, so there is no default fall-through case in the
/// ALU itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition (default; also computes effective addresses).
    #[default]
    Add,

    /// Integer subtraction (also drives the branch equality test).
    Sub,

    /// Set on less than (signed).
    Slt,

    /// Set on less than (unsigned).
    Sltu,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Shift the second operand left by 16 bits.
    Sll16,

    /// Bitwise NOT of the first operand.
    Not,
}

/// ALU-operation selector carried in the control vector.
///
/// Register-format instructions defer the choice of operation to the
/// function field, resolved by the execute stage; every other instruction
/// names its operation directly at decode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluSel {
    /// Use the named operation.
    Direct(AluOp),

    /// Resolve the operation from the instruction's function field.
    Funct,
}

impl Default for AluSel {
    fn default() -> Self {
        Self::Direct(AluOp::Add)
    }
}

/// Control-signal vector produced by the decode stage.
///
/// A pure function of the opcode field; all flags default to false and the
/// ALU selector to `Add`, matching the hardware decoder's inactive state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Select the `rd` field (rather than `rt`) as the destination register.
    pub reg_dst: bool,
    /// Select the sign-extended immediate (rather than the second register
    /// value) as the ALU's second operand.
    pub alu_src: bool,
    /// Write the memory value (rather than the ALU result) back to the
    /// destination register.
    pub mem_to_reg: bool,
    /// Commit a value to the destination register in the writeback stage.
    pub reg_write: bool,
    /// Read memory at the ALU result in the memory stage.
    pub mem_read: bool,
    /// Write memory at the ALU result in the memory stage.
    pub mem_write: bool,
    /// Add the shifted branch offset to the PC when the ALU zero flag is set.
    pub branch: bool,
    /// Replace the PC with the jump target.
    pub jump: bool,
    /// ALU-operation selector for the execute stage.
    pub alu: AluSel,
}
