//! General-purpose register file.
//!
//! This module implements the 32-entry register file of the datapath. It
//! performs the following:
//! 1. **Storage:** Maintains 32 general-purpose 32-bit registers.
//! 2. **Operand Read:** Returns both source operands for a decoded
//!    instruction in one call.
//! 3. **Debugging:** Provides a utility for dumping the complete register
//!    state.
//!
//! Register 0 is a zero register by software convention only; this datapath
//! does not hard-wire it, so writes to index 0 take effect like any other.

/// General-purpose register file.
///
/// Contains 32 registers indexed 0-31. Indices produced by instruction
/// partition are 5-bit fields, so they are always in range by construction.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [u32; 32],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Reads both source operands for an instruction.
    ///
    /// # Arguments
    ///
    /// * `rs` - First source register field (5-bit, always in range).
    /// * `rt` - Second source register field (5-bit, always in range).
    ///
    /// # Returns
    ///
    /// The values of `rs` and `rt`, in that order.
    pub fn read_pair(&self, rs: u32, rt: u32) -> (u32, u32) {
        (self.regs[rs as usize], self.regs[rt as usize])
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting for debugging
    /// purposes.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            println!(
                "r{:<2}={:#010x} r{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
