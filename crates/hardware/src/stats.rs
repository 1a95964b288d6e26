//! Simulation statistics collection.
//!
//! This module tracks retired-instruction counts for the simulator. It
//! provides:
//! 1. **Totals:** Instructions retired across the whole run.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch,
//!    jump).
//! 3. **Branch behavior:** How many branches were taken.
//!
//! In a single-cycle design one instruction retires per cycle, so the
//! retired count is also the cycle count.

use crate::core::pipeline::signals::ControlSignals;

/// Retired-instruction statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch instructions retired.
    pub inst_branch: u64,
    /// Count of branch instructions whose branch was taken.
    pub branches_taken: u64,
    /// Count of jump instructions retired.
    pub inst_jump: u64,
    /// Count of ALU (non-load/store/branch/jump) instructions retired.
    pub inst_alu: u64,
}

impl SimStats {
    /// Records one retired instruction, categorized by its control vector.
    ///
    /// # Arguments
    ///
    /// * `ctrl` - The instruction's control-signal vector.
    /// * `zero` - The ALU zero flag (decides whether a branch was taken).
    pub fn retire(&mut self, ctrl: &ControlSignals, zero: bool) {
        self.instructions_retired += 1;
        if ctrl.mem_read {
            self.inst_load += 1;
        } else if ctrl.mem_write {
            self.inst_store += 1;
        } else if ctrl.branch {
            self.inst_branch += 1;
            if zero {
                self.branches_taken += 1;
            }
        } else if ctrl.jump {
            self.inst_jump += 1;
        } else {
            self.inst_alu += 1;
        }
    }
}
