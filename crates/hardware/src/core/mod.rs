//! CPU core.
//!
//! This module contains the architectural state and the datapath logic:
//! 1. **Cpu:** PC, register file, memory, statistics, and the single-cycle
//!    step driver.
//! 2. **Pipeline:** Control signals and the stage functions.
//! 3. **Units:** The arithmetic logic unit.

/// Architectural state and the step driver.
pub mod cpu;

/// Control signals and stage functions.
pub mod pipeline;

/// Functional units (ALU).
pub mod units;

pub use cpu::Cpu;
