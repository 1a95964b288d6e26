//! Functional units.
//!
//! The execution resources of the datapath. The single-cycle design needs
//! only one:
//! 1. **ALU:** Integer arithmetic, comparisons, and bitwise operations.

/// Arithmetic logic unit.
pub mod alu;
