//! Memory access types.
//!
//! This module defines the classification of memory accesses used by the
//! bounds-checked memory accessors. These types are used for the following:
//! 1. **Fault Selection:** Choosing between fetch and data exceptions when an
//!    address is misaligned or out of the architectural bound.
//! 2. **Tracing:** Labelling memory operations in stage trace events.

/// Type of memory access operation.
///
/// Used to distinguish instruction fetches from data loads and stores so
/// that invalid addresses produce the correct halting condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when reading the instruction word at the current program
    /// counter. An invalid address raises
    /// [`Exception::InvalidFetchAddress`](super::Exception::InvalidFetchAddress).
    Fetch,

    /// Data read access.
    ///
    /// Occurs during load instructions. An invalid address raises
    /// [`Exception::InvalidMemoryAddress`](super::Exception::InvalidMemoryAddress).
    Read,

    /// Data write access.
    ///
    /// Occurs during store instructions. An invalid address raises
    /// [`Exception::InvalidMemoryAddress`](super::Exception::InvalidMemoryAddress).
    Write,
}
