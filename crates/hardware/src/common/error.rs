//! Exception definitions.
//!
//! This module defines the halting conditions of the simulator. It provides:
//! 1. **Exception Representation:** One variant per defined halting condition,
//!    each carrying the faulting address or field value.
//! 2. **Error Handling:** Integration with standard Rust error traits for
//!    driver-level reporting.
//!
//! Every exception is terminal for the instruction that raised it: the step
//! driver stops the current instruction's processing immediately, performs no
//! further mutation, and surfaces the exception to its caller. There are no
//! transient or retryable failures; each exception is deterministic given the
//! same architectural state.

use thiserror::Error;

/// A halting condition raised by one of the datapath stages.
///
/// Raised through `Result` by the stages that can fail (fetch, decode,
/// ALU-operation dispatch, memory access) and propagated unchanged by the
/// step driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Exception {
    /// The program counter was misaligned or beyond the memory bound at
    /// fetch time. The associated value is the faulting PC.
    #[error("invalid fetch address {0:#010x}")]
    InvalidFetchAddress(u32),

    /// The decode stage received an opcode with no defined control mapping.
    /// The associated value is the opcode field.
    #[error("unsupported opcode {0:#04x}")]
    UnsupportedOpcode(u32),

    /// A register-format instruction carried a function field with no defined
    /// ALU operation. The associated value is the function field.
    #[error("unsupported function code {0:#04x}")]
    UnsupportedFunction(u32),

    /// The memory stage received an effective address that was misaligned or
    /// beyond the memory bound for a requested read or write. The associated
    /// value is the faulting address.
    #[error("invalid memory address {0:#010x}")]
    InvalidMemoryAddress(u32),
}
