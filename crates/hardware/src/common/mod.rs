//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared across all components of
//! the datapath. It includes:
//! 1. **Constants:** Memory bounds and instruction field masks and shifts.
//! 2. **Memory Access:** Classification of memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** The halting-condition exception type.
//! 4. **Architectural State:** The word-addressed memory and the register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Exception (halting condition) definitions.
pub mod error;

/// Word-addressed data memory.
pub mod mem;

/// Register file implementation.
pub mod reg;

pub use data::AccessType;
pub use error::Exception;
pub use mem::Memory;
pub use reg::RegisterFile;
