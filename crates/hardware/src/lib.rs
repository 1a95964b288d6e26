//! Single-cycle MIPS-style datapath simulator library.
//!
//! This crate implements a cycle-level functional simulator for a reduced
//! 32-bit MIPS-style ISA with the following:
//! 1. **Core:** Architectural state (PC, register file, memory) and the
//!    single-cycle step driver.
//! 2. **Pipeline:** The datapath stage functions (fetch, decode, execute,
//!    memory access, writeback, PC update) and their control signals.
//! 3. **ISA:** Opcode/function-code constants, instruction field partition,
//!    and sign extension.
//! 4. **Simulation:** A `Simulator` run loop with a step limit, configuration,
//!    and retired-instruction statistics.
//!
//! Exactly one instruction retires per call to [`Cpu::step`]; a halting
//! condition (unsupported opcode or function code, misaligned or
//! out-of-bounds fetch or data access) is returned as a typed [`Exception`]
//! and performs no partial state mutation.

/// Common types and constants (memory, register file, exceptions).
pub mod common;
/// Simulator configuration (defaults and deserializable structure).
pub mod config;
/// CPU core (architectural state, stage functions, ALU).
pub mod core;
/// Instruction set (field partition, sign extension, opcode/funct constants).
pub mod isa;
/// Simulation driver (run loop with step limit).
pub mod sim;
/// Simulation statistics collection.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Halting conditions surfaced by the step driver.
pub use crate::common::Exception;
/// Main CPU type; holds the PC, register file, memory, and statistics.
pub use crate::core::Cpu;
/// Simulation driver; owns a [`Cpu`] and runs it to a halt or step limit.
pub use crate::sim::Simulator;
