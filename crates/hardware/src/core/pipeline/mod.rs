//! Datapath pipeline.
//!
//! The single-cycle datapath expressed as a fixed sequence of stage
//! functions. This module provides:
//! 1. **Signals:** The control-signal vector produced by decode and the ALU
//!    operation selector.
//! 2. **Stages:** Fetch, decode, execute, memory access, writeback, and
//!    program-counter update.

/// Control-signal definitions.
pub mod signals;

/// Stage functions.
pub mod stages;
