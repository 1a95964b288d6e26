//! Stage functions.
//!
//! One module per datapath stage, executed in fixed order by the step
//! driver: fetch, decode, execute, memory access, writeback, and
//! program-counter update. Each stage consumes only the outputs of the prior
//! stages plus the shared register file and memory; a stage that fails
//! returns its exception immediately and no later stage runs.

/// Instruction decode (control-signal generation).
pub mod decode;

/// Execute (operand selection, function-field dispatch, ALU invocation).
pub mod execute;

/// Instruction fetch.
pub mod fetch;

/// Memory access (conditional load/store).
pub mod memory;

/// Program-counter update.
pub mod pc;

/// Register writeback.
pub mod writeback;

pub use decode::decode;
pub use execute::execute;
pub use fetch::fetch;
pub use memory::memory_access;
pub use pc::pc_update;
pub use writeback::write_back;
