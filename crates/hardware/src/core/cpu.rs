//! CPU architectural state and the single-cycle step driver.
//!
//! This module owns the state that persists across instructions — the
//! program counter, register file, and memory — and drives one instruction
//! through the stage functions per call to [`Cpu::step`]. The stages
//! themselves carry no state; everything an instruction produces lives only
//! for the duration of that step.

use crate::common::{Exception, Memory, RegisterFile};
use crate::config::Config;
use crate::core::pipeline::stages;
use crate::isa::{InstructionFields, sign_extend};
use crate::stats::SimStats;

/// The processor core: architectural state plus the step driver.
///
/// The caller owns the simulation loop. It populates memory and registers,
/// calls [`Cpu::step`] until it returns a halting exception or an external
/// limit is reached, and inspects the public fields afterwards.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Program counter (byte address, word aligned at every stage boundary).
    pub pc: u32,
    /// General-purpose register file.
    pub regs: RegisterFile,
    /// Word-addressed data/instruction memory.
    pub mem: Memory,
    /// Retired-instruction statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory sized per the
    /// configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            pc: config.pc_start,
            regs: RegisterFile::new(),
            mem: Memory::new(config.memory_bytes),
            stats: SimStats::default(),
        }
    }

    /// Executes exactly one instruction.
    ///
    /// Runs the fixed stage sequence: fetch, partition, decode, register
    /// read, sign extension, execute, memory access, writeback, PC update.
    /// Each fallible stage propagates its exception immediately; when a stage
    /// halts, no later stage runs and no further state is mutated.
    ///
    /// # Errors
    ///
    /// Any [`Exception`] raised by fetch, decode, ALU-operation dispatch, or
    /// memory access. The error is the halt status; `Ok(())` means continue.
    pub fn step(&mut self) -> Result<(), Exception> {
        let inst = stages::fetch(self.pc, &self.mem)?;
        let fields = InstructionFields::partition(inst);
        let ctrl = stages::decode(fields.opcode)?;

        let (data1, data2) = self.regs.read_pair(fields.rs, fields.rt);
        let extended = sign_extend(fields.offset);

        let (alu_result, zero) = stages::execute(&ctrl, data1, data2, extended, fields.funct)?;
        let mem_data = stages::memory_access(&ctrl, alu_result, data2, &mut self.mem)?;
        stages::write_back(&ctrl, &fields, mem_data, alu_result, &mut self.regs);
        self.pc = stages::pc_update(self.pc, &ctrl, zero, fields.target, extended);

        self.stats.retire(&ctrl, zero);
        Ok(())
    }
}
