use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::{Exception, Simulator};

/// Test context owning a simulator with a default configuration.
pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            sim: Simulator::new(&Config::default()),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load a sequence of 32-bit instructions into memory at `addr` and set
    /// the PC.
    pub fn load_program(mut self, addr: u32, instructions: &[u32]) -> Self {
        match self.sim.load_program(addr, instructions) {
            Ok(()) => self,
            Err(e) => panic!("program load failed: {e}"),
        }
    }

    /// Set a register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Step once, panicking if the core halts.
    pub fn step_ok(&mut self) {
        if let Err(e) = self.sim.step() {
            panic!("unexpected halt at pc={:#010x}: {e}", self.sim.cpu.pc);
        }
    }

    /// Step once, panicking if the core does NOT halt; returns the halt
    /// reason.
    pub fn step_err(&mut self) -> Exception {
        match self.sim.step() {
            Ok(()) => panic!("expected halt at pc={:#010x}", self.sim.cpu.pc),
            Err(e) => e,
        }
    }
}
