//! Simulation driver.
//!
//! This module provides the `Simulator`, a thin owner of the [`Cpu`] for
//! drivers that want the common loop written once: load a program image, run
//! until the core halts or a step limit is reached, and report why the loop
//! stopped. Callers that need finer control can drive [`Cpu::step`]
//! directly.

use crate::common::Exception;
use crate::config::Config;
use crate::core::Cpu;

/// Why a [`Simulator::run`] loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The core raised a halting exception after the given number of steps.
    Halted(Exception),
    /// The step limit was reached with the core still running.
    LimitReached,
}

/// Top-level simulation driver owning the CPU.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The processor core (architectural state and step driver).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator with a freshly reset CPU.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
        }
    }

    /// Loads a program image at `base` and points the PC at it.
    ///
    /// # Errors
    ///
    /// Returns [`Exception::InvalidMemoryAddress`] when the image does not
    /// fit at word-aligned addresses within the memory bound.
    pub fn load_program(&mut self, base: u32, words: &[u32]) -> Result<(), Exception> {
        self.cpu.mem.load_words(base, words)?;
        self.cpu.pc = base;
        Ok(())
    }

    /// Advances the simulation by one instruction.
    ///
    /// # Errors
    ///
    /// The halting exception, when this instruction halted.
    pub fn step(&mut self) -> Result<(), Exception> {
        self.cpu.step()
    }

    /// Runs the core until it halts or `max_steps` instructions have
    /// retired.
    pub fn run(&mut self, max_steps: u64) -> RunOutcome {
        for _ in 0..max_steps {
            if let Err(exception) = self.cpu.step() {
                return RunOutcome::Halted(exception);
            }
        }
        RunOutcome::LimitReached
    }
}
