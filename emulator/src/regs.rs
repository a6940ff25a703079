use common::asm::{Cond, Reg};
use common::constants::{NUM_REGS, PC_START};

use log::trace;
use num_traits::ToPrimitive;

// Separate from Emulator so tests and collaborators can poke at registers
// without going through the executor.
pub struct RegisterFile {
    regs: [u16; NUM_REGS],
    pc: u16,
    cond: Cond,
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            regs: [0; NUM_REGS],
            pc: PC_START,
            cond: Cond::Zero,
        }
    }

    pub fn read(&self, reg: Reg) -> u16 {
        self.regs[reg.to_usize().unwrap()]
    }

    pub fn write(&mut self, reg: Reg, val: u16) {
        trace!("Reg: writing {val:#06x} to {reg}");
        self.regs[reg.to_usize().unwrap()] = val;
    }

    /// Recompute COND from the value sitting in `reg`.
    pub fn set_cc(&mut self, reg: Reg) {
        self.cond = Cond::of(self.read(reg));
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    pub fn cond(&self) -> Cond {
        self.cond
    }

    pub fn set_cond(&mut self, cond: Cond) {
        self.cond = cond;
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
