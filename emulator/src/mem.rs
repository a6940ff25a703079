use common::constants::MEM_SIZE;

use log::trace;

/// The plain 64K-word store. Mapped-register side effects live in the MMIO
/// handlers, not here.
pub struct Memory {
    cells: Vec<u16>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory { cells: vec![0; MEM_SIZE] }
    }

    pub fn read(&self, addr: u16) -> u16 {
        self.cells[addr as usize]
    }

    pub fn write(&mut self, addr: u16, val: u16) {
        trace!("Mem: writing {val:#06x} to {addr:#06x}");
        self.cells[addr as usize] = val;
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
