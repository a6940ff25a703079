
use std::sync::Arc;

use common::constants::{KB_READY, KBDR, KBSR};

use crate::io::MMIOHandler;
use crate::io::console::Console;
use crate::mem::Memory;

/// The keyboard device behind KBSR/KBDR. A status read polls the console and
/// refreshes both cells first, so an ordinary load doubles as a keyboard poll
/// without any opcode knowing about it.
pub struct Keyboard {
    console: Arc<dyn Console>,
}

impl Keyboard {
    pub fn new(console: Arc<dyn Console>) -> Keyboard {
        Keyboard { console }
    }
}

impl MMIOHandler for Keyboard {
    fn read(&mut self, mem: &mut Memory, addr: u16) -> u16 {
        if addr == KBSR {
            if self.console.input_available() {
                mem.write(KBSR, KB_READY);
                mem.write(KBDR, self.console.read_input() as u16);
            } else {
                mem.write(KBSR, 0);
            }
        }
        mem.read(addr)
    }

    // Writes to the mapped cells are plain stores.
    fn write(&mut self, mem: &mut Memory, addr: u16, val: u16) {
        mem.write(addr, val);
    }

    fn default_addrs(&self) -> &[u16] {
        &[KBSR, KBDR]
    }
}
