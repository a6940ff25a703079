pub mod console;
pub mod keyboard;

use crate::mem::Memory;

/// A device behind one or more mapped addresses. The emulator routes reads
/// and writes of those addresses here; the handler decides what (if anything)
/// lands in the backing cells.
pub trait MMIOHandler: Send {
    fn read(&mut self, mem: &mut Memory, addr: u16) -> u16;
    fn write(&mut self, mem: &mut Memory, addr: u16, val: u16);

    fn default_addrs(&self) -> &[u16] {
        &[]
    }
}
