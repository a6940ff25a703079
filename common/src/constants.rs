
// The address space is word-addressed; every cell is 16 bits.
pub const MEM_SIZE: usize = 1 << 16;

pub const NUM_REGS: usize = 8;

// Where execution begins unless told otherwise.
pub const PC_START: u16 = 0x3000;

// Memory-mapped keyboard registers.
pub const KBSR: u16 = 0xFE00; // Status
pub const KBDR: u16 = 0xFE02; // Data

// Set in KBSR when a key is available.
pub const KB_READY: u16 = 1 << 15;
