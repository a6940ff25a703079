pub mod emulator;
pub mod io;
pub mod mem;
pub mod regs;
pub mod traps;

pub use emulator::{Emulator, ExecRet, Fault};
pub use io::MMIOHandler;
pub use io::console::Console;
pub use mem::Memory;
pub use regs::RegisterFile;
