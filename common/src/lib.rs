pub mod asm;
pub mod constants;
pub mod mem;
pub mod misc;
