
use common::asm::{Reg, TrapIns, TrapVector};

use log::warn;

use crate::emulator::{Emulator, ExecRet, Fault};

const IN_PROMPT: &[u8] = b"Enter a character: ";
const HALT_NOTICE: &[u8] = b"HALT\n";

impl Emulator {
    pub(crate) fn exec_trap_ins(&mut self, ins: &TrapIns) -> Result<ExecRet, Fault> {
        // The TRAP opcode itself saves the return address.
        self.regs.write(Reg::RA, self.regs.pc());

        let Some(vector) = ins.service() else {
            // Unknown vectors fall through with no effect.
            warn!("TRAP with unknown vector {:#04x}", ins.vector);
            return Ok(ExecRet::Ok);
        };

        match vector {
            TrapVector::Getc => self.trap_getc(),
            TrapVector::Out => self.trap_out(),
            TrapVector::Puts => self.trap_puts(),
            TrapVector::In => self.trap_in(),
            TrapVector::Putsp => self.trap_putsp(),
            TrapVector::Halt => return Ok(self.trap_halt()),
        }
        Ok(ExecRet::Ok)
    }

    // Read one byte, no echo.
    fn trap_getc(&mut self) {
        let val = self.console.read_input();
        self.regs.write(Reg::R0, val as u16);
        self.regs.set_cc(Reg::R0);
    }

    fn trap_out(&mut self) {
        let val = self.regs.read(Reg::R0) as u8;
        self.console.write_output(val);
        self.console.flush();
    }

    // One character per word starting at R0, until a zero word. String reads
    // go to the plain cells; they don't poll the keyboard.
    fn trap_puts(&mut self) {
        let mut addr = self.regs.read(Reg::R0);
        loop {
            let word = self.mem.read(addr);
            if word == 0 {
                break;
            }
            self.console.write_output(word as u8);
            addr = addr.wrapping_add(1);
        }
        self.console.flush();
    }

    // Prompt, read one byte, echo it.
    fn trap_in(&mut self) {
        for val in IN_PROMPT {
            self.console.write_output(*val);
        }
        self.console.flush();

        let val = self.console.read_input();
        self.console.write_output(val);
        self.console.flush();

        self.regs.write(Reg::R0, val as u16);
        self.regs.set_cc(Reg::R0);
    }

    // Two characters per word, low byte first, high byte only when non-zero.
    fn trap_putsp(&mut self) {
        let mut addr = self.regs.read(Reg::R0);
        loop {
            let word = self.mem.read(addr);
            if word == 0 {
                break;
            }
            self.console.write_output(word as u8);
            let high = (word >> u8::BITS) as u8;
            if high != 0 {
                self.console.write_output(high);
            }
            addr = addr.wrapping_add(1);
        }
        self.console.flush();
    }

    fn trap_halt(&mut self) -> ExecRet {
        for val in HALT_NOTICE {
            self.console.write_output(*val);
        }
        self.console.flush();
        ExecRet::Halt
    }
}
