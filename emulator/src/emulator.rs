
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use common::asm::*;
use common::constants::MEM_SIZE;

use log::debug;
use thiserror::Error;

use obj::Image;

use crate::io::MMIOHandler;
use crate::io::console::Console;
use crate::io::keyboard::Keyboard;
use crate::mem::Memory;
use crate::regs::RegisterFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecRet {
    Ok,
    Halt,
}

/// Fetching RTI or the reserved opcode is unrecoverable, but it surfaces as
/// an error the embedder can tell apart from a normal halt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("unimplemented opcode {op} at pc {pc:#06x}")]
    Unimplemented { op: SystemOpcode, pc: u16 },
}

pub struct Emulator {
    pub(crate) regs: RegisterFile,
    pub(crate) mem: Memory,
    pub(crate) console: Arc<dyn Console>,
    mmio_handlers: HashMap<u16, Arc<Mutex<dyn MMIOHandler>>>,
}

impl Emulator {
    pub fn new(console: Arc<dyn Console>) -> Emulator {
        let mut emu = Emulator {
            regs: RegisterFile::new(),
            mem: Memory::new(),
            console: console.clone(),
            mmio_handlers: HashMap::new(),
        };
        emu.set_mmio_handler(Keyboard::new(console));
        emu
    }

    // Run until a halt trap.
    pub fn run(&mut self) -> Result<(), Fault> {
        while self.run_ins()? != ExecRet::Halt {}
        Ok(())
    }

    pub fn run_at(&mut self, pc: u16) -> Result<(), Fault> {
        self.regs.set_pc(pc);
        self.run()
    }

    /// One loop iteration: fetch, increment PC, decode, execute. The PC moves
    /// before execution, so offsets and return addresses are relative to the
    /// next instruction.
    pub fn run_ins(&mut self) -> Result<ExecRet, Fault> {
        let pc = self.regs.pc();
        // The fetch goes through the mapped-register path on purpose: a
        // program may point its PC at the keyboard.
        let word = self.mem_read(pc);
        self.regs.set_pc(pc.wrapping_add(1));

        let ins = decode(word);
        debug!("PC {pc:#06x}: {}", ins.display_with_pc(pc));
        self.exec(&ins)
    }

    pub fn load_image(&mut self, image: &Image) {
        self.load_words(&image.words, image.origin);
    }

    pub fn load_words(&mut self, words: &[u16], start: u16) {
        assert!(words.len() <= MEM_SIZE - start as usize, "image overruns memory");
        for (i, word) in words.iter().enumerate() {
            self.mem.write(start + i as u16, *word);
        }
    }

    pub fn set_mmio_handler(&mut self, handler: impl MMIOHandler + 'static) {
        let handler = Arc::new(Mutex::new(handler));
        for addr in handler.lock().unwrap().default_addrs() {
            let prev = self.mmio_handlers.insert(*addr, handler.clone());
            assert!(prev.is_none(), "Duplicate MMIOHandler for {addr:#06x}");
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    pub fn mem_read(&mut self, addr: u16) -> u16 {
        if let Some(handler) = self.mmio_handlers.get_mut(&addr) {
            return handler.lock().unwrap().read(&mut self.mem, addr);
        }
        self.mem.read(addr)
    }

    pub fn mem_write(&mut self, addr: u16, val: u16) {
        if let Some(handler) = self.mmio_handlers.get_mut(&addr) {
            handler.lock().unwrap().write(&mut self.mem, addr, val);
            return;
        }
        self.mem.write(addr, val)
    }

    pub fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    pub fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    pub fn mem(&self) -> &Memory {
        &self.mem
    }

    pub fn mem_mut(&mut self) -> &mut Memory {
        &mut self.mem
    }

    ///////////////////////////////////////////////////////////////////////////
    // Execute
    ///////////////////////////////////////////////////////////////////////////

    fn exec(&mut self, ins: &Ins) -> Result<ExecRet, Fault> {
        match ins {
            Ins::Operate(ins) => self.exec_operate_ins(ins),
            Ins::Not(ins) => self.exec_not_ins(ins),
            Ins::Branch(ins) => self.exec_branch_ins(ins),
            Ins::Jump(ins) => self.exec_jump_ins(ins),
            Ins::Subroutine(ins) => self.exec_subroutine_ins(ins),
            Ins::PcRel(ins) => self.exec_pc_rel_ins(ins),
            Ins::BaseOffset(ins) => self.exec_base_offset_ins(ins),
            Ins::Trap(ins) => return self.exec_trap_ins(ins),
            Ins::System(ins) => {
                return Err(Fault::Unimplemented {
                    op: ins.op,
                    pc: self.regs.pc().wrapping_sub(1),
                });
            }
        }
        Ok(ExecRet::Ok)
    }

    fn exec_operate_ins(&mut self, ins: &OperateIns) {
        let lhs = self.regs.read(ins.sr1);
        let rhs = match ins.src2 {
            Src2::Reg(reg) => self.regs.read(reg),
            Src2::Imm(imm) => imm,
        };
        let res = match ins.op {
            OperateOpcode::Add => lhs.wrapping_add(rhs),
            OperateOpcode::And => lhs & rhs,
        };
        self.regs.write(ins.dr, res);
        self.regs.set_cc(ins.dr);
    }

    fn exec_not_ins(&mut self, ins: &NotIns) {
        let res = !self.regs.read(ins.sr);
        self.regs.write(ins.dr, res);
        self.regs.set_cc(ins.dr);
    }

    fn exec_branch_ins(&mut self, ins: &BranchIns) {
        if ins.taken(self.regs.cond()) {
            let pc = self.regs.pc().wrapping_add(ins.offset);
            self.regs.set_pc(pc);
        }
    }

    fn exec_jump_ins(&mut self, ins: &JumpIns) {
        self.regs.set_pc(self.regs.read(ins.base));
    }

    fn exec_subroutine_ins(&mut self, ins: &SubroutineIns) {
        // Return address first; JSRR through R7 therefore jumps to it.
        self.regs.write(Reg::RA, self.regs.pc());
        match ins.target {
            JsrTarget::Offset(offset) => {
                let pc = self.regs.pc().wrapping_add(offset);
                self.regs.set_pc(pc);
            }
            JsrTarget::Reg(base) => self.regs.set_pc(self.regs.read(base)),
        }
    }

    fn exec_pc_rel_ins(&mut self, ins: &PcRelIns) {
        let addr = self.regs.pc().wrapping_add(ins.offset);
        use PcRelOpcode::*;
        match ins.op {
            Ld => {
                let val = self.mem_read(addr);
                self.regs.write(ins.reg, val);
                self.regs.set_cc(ins.reg);
            }
            Ldi => {
                let ind = self.mem_read(addr);
                let val = self.mem_read(ind);
                self.regs.write(ins.reg, val);
                self.regs.set_cc(ins.reg);
            }
            Lea => {
                self.regs.write(ins.reg, addr);
                self.regs.set_cc(ins.reg);
            }
            St => {
                let val = self.regs.read(ins.reg);
                self.mem_write(addr, val);
            }
            Sti => {
                let ind = self.mem_read(addr);
                let val = self.regs.read(ins.reg);
                self.mem_write(ind, val);
            }
        }
    }

    fn exec_base_offset_ins(&mut self, ins: &BaseOffsetIns) {
        let addr = self.regs.read(ins.base).wrapping_add(ins.offset);
        match ins.op {
            BaseOffsetOpcode::Ldr => {
                let val = self.mem_read(addr);
                self.regs.write(ins.reg, val);
                self.regs.set_cc(ins.reg);
            }
            BaseOffsetOpcode::Str => {
                let val = self.regs.read(ins.reg);
                self.mem_write(addr, val);
            }
        }
    }
}
