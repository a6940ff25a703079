use common::asm::{BaseOffsetOpcode, PcRelOpcode, Reg};
use common::constants::PC_START;

use crate::helpers::{assemble, base_offset, emu_with, emu_with_words, halt, pc_rel};

#[test]
fn st() {
    let (mut emu, _) = emu_with(&[pc_rel(PcRelOpcode::St, Reg::R0, 3), halt()]);
    emu.regs_mut().write(Reg::R0, 0xCAFE);
    emu.run().unwrap();
    assert_eq!(emu.mem().read(PC_START + 4), 0xCAFE);
}

#[test]
fn st_negative_offset() {
    let (mut emu, _) = emu_with(&[pc_rel(PcRelOpcode::St, Reg::R0, -2), halt()]);
    emu.regs_mut().write(Reg::R0, 0xCAFE);
    emu.run().unwrap();
    assert_eq!(emu.mem().read(PC_START - 1), 0xCAFE);
}

#[test]
fn sti() {
    let mut words = assemble(&[pc_rel(PcRelOpcode::Sti, Reg::R0, 1), halt()]);
    words.push(0x4000);
    let (mut emu, _) = emu_with_words(&words);
    emu.regs_mut().write(Reg::R0, 0xCAFE);
    emu.run().unwrap();
    assert_eq!(emu.mem().read(0x4000), 0xCAFE);
    // The pointer itself is untouched.
    assert_eq!(emu.mem().read(PC_START + 2), 0x4000);
}

#[test]
fn str() {
    let (mut emu, _) = emu_with(&[
        base_offset(BaseOffsetOpcode::Str, Reg::R0, Reg::R1, 2),
        halt(),
    ]);
    emu.regs_mut().write(Reg::R0, 55);
    emu.regs_mut().write(Reg::R1, 0x4000);
    emu.run().unwrap();
    assert_eq!(emu.mem().read(0x4002), 55);
}

#[test]
fn str_negative_offset() {
    let (mut emu, _) = emu_with(&[
        base_offset(BaseOffsetOpcode::Str, Reg::R0, Reg::R1, -1),
        halt(),
    ]);
    emu.regs_mut().write(Reg::R0, 55);
    emu.regs_mut().write(Reg::R1, 0x4000);
    emu.run().unwrap();
    assert_eq!(emu.mem().read(0x3FFF), 55);
}

#[test]
fn stores_leave_cond_alone() {
    let (mut emu, _) = emu_with(&[pc_rel(PcRelOpcode::St, Reg::R0, 3), halt()]);
    emu.regs_mut().write(Reg::R0, 0x8000);
    let before = emu.regs().cond();
    emu.run().unwrap();
    assert_eq!(emu.regs().cond(), before);
}
