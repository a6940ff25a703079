use common::asm::{Reg, Src2};
use common::constants::PC_START;

use crate::helpers::{add, emu_with, halt, jmp, jsr, jsrr, ret};

#[test]
fn jmp_goes_through_base() {
    // R1 points one past a skipped word; jmp lands on the halt.
    let (mut emu, _) = emu_with(&[
        jmp(Reg::R1),
        add(Reg::R0, Reg::R0, Src2::imm(1)),
        halt(),
    ]);
    emu.regs_mut().write(Reg::R1, PC_START + 2);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R0), 0);
    assert_eq!(emu.regs().pc(), PC_START + 3);
}

#[test]
fn jsr_and_ret() {
    let (mut emu, _) = emu_with(&[
        jsr(1),
        halt(),
        add(Reg::R1, Reg::R1, Src2::imm(7)),
        ret(),
    ]);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R1), 7);
    // R7 holds the halt trap's return address; the jsr one was overwritten.
    assert_eq!(emu.regs().read(Reg::RA), PC_START + 2);
}

#[test]
fn jsrr_goes_through_base() {
    let (mut emu, _) = emu_with(&[
        jsrr(Reg::R3),
        halt(),
        add(Reg::R1, Reg::R1, Src2::imm(7)),
        ret(),
    ]);
    emu.regs_mut().write(Reg::R3, PC_START + 2);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R1), 7);
    assert_eq!(emu.regs().read(Reg::RA), PC_START + 2);
}

#[test]
fn jsrr_through_ra_jumps_to_return_address() {
    // The return address is written before the base is read, so jsrr r7
    // lands on the instruction after itself.
    let (mut emu, _) = emu_with(&[jsrr(Reg::RA), halt()]);
    emu.run_ins().unwrap();
    assert_eq!(emu.regs().read(Reg::RA), PC_START + 1);
    assert_eq!(emu.regs().pc(), PC_START + 1);

    // The landing spot is the halt.
    emu.run().unwrap();
    assert_eq!(emu.regs().pc(), PC_START + 2);
}
