use common::asm::{Cond, Reg, Src2};

use crate::helpers::{add, and, emu_with, halt, not};

#[test]
fn add_reg() {
    let (mut emu, _) = emu_with(&[add(Reg::R0, Reg::R1, Src2::Reg(Reg::R2)), halt()]);
    emu.regs_mut().write(Reg::R1, 5);
    emu.regs_mut().write(Reg::R2, 7);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R0), 12);
    assert_eq!(emu.regs().cond(), Cond::Positive);
}

#[test]
fn add_negative_imm() {
    let (mut emu, _) = emu_with(&[add(Reg::R0, Reg::R1, Src2::imm(-3)), halt()]);
    emu.regs_mut().write(Reg::R1, 5);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R0), 2);
    assert_eq!(emu.regs().cond(), Cond::Positive);
}

#[test]
fn add_wraps() {
    let (mut emu, _) = emu_with(&[add(Reg::R0, Reg::R1, Src2::imm(1)), halt()]);
    emu.regs_mut().write(Reg::R1, 0xFFFF);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R0), 0);
    assert_eq!(emu.regs().cond(), Cond::Zero);
}

#[test]
fn add_overflow_is_silent() {
    // 0x7FFF + 1 flips the sign with no trap.
    let (mut emu, _) = emu_with(&[add(Reg::R0, Reg::R1, Src2::imm(1)), halt()]);
    emu.regs_mut().write(Reg::R1, 0x7FFF);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R0), 0x8000);
    assert_eq!(emu.regs().cond(), Cond::Negative);
}

#[test]
fn and_reg() {
    let (mut emu, _) = emu_with(&[and(Reg::R0, Reg::R1, Src2::Reg(Reg::R2)), halt()]);
    emu.regs_mut().write(Reg::R1, 0xF0F0);
    emu.regs_mut().write(Reg::R2, 0xFF00);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R0), 0xF000);
    assert_eq!(emu.regs().cond(), Cond::Negative);
}

#[test]
fn and_imm_clears() {
    // The standard register-clearing idiom: and rX, rX, #0.
    let (mut emu, _) = emu_with(&[and(Reg::R4, Reg::R4, Src2::imm(0)), halt()]);
    emu.regs_mut().write(Reg::R4, 0xABCD);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R4), 0);
    assert_eq!(emu.regs().cond(), Cond::Zero);
}

#[test]
fn not_complements() {
    let (mut emu, _) = emu_with(&[not(Reg::R0, Reg::R1), halt()]);
    emu.regs_mut().write(Reg::R1, 0x00FF);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R0), 0xFF00);
    assert_eq!(emu.regs().cond(), Cond::Negative);
}

#[test]
fn imm_is_sign_extended() {
    let (mut emu, _) = emu_with(&[add(Reg::R0, Reg::R1, Src2::imm(-16)), halt()]);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R0), 0xFFF0);
    assert_eq!(emu.regs().cond(), Cond::Negative);
}
