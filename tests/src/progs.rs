use common::asm::{BranchIns, PcRelOpcode, Reg, Src2, TrapVector};
use common::constants::PC_START;

use crate::helpers::{add, and, assemble, br, emu_with, emu_with_words, halt, jsr, pc_rel, ret, trap};

#[test]
fn count_to_ten() {
    let (mut emu, _) = emu_with(&[
        and(Reg::R0, Reg::R0, Src2::imm(0)),
        and(Reg::R1, Reg::R1, Src2::imm(0)),
        add(Reg::R1, Reg::R1, Src2::imm(10)),
        add(Reg::R0, Reg::R0, Src2::imm(1)),
        add(Reg::R1, Reg::R1, Src2::imm(-1)),
        br(BranchIns::P, -3),
        halt(),
    ]);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R0), 10);
    assert_eq!(emu.regs().read(Reg::R1), 0);
}

#[test]
fn hello_world() {
    let mut words = assemble(&[
        pc_rel(PcRelOpcode::Lea, Reg::R0, 2),
        trap(TrapVector::Puts),
        halt(),
    ]);
    words.extend("hello, world!".bytes().map(u16::from));
    words.push(0);
    let (mut emu, console) = emu_with_words(&words);
    emu.run().unwrap();
    assert_eq!(console.output_string(), "hello, world!HALT\n");
}

#[test]
fn echo_three_characters() {
    let (mut emu, console) = emu_with(&[
        trap(TrapVector::Getc),
        trap(TrapVector::Out),
        trap(TrapVector::Getc),
        trap(TrapVector::Out),
        trap(TrapVector::Getc),
        trap(TrapVector::Out),
        halt(),
    ]);
    console.write_input(b"abc");
    emu.run().unwrap();
    assert_eq!(console.output_string(), "abcHALT\n");
}

#[test]
fn subroutine_doubles_twice() {
    let (mut emu, _) = emu_with(&[
        and(Reg::R0, Reg::R0, Src2::imm(0)),
        add(Reg::R0, Reg::R0, Src2::imm(3)),
        jsr(2),
        jsr(1),
        halt(),
        add(Reg::R0, Reg::R0, Src2::Reg(Reg::R0)),
        ret(),
    ]);
    emu.run().unwrap();
    assert_eq!(emu.regs().read(Reg::R0), 12);
    // The halt at PC_START + 4 left its own return address in R7.
    assert_eq!(emu.regs().read(Reg::RA), PC_START + 5);
}
