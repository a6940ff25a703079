use common::asm::SystemOpcode;
use common::constants::PC_START;
use emu_lib::Fault;

use crate::helpers::{emu_with, emu_with_words, halt};

#[test]
fn rti_faults() {
    let (mut emu, _) = emu_with_words(&[0x8000]);
    let err = emu.run().unwrap_err();
    assert_eq!(err, Fault::Unimplemented { op: SystemOpcode::Rti, pc: PC_START });
}

#[test]
fn reserved_faults() {
    let (mut emu, _) = emu_with_words(&[0xD123]);
    let err = emu.run().unwrap_err();
    assert_eq!(err, Fault::Unimplemented { op: SystemOpcode::Res, pc: PC_START });
}

#[test]
fn fault_reports_the_faulting_pc() {
    // A halt before the bad word keeps it from ever being reached.
    let (mut emu, _) = emu_with_words(&[halt().encode(), 0x8000]);
    emu.run().unwrap();

    // Running past the halt hits it.
    let err = emu.run_at(PC_START + 1).unwrap_err();
    assert_eq!(err, Fault::Unimplemented { op: SystemOpcode::Rti, pc: PC_START + 1 });
}

#[test]
fn fault_display() {
    let (mut emu, _) = emu_with_words(&[0x8000]);
    let err = emu.run().unwrap_err();
    assert_eq!(format!("{err}"), "unimplemented opcode rti at pc 0x3000");
}

#[test]
fn halt_is_not_a_fault() {
    let (mut emu, _) = emu_with(&[halt()]);
    assert!(emu.run().is_ok());
}
