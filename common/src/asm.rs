
use std::fmt;

use delegate::delegate;
use derive_more::{IsVariant, Unwrap};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::misc::{fits_signed, sign_extend};

// The opcode lives in the top four bits of every instruction word. Each
// instruction family below covers one operand layout; a family's opcode enum
// holds exactly the 4-bit codes that use that layout, so decoding is "ask each
// family in turn".
pub trait InstrVariant<Opcode: FromPrimitive> {
    const OPCODE_BITS: usize = 4;
    const LOWER_BITS: usize = (u16::BITS as usize) - Self::OPCODE_BITS;

    fn decode_opcode(input: u16) -> Option<Opcode> {
        Opcode::from_u16(input >> Self::LOWER_BITS)
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum Reg {
    R0 = 0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
}

impl Reg {
    pub const NUM_BITS: usize = 3;
    pub const MASK: u16 = (1u16 << Self::NUM_BITS) - 1;

    // R7 receives return addresses from JSR/JSRR and TRAP; otherwise it's an
    // ordinary register.
    pub const RA: Reg = Reg::R7;

    fn decode(input: u16, shift: usize) -> Reg {
        Reg::from_u16((input >> shift) & Self::MASK).unwrap()
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

////////////////////////////////////////////////////////////////////////////////

// Exactly one condition holds at all times.
#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum Cond {
    Positive = 0b001,
    Zero = 0b010,
    Negative = 0b100,
}

impl Cond {
    /// Classify a 16-bit value: zero, negative (bit 15 set), else positive.
    pub fn of(val: u16) -> Cond {
        if val == 0 {
            Cond::Zero
        } else if val >> 15 != 0 {
            Cond::Negative
        } else {
            Cond::Positive
        }
    }

    pub fn bits(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

////////////////////////////////////////////////////////////////////////////////

// The six service routines reachable through TRAP.
#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum TrapVector {
    Getc = 0x20,
    Out,
    Puts,
    In,
    Putsp,
    Halt,
}

impl fmt::Display for TrapVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

////////////////////////////////////////////////////////////////////////////////

// Second operand of ADD/AND: a register, or a 5-bit immediate selected by
// bit 5. Imm holds the already-sign-extended value.
#[derive(Debug, Clone, Copy, IsVariant, Unwrap, PartialEq, Eq)]
pub enum Src2 {
    Reg(Reg),
    Imm(u16),
}

impl Src2 {
    pub const IMM_NUM_BITS: usize = 5;
    pub const IMM_MASK: u16 = (1u16 << Self::IMM_NUM_BITS) - 1;
    const IMM_FLAG: u16 = 1 << Self::IMM_NUM_BITS;

    pub fn imm(val: i16) -> Src2 {
        Src2::Imm(val as u16)
    }

    fn encode(&self) -> u16 {
        match self {
            Src2::Reg(reg) => reg.to_u16().unwrap(),
            Src2::Imm(val) => {
                debug_assert!(fits_signed(*val, Self::IMM_NUM_BITS as u32));
                Self::IMM_FLAG | (val & Self::IMM_MASK)
            }
        }
    }

    fn decode(input: u16) -> Src2 {
        if input & Self::IMM_FLAG != 0 {
            Src2::Imm(sign_extend(input & Self::IMM_MASK, Self::IMM_NUM_BITS as u32))
        } else {
            Src2::Reg(Reg::decode(input, 0))
        }
    }
}

impl fmt::Display for Src2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Src2::Reg(reg) => write!(f, "{reg}"),
            Src2::Imm(val) => write!(f, "#{}", *val as i16),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum OperateOpcode {
    Add = 0x1,
    And = 0x5,
}

impl fmt::Display for OperateOpcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperateIns {
    pub op: OperateOpcode,
    pub dr: Reg,
    pub sr1: Reg,
    pub src2: Src2,
}

impl InstrVariant<OperateOpcode> for OperateIns {}

impl OperateIns {
    const DR_SHIFT: usize = 9;
    const SR1_SHIFT: usize = 6;

    pub fn encode(&self) -> u16 {
        (self.op.to_u16().unwrap() << Self::LOWER_BITS)
            | (self.dr.to_u16().unwrap() << Self::DR_SHIFT)
            | (self.sr1.to_u16().unwrap() << Self::SR1_SHIFT)
            | self.src2.encode()
    }

    fn decode(input: u16) -> Option<Ins> {
        let op = Self::decode_opcode(input)?;
        let dr = Reg::decode(input, Self::DR_SHIFT);
        let sr1 = Reg::decode(input, Self::SR1_SHIFT);
        let src2 = Src2::decode(input);
        Some(Ins::Operate(Self { op, dr, sr1, src2 }))
    }

    pub fn fmt_with_pc(&self, f: &mut fmt::Formatter, _pc: u16) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for OperateIns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}, {}, {}", self.op, self.dr, self.sr1, self.src2)
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum NotOpcode {
    Not = 0x9,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotIns {
    pub op: NotOpcode,
    pub dr: Reg,
    pub sr: Reg,
}

impl InstrVariant<NotOpcode> for NotIns {}

impl NotIns {
    const DR_SHIFT: usize = 9;
    const SR_SHIFT: usize = 6;
    const ONES: u16 = 0x3F; // Bits 5-0 are all set

    pub fn encode(&self) -> u16 {
        (self.op.to_u16().unwrap() << Self::LOWER_BITS)
            | (self.dr.to_u16().unwrap() << Self::DR_SHIFT)
            | (self.sr.to_u16().unwrap() << Self::SR_SHIFT)
            | Self::ONES
    }

    fn decode(input: u16) -> Option<Ins> {
        let op = Self::decode_opcode(input)?;
        let dr = Reg::decode(input, Self::DR_SHIFT);
        let sr = Reg::decode(input, Self::SR_SHIFT);
        Some(Ins::Not(Self { op, dr, sr }))
    }

    pub fn fmt_with_pc(&self, f: &mut fmt::Formatter, _pc: u16) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for NotIns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "not\t{}, {}", self.dr, self.sr)
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum BranchOpcode {
    Br = 0x0,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchIns {
    pub op: BranchOpcode,
    pub mask: u16, // n/z/p bits 11-9
    pub offset: u16, // Sign-extended from 9 bits
}

impl InstrVariant<BranchOpcode> for BranchIns {}

impl BranchIns {
    pub const N: u16 = Cond::Negative as u16;
    pub const Z: u16 = Cond::Zero as u16;
    pub const P: u16 = Cond::Positive as u16;
    pub const NZP: u16 = Self::N | Self::Z | Self::P;

    pub const OFFSET_NUM_BITS: usize = 9;
    pub const OFFSET_MASK: u16 = (1u16 << Self::OFFSET_NUM_BITS) - 1;
    const MASK_SHIFT: usize = 9;

    pub fn new(mask: u16, offset: i16) -> BranchIns {
        assert_eq!(mask & !Self::NZP, 0);
        BranchIns { op: BranchOpcode::Br, mask, offset: offset as u16 }
    }

    pub fn taken(&self, cond: Cond) -> bool {
        self.mask & cond.bits() != 0
    }

    pub fn encode(&self) -> u16 {
        debug_assert!(fits_signed(self.offset, Self::OFFSET_NUM_BITS as u32));
        (self.op.to_u16().unwrap() << Self::LOWER_BITS)
            | (self.mask << Self::MASK_SHIFT)
            | (self.offset & Self::OFFSET_MASK)
    }

    fn decode(input: u16) -> Option<Ins> {
        let op = Self::decode_opcode(input)?;
        let mask = (input >> Self::MASK_SHIFT) & Self::NZP;
        let offset = sign_extend(input & Self::OFFSET_MASK, Self::OFFSET_NUM_BITS as u32);
        Some(Ins::Branch(Self { op, mask, offset }))
    }

    fn mnemonic(&self) -> String {
        let mut s = String::from("br");
        if self.mask & Self::N != 0 {
            s.push('n');
        }
        if self.mask & Self::Z != 0 {
            s.push('z');
        }
        if self.mask & Self::P != 0 {
            s.push('p');
        }
        s
    }

    pub fn fmt_with_pc(&self, f: &mut fmt::Formatter, pc: u16) -> fmt::Result {
        let target = pc.wrapping_add(1).wrapping_add(self.offset);
        write!(f, "{}\t{target:#06x}", self.mnemonic())
    }
}

impl fmt::Display for BranchIns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t.{:+}", self.mnemonic(), self.offset as i16)
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum JumpOpcode {
    Jmp = 0xC,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpIns {
    pub op: JumpOpcode,
    pub base: Reg,
}

impl InstrVariant<JumpOpcode> for JumpIns {}

impl JumpIns {
    const BASE_SHIFT: usize = 6;

    pub fn encode(&self) -> u16 {
        (self.op.to_u16().unwrap() << Self::LOWER_BITS)
            | (self.base.to_u16().unwrap() << Self::BASE_SHIFT)
    }

    fn decode(input: u16) -> Option<Ins> {
        let op = Self::decode_opcode(input)?;
        let base = Reg::decode(input, Self::BASE_SHIFT);
        Some(Ins::Jump(Self { op, base }))
    }

    pub fn fmt_with_pc(&self, f: &mut fmt::Formatter, _pc: u16) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for JumpIns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // JMP through R7 is the conventional return.
        if self.base == Reg::RA {
            write!(f, "ret")
        } else {
            write!(f, "jmp\t{}", self.base)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum SubroutineOpcode {
    Jsr = 0x4,
}

// JSR jumps PC-relative (bit 11 set); JSRR jumps through a base register.
#[derive(Debug, Clone, Copy, IsVariant, Unwrap, PartialEq, Eq)]
pub enum JsrTarget {
    Offset(u16), // Sign-extended from 11 bits
    Reg(Reg),
}

impl JsrTarget {
    pub fn offset(val: i16) -> JsrTarget {
        JsrTarget::Offset(val as u16)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubroutineIns {
    pub op: SubroutineOpcode,
    pub target: JsrTarget,
}

impl InstrVariant<SubroutineOpcode> for SubroutineIns {}

impl SubroutineIns {
    pub const OFFSET_NUM_BITS: usize = 11;
    pub const OFFSET_MASK: u16 = (1u16 << Self::OFFSET_NUM_BITS) - 1;
    const LONG_FLAG: u16 = 1 << Self::OFFSET_NUM_BITS;
    const BASE_SHIFT: usize = 6;

    pub fn encode(&self) -> u16 {
        let op = self.op.to_u16().unwrap() << Self::LOWER_BITS;
        match self.target {
            JsrTarget::Offset(offset) => {
                debug_assert!(fits_signed(offset, Self::OFFSET_NUM_BITS as u32));
                op | Self::LONG_FLAG | (offset & Self::OFFSET_MASK)
            }
            JsrTarget::Reg(base) => op | (base.to_u16().unwrap() << Self::BASE_SHIFT),
        }
    }

    fn decode(input: u16) -> Option<Ins> {
        let op = Self::decode_opcode(input)?;
        let target = if input & Self::LONG_FLAG != 0 {
            JsrTarget::Offset(sign_extend(
                input & Self::OFFSET_MASK,
                Self::OFFSET_NUM_BITS as u32,
            ))
        } else {
            JsrTarget::Reg(Reg::decode(input, Self::BASE_SHIFT))
        };
        Some(Ins::Subroutine(Self { op, target }))
    }

    pub fn fmt_with_pc(&self, f: &mut fmt::Formatter, pc: u16) -> fmt::Result {
        match self.target {
            JsrTarget::Offset(offset) => {
                let target = pc.wrapping_add(1).wrapping_add(offset);
                write!(f, "jsr\t{target:#06x}")
            }
            JsrTarget::Reg(_) => write!(f, "{self}"),
        }
    }
}

impl fmt::Display for SubroutineIns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.target {
            JsrTarget::Offset(offset) => write!(f, "jsr\t.{:+}", offset as i16),
            JsrTarget::Reg(base) => write!(f, "jsrr\t{base}"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

// LD/LDI/LEA load into `reg`; ST/STI store from it. The operand layout is
// identical: a register in bits 11-9 and a 9-bit PC-relative offset.
#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum PcRelOpcode {
    Ld = 0x2,
    St = 0x3,
    Ldi = 0xA,
    Sti = 0xB,
    Lea = 0xE,
}

impl fmt::Display for PcRelOpcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcRelIns {
    pub op: PcRelOpcode,
    pub reg: Reg,
    pub offset: u16, // Sign-extended from 9 bits
}

impl InstrVariant<PcRelOpcode> for PcRelIns {}

impl PcRelIns {
    pub const OFFSET_NUM_BITS: usize = 9;
    pub const OFFSET_MASK: u16 = (1u16 << Self::OFFSET_NUM_BITS) - 1;
    const REG_SHIFT: usize = 9;

    pub fn new(op: PcRelOpcode, reg: Reg, offset: i16) -> PcRelIns {
        PcRelIns { op, reg, offset: offset as u16 }
    }

    pub fn encode(&self) -> u16 {
        debug_assert!(fits_signed(self.offset, Self::OFFSET_NUM_BITS as u32));
        (self.op.to_u16().unwrap() << Self::LOWER_BITS)
            | (self.reg.to_u16().unwrap() << Self::REG_SHIFT)
            | (self.offset & Self::OFFSET_MASK)
    }

    fn decode(input: u16) -> Option<Ins> {
        let op = Self::decode_opcode(input)?;
        let reg = Reg::decode(input, Self::REG_SHIFT);
        let offset = sign_extend(input & Self::OFFSET_MASK, Self::OFFSET_NUM_BITS as u32);
        Some(Ins::PcRel(Self { op, reg, offset }))
    }

    pub fn fmt_with_pc(&self, f: &mut fmt::Formatter, pc: u16) -> fmt::Result {
        let target = pc.wrapping_add(1).wrapping_add(self.offset);
        write!(f, "{}\t{}, {target:#06x}", self.op, self.reg)
    }
}

impl fmt::Display for PcRelIns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}, .{:+}", self.op, self.reg, self.offset as i16)
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum BaseOffsetOpcode {
    Ldr = 0x6,
    Str = 0x7,
}

impl fmt::Display for BaseOffsetOpcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseOffsetIns {
    pub op: BaseOffsetOpcode,
    pub reg: Reg, // dr for LDR, sr for STR
    pub base: Reg,
    pub offset: u16, // Sign-extended from 6 bits
}

impl InstrVariant<BaseOffsetOpcode> for BaseOffsetIns {}

impl BaseOffsetIns {
    pub const OFFSET_NUM_BITS: usize = 6;
    pub const OFFSET_MASK: u16 = (1u16 << Self::OFFSET_NUM_BITS) - 1;
    const REG_SHIFT: usize = 9;
    const BASE_SHIFT: usize = 6;

    pub fn new(op: BaseOffsetOpcode, reg: Reg, base: Reg, offset: i16) -> BaseOffsetIns {
        BaseOffsetIns { op, reg, base, offset: offset as u16 }
    }

    pub fn encode(&self) -> u16 {
        debug_assert!(fits_signed(self.offset, Self::OFFSET_NUM_BITS as u32));
        (self.op.to_u16().unwrap() << Self::LOWER_BITS)
            | (self.reg.to_u16().unwrap() << Self::REG_SHIFT)
            | (self.base.to_u16().unwrap() << Self::BASE_SHIFT)
            | (self.offset & Self::OFFSET_MASK)
    }

    fn decode(input: u16) -> Option<Ins> {
        let op = Self::decode_opcode(input)?;
        let reg = Reg::decode(input, Self::REG_SHIFT);
        let base = Reg::decode(input, Self::BASE_SHIFT);
        let offset = sign_extend(input & Self::OFFSET_MASK, Self::OFFSET_NUM_BITS as u32);
        Some(Ins::BaseOffset(Self { op, reg, base, offset }))
    }

    pub fn fmt_with_pc(&self, f: &mut fmt::Formatter, _pc: u16) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for BaseOffsetIns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}, {}, #{}",
            self.op, self.reg, self.base, self.offset as i16
        )
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum TrapOpcode {
    Trap = 0xF,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrapIns {
    pub op: TrapOpcode,
    pub vector: u16, // Low 8 bits of the word
}

impl InstrVariant<TrapOpcode> for TrapIns {}

impl TrapIns {
    pub const VECTOR_MASK: u16 = 0xFF;

    pub fn new(vector: TrapVector) -> TrapIns {
        TrapIns { op: TrapOpcode::Trap, vector: vector.to_u16().unwrap() }
    }

    /// The service routine this vector names, if it names one.
    pub fn service(&self) -> Option<TrapVector> {
        TrapVector::from_u16(self.vector)
    }

    pub fn encode(&self) -> u16 {
        assert_eq!(self.vector & !Self::VECTOR_MASK, 0);
        (self.op.to_u16().unwrap() << Self::LOWER_BITS) | self.vector
    }

    fn decode(input: u16) -> Option<Ins> {
        let op = Self::decode_opcode(input)?;
        let vector = input & Self::VECTOR_MASK;
        Some(Ins::Trap(Self { op, vector }))
    }

    pub fn fmt_with_pc(&self, f: &mut fmt::Formatter, _pc: u16) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for TrapIns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.service() {
            Some(vector) => write!(f, "{vector}"),
            None => write!(f, "trap\t{:#04x}", self.vector),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

// RTI is unimplemented and 0xD is reserved; fetching either is a fault.
#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum SystemOpcode {
    Rti = 0x8,
    Res = 0xD,
}

impl fmt::Display for SystemOpcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemIns {
    pub op: SystemOpcode,
}

impl InstrVariant<SystemOpcode> for SystemIns {}

impl SystemIns {
    pub fn encode(&self) -> u16 {
        self.op.to_u16().unwrap() << Self::LOWER_BITS
    }

    fn decode(input: u16) -> Option<Ins> {
        let op = Self::decode_opcode(input)?;
        Some(Ins::System(Self { op }))
    }

    pub fn fmt_with_pc(&self, f: &mut fmt::Formatter, _pc: u16) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for SystemIns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.op)
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ins {
    Operate(OperateIns),
    Not(NotIns),
    Branch(BranchIns),
    Jump(JumpIns),
    Subroutine(SubroutineIns),
    PcRel(PcRelIns),
    BaseOffset(BaseOffsetIns),
    Trap(TrapIns),
    System(SystemIns),
}

impl Ins {
    delegate! {
        to match self {
            Ins::Operate(x) => x,
            Ins::Not(x) => x,
            Ins::Branch(x) => x,
            Ins::Jump(x) => x,
            Ins::Subroutine(x) => x,
            Ins::PcRel(x) => x,
            Ins::BaseOffset(x) => x,
            Ins::Trap(x) => x,
            Ins::System(x) => x,
        } {
            pub fn encode(&self) -> u16;
            pub fn fmt_with_pc(&self, f: &mut fmt::Formatter, pc: u16) -> fmt::Result;
        }
    }

    pub fn display_with_pc(&self, pc: u16) -> InsWithPc {
        InsWithPc(self, pc)
    }

    const DECODERS: &[Decoder] = &[
        OperateIns::decode,
        NotIns::decode,
        BranchIns::decode,
        JumpIns::decode,
        SubroutineIns::decode,
        PcRelIns::decode,
        BaseOffsetIns::decode,
        TrapIns::decode,
        SystemIns::decode,
    ];
}

/// Decode one instruction word. Total: every 4-bit opcode belongs to exactly
/// one family.
pub fn decode(input: u16) -> Ins {
    for decoder in Ins::DECODERS {
        if let Some(ins) = decoder(input) {
            return ins;
        }
    }

    unreachable!("opcode space is fully covered");
}

impl fmt::Display for Ins {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ins::Operate(ins) => write!(f, "{ins}"),
            Ins::Not(ins) => write!(f, "{ins}"),
            Ins::Branch(ins) => write!(f, "{ins}"),
            Ins::Jump(ins) => write!(f, "{ins}"),
            Ins::Subroutine(ins) => write!(f, "{ins}"),
            Ins::PcRel(ins) => write!(f, "{ins}"),
            Ins::BaseOffset(ins) => write!(f, "{ins}"),
            Ins::Trap(ins) => write!(f, "{ins}"),
            Ins::System(ins) => write!(f, "{ins}"),
        }
    }
}

// Just for formatting, like Path::display()
pub struct InsWithPc<'a>(&'a Ins, u16);

impl fmt::Display for InsWithPc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt_with_pc(f, self.1)
    }
}

type Decoder = fn(u16) -> Option<Ins>;
