//! Primary opcode descriptor table.
//!
//! Each of the 256 primary opcodes maps to an immutable [`Instruction`]:
//! a diagnostic mnemonic, the documentary byte size, the T-cycle counts per
//! branch outcome, the address-mode tag that drives operand fetch and PC
//! advance, and the tagged operation the CPU dispatches on. Tick counts are
//! charged piecewise during execution (4 T per memory access or internal
//! machine cycle); the lists here are the totals that charging must add up
//! to, which the tests hold the interpreter to.
//!
//! Opcode layout reference: gbdev.io/pandocs/CPU_Instruction_Set.html

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
    SP,
}

/// Branch condition; `Always` marks the unconditional form of JR/JP/CALL/RET.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Always,
    Nz,
    Z,
    Nc,
    C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

/// One 8-bit operand slot: a register, a pointer form, or the fetched
/// immediate. Pointer and immediate slots read their address or value from
/// the operand latched by the address-mode step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand8 {
    Reg(Reg8),
    /// Memory at BC.
    BcPtr,
    /// Memory at DE.
    DePtr,
    /// Memory at HL.
    HlPtr,
    /// Memory at HL, then HL += 1.
    HliPtr,
    /// Memory at HL, then HL -= 1.
    HldPtr,
    /// Memory at the fetched 16-bit address.
    A16Ptr,
    /// Memory at 0xFF00 | fetched low byte.
    A8Ptr,
    /// Memory at 0xFF00 | C.
    CPtr,
    /// The fetched immediate byte itself (source only).
    N8,
}

/// How the operand bytes after the opcode are fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddrMode {
    /// No operand bytes.
    None,
    /// One byte at PC into `fetched`.
    RN8,
    /// Two bytes at PC, little-endian, into `fetched`.
    RN16,
    /// One byte at PC, sign-extended into `rel_addr`.
    E8,
    /// One byte at PC; `fetched` becomes 0xFF00 | byte.
    A8,
    /// Same bytes as RN16; the value is an address target.
    A16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// 0xCB: fetch one more byte and decode the bit-operation subtable.
    Prefix,
    /// A hole in the primary table; hardware locks up here.
    Illegal,
    Ld8 {
        dst: Operand8,
        src: Operand8,
    },
    /// LD rr, n16 (SP included).
    LdRrN16(Reg16),
    /// LD (a16), SP.
    LdA16Sp,
    LdSpHl,
    LdHlSpE8,
    Inc8(Operand8),
    Dec8(Operand8),
    Inc16(Reg16),
    Dec16(Reg16),
    AddHl(Reg16),
    AddSpE8,
    Alu(AluOp, Operand8),
    Rlca,
    Rrca,
    Rla,
    Rra,
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jr(Cond),
    Jp(Cond),
    JpHl,
    Call(Cond),
    Ret(Cond),
    Reti,
    Rst(u8),
    Push(Reg16),
    Pop(Reg16),
}

pub struct Instruction {
    /// Diagnostic name; never drives behavior.
    pub mnemonic: &'static str,
    /// Instruction length in bytes. Documentary: PC advance is driven by
    /// the address mode.
    pub size: u8,
    /// T-cycle totals indexed by the branch discriminant the operation
    /// returns: 0 = primary path, 1 = alternate (condition not met),
    /// 2 = prefix register form.
    pub ticks: &'static [u8],
    pub addr_mode: AddrMode,
    pub op: Op,
}

const fn i(
    mnemonic: &'static str,
    size: u8,
    ticks: &'static [u8],
    addr_mode: AddrMode,
    op: Op,
) -> Instruction {
    Instruction {
        mnemonic,
        size,
        ticks,
        addr_mode,
        op,
    }
}

const RA: Operand8 = Operand8::Reg(Reg8::A);
const RB: Operand8 = Operand8::Reg(Reg8::B);
const RC: Operand8 = Operand8::Reg(Reg8::C);
const RD: Operand8 = Operand8::Reg(Reg8::D);
const RE: Operand8 = Operand8::Reg(Reg8::E);
const RH: Operand8 = Operand8::Reg(Reg8::H);
const RL: Operand8 = Operand8::Reg(Reg8::L);

const DASH: Instruction = i("-", 1, &[4], AddrMode::None, Op::Illegal);

use AddrMode::{A16, A8, E8, None as NoOperand, RN16, RN8};
use AluOp::{Adc, Add, And, Cp, Or, Sbc, Sub, Xor};
use Operand8::{A16Ptr, A8Ptr, BcPtr, CPtr, DePtr, HldPtr, HliPtr, HlPtr, N8};

pub static INSTRUCTIONS: [Instruction; 0x100] = [
    /* 0x00 */ i("NOP", 1, &[4], NoOperand, Op::Nop),
    /* 0x01 */ i("LD_BC_N16", 3, &[12], RN16, Op::LdRrN16(Reg16::BC)),
    /* 0x02 */ i("LD_[BC]_A", 1, &[8], NoOperand, Op::Ld8 { dst: BcPtr, src: RA }),
    /* 0x03 */ i("INC_BC", 1, &[8], NoOperand, Op::Inc16(Reg16::BC)),
    /* 0x04 */ i("INC_B", 1, &[4], NoOperand, Op::Inc8(RB)),
    /* 0x05 */ i("DEC_B", 1, &[4], NoOperand, Op::Dec8(RB)),
    /* 0x06 */ i("LD_B_N8", 2, &[8], RN8, Op::Ld8 { dst: RB, src: N8 }),
    /* 0x07 */ i("RLCA", 1, &[4], NoOperand, Op::Rlca),
    /* 0x08 */ i("LD_[A16]_SP", 3, &[20], A16, Op::LdA16Sp),
    /* 0x09 */ i("ADD_HL_BC", 1, &[8], NoOperand, Op::AddHl(Reg16::BC)),
    /* 0x0A */ i("LD_A_[BC]", 1, &[8], NoOperand, Op::Ld8 { dst: RA, src: BcPtr }),
    /* 0x0B */ i("DEC_BC", 1, &[8], NoOperand, Op::Dec16(Reg16::BC)),
    /* 0x0C */ i("INC_C", 1, &[4], NoOperand, Op::Inc8(RC)),
    /* 0x0D */ i("DEC_C", 1, &[4], NoOperand, Op::Dec8(RC)),
    /* 0x0E */ i("LD_C_N8", 2, &[8], RN8, Op::Ld8 { dst: RC, src: N8 }),
    /* 0x0F */ i("RRCA", 1, &[4], NoOperand, Op::Rrca),
    /* 0x10 */ i("STOP_N8", 2, &[4], NoOperand, Op::Stop),
    /* 0x11 */ i("LD_DE_N16", 3, &[12], RN16, Op::LdRrN16(Reg16::DE)),
    /* 0x12 */ i("LD_[DE]_A", 1, &[8], NoOperand, Op::Ld8 { dst: DePtr, src: RA }),
    /* 0x13 */ i("INC_DE", 1, &[8], NoOperand, Op::Inc16(Reg16::DE)),
    /* 0x14 */ i("INC_D", 1, &[4], NoOperand, Op::Inc8(RD)),
    /* 0x15 */ i("DEC_D", 1, &[4], NoOperand, Op::Dec8(RD)),
    /* 0x16 */ i("LD_D_N8", 2, &[8], RN8, Op::Ld8 { dst: RD, src: N8 }),
    /* 0x17 */ i("RLA", 1, &[4], NoOperand, Op::Rla),
    /* 0x18 */ i("JR_E8", 2, &[12], E8, Op::Jr(Cond::Always)),
    /* 0x19 */ i("ADD_HL_DE", 1, &[8], NoOperand, Op::AddHl(Reg16::DE)),
    /* 0x1A */ i("LD_A_[DE]", 1, &[8], NoOperand, Op::Ld8 { dst: RA, src: DePtr }),
    /* 0x1B */ i("DEC_DE", 1, &[8], NoOperand, Op::Dec16(Reg16::DE)),
    /* 0x1C */ i("INC_E", 1, &[4], NoOperand, Op::Inc8(RE)),
    /* 0x1D */ i("DEC_E", 1, &[4], NoOperand, Op::Dec8(RE)),
    /* 0x1E */ i("LD_E_N8", 2, &[8], RN8, Op::Ld8 { dst: RE, src: N8 }),
    /* 0x1F */ i("RRA", 1, &[4], NoOperand, Op::Rra),
    /* 0x20 */ i("JR_NZ_E8", 2, &[12, 8], E8, Op::Jr(Cond::Nz)),
    /* 0x21 */ i("LD_HL_N16", 3, &[12], RN16, Op::LdRrN16(Reg16::HL)),
    /* 0x22 */ i("LD_[HLI]_A", 1, &[8], NoOperand, Op::Ld8 { dst: HliPtr, src: RA }),
    /* 0x23 */ i("INC_HL", 1, &[8], NoOperand, Op::Inc16(Reg16::HL)),
    /* 0x24 */ i("INC_H", 1, &[4], NoOperand, Op::Inc8(RH)),
    /* 0x25 */ i("DEC_H", 1, &[4], NoOperand, Op::Dec8(RH)),
    /* 0x26 */ i("LD_H_N8", 2, &[8], RN8, Op::Ld8 { dst: RH, src: N8 }),
    /* 0x27 */ i("DAA", 1, &[4], NoOperand, Op::Daa),
    /* 0x28 */ i("JR_Z_E8", 2, &[12, 8], E8, Op::Jr(Cond::Z)),
    /* 0x29 */ i("ADD_HL_HL", 1, &[8], NoOperand, Op::AddHl(Reg16::HL)),
    /* 0x2A */ i("LD_A_[HLI]", 1, &[8], NoOperand, Op::Ld8 { dst: RA, src: HliPtr }),
    /* 0x2B */ i("DEC_HL", 1, &[8], NoOperand, Op::Dec16(Reg16::HL)),
    /* 0x2C */ i("INC_L", 1, &[4], NoOperand, Op::Inc8(RL)),
    /* 0x2D */ i("DEC_L", 1, &[4], NoOperand, Op::Dec8(RL)),
    /* 0x2E */ i("LD_L_N8", 2, &[8], RN8, Op::Ld8 { dst: RL, src: N8 }),
    /* 0x2F */ i("CPL", 1, &[4], NoOperand, Op::Cpl),
    /* 0x30 */ i("JR_NC_E8", 2, &[12, 8], E8, Op::Jr(Cond::Nc)),
    /* 0x31 */ i("LD_SP_N16", 3, &[12], RN16, Op::LdRrN16(Reg16::SP)),
    /* 0x32 */ i("LD_[HLD]_A", 1, &[8], NoOperand, Op::Ld8 { dst: HldPtr, src: RA }),
    /* 0x33 */ i("INC_SP", 1, &[8], NoOperand, Op::Inc16(Reg16::SP)),
    /* 0x34 */ i("INC_[HL]", 1, &[12], NoOperand, Op::Inc8(HlPtr)),
    /* 0x35 */ i("DEC_[HL]", 1, &[12], NoOperand, Op::Dec8(HlPtr)),
    /* 0x36 */ i("LD_[HL]_N8", 2, &[12], RN8, Op::Ld8 { dst: HlPtr, src: N8 }),
    /* 0x37 */ i("SCF", 1, &[4], NoOperand, Op::Scf),
    /* 0x38 */ i("JR_C_E8", 2, &[12, 8], E8, Op::Jr(Cond::C)),
    /* 0x39 */ i("ADD_HL_SP", 1, &[8], NoOperand, Op::AddHl(Reg16::SP)),
    /* 0x3A */ i("LD_A_[HLD]", 1, &[8], NoOperand, Op::Ld8 { dst: RA, src: HldPtr }),
    /* 0x3B */ i("DEC_SP", 1, &[8], NoOperand, Op::Dec16(Reg16::SP)),
    /* 0x3C */ i("INC_A", 1, &[4], NoOperand, Op::Inc8(RA)),
    /* 0x3D */ i("DEC_A", 1, &[4], NoOperand, Op::Dec8(RA)),
    /* 0x3E */ i("LD_A_N8", 2, &[8], RN8, Op::Ld8 { dst: RA, src: N8 }),
    /* 0x3F */ i("CCF", 1, &[4], NoOperand, Op::Ccf),
    /* 0x40 */ i("LD_B_B", 1, &[4], NoOperand, Op::Ld8 { dst: RB, src: RB }),
    /* 0x41 */ i("LD_B_C", 1, &[4], NoOperand, Op::Ld8 { dst: RB, src: RC }),
    /* 0x42 */ i("LD_B_D", 1, &[4], NoOperand, Op::Ld8 { dst: RB, src: RD }),
    /* 0x43 */ i("LD_B_E", 1, &[4], NoOperand, Op::Ld8 { dst: RB, src: RE }),
    /* 0x44 */ i("LD_B_H", 1, &[4], NoOperand, Op::Ld8 { dst: RB, src: RH }),
    /* 0x45 */ i("LD_B_L", 1, &[4], NoOperand, Op::Ld8 { dst: RB, src: RL }),
    /* 0x46 */ i("LD_B_[HL]", 1, &[8], NoOperand, Op::Ld8 { dst: RB, src: HlPtr }),
    /* 0x47 */ i("LD_B_A", 1, &[4], NoOperand, Op::Ld8 { dst: RB, src: RA }),
    /* 0x48 */ i("LD_C_B", 1, &[4], NoOperand, Op::Ld8 { dst: RC, src: RB }),
    /* 0x49 */ i("LD_C_C", 1, &[4], NoOperand, Op::Ld8 { dst: RC, src: RC }),
    /* 0x4A */ i("LD_C_D", 1, &[4], NoOperand, Op::Ld8 { dst: RC, src: RD }),
    /* 0x4B */ i("LD_C_E", 1, &[4], NoOperand, Op::Ld8 { dst: RC, src: RE }),
    /* 0x4C */ i("LD_C_H", 1, &[4], NoOperand, Op::Ld8 { dst: RC, src: RH }),
    /* 0x4D */ i("LD_C_L", 1, &[4], NoOperand, Op::Ld8 { dst: RC, src: RL }),
    /* 0x4E */ i("LD_C_[HL]", 1, &[8], NoOperand, Op::Ld8 { dst: RC, src: HlPtr }),
    /* 0x4F */ i("LD_C_A", 1, &[4], NoOperand, Op::Ld8 { dst: RC, src: RA }),
    /* 0x50 */ i("LD_D_B", 1, &[4], NoOperand, Op::Ld8 { dst: RD, src: RB }),
    /* 0x51 */ i("LD_D_C", 1, &[4], NoOperand, Op::Ld8 { dst: RD, src: RC }),
    /* 0x52 */ i("LD_D_D", 1, &[4], NoOperand, Op::Ld8 { dst: RD, src: RD }),
    /* 0x53 */ i("LD_D_E", 1, &[4], NoOperand, Op::Ld8 { dst: RD, src: RE }),
    /* 0x54 */ i("LD_D_H", 1, &[4], NoOperand, Op::Ld8 { dst: RD, src: RH }),
    /* 0x55 */ i("LD_D_L", 1, &[4], NoOperand, Op::Ld8 { dst: RD, src: RL }),
    /* 0x56 */ i("LD_D_[HL]", 1, &[8], NoOperand, Op::Ld8 { dst: RD, src: HlPtr }),
    /* 0x57 */ i("LD_D_A", 1, &[4], NoOperand, Op::Ld8 { dst: RD, src: RA }),
    /* 0x58 */ i("LD_E_B", 1, &[4], NoOperand, Op::Ld8 { dst: RE, src: RB }),
    /* 0x59 */ i("LD_E_C", 1, &[4], NoOperand, Op::Ld8 { dst: RE, src: RC }),
    /* 0x5A */ i("LD_E_D", 1, &[4], NoOperand, Op::Ld8 { dst: RE, src: RD }),
    /* 0x5B */ i("LD_E_E", 1, &[4], NoOperand, Op::Ld8 { dst: RE, src: RE }),
    /* 0x5C */ i("LD_E_H", 1, &[4], NoOperand, Op::Ld8 { dst: RE, src: RH }),
    /* 0x5D */ i("LD_E_L", 1, &[4], NoOperand, Op::Ld8 { dst: RE, src: RL }),
    /* 0x5E */ i("LD_E_[HL]", 1, &[8], NoOperand, Op::Ld8 { dst: RE, src: HlPtr }),
    /* 0x5F */ i("LD_E_A", 1, &[4], NoOperand, Op::Ld8 { dst: RE, src: RA }),
    /* 0x60 */ i("LD_H_B", 1, &[4], NoOperand, Op::Ld8 { dst: RH, src: RB }),
    /* 0x61 */ i("LD_H_C", 1, &[4], NoOperand, Op::Ld8 { dst: RH, src: RC }),
    /* 0x62 */ i("LD_H_D", 1, &[4], NoOperand, Op::Ld8 { dst: RH, src: RD }),
    /* 0x63 */ i("LD_H_E", 1, &[4], NoOperand, Op::Ld8 { dst: RH, src: RE }),
    /* 0x64 */ i("LD_H_H", 1, &[4], NoOperand, Op::Ld8 { dst: RH, src: RH }),
    /* 0x65 */ i("LD_H_L", 1, &[4], NoOperand, Op::Ld8 { dst: RH, src: RL }),
    /* 0x66 */ i("LD_H_[HL]", 1, &[8], NoOperand, Op::Ld8 { dst: RH, src: HlPtr }),
    /* 0x67 */ i("LD_H_A", 1, &[4], NoOperand, Op::Ld8 { dst: RH, src: RA }),
    /* 0x68 */ i("LD_L_B", 1, &[4], NoOperand, Op::Ld8 { dst: RL, src: RB }),
    /* 0x69 */ i("LD_L_C", 1, &[4], NoOperand, Op::Ld8 { dst: RL, src: RC }),
    /* 0x6A */ i("LD_L_D", 1, &[4], NoOperand, Op::Ld8 { dst: RL, src: RD }),
    /* 0x6B */ i("LD_L_E", 1, &[4], NoOperand, Op::Ld8 { dst: RL, src: RE }),
    /* 0x6C */ i("LD_L_H", 1, &[4], NoOperand, Op::Ld8 { dst: RL, src: RH }),
    /* 0x6D */ i("LD_L_L", 1, &[4], NoOperand, Op::Ld8 { dst: RL, src: RL }),
    /* 0x6E */ i("LD_L_[HL]", 1, &[8], NoOperand, Op::Ld8 { dst: RL, src: HlPtr }),
    /* 0x6F */ i("LD_L_A", 1, &[4], NoOperand, Op::Ld8 { dst: RL, src: RA }),
    /* 0x70 */ i("LD_[HL]_B", 1, &[8], NoOperand, Op::Ld8 { dst: HlPtr, src: RB }),
    /* 0x71 */ i("LD_[HL]_C", 1, &[8], NoOperand, Op::Ld8 { dst: HlPtr, src: RC }),
    /* 0x72 */ i("LD_[HL]_D", 1, &[8], NoOperand, Op::Ld8 { dst: HlPtr, src: RD }),
    /* 0x73 */ i("LD_[HL]_E", 1, &[8], NoOperand, Op::Ld8 { dst: HlPtr, src: RE }),
    /* 0x74 */ i("LD_[HL]_H", 1, &[8], NoOperand, Op::Ld8 { dst: HlPtr, src: RH }),
    /* 0x75 */ i("LD_[HL]_L", 1, &[8], NoOperand, Op::Ld8 { dst: HlPtr, src: RL }),
    /* 0x76 */ i("HALT", 1, &[4], NoOperand, Op::Halt),
    /* 0x77 */ i("LD_[HL]_A", 1, &[8], NoOperand, Op::Ld8 { dst: HlPtr, src: RA }),
    /* 0x78 */ i("LD_A_B", 1, &[4], NoOperand, Op::Ld8 { dst: RA, src: RB }),
    /* 0x79 */ i("LD_A_C", 1, &[4], NoOperand, Op::Ld8 { dst: RA, src: RC }),
    /* 0x7A */ i("LD_A_D", 1, &[4], NoOperand, Op::Ld8 { dst: RA, src: RD }),
    /* 0x7B */ i("LD_A_E", 1, &[4], NoOperand, Op::Ld8 { dst: RA, src: RE }),
    /* 0x7C */ i("LD_A_H", 1, &[4], NoOperand, Op::Ld8 { dst: RA, src: RH }),
    /* 0x7D */ i("LD_A_L", 1, &[4], NoOperand, Op::Ld8 { dst: RA, src: RL }),
    /* 0x7E */ i("LD_A_[HL]", 1, &[8], NoOperand, Op::Ld8 { dst: RA, src: HlPtr }),
    /* 0x7F */ i("LD_A_A", 1, &[4], NoOperand, Op::Ld8 { dst: RA, src: RA }),
    /* 0x80 */ i("ADD_A_B", 1, &[4], NoOperand, Op::Alu(Add, RB)),
    /* 0x81 */ i("ADD_A_C", 1, &[4], NoOperand, Op::Alu(Add, RC)),
    /* 0x82 */ i("ADD_A_D", 1, &[4], NoOperand, Op::Alu(Add, RD)),
    /* 0x83 */ i("ADD_A_E", 1, &[4], NoOperand, Op::Alu(Add, RE)),
    /* 0x84 */ i("ADD_A_H", 1, &[4], NoOperand, Op::Alu(Add, RH)),
    /* 0x85 */ i("ADD_A_L", 1, &[4], NoOperand, Op::Alu(Add, RL)),
    /* 0x86 */ i("ADD_A_[HL]", 1, &[8], NoOperand, Op::Alu(Add, HlPtr)),
    /* 0x87 */ i("ADD_A_A", 1, &[4], NoOperand, Op::Alu(Add, RA)),
    /* 0x88 */ i("ADC_A_B", 1, &[4], NoOperand, Op::Alu(Adc, RB)),
    /* 0x89 */ i("ADC_A_C", 1, &[4], NoOperand, Op::Alu(Adc, RC)),
    /* 0x8A */ i("ADC_A_D", 1, &[4], NoOperand, Op::Alu(Adc, RD)),
    /* 0x8B */ i("ADC_A_E", 1, &[4], NoOperand, Op::Alu(Adc, RE)),
    /* 0x8C */ i("ADC_A_H", 1, &[4], NoOperand, Op::Alu(Adc, RH)),
    /* 0x8D */ i("ADC_A_L", 1, &[4], NoOperand, Op::Alu(Adc, RL)),
    /* 0x8E */ i("ADC_A_[HL]", 1, &[8], NoOperand, Op::Alu(Adc, HlPtr)),
    /* 0x8F */ i("ADC_A_A", 1, &[4], NoOperand, Op::Alu(Adc, RA)),
    /* 0x90 */ i("SUB_A_B", 1, &[4], NoOperand, Op::Alu(Sub, RB)),
    /* 0x91 */ i("SUB_A_C", 1, &[4], NoOperand, Op::Alu(Sub, RC)),
    /* 0x92 */ i("SUB_A_D", 1, &[4], NoOperand, Op::Alu(Sub, RD)),
    /* 0x93 */ i("SUB_A_E", 1, &[4], NoOperand, Op::Alu(Sub, RE)),
    /* 0x94 */ i("SUB_A_H", 1, &[4], NoOperand, Op::Alu(Sub, RH)),
    /* 0x95 */ i("SUB_A_L", 1, &[4], NoOperand, Op::Alu(Sub, RL)),
    /* 0x96 */ i("SUB_A_[HL]", 1, &[8], NoOperand, Op::Alu(Sub, HlPtr)),
    /* 0x97 */ i("SUB_A_A", 1, &[4], NoOperand, Op::Alu(Sub, RA)),
    /* 0x98 */ i("SBC_A_B", 1, &[4], NoOperand, Op::Alu(Sbc, RB)),
    /* 0x99 */ i("SBC_A_C", 1, &[4], NoOperand, Op::Alu(Sbc, RC)),
    /* 0x9A */ i("SBC_A_D", 1, &[4], NoOperand, Op::Alu(Sbc, RD)),
    /* 0x9B */ i("SBC_A_E", 1, &[4], NoOperand, Op::Alu(Sbc, RE)),
    /* 0x9C */ i("SBC_A_H", 1, &[4], NoOperand, Op::Alu(Sbc, RH)),
    /* 0x9D */ i("SBC_A_L", 1, &[4], NoOperand, Op::Alu(Sbc, RL)),
    /* 0x9E */ i("SBC_A_[HL]", 1, &[8], NoOperand, Op::Alu(Sbc, HlPtr)),
    /* 0x9F */ i("SBC_A_A", 1, &[4], NoOperand, Op::Alu(Sbc, RA)),
    /* 0xA0 */ i("AND_A_B", 1, &[4], NoOperand, Op::Alu(And, RB)),
    /* 0xA1 */ i("AND_A_C", 1, &[4], NoOperand, Op::Alu(And, RC)),
    /* 0xA2 */ i("AND_A_D", 1, &[4], NoOperand, Op::Alu(And, RD)),
    /* 0xA3 */ i("AND_A_E", 1, &[4], NoOperand, Op::Alu(And, RE)),
    /* 0xA4 */ i("AND_A_H", 1, &[4], NoOperand, Op::Alu(And, RH)),
    /* 0xA5 */ i("AND_A_L", 1, &[4], NoOperand, Op::Alu(And, RL)),
    /* 0xA6 */ i("AND_A_[HL]", 1, &[8], NoOperand, Op::Alu(And, HlPtr)),
    /* 0xA7 */ i("AND_A_A", 1, &[4], NoOperand, Op::Alu(And, RA)),
    /* 0xA8 */ i("XOR_A_B", 1, &[4], NoOperand, Op::Alu(Xor, RB)),
    /* 0xA9 */ i("XOR_A_C", 1, &[4], NoOperand, Op::Alu(Xor, RC)),
    /* 0xAA */ i("XOR_A_D", 1, &[4], NoOperand, Op::Alu(Xor, RD)),
    /* 0xAB */ i("XOR_A_E", 1, &[4], NoOperand, Op::Alu(Xor, RE)),
    /* 0xAC */ i("XOR_A_H", 1, &[4], NoOperand, Op::Alu(Xor, RH)),
    /* 0xAD */ i("XOR_A_L", 1, &[4], NoOperand, Op::Alu(Xor, RL)),
    /* 0xAE */ i("XOR_A_[HL]", 1, &[8], NoOperand, Op::Alu(Xor, HlPtr)),
    /* 0xAF */ i("XOR_A_A", 1, &[4], NoOperand, Op::Alu(Xor, RA)),
    /* 0xB0 */ i("OR_A_B", 1, &[4], NoOperand, Op::Alu(Or, RB)),
    /* 0xB1 */ i("OR_A_C", 1, &[4], NoOperand, Op::Alu(Or, RC)),
    /* 0xB2 */ i("OR_A_D", 1, &[4], NoOperand, Op::Alu(Or, RD)),
    /* 0xB3 */ i("OR_A_E", 1, &[4], NoOperand, Op::Alu(Or, RE)),
    /* 0xB4 */ i("OR_A_H", 1, &[4], NoOperand, Op::Alu(Or, RH)),
    /* 0xB5 */ i("OR_A_L", 1, &[4], NoOperand, Op::Alu(Or, RL)),
    /* 0xB6 */ i("OR_A_[HL]", 1, &[8], NoOperand, Op::Alu(Or, HlPtr)),
    /* 0xB7 */ i("OR_A_A", 1, &[4], NoOperand, Op::Alu(Or, RA)),
    /* 0xB8 */ i("CP_A_B", 1, &[4], NoOperand, Op::Alu(Cp, RB)),
    /* 0xB9 */ i("CP_A_C", 1, &[4], NoOperand, Op::Alu(Cp, RC)),
    /* 0xBA */ i("CP_A_D", 1, &[4], NoOperand, Op::Alu(Cp, RD)),
    /* 0xBB */ i("CP_A_E", 1, &[4], NoOperand, Op::Alu(Cp, RE)),
    /* 0xBC */ i("CP_A_H", 1, &[4], NoOperand, Op::Alu(Cp, RH)),
    /* 0xBD */ i("CP_A_L", 1, &[4], NoOperand, Op::Alu(Cp, RL)),
    /* 0xBE */ i("CP_A_[HL]", 1, &[8], NoOperand, Op::Alu(Cp, HlPtr)),
    /* 0xBF */ i("CP_A_A", 1, &[4], NoOperand, Op::Alu(Cp, RA)),
    /* 0xC0 */ i("RET_NZ", 1, &[20, 8], NoOperand, Op::Ret(Cond::Nz)),
    /* 0xC1 */ i("POP_BC", 1, &[12], NoOperand, Op::Pop(Reg16::BC)),
    /* 0xC2 */ i("JP_NZ_A16", 3, &[16, 12], A16, Op::Jp(Cond::Nz)),
    /* 0xC3 */ i("JP_A16", 3, &[16], A16, Op::Jp(Cond::Always)),
    /* 0xC4 */ i("CALL_NZ_A16", 3, &[24, 12], A16, Op::Call(Cond::Nz)),
    /* 0xC5 */ i("PUSH_BC", 1, &[16], NoOperand, Op::Push(Reg16::BC)),
    /* 0xC6 */ i("ADD_A_N8", 2, &[8], RN8, Op::Alu(Add, N8)),
    /* 0xC7 */ i("RST_$00", 1, &[16], NoOperand, Op::Rst(0x00)),
    /* 0xC8 */ i("RET_Z", 1, &[20, 8], NoOperand, Op::Ret(Cond::Z)),
    /* 0xC9 */ i("RET", 1, &[16], NoOperand, Op::Ret(Cond::Always)),
    /* 0xCA */ i("JP_Z_A16", 3, &[16, 12], A16, Op::Jp(Cond::Z)),
    /* 0xCB */ i("PREFIX", 2, &[16, 12, 8], RN8, Op::Prefix),
    /* 0xCC */ i("CALL_Z_A16", 3, &[24, 12], A16, Op::Call(Cond::Z)),
    /* 0xCD */ i("CALL_A16", 3, &[24], A16, Op::Call(Cond::Always)),
    /* 0xCE */ i("ADC_A_N8", 2, &[8], RN8, Op::Alu(Adc, N8)),
    /* 0xCF */ i("RST_$08", 1, &[16], NoOperand, Op::Rst(0x08)),
    /* 0xD0 */ i("RET_NC", 1, &[20, 8], NoOperand, Op::Ret(Cond::Nc)),
    /* 0xD1 */ i("POP_DE", 1, &[12], NoOperand, Op::Pop(Reg16::DE)),
    /* 0xD2 */ i("JP_NC_A16", 3, &[16, 12], A16, Op::Jp(Cond::Nc)),
    /* 0xD3 */ DASH,
    /* 0xD4 */ i("CALL_NC_A16", 3, &[24, 12], A16, Op::Call(Cond::Nc)),
    /* 0xD5 */ i("PUSH_DE", 1, &[16], NoOperand, Op::Push(Reg16::DE)),
    /* 0xD6 */ i("SUB_A_N8", 2, &[8], RN8, Op::Alu(Sub, N8)),
    /* 0xD7 */ i("RST_$10", 1, &[16], NoOperand, Op::Rst(0x10)),
    /* 0xD8 */ i("RET_C", 1, &[20, 8], NoOperand, Op::Ret(Cond::C)),
    /* 0xD9 */ i("RETI", 1, &[16], NoOperand, Op::Reti),
    /* 0xDA */ i("JP_C_A16", 3, &[16, 12], A16, Op::Jp(Cond::C)),
    /* 0xDB */ DASH,
    /* 0xDC */ i("CALL_C_A16", 3, &[24, 12], A16, Op::Call(Cond::C)),
    /* 0xDD */ DASH,
    /* 0xDE */ i("SBC_A_N8", 2, &[8], RN8, Op::Alu(Sbc, N8)),
    /* 0xDF */ i("RST_$18", 1, &[16], NoOperand, Op::Rst(0x18)),
    /* 0xE0 */ i("LDH_[A8]_A", 2, &[12], A8, Op::Ld8 { dst: A8Ptr, src: RA }),
    /* 0xE1 */ i("POP_HL", 1, &[12], NoOperand, Op::Pop(Reg16::HL)),
    /* 0xE2 */ i("LD_[C]_A", 1, &[8], NoOperand, Op::Ld8 { dst: CPtr, src: RA }),
    /* 0xE3 */ DASH,
    /* 0xE4 */ DASH,
    /* 0xE5 */ i("PUSH_HL", 1, &[16], NoOperand, Op::Push(Reg16::HL)),
    /* 0xE6 */ i("AND_A_N8", 2, &[8], RN8, Op::Alu(And, N8)),
    /* 0xE7 */ i("RST_$20", 1, &[16], NoOperand, Op::Rst(0x20)),
    /* 0xE8 */ i("ADD_SP_E8", 2, &[16], E8, Op::AddSpE8),
    /* 0xE9 */ i("JP_HL", 1, &[4], NoOperand, Op::JpHl),
    /* 0xEA */ i("LD_[A16]_A", 3, &[16], A16, Op::Ld8 { dst: A16Ptr, src: RA }),
    /* 0xEB */ DASH,
    /* 0xEC */ DASH,
    /* 0xED */ DASH,
    /* 0xEE */ i("XOR_A_N8", 2, &[8], RN8, Op::Alu(Xor, N8)),
    /* 0xEF */ i("RST_$28", 1, &[16], NoOperand, Op::Rst(0x28)),
    /* 0xF0 */ i("LDH_A_[A8]", 2, &[12], A8, Op::Ld8 { dst: RA, src: A8Ptr }),
    /* 0xF1 */ i("POP_AF", 1, &[12], NoOperand, Op::Pop(Reg16::AF)),
    /* 0xF2 */ i("LDH_A_[C]", 1, &[8], NoOperand, Op::Ld8 { dst: RA, src: CPtr }),
    /* 0xF3 */ i("DI", 1, &[4], NoOperand, Op::Di),
    /* 0xF4 */ DASH,
    /* 0xF5 */ i("PUSH_AF", 1, &[16], NoOperand, Op::Push(Reg16::AF)),
    /* 0xF6 */ i("OR_A_N8", 2, &[8], RN8, Op::Alu(Or, N8)),
    /* 0xF7 */ i("RST_$30", 1, &[16], NoOperand, Op::Rst(0x30)),
    /* 0xF8 */ i("LD_HL_SP+E8", 2, &[12], E8, Op::LdHlSpE8),
    /* 0xF9 */ i("LD_SP_HL", 1, &[8], NoOperand, Op::LdSpHl),
    /* 0xFA */ i("LD_A_[A16]", 3, &[16], A16, Op::Ld8 { dst: RA, src: A16Ptr }),
    /* 0xFB */ i("EI", 1, &[4], NoOperand, Op::Ei),
    /* 0xFC */ DASH,
    /* 0xFD */ DASH,
    /* 0xFE */ i("CP_A_N8", 2, &[8], RN8, Op::Alu(Cp, N8)),
    /* 0xFF */ i("RST_$38", 1, &[16], NoOperand, Op::Rst(0x38)),
];
