use crate::bus::Bus;
use crate::diagnostics::{self, IllegalOpcode};
use crate::opcodes::{AddrMode, AluOp, Cond, Instruction, Op, Operand8, Reg16, Reg8, INSTRUCTIONS};

// CPU flag bits as documented in gbdev.io/pandocs/The_CPU_Flags.html
const FLAG_Z: u8 = 0x80; // Zero
const FLAG_N: u8 = 0x40; // Subtract
const FLAG_H: u8 = 0x20; // Half Carry
const FLAG_C: u8 = 0x10; // Carry

// Post-boot CPU state from gbdev.io/pandocs/Power_Up_State.html (DMG).
const BOOT_A: u8 = 0x01;
const BOOT_F: u8 = 0xB0;
const BOOT_B: u8 = 0x00;
const BOOT_C: u8 = 0x13;
const BOOT_D: u8 = 0x00;
const BOOT_E: u8 = 0xD8;
const BOOT_H: u8 = 0x01;
const BOOT_L: u8 = 0x4D;
const BOOT_SP: u16 = 0xFFFE;
const BOOT_PC: u16 = 0x0100;

/// SM83 register file.
///
/// The flags byte is private: every write path masks the low nibble to
/// zero, so F can never hold bits the hardware does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    pub fn f(&self) -> u8 {
        self.f
    }

    pub fn set_f(&mut self, val: u8) {
        self.f = val & 0xF0;
    }

    pub fn zf(&self) -> bool {
        self.f & FLAG_Z != 0
    }

    pub fn set_zf(&mut self, set: bool) {
        if set {
            self.f |= FLAG_Z;
        } else {
            self.f &= !FLAG_Z;
        }
    }

    pub fn nf(&self) -> bool {
        self.f & FLAG_N != 0
    }

    pub fn set_nf(&mut self, set: bool) {
        if set {
            self.f |= FLAG_N;
        } else {
            self.f &= !FLAG_N;
        }
    }

    pub fn hf(&self) -> bool {
        self.f & FLAG_H != 0
    }

    pub fn set_hf(&mut self, set: bool) {
        if set {
            self.f |= FLAG_H;
        } else {
            self.f &= !FLAG_H;
        }
    }

    pub fn cf(&self) -> bool {
        self.f & FLAG_C != 0
    }

    pub fn set_cf(&mut self, set: bool) {
        if set {
            self.f |= FLAG_C;
        } else {
            self.f &= !FLAG_C;
        }
    }

    pub fn af(&self) -> u16 {
        ((self.a as u16) << 8) | self.f as u16
    }

    pub fn set_af(&mut self, val: u16) {
        self.a = (val >> 8) as u8;
        self.set_f(val as u8);
    }

    pub fn bc(&self) -> u16 {
        ((self.b as u16) << 8) | self.c as u16
    }

    pub fn set_bc(&mut self, val: u16) {
        self.b = (val >> 8) as u8;
        self.c = val as u8;
    }

    pub fn de(&self) -> u16 {
        ((self.d as u16) << 8) | self.e as u16
    }

    pub fn set_de(&mut self, val: u16) {
        self.d = (val >> 8) as u8;
        self.e = val as u8;
    }

    pub fn hl(&self) -> u16 {
        ((self.h as u16) << 8) | self.l as u16
    }

    pub fn set_hl(&mut self, val: u16) {
        self.h = (val >> 8) as u8;
        self.l = val as u8;
    }
}

pub struct Cpu {
    pub regs: Registers,
    /// T-cycle counter; 4 per memory access or internal machine cycle,
    /// charged at the moment of the access.
    pub ticks: u64,
    pub ime: bool,
    pub halted: bool,
    pub stopped: bool,
    /// Treat undefined opcodes as fatal (halt) instead of logged no-ops.
    pub strict: bool,
    /// Operand latched by the address-mode step for the current instruction.
    fetched: u16,
    /// Signed relative offset latched by the E8 address mode.
    rel_addr: i8,
    /// EI takes effect after the instruction that follows it.
    ime_enable_delay: u8,
    last_illegal: Option<IllegalOpcode>,
    illegal_total: u64,
}

impl Cpu {
    /// CPU in the DMG post-boot state: what the boot ROM leaves behind
    /// right before handing control to the cartridge at 0x0100.
    pub fn new() -> Self {
        Self {
            regs: Registers {
                a: BOOT_A,
                f: BOOT_F,
                b: BOOT_B,
                c: BOOT_C,
                d: BOOT_D,
                e: BOOT_E,
                h: BOOT_H,
                l: BOOT_L,
                sp: BOOT_SP,
                pc: BOOT_PC,
            },
            ticks: 0,
            ime: false,
            halted: false,
            stopped: false,
            strict: false,
            fetched: 0,
            rel_addr: 0,
            ime_enable_delay: 0,
            last_illegal: None,
            illegal_total: 0,
        }
    }

    /// Formatted CPU state string for debugging.
    pub fn debug_state(&self) -> String {
        format!(
            "AF:{:04X} BC:{:04X} DE:{:04X} HL:{:04X} PC:{:04X} SP:{:04X} CY:{}",
            self.regs.af(),
            self.regs.bc(),
            self.regs.de(),
            self.regs.hl(),
            self.regs.pc,
            self.regs.sp,
            self.ticks
        )
    }

    /// First unconsumed undefined-opcode event, if any.
    pub fn take_illegal(&mut self) -> Option<IllegalOpcode> {
        self.last_illegal.take()
    }

    pub fn illegal_total(&self) -> u64 {
        self.illegal_total
    }

    #[inline]
    fn tick(&mut self, m_cycles: u8) {
        self.ticks += 4 * m_cycles as u64;
    }

    #[inline(always)]
    fn fetch8(&mut self, bus: &mut Bus) -> u8 {
        let val = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        self.tick(1);
        val
    }

    #[inline(always)]
    fn fetch16(&mut self, bus: &mut Bus) -> u16 {
        let lo = self.fetch8(bus) as u16;
        let hi = self.fetch8(bus) as u16;
        (hi << 8) | lo
    }

    #[inline(always)]
    fn read8(&mut self, bus: &mut Bus, addr: u16) -> u8 {
        let val = bus.read(addr);
        self.tick(1);
        val
    }

    #[inline(always)]
    fn write8(&mut self, bus: &mut Bus, addr: u16, val: u8) {
        bus.write(addr, val);
        self.tick(1);
    }

    fn push16(&mut self, bus: &mut Bus, val: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write8(bus, self.regs.sp, (val >> 8) as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write8(bus, self.regs.sp, val as u8);
    }

    fn pop16(&mut self, bus: &mut Bus) -> u16 {
        let lo = self.read8(bus, self.regs.sp) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.read8(bus, self.regs.sp) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        (hi << 8) | lo
    }

    /// Execute one instruction (or one idle halt cycle).
    ///
    /// Fetches the opcode at PC, runs the descriptor's address mode, and
    /// dispatches the operation. All ticks are charged piecewise as the
    /// accesses happen; the descriptor's tick list is the total this adds
    /// up to.
    pub fn step(&mut self, bus: &mut Bus) {
        if self.halted {
            // No interrupt controller yet, so HALT is never exited; the
            // core idles one machine cycle per step.
            self.tick(1);
            return;
        }

        let enable_ime_after = self.ime_enable_delay == 1;
        let opcode_pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        let instr: &Instruction = &INSTRUCTIONS[opcode as usize];

        self.fetch_operand(bus, instr.addr_mode);
        let branch = self.execute(bus, instr.op, opcode, opcode_pc);
        debug_assert!(
            (branch as usize) < instr.ticks.len(),
            "{}: branch {branch} out of range",
            instr.mnemonic
        );

        if enable_ime_after && self.ime_enable_delay > 0 {
            self.ime = true;
        }
        if self.ime_enable_delay > 0 {
            self.ime_enable_delay -= 1;
        }
    }

    fn fetch_operand(&mut self, bus: &mut Bus, mode: AddrMode) {
        match mode {
            AddrMode::None => {}
            AddrMode::RN8 => self.fetched = self.fetch8(bus) as u16,
            AddrMode::RN16 | AddrMode::A16 => self.fetched = self.fetch16(bus),
            AddrMode::E8 => self.rel_addr = self.fetch8(bus) as i8,
            AddrMode::A8 => self.fetched = 0xFF00 | self.fetch8(bus) as u16,
        }
    }

    fn cond_met(&self, cond: Cond) -> bool {
        match cond {
            Cond::Always => true,
            Cond::Nz => !self.regs.zf(),
            Cond::Z => self.regs.zf(),
            Cond::Nc => !self.regs.cf(),
            Cond::C => self.regs.cf(),
        }
    }

    fn reg8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.regs.a,
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
        }
    }

    fn set_reg8(&mut self, reg: Reg8, val: u8) {
        match reg {
            Reg8::A => self.regs.a = val,
            Reg8::B => self.regs.b = val,
            Reg8::C => self.regs.c = val,
            Reg8::D => self.regs.d = val,
            Reg8::E => self.regs.e = val,
            Reg8::H => self.regs.h = val,
            Reg8::L => self.regs.l = val,
        }
    }

    fn reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::AF => self.regs.af(),
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
        }
    }

    fn set_reg16(&mut self, reg: Reg16, val: u16) {
        match reg {
            Reg16::AF => self.regs.set_af(val),
            Reg16::BC => self.regs.set_bc(val),
            Reg16::DE => self.regs.set_de(val),
            Reg16::HL => self.regs.set_hl(val),
            Reg16::SP => self.regs.sp = val,
        }
    }

    fn read_operand(&mut self, bus: &mut Bus, operand: Operand8) -> u8 {
        match operand {
            Operand8::Reg(r) => self.reg8(r),
            Operand8::BcPtr => {
                let addr = self.regs.bc();
                self.read8(bus, addr)
            }
            Operand8::DePtr => {
                let addr = self.regs.de();
                self.read8(bus, addr)
            }
            Operand8::HlPtr => {
                let addr = self.regs.hl();
                self.read8(bus, addr)
            }
            Operand8::HliPtr => {
                let addr = self.regs.hl();
                let val = self.read8(bus, addr);
                self.regs.set_hl(addr.wrapping_add(1));
                val
            }
            Operand8::HldPtr => {
                let addr = self.regs.hl();
                let val = self.read8(bus, addr);
                self.regs.set_hl(addr.wrapping_sub(1));
                val
            }
            Operand8::A16Ptr | Operand8::A8Ptr => {
                let addr = self.fetched;
                self.read8(bus, addr)
            }
            Operand8::CPtr => {
                let addr = 0xFF00 | self.regs.c as u16;
                self.read8(bus, addr)
            }
            Operand8::N8 => self.fetched as u8,
        }
    }

    fn write_operand(&mut self, bus: &mut Bus, operand: Operand8, val: u8) {
        match operand {
            Operand8::Reg(r) => self.set_reg8(r, val),
            Operand8::BcPtr => {
                let addr = self.regs.bc();
                self.write8(bus, addr, val);
            }
            Operand8::DePtr => {
                let addr = self.regs.de();
                self.write8(bus, addr, val);
            }
            Operand8::HlPtr => {
                let addr = self.regs.hl();
                self.write8(bus, addr, val);
            }
            Operand8::HliPtr => {
                let addr = self.regs.hl();
                self.write8(bus, addr, val);
                self.regs.set_hl(addr.wrapping_add(1));
            }
            Operand8::HldPtr => {
                let addr = self.regs.hl();
                self.write8(bus, addr, val);
                self.regs.set_hl(addr.wrapping_sub(1));
            }
            Operand8::A16Ptr | Operand8::A8Ptr => {
                let addr = self.fetched;
                self.write8(bus, addr, val);
            }
            Operand8::CPtr => {
                let addr = 0xFF00 | self.regs.c as u16;
                self.write8(bus, addr, val);
            }
            Operand8::N8 => unreachable!("immediate is not a destination"),
        }
    }

    fn execute(&mut self, bus: &mut Bus, op: Op, opcode: u8, opcode_pc: u16) -> u8 {
        match op {
            Op::Nop => 0,
            Op::Stop => {
                self.stopped = true;
                0
            }
            Op::Halt => {
                self.halted = true;
                0
            }
            Op::Di => {
                self.ime = false;
                self.ime_enable_delay = 0;
                0
            }
            Op::Ei => {
                self.ime_enable_delay = 2;
                0
            }
            Op::Prefix => {
                let sub = self.fetched as u8;
                self.execute_cb(bus, sub)
            }
            Op::Illegal => {
                let event = IllegalOpcode {
                    opcode,
                    pc: opcode_pc,
                };
                diagnostics::notify_illegal_opcode(&event);
                self.illegal_total += 1;
                if self.last_illegal.is_none() {
                    self.last_illegal = Some(event);
                }
                if self.strict {
                    self.halted = true;
                }
                0
            }
            Op::Ld8 { dst, src } => {
                let val = self.read_operand(bus, src);
                self.write_operand(bus, dst, val);
                0
            }
            Op::LdRrN16(rr) => {
                self.set_reg16(rr, self.fetched);
                0
            }
            Op::LdA16Sp => {
                let addr = self.fetched;
                let sp = self.regs.sp;
                self.write8(bus, addr, sp as u8);
                self.write8(bus, addr.wrapping_add(1), (sp >> 8) as u8);
                0
            }
            Op::LdSpHl => {
                self.regs.sp = self.regs.hl();
                self.tick(1);
                0
            }
            Op::LdHlSpE8 => {
                let res = self.sp_plus_e8();
                self.regs.set_hl(res);
                self.tick(1);
                0
            }
            Op::Inc8(operand) => {
                let val = self.read_operand(bus, operand);
                let res = val.wrapping_add(1);
                self.regs.set_zf(res == 0);
                self.regs.set_nf(false);
                self.regs.set_hf((val & 0x0F) + 1 > 0x0F);
                self.write_operand(bus, operand, res);
                0
            }
            Op::Dec8(operand) => {
                let val = self.read_operand(bus, operand);
                let res = val.wrapping_sub(1);
                self.regs.set_zf(res == 0);
                self.regs.set_nf(true);
                self.regs.set_hf(val & 0x0F == 0);
                self.write_operand(bus, operand, res);
                0
            }
            Op::Inc16(rr) => {
                let val = self.reg16(rr).wrapping_add(1);
                self.set_reg16(rr, val);
                self.tick(1);
                0
            }
            Op::Dec16(rr) => {
                let val = self.reg16(rr).wrapping_sub(1);
                self.set_reg16(rr, val);
                self.tick(1);
                0
            }
            Op::AddHl(rr) => {
                let hl = self.regs.hl();
                let val = self.reg16(rr);
                let res = hl.wrapping_add(val);
                self.regs.set_nf(false);
                self.regs
                    .set_hf(((hl & 0x0FFF) + (val & 0x0FFF)) & 0x1000 != 0);
                self.regs.set_cf(hl as u32 + val as u32 > 0xFFFF);
                self.regs.set_hl(res);
                self.tick(1);
                0
            }
            Op::AddSpE8 => {
                let res = self.sp_plus_e8();
                self.regs.sp = res;
                self.tick(2);
                0
            }
            Op::Alu(alu, operand) => {
                let val = self.read_operand(bus, operand);
                match alu {
                    AluOp::Add => self.alu_add(val),
                    AluOp::Adc => self.alu_adc(val),
                    AluOp::Sub => self.alu_sub(val),
                    AluOp::Sbc => self.alu_sbc(val),
                    AluOp::And => self.alu_and(val),
                    AluOp::Xor => self.alu_xor(val),
                    AluOp::Or => self.alu_or(val),
                    AluOp::Cp => self.alu_cp(val),
                }
                0
            }
            Op::Rlca => {
                let carry = self.regs.a & 0x80 != 0;
                self.regs.a = self.regs.a.rotate_left(1);
                self.regs.set_f(if carry { FLAG_C } else { 0 });
                0
            }
            Op::Rrca => {
                let carry = self.regs.a & 0x01 != 0;
                self.regs.a = self.regs.a.rotate_right(1);
                self.regs.set_f(if carry { FLAG_C } else { 0 });
                0
            }
            Op::Rla => {
                let carry = self.regs.a & 0x80 != 0;
                let carry_in = if self.regs.cf() { 1 } else { 0 };
                self.regs.a = (self.regs.a << 1) | carry_in;
                self.regs.set_f(if carry { FLAG_C } else { 0 });
                0
            }
            Op::Rra => {
                let carry = self.regs.a & 0x01 != 0;
                let carry_in: u8 = if self.regs.cf() { 1 } else { 0 };
                self.regs.a = (self.regs.a >> 1) | (carry_in << 7);
                self.regs.set_f(if carry { FLAG_C } else { 0 });
                0
            }
            Op::Daa => {
                // Adjust A back to packed BCD after an ADD/SUB chain.
                let mut correction = 0u8;
                let mut carry = false;
                if self.regs.hf() || (!self.regs.nf() && self.regs.a & 0x0F > 9) {
                    correction |= 0x06;
                }
                if self.regs.cf() || (!self.regs.nf() && self.regs.a > 0x99) {
                    correction |= 0x60;
                    carry = true;
                }
                if self.regs.nf() {
                    self.regs.a = self.regs.a.wrapping_sub(correction);
                } else {
                    self.regs.a = self.regs.a.wrapping_add(correction);
                }
                self.regs.set_zf(self.regs.a == 0);
                self.regs.set_hf(false);
                self.regs.set_cf(carry);
                0
            }
            Op::Cpl => {
                self.regs.a ^= 0xFF;
                self.regs.set_nf(true);
                self.regs.set_hf(true);
                0
            }
            Op::Scf => {
                self.regs.set_nf(false);
                self.regs.set_hf(false);
                self.regs.set_cf(true);
                0
            }
            Op::Ccf => {
                let carry = self.regs.cf();
                self.regs.set_nf(false);
                self.regs.set_hf(false);
                self.regs.set_cf(!carry);
                0
            }
            Op::Jr(cond) => {
                if self.cond_met(cond) {
                    self.regs.pc = self.regs.pc.wrapping_add(self.rel_addr as u16);
                    self.tick(1);
                    0
                } else {
                    1
                }
            }
            Op::Jp(cond) => {
                if self.cond_met(cond) {
                    self.regs.pc = self.fetched;
                    self.tick(1);
                    0
                } else {
                    1
                }
            }
            Op::JpHl => {
                self.regs.pc = self.regs.hl();
                0
            }
            Op::Call(cond) => {
                if self.cond_met(cond) {
                    self.tick(1);
                    let ret = self.regs.pc;
                    self.push16(bus, ret);
                    self.regs.pc = self.fetched;
                    0
                } else {
                    1
                }
            }
            Op::Ret(Cond::Always) => {
                self.regs.pc = self.pop16(bus);
                self.tick(1);
                0
            }
            Op::Ret(cond) => {
                self.tick(1);
                if self.cond_met(cond) {
                    self.regs.pc = self.pop16(bus);
                    self.tick(1);
                    0
                } else {
                    1
                }
            }
            Op::Reti => {
                self.regs.pc = self.pop16(bus);
                self.ime = true;
                self.tick(1);
                0
            }
            Op::Rst(target) => {
                self.tick(1);
                let ret = self.regs.pc;
                self.push16(bus, ret);
                self.regs.pc = target as u16;
                0
            }
            Op::Push(rr) => {
                let val = self.reg16(rr);
                self.tick(1);
                self.push16(bus, val);
                0
            }
            Op::Pop(rr) => {
                let val = self.pop16(bus);
                self.set_reg16(rr, val);
                0
            }
        }
    }

    /// SP plus the signed E8 operand. The offset is signed for the address
    /// computation, but H and C come from unsigned 8-bit addition of the
    /// low SP byte with the raw operand byte; Z and N are always cleared.
    fn sp_plus_e8(&mut self) -> u16 {
        let sp = self.regs.sp;
        let byte = self.rel_addr as u8 as u16;
        self.regs.set_zf(false);
        self.regs.set_nf(false);
        self.regs.set_hf((sp & 0x0F) + (byte & 0x0F) > 0x0F);
        self.regs.set_cf((sp & 0xFF) + byte > 0xFF);
        sp.wrapping_add(self.rel_addr as i16 as u16)
    }

    fn alu_add(&mut self, val: u8) {
        let a = self.regs.a;
        let res = a.wrapping_add(val);
        self.regs.set_zf(res == 0);
        self.regs.set_nf(false);
        self.regs.set_hf(((a & 0x0F) + (val & 0x0F)) & 0x10 != 0);
        self.regs.set_cf(a as u16 + val as u16 > 0xFF);
        self.regs.a = res;
    }

    fn alu_adc(&mut self, val: u8) {
        let a = self.regs.a;
        let carry_in: u8 = if self.regs.cf() { 1 } else { 0 };
        let res = a.wrapping_add(val).wrapping_add(carry_in);
        self.regs.set_zf(res == 0);
        self.regs.set_nf(false);
        self.regs
            .set_hf(((a & 0x0F) + (val & 0x0F) + carry_in) & 0x10 != 0);
        self.regs
            .set_cf(a as u16 + val as u16 + carry_in as u16 > 0xFF);
        self.regs.a = res;
    }

    fn alu_sub(&mut self, val: u8) {
        let a = self.regs.a;
        let res = a.wrapping_sub(val);
        self.regs.set_zf(res == 0);
        self.regs.set_nf(true);
        self.regs
            .set_hf((a & 0x0F).wrapping_sub(val & 0x0F) & 0x10 != 0);
        self.regs.set_cf(val > a);
        self.regs.a = res;
    }

    fn alu_sbc(&mut self, val: u8) {
        let a = self.regs.a;
        let carry_in: u8 = if self.regs.cf() { 1 } else { 0 };
        let res = a.wrapping_sub(val).wrapping_sub(carry_in);
        self.regs.set_zf(res == 0);
        self.regs.set_nf(true);
        self.regs.set_hf(
            (a & 0x0F)
                .wrapping_sub(val & 0x0F)
                .wrapping_sub(carry_in)
                & 0x10
                != 0,
        );
        self.regs.set_cf(val as u16 + carry_in as u16 > a as u16);
        self.regs.a = res;
    }

    fn alu_and(&mut self, val: u8) {
        self.regs.a &= val;
        let z = self.regs.a == 0;
        self.regs.set_f(if z { FLAG_Z | FLAG_H } else { FLAG_H });
    }

    fn alu_xor(&mut self, val: u8) {
        self.regs.a ^= val;
        let z = self.regs.a == 0;
        self.regs.set_f(if z { FLAG_Z } else { 0 });
    }

    fn alu_or(&mut self, val: u8) {
        self.regs.a |= val;
        let z = self.regs.a == 0;
        self.regs.set_f(if z { FLAG_Z } else { 0 });
    }

    fn alu_cp(&mut self, val: u8) {
        let a = self.regs.a;
        let res = a.wrapping_sub(val);
        self.regs.set_zf(res == 0);
        self.regs.set_nf(true);
        self.regs
            .set_hf((a & 0x0F).wrapping_sub(val & 0x0F) & 0x10 != 0);
        self.regs.set_cf(val > a);
    }

    /// One 8-bit operand slot of the CB subtable, indexed by the low three
    /// bits of the sub-opcode. Slot 6 routes through the bus at HL.
    fn read_slot(&mut self, bus: &mut Bus, slot: u8) -> u8 {
        match slot {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => {
                let addr = self.regs.hl();
                self.read8(bus, addr)
            }
            7 => self.regs.a,
            _ => unreachable!(),
        }
    }

    fn write_slot(&mut self, bus: &mut Bus, slot: u8, val: u8) {
        match slot {
            0 => self.regs.b = val,
            1 => self.regs.c = val,
            2 => self.regs.d = val,
            3 => self.regs.e = val,
            4 => self.regs.h = val,
            5 => self.regs.l = val,
            6 => {
                let addr = self.regs.hl();
                self.write8(bus, addr, val);
            }
            7 => self.regs.a = val,
            _ => unreachable!(),
        }
    }

    /// Dispatch a CB-prefixed sub-opcode.
    ///
    /// The byte decodes as `(family << 6) | (bit << 3) | slot`: family 0 is
    /// the rotate/shift/swap group selected by `bit`, families 1-3 are
    /// BIT/RES/SET of `bit`. Unlike the bare A-register rotates, the CB
    /// forms set Z from the result.
    fn execute_cb(&mut self, bus: &mut Bus, sub: u8) -> u8 {
        let slot = sub & 0x07;
        let bit = (sub >> 3) & 0x07;
        match sub >> 6 {
            0 => {
                let val = self.read_slot(bus, slot);
                let res = match bit {
                    0 => self.cb_rlc(val),
                    1 => self.cb_rrc(val),
                    2 => self.cb_rl(val),
                    3 => self.cb_rr(val),
                    4 => self.cb_sla(val),
                    5 => self.cb_sra(val),
                    6 => self.cb_swap(val),
                    _ => self.cb_srl(val),
                };
                self.write_slot(bus, slot, res);
                if slot == 6 {
                    0
                } else {
                    2
                }
            }
            1 => {
                let val = self.read_slot(bus, slot);
                self.regs.set_zf(val & (1 << bit) == 0);
                self.regs.set_nf(false);
                self.regs.set_hf(true);
                if slot == 6 {
                    1
                } else {
                    2
                }
            }
            2 => {
                let val = self.read_slot(bus, slot);
                self.write_slot(bus, slot, val & !(1 << bit));
                if slot == 6 {
                    0
                } else {
                    2
                }
            }
            _ => {
                let val = self.read_slot(bus, slot);
                self.write_slot(bus, slot, val | (1 << bit));
                if slot == 6 {
                    0
                } else {
                    2
                }
            }
        }
    }

    fn cb_rlc(&mut self, val: u8) -> u8 {
        let res = val.rotate_left(1);
        self.regs.set_f(
            if res == 0 { FLAG_Z } else { 0 } | if val & 0x80 != 0 { FLAG_C } else { 0 },
        );
        res
    }

    fn cb_rrc(&mut self, val: u8) -> u8 {
        let res = val.rotate_right(1);
        self.regs.set_f(
            if res == 0 { FLAG_Z } else { 0 } | if val & 0x01 != 0 { FLAG_C } else { 0 },
        );
        res
    }

    fn cb_rl(&mut self, val: u8) -> u8 {
        let carry_in: u8 = if self.regs.cf() { 1 } else { 0 };
        let res = (val << 1) | carry_in;
        self.regs.set_f(
            if res == 0 { FLAG_Z } else { 0 } | if val & 0x80 != 0 { FLAG_C } else { 0 },
        );
        res
    }

    fn cb_rr(&mut self, val: u8) -> u8 {
        let carry_in: u8 = if self.regs.cf() { 1 } else { 0 };
        let res = (val >> 1) | (carry_in << 7);
        self.regs.set_f(
            if res == 0 { FLAG_Z } else { 0 } | if val & 0x01 != 0 { FLAG_C } else { 0 },
        );
        res
    }

    fn cb_sla(&mut self, val: u8) -> u8 {
        let res = val << 1;
        self.regs.set_f(
            if res == 0 { FLAG_Z } else { 0 } | if val & 0x80 != 0 { FLAG_C } else { 0 },
        );
        res
    }

    fn cb_sra(&mut self, val: u8) -> u8 {
        // Arithmetic shift: bit 7 is preserved.
        let res = (val >> 1) | (val & 0x80);
        self.regs.set_f(
            if res == 0 { FLAG_Z } else { 0 } | if val & 0x01 != 0 { FLAG_C } else { 0 },
        );
        res
    }

    fn cb_swap(&mut self, val: u8) -> u8 {
        let res = val.rotate_left(4);
        self.regs.set_f(if res == 0 { FLAG_Z } else { 0 });
        res
    }

    fn cb_srl(&mut self, val: u8) -> u8 {
        let res = val >> 1;
        self.regs.set_f(
            if res == 0 { FLAG_Z } else { 0 } | if val & 0x01 != 0 { FLAG_C } else { 0 },
        );
        res
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
