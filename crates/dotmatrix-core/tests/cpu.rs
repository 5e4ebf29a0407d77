mod common;

use dotmatrix_core::{cartridge::Cartridge, gameboy::GameBoy};

fn boot(code: &[u8]) -> GameBoy {
    let mut gb = GameBoy::new();
    gb.load_cart(Cartridge::load(common::build_rom(code)));
    gb
}

#[test]
fn nop_loop_advances_pc_and_charges_four_ticks_each() {
    // A fully zero-filled image (no header) is one long run of NOPs.
    let mut gb = GameBoy::new();
    gb.load_cart(Cartridge::load(vec![0u8; 0x8000]));
    for n in 1..=64u16 {
        gb.step();
        assert_eq!(gb.cpu.regs.pc, 0x0100 + n);
        assert_eq!(gb.cpu.ticks, 4 * n as u64);
    }
}

#[test]
fn immediate_load_and_add_then_halt() {
    // LD A,0x05; ADD A,0x03; HALT
    let mut gb = boot(&[0x3E, 0x05, 0xC6, 0x03, 0x76]);
    gb.step();
    gb.step();
    gb.step();
    assert_eq!(gb.cpu.regs.a, 0x08);
    assert!(!gb.cpu.regs.zf());
    assert!(!gb.cpu.regs.nf());
    assert!(!gb.cpu.regs.hf());
    assert!(!gb.cpu.regs.cf());
    assert!(gb.cpu.halted);
}

#[test]
fn half_carry_on_add() {
    // LD A,0x0F; LD B,0x01; ADD A,B
    let mut gb = boot(&[0x3E, 0x0F, 0x06, 0x01, 0x80]);
    gb.step();
    gb.step();
    gb.step();
    assert_eq!(gb.cpu.regs.a, 0x10);
    assert!(gb.cpu.regs.hf());
    assert!(!gb.cpu.regs.zf());
    assert!(!gb.cpu.regs.nf());
    assert!(!gb.cpu.regs.cf());
}

#[test]
fn borrow_on_sub() {
    // LD A,0x10; LD B,0x01; SUB A,B
    let mut gb = boot(&[0x3E, 0x10, 0x06, 0x01, 0x90]);
    gb.step();
    gb.step();
    gb.step();
    assert_eq!(gb.cpu.regs.a, 0x0F);
    assert!(gb.cpu.regs.hf());
    assert!(gb.cpu.regs.nf());
    assert!(!gb.cpu.regs.zf());
    assert!(!gb.cpu.regs.cf());
}

#[test]
fn call_ret_round_trip() {
    // 0x0100: CALL 0x010A ... 0x010A: RET
    let mut code = [0u8; 0x0B];
    code[0x00] = 0xCD;
    code[0x01] = 0x0A;
    code[0x02] = 0x01;
    code[0x0A] = 0xC9;
    let mut gb = boot(&code);

    assert_eq!(gb.cpu.regs.sp, 0xFFFE);
    gb.step();
    assert_eq!(gb.cpu.regs.pc, 0x010A);
    assert_eq!(gb.cpu.regs.sp, 0xFFFC);
    // Return address 0x0103 sits on the stack little-endian (in HRAM).
    assert_eq!(gb.bus.read(0xFFFC), 0x03);
    assert_eq!(gb.bus.read(0xFFFD), 0x01);

    gb.step();
    assert_eq!(gb.cpu.regs.pc, 0x0103);
    assert_eq!(gb.cpu.regs.sp, 0xFFFE);
}

#[test]
fn jr_advances_by_size_plus_offset() {
    let mut gb = boot(&[0x18, 0x05]); // JR +5
    gb.step();
    assert_eq!(gb.cpu.regs.pc, 0x0107);
    assert_eq!(gb.cpu.ticks, 12);

    let mut gb = boot(&[0x18, 0xFE]); // JR -2: jump to itself
    gb.step();
    assert_eq!(gb.cpu.regs.pc, 0x0100);
}

#[test]
fn prefix_cb_bit_reports_complement_in_z() {
    // LD B,0x01; BIT 0,B; BIT 1,B
    let mut gb = boot(&[0x06, 0x01, 0xCB, 0x40, 0xCB, 0x48]);
    gb.cpu.regs.set_cf(true);
    gb.step();
    gb.step();
    assert!(!gb.cpu.regs.zf());
    assert!(!gb.cpu.regs.nf());
    assert!(gb.cpu.regs.hf());
    assert!(gb.cpu.regs.cf(), "BIT leaves carry alone");
    gb.step();
    assert!(gb.cpu.regs.zf());
}

#[test]
fn conditional_jr_tick_charge_follows_the_condition() {
    // LD A,0x01; DEC A; JR NZ,-3
    let mut gb = boot(&[0x3E, 0x01, 0x3D, 0x20, 0xFD]);
    gb.step();
    gb.step();
    assert!(gb.cpu.regs.zf());
    let before = gb.cpu.ticks;
    gb.step(); // not taken
    assert_eq!(gb.cpu.ticks - before, 8);

    let mut gb = boot(&[0x3E, 0x02, 0x3D, 0x20, 0xFD]);
    gb.step();
    gb.step();
    assert!(!gb.cpu.regs.zf());
    let before = gb.cpu.ticks;
    gb.step(); // taken, back to DEC A
    assert_eq!(gb.cpu.ticks - before, 12);
    assert_eq!(gb.cpu.regs.pc, 0x0102);
}

#[test]
fn programs_that_avoid_the_rom_window_leave_the_image_untouched() {
    // LD HL,0xC000; LD (HL),0x55; LDH (0x80),A; HALT
    let mut gb = boot(&[0x21, 0x00, 0xC0, 0x36, 0x55, 0xE0, 0x80, 0x76]);
    let image_before = gb.bus.cart.as_ref().unwrap().rom().to_vec();
    for _ in 0..4 {
        gb.step();
    }
    assert!(gb.cpu.halted);
    assert_eq!(gb.bus.read(0xC000), 0x55);
    assert_eq!(gb.bus.cart.as_ref().unwrap().rom(), &image_before[..]);
}

#[test]
fn rom_window_writes_land_in_the_image_via_the_stub() {
    // LD HL,0x4000; LD (HL),0x99; HALT
    let mut gb = boot(&[0x21, 0x00, 0x40, 0x36, 0x99, 0x76]);
    for _ in 0..3 {
        gb.step();
    }
    assert_eq!(gb.bus.cart.as_ref().unwrap().rom()[0x4000], 0x99);
}

#[test]
fn illegal_regions_read_zero_and_report() {
    // LD A,(0x8000); HALT
    let mut gb = boot(&[0xFA, 0x00, 0x80, 0x76]);
    gb.cpu.regs.a = 0x5A;
    gb.step();
    assert_eq!(gb.cpu.regs.a, 0x00);
    let fault = gb.bus.faults.take_fault().unwrap();
    assert_eq!(fault.addr, 0x8000);
}

#[test]
fn ld_sp_then_push_pop_identity() {
    // LD SP,0xC002; PUSH BC; POP DE
    let mut gb = boot(&[0x31, 0x02, 0xC0, 0xC5, 0xD1]);
    gb.cpu.regs.set_bc(0xA55A);
    gb.step();
    gb.step();
    assert_eq!(gb.bus.read(0xC000), 0x5A);
    assert_eq!(gb.bus.read(0xC001), 0xA5);
    gb.step();
    assert_eq!(gb.cpu.regs.de(), 0xA55A);
    assert_eq!(gb.cpu.regs.sp, 0xC002);
}
