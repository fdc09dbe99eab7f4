//! End-to-end CPU behavior: whole instructions through the `Cpu` facade
//! against flat RAM, checking registers, memory and cycle counts together.

use crate::bus::Ram;
use crate::cpu::state::{IRQ_VECTOR, RESET_VECTOR};
use crate::cpu::{Cpu, Status, base_cycles, has_page_penalty};
use crate::test_utils::{BusEvent, RecordingBus, setup_at};

const ORIGIN: u16 = 0x0200;

/// RAM with `bytes` at $0200, RESET there, BRK vector at $0400.
fn ram_with(bytes: &[u8]) -> Ram {
    let mut ram = Ram::new();
    ram.load(ORIGIN, bytes);
    ram.set_word(RESET_VECTOR, ORIGIN);
    ram.set_word(IRQ_VECTOR, 0x0400);
    ram
}

fn branch_taken(op: u8, p: Status) -> Option<bool> {
    let taken = match op {
        0x10 => !p.contains(Status::NEGATIVE),
        0x30 => p.contains(Status::NEGATIVE),
        0x50 => !p.contains(Status::OVERFLOW),
        0x70 => p.contains(Status::OVERFLOW),
        0x90 => !p.contains(Status::CARRY),
        0xB0 => p.contains(Status::CARRY),
        0xD0 => !p.contains(Status::ZERO),
        0xF0 => p.contains(Status::ZERO),
        _ => return None,
    };
    Some(taken)
}

// -------------------------------------------------------------------------
// Timing
// -------------------------------------------------------------------------

#[test]
fn official_opcodes_match_published_cycles() {
    for op in 0..=0xFFu8 {
        let Some(base) = base_cycles(op) else {
            continue;
        };
        // Operand $0010 / $10 with X = Y = 0: no index ever crosses a page,
        // and a taken branch lands on the same page.
        let mut ram = ram_with(&[op, 0x10, 0x00]);
        let mut cpu = Cpu::power_on(&mut ram);
        let extra = match branch_taken(op, cpu.status()) {
            Some(true) => 1,
            _ => 0,
        };
        let used = cpu.step(&mut ram);
        assert_eq!(
            used,
            u64::from(base) + extra,
            "opcode ${op:02X} took {used} cycles"
        );
    }
}

#[test]
fn page_cross_penalty_applies_only_to_read_indexed_forms() {
    for op in 0..=0xFFu8 {
        let Some(base) = base_cycles(op) else {
            continue;
        };
        let mode = crate::cpu::decode(op).mode;
        use crate::cpu::AddressingMode::*;
        if !matches!(mode, AbsoluteX | AbsoluteY | IndirectIndexed) {
            continue;
        }
        // abs: $8010 + $FF ; (ind),Y: pointer $10 -> $8010, + $FF
        let mut ram = ram_with(&[op, 0x10, 0x80]);
        ram.load(0x0010, &[0x10, 0x80]);
        let mut cpu = Cpu::power_on(&mut ram);
        cpu.set_x(0xFF);
        cpu.set_y(0xFF);
        let expected = u64::from(base) + u64::from(has_page_penalty(op));
        assert_eq!(cpu.step(&mut ram), expected, "opcode ${op:02X}");
    }
}

#[test]
fn branch_timing() {
    // not taken: LDX #$00 ; BNE +$10
    let (mut cpu, mut ram) = setup_at(0x0200, &[0xA2, 0x00, 0xD0, 0x10], 0x0200);
    cpu.step(&mut ram);
    assert_eq!(cpu.step(&mut ram), 2);
    assert_eq!(cpu.pc(), 0x0204);

    // taken, same page
    let (mut cpu, mut ram) = setup_at(0x0200, &[0xA2, 0x01, 0xD0, 0x10], 0x0200);
    cpu.step(&mut ram);
    assert_eq!(cpu.step(&mut ram), 3);
    assert_eq!(cpu.pc(), 0x0214);

    // taken, forward across a page
    let (mut cpu, mut ram) = setup_at(0x02F0, &[0xA2, 0x01, 0xD0, 0x7F], 0x0200);
    cpu.step(&mut ram);
    assert_eq!(cpu.step(&mut ram), 4);
    assert_eq!(cpu.pc(), 0x02F4 + 0x7F);

    // taken, backward across a page
    let (mut cpu, mut ram) = setup_at(0x0300, &[0xA2, 0x01, 0xD0, 0xF0], 0x0200);
    cpu.step(&mut ram);
    assert_eq!(cpu.step(&mut ram), 4);
    assert_eq!(cpu.pc(), 0x02F4);
}

// -------------------------------------------------------------------------
// Arithmetic
// -------------------------------------------------------------------------

#[test]
fn adc_flag_grid() {
    // (a, operand, carry_in) -> (result, C, Z, V, N)
    let cases: &[(u8, u8, bool, u8, bool, bool, bool, bool)] = &[
        (0x50, 0x50, false, 0xA0, false, false, true, true),
        (0x50, 0x10, false, 0x60, false, false, false, false),
        (0x50, 0xD0, false, 0x20, true, false, false, false),
        (0xD0, 0x90, false, 0x60, true, false, true, false),
        (0xFF, 0x01, false, 0x00, true, true, false, false),
        (0x7F, 0x00, true, 0x80, false, false, true, true),
        (0x80, 0xFF, false, 0x7F, true, false, true, false),
        (0x00, 0x00, false, 0x00, false, true, false, false),
    ];
    for &(a, m, c_in, r, c, z, v, n) in cases {
        let carry_op = if c_in { 0x38 } else { 0x18 };
        let (mut cpu, mut ram) = setup_at(0x0200, &[0xA9, a, carry_op, 0x69, m], 0x0200);
        for _ in 0..3 {
            cpu.step(&mut ram);
        }
        let case = format!("{a:02X} + {m:02X} + {c_in}");
        assert_eq!(cpu.a(), r, "{case}");
        assert_eq!(cpu.flag(Status::CARRY), c, "C for {case}");
        assert_eq!(cpu.flag(Status::ZERO), z, "Z for {case}");
        assert_eq!(cpu.flag(Status::OVERFLOW), v, "V for {case}");
        assert_eq!(cpu.flag(Status::NEGATIVE), n, "N for {case}");
    }
}

/// Expected (result, carry, overflow) of ADC or SBC from plain integer math.
fn add_with_carry_reference(subtract: bool, a: u8, m: u8, carry: bool) -> (u8, bool, bool) {
    let c = i16::from(carry);
    let (ua, um) = (i16::from(a), i16::from(m));
    let (sa, sm) = (i16::from(a as i8), i16::from(m as i8));
    let (unsigned, signed, carry_out) = if subtract {
        let borrow = 1 - c;
        (ua - um - borrow, sa - sm - borrow, ua - um - borrow >= 0)
    } else {
        (ua + um + c, sa + sm + c, ua + um + c > 0xFF)
    };
    let overflow = !(-128..=127).contains(&signed);
    (unsigned as u8, carry_out, overflow)
}

#[test]
fn adc_sbc_agree_with_integer_math_for_all_inputs() {
    let mut ram = ram_with(&[]);
    let mut cpu = Cpu::power_on(&mut ram);
    for opcode in [0x69u8, 0xE9] {
        for a in 0..=0xFFu8 {
            for m in 0..=0xFFu8 {
                for carry in [false, true] {
                    // LDA #a ; CLC/SEC ; ADC/SBC #m
                    let carry_op = if carry { 0x38 } else { 0x18 };
                    ram.load(ORIGIN, &[0xA9, a, carry_op, opcode, m]);
                    cpu.set_pc(ORIGIN);
                    for _ in 0..3 {
                        cpu.step(&mut ram);
                    }

                    let (r, c, v) = add_with_carry_reference(opcode == 0xE9, a, m, carry);
                    let expected = (r, c, v, r == 0, r & 0x80 != 0);
                    let got = (
                        cpu.a(),
                        cpu.flag(Status::CARRY),
                        cpu.flag(Status::OVERFLOW),
                        cpu.flag(Status::ZERO),
                        cpu.flag(Status::NEGATIVE),
                    );
                    assert_eq!(got, expected, "${opcode:02X}: {a:02X} {m:02X} c={carry}");
                }
            }
        }
    }
}

#[test]
fn sbc_is_adc_of_complement() {
    // SEC ; LDA #$50 ; SBC #$F0 -> $60, C=0, V=0
    let (mut cpu, mut ram) = setup_at(0x0200, &[0x38, 0xA9, 0x50, 0xE9, 0xF0], 0x0200);
    for _ in 0..3 {
        cpu.step(&mut ram);
    }
    assert_eq!(cpu.a(), 0x60);
    assert!(!cpu.flag(Status::CARRY));
    assert!(!cpu.flag(Status::OVERFLOW));

    // SEC ; LDA #$50 ; SBC #$B0 -> $A0, C=0, V=1
    let (mut cpu, mut ram) = setup_at(0x0200, &[0x38, 0xA9, 0x50, 0xE9, 0xB0], 0x0200);
    for _ in 0..3 {
        cpu.step(&mut ram);
    }
    assert_eq!(cpu.a(), 0xA0);
    assert!(!cpu.flag(Status::CARRY));
    assert!(cpu.flag(Status::OVERFLOW));
    assert!(cpu.flag(Status::NEGATIVE));
}

#[test]
fn decimal_flag_does_not_change_adc() {
    // SED ; CLC ; LDA #$09 ; ADC #$01 -> binary $0A
    let (mut cpu, mut ram) =
        setup_at(0x0200, &[0xF8, 0x18, 0xA9, 0x09, 0x69, 0x01], 0x0200);
    for _ in 0..4 {
        cpu.step(&mut ram);
    }
    assert_eq!(cpu.a(), 0x0A);
    assert!(cpu.flag(Status::DECIMAL));
}

// -------------------------------------------------------------------------
// Stack and control flow
// -------------------------------------------------------------------------

#[test]
fn stack_round_trips() {
    // LDA #$C3 ; PHA ; SEC ; SED ; PHP ; LDA #$00 ; CLC ; CLD ; PLP ; PLA
    let prg = [
        0xA9, 0xC3, 0x48, 0x38, 0xF8, 0x08, 0xA9, 0x00, 0x18, 0xD8, 0x28, 0x68,
    ];
    let (mut cpu, mut ram) = setup_at(0x0200, &prg, 0x0200);
    for _ in 0..10 {
        cpu.step(&mut ram);
    }
    assert_eq!(cpu.a(), 0xC3);
    assert!(cpu.flag(Status::CARRY));
    assert!(cpu.flag(Status::DECIMAL));
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status().bits() & 0x20, 0);
}

#[test]
fn plp_php_round_trip_every_stack_byte() {
    // PLP ; PHP ; PLP
    for byte in 0..=0xFFu8 {
        let (mut cpu, mut ram) = setup_at(0x0200, &[0x28, 0x08, 0x28], 0x0200);
        ram.load(0x01FE, &[byte]);
        let expected = Status::from_stack_byte(byte);
        assert_eq!(expected.bits(), byte & !0x20);

        cpu.step(&mut ram);
        assert_eq!(cpu.status(), expected, "PLP of {byte:#04X}");
        cpu.step(&mut ram);
        assert_eq!(ram.peek(0x01FE), byte | 0x20, "PHP of {byte:#04X}");
        cpu.step(&mut ram);
        assert_eq!(cpu.status(), expected, "second PLP of {byte:#04X}");
        assert_eq!(cpu.sp(), 0xFE);
    }
}

#[test]
fn jsr_rts_round_trip_from_1000() {
    let (mut cpu, mut ram) = setup_at(0x1000, &[0x20, 0xCD, 0xAB], 0x0200);
    ram.load(0xABCD, &[0x60]);

    assert_eq!(cpu.step(&mut ram), 6);
    assert_eq!(cpu.pc(), 0xABCD);
    assert_eq!(cpu.sp(), 0xFB);
    assert_eq!(ram.peek(0x01FD), 0x10);
    assert_eq!(ram.peek(0x01FC), 0x02);

    assert_eq!(cpu.step(&mut ram), 6);
    assert_eq!(cpu.pc(), 0x1003);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn brk_rti_round_trip() {
    // $0200: SEC ; BRK ; <signature>    $0400: CLC ; RTI
    let (mut cpu, mut ram) = setup_at(0x0200, &[0x38, 0x00, 0xFF], 0x0400);
    ram.load(0x0400, &[0x18, 0x40]);
    cpu.set_flag(Status::IRQ_DISABLE, false);

    cpu.step(&mut ram);
    assert_eq!(cpu.step(&mut ram), 7);
    assert_eq!(cpu.pc(), 0x0400);
    assert!(cpu.flag(Status::IRQ_DISABLE));
    assert_eq!(cpu.sp(), 0xFA);
    assert_eq!(ram.peek(0x01FD), 0x02);
    assert_eq!(ram.peek(0x01FC), 0x03);
    let pushed = ram.peek(0x01FB);
    assert_eq!(pushed & 0x30, 0x30);
    assert_eq!(pushed & 0x01, 0x01);
    assert_eq!(pushed & 0x04, 0x00);

    cpu.step(&mut ram);
    assert!(!cpu.flag(Status::CARRY));
    assert_eq!(cpu.step(&mut ram), 6);
    assert_eq!(cpu.pc(), 0x0203);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag(Status::CARRY));
    assert!(!cpu.flag(Status::IRQ_DISABLE));
}

#[test]
fn stack_accesses_wrap_inside_page_one() {
    // LDA #$5A ; PHA ; PLA with SP = $00
    let mut bus = RecordingBus::with_program(0x0200, &[0xA9, 0x5A, 0x48, 0x68]);
    let mut cpu = Cpu::power_on(&mut bus);
    cpu.set_sp(0x00);
    cpu.step(&mut bus);
    bus.clear();

    cpu.step(&mut bus);
    assert_eq!(bus.writes(), vec![(0x0100, 0x5A)]);
    assert_eq!(cpu.sp(), 0xFF);

    cpu.step(&mut bus);
    assert!(bus.events.contains(&BusEvent::Read(0x0100)));
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.a(), 0x5A);

    for e in &bus.events {
        if let BusEvent::Write(addr, _) = e {
            assert_eq!(addr & 0xFF00, 0x0100);
        }
    }
}

// -------------------------------------------------------------------------
// Power-on and whole programs
// -------------------------------------------------------------------------

#[test]
fn power_on_reads_reset_vector() {
    let mut ram = Ram::new();
    ram.set_word(RESET_VECTOR, 0xC123);
    let cpu = Cpu::power_on(&mut ram);
    assert_eq!(cpu.pc(), 0xC123);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), Status::from_stack_byte(0x34));
    assert_eq!(cpu.state().cycles, 0);
}

#[test]
fn copy_loop_program() {
    // LDX #$00
    // loop: LDA $0300,X ; STA $0400,X ; INX ; CPX #$04 ; BNE loop
    let prg = [
        0xA2, 0x00, 0xBD, 0x00, 0x03, 0x9D, 0x00, 0x04, 0xE8, 0xE0, 0x04, 0xD0, 0xF5,
    ];
    let (mut cpu, mut ram) = setup_at(0x0200, &prg, 0x0200);
    ram.load(0x0300, &[1, 2, 3, 4]);
    let mut used = cpu.step(&mut ram);
    // 4 iterations: LDA 4 + STA 5 + INX 2 + CPX 2 + BNE 3 (last one 2)
    for _ in 0..4 * 5 {
        used += cpu.step(&mut ram);
    }
    assert_eq!(&ram.as_slice()[0x0400..0x0404], &[1, 2, 3, 4]);
    assert_eq!(cpu.pc(), 0x020D);
    assert_eq!(used, 2 + 4 * 16 - 1);
    assert_eq!(cpu.total_cycles(), used);
}
