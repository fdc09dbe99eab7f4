/*!
execute.rs - 2A03 instruction semantic helpers (ALU, flags, stack, RMW,
branch).

Purpose
=======
Centralize the side effects of every instruction so the family handlers in
`dispatch` stay thin: they resolve an address, then call into here.

Scope (crate-visible)
---------------------
Stack unit:
    push, pop, pop_chained, pha, pla, php, plp

Loads / transfers / register inc-dec:
    lda/ldx/ldy, tax/tay/txa/tya/tsx/txs, inx/iny/dex/dey

ALU:
    and/ora/eor/bit, adc/sbc, compare

Shifts / rotates (value level, shared by accumulator and memory forms):
    asl, lsr, rol, ror

RMW choreography:
    rmw_memory

Branch:
    branch

Cycle Rules
===========
Helpers that take a bus do their own accesses through `cycles::{read,
write, idle}`; nothing here adds cycles by arithmetic.
- push: 1 (write)
- pop: 2 (internal SP increment + read)
- pop_chained: 1 (read; SP increment overlaps the previous access)
- rmw_memory: 3 (read, write old, write new)
- branch: 1 operand fetch, +1 taken, +1 page cross
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Access, AddressingMode, resolve};
use crate::cpu::cycles::{idle, read, write};
use crate::cpu::flags::Status;
use crate::cpu::regs::CpuRegs;

// ---------------------------------------------------------------------------
// Stack unit
// ---------------------------------------------------------------------------

/// Write `v` at $0100|SP, then decrement SP (wrapping inside page 1).
#[inline]
pub(crate) fn push<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, v: u8) {
    let addr = cpu.stack_addr();
    write(cpu, bus, addr, v);
    let sp = cpu.sp().wrapping_sub(1);
    cpu.set_sp(sp);
}

/// First pull of an instruction: one internal cycle to pre-increment SP,
/// then the read.
#[inline]
pub(crate) fn pop<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u8 {
    idle(cpu);
    pop_chained(cpu, bus)
}

/// Follow-up pull inside the same instruction (RTS/RTI).
#[inline]
pub(crate) fn pop_chained<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    let addr = cpu.stack_addr();
    read(cpu, bus, addr)
}

#[inline]
pub(crate) fn pha<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let a = cpu.a();
    push(cpu, bus, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let v = pop(cpu, bus);
    lda(cpu, v);
}

/// Push the status byte: stored B as-is, bit 5 forced.
#[inline]
pub(crate) fn php<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let p = cpu.status().to_stack_byte();
    push(cpu, bus, p);
}

/// Pull the status byte: all seven flags restored, bit 5 dropped.
#[inline]
pub(crate) fn plp<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let p = pop(cpu, bus);
    cpu.set_status(Status::from_stack_byte(p));
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldx(cpu, v);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldy(cpu, v);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.sp();
    ldx(cpu, v);
}

/// TXS is the only transfer that leaves the flags alone.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    cpu.set_sp(v);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_add(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_add(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_sub(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_sub(1);
    ldy(cpu, v);
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() & v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() | v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() ^ v;
    lda(cpu, r);
}

/// Z from A & M; N and V copied from bits 7 and 6 of M.
#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    cpu.assign_flag(Status::ZERO, (a & v) == 0);
    cpu.assign_flag(Status::NEGATIVE, (v & 0x80) != 0);
    cpu.assign_flag(Status::OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// ADC / SBC (binary only; D flag is ignored on the 2A03)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let carry_in = cpu.is_flag_set(Status::CARRY) as u16;
    let sum16 = a as u16 + v as u16 + carry_in;
    let result = sum16 as u8;

    cpu.assign_flag(Status::CARRY, sum16 > 0xFF);
    // Overflow: both inputs share a sign the result does not.
    cpu.assign_flag(Status::OVERFLOW, ((a ^ result) & (v ^ result) & 0x80) != 0);
    lda(cpu, result);
}

/// A - M - (1 - C), computed as A + !M + C.
#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, !v);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    cpu.assign_flag(Status::CARRY, reg >= v);
    cpu.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Shifts / Rotates (value level)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.assign_flag(Status::CARRY, (v & 0x80) != 0);
    let r = v << 1;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.assign_flag(Status::CARRY, (v & 0x01) != 0);
    let r = v >> 1;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.is_flag_set(Status::CARRY) as u8;
    cpu.assign_flag(Status::CARRY, (v & 0x80) != 0);
    let r = (v << 1) | carry_in;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = if cpu.is_flag_set(Status::CARRY) { 0x80 } else { 0 };
    cpu.assign_flag(Status::CARRY, (v & 0x01) != 0);
    let r = (v >> 1) | carry_in;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn inc<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_add(1);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn dec<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_sub(1);
    cpu.update_zn(r);
    r
}

// ---------------------------------------------------------------------------
// Read-Modify-Write (memory) choreography
// ---------------------------------------------------------------------------

/// Canonical 6502 RMW sequence: read old -> write old back -> write new.
/// Returns the value written.
pub(crate) fn rmw_memory<C: CpuRegs, B: Bus, F>(
    cpu: &mut C,
    bus: &mut B,
    addr: u16,
    transform: F,
) -> u8
where
    F: FnOnce(&mut C, u8) -> u8,
{
    let old = read(cpu, bus, addr);
    write(cpu, bus, addr, old);
    let new = transform(cpu, old);
    write(cpu, bus, addr, new);
    new
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// Fetch the signed displacement and, when `take` holds, move PC.
///
/// Taken branches spend one dummy read at the next-instruction address;
/// a target on another page spends a second one at the address formed
/// from the old high byte and the new low byte.
pub(crate) fn branch<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, take: bool) {
    let operand = resolve(cpu, bus, AddressingMode::Relative, Access::Read);
    let offset = read(cpu, bus, operand) as i8;
    if !take {
        return;
    }

    let pc = cpu.pc();
    read(cpu, bus, pc);
    let target = pc.wrapping_add(offset as i16 as u16);
    if (pc & 0xFF00) != (target & 0xFF00) {
        read(cpu, bus, (pc & 0xFF00) | (target & 0x00FF));
    }
    cpu.set_pc(target);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
