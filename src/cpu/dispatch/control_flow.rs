/*!
control_flow.rs - Control-flow / interrupt opcode family handler

Overview
========
  JMP abs / JMP (ind)
  JSR abs
  RTS
  BRK
  RTI

Bus Sequences
=============
JSR (6): fetch target low, dummy read of the current stack slot, push PCH,
    push PCL, fetch target high. The pushed address is the last byte of the
    JSR instruction, so RTS lands on the byte after it.
RTS (6): dummy read at PC, pull PCL (with the internal SP cycle), pull PCH,
    dummy read at the pulled address, PC = pulled + 1.
BRK (7): fetch and discard the signature byte, set B, push PCH, PCL and the
    status byte, set I, read the vector at $FFFE/$FFFF. Execution continues
    at the handler; nothing halts.
RTI (6): dummy read at PC, pull status (all seven flags), pull PCL, pull PCH.
    No +1 on the pulled address.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Access, AddressingMode, fetch_byte, read_operand, resolve};
use crate::cpu::cycles::read;
use crate::cpu::execute::{pop, pop_chained, push};
use crate::cpu::flags::Status;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::IRQ_VECTOR;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a control-flow instruction.
///
/// Returns:
///   true  if handled here
///   false if not a control-flow mnemonic (caller continues dispatch)
pub(super) fn handle<C: CpuRegs, B: Bus>(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    cpu: &mut C,
    bus: &mut B,
) -> bool {
    match mnemonic {
        Mnemonic::Jmp => {
            let target = resolve(cpu, bus, mode, Access::Read);
            cpu.set_pc(target);
        }
        Mnemonic::Jsr => op_jsr(cpu, bus),
        Mnemonic::Rts => op_rts(cpu, bus, mode),
        Mnemonic::Brk => op_brk(cpu, bus, mode),
        Mnemonic::Rti => op_rti(cpu, bus, mode),
        _ => return false,
    }
    true
}

fn op_jsr<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) {
    let lo = fetch_byte(cpu, bus);
    let slot = cpu.stack_addr();
    read(cpu, bus, slot);
    let [ret_lo, ret_hi] = cpu.pc().to_le_bytes();
    push(cpu, bus, ret_hi);
    push(cpu, bus, ret_lo);
    let hi = fetch_byte(cpu, bus);
    cpu.set_pc(u16::from_le_bytes([lo, hi]));
}

fn op_rts<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, mode: AddressingMode) {
    resolve(cpu, bus, mode, Access::Read);
    let lo = pop(cpu, bus);
    let hi = pop_chained(cpu, bus);
    let ret = u16::from_le_bytes([lo, hi]);
    read(cpu, bus, ret);
    cpu.set_pc(ret.wrapping_add(1));
}

fn op_brk<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, mode: AddressingMode) {
    read_operand(cpu, bus, mode);
    cpu.assign_flag(Status::BREAK, true);
    let [pc_lo, pc_hi] = cpu.pc().to_le_bytes();
    push(cpu, bus, pc_hi);
    push(cpu, bus, pc_lo);
    let p = cpu.status().to_stack_byte();
    push(cpu, bus, p);
    cpu.assign_flag(Status::IRQ_DISABLE, true);
    let lo = read(cpu, bus, IRQ_VECTOR);
    let hi = read(cpu, bus, IRQ_VECTOR.wrapping_add(1));
    cpu.set_pc(u16::from_le_bytes([lo, hi]));
}

fn op_rti<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, mode: AddressingMode) {
    resolve(cpu, bus, mode, Access::Read);
    let p = pop(cpu, bus);
    cpu.set_status(Status::from_stack_byte(p));
    let lo = pop_chained(cpu, bus);
    let hi = pop_chained(cpu, bus);
    cpu.set_pc(u16::from_le_bytes([lo, hi]));
}
