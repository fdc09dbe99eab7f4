/*!
rmw.rs - Shift / rotate and memory INC / DEC opcode family handler

Overview
========
Implements the 6502 Read-Modify-Write instructions:

  ASL, LSR, ROL, ROR   accumulator and memory forms
  INC, DEC             memory forms

Accumulator forms spend their second cycle on the implied dummy read at PC
and operate on A. Memory forms resolve with RMW intent (so absolute,X always
pays its dummy read) and then run `rmw_memory`: read old, write old back,
write new. That is 5 / 6 / 6 / 7 cycles for zp / zp,X / abs / abs,X.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Access, AddressingMode, resolve};
use crate::cpu::execute::{asl, dec, inc, lsr, rmw_memory, rol, ror};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

/// Attempt to execute an RMW / shift / INC / DEC instruction.
/// Returns false if the mnemonic is not part of this family.
pub(super) fn handle<C: CpuRegs, B: Bus>(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    cpu: &mut C,
    bus: &mut B,
) -> bool {
    let op: fn(&mut C, u8) -> u8 = match mnemonic {
        Mnemonic::Asl => asl,
        Mnemonic::Lsr => lsr,
        Mnemonic::Rol => rol,
        Mnemonic::Ror => ror,
        Mnemonic::Inc => inc,
        Mnemonic::Dec => dec,
        _ => return false,
    };

    if mode == AddressingMode::Accumulator {
        resolve(cpu, bus, mode, Access::Read);
        let a = cpu.a();
        let r = op(cpu, a);
        cpu.set_a(r);
    } else {
        let addr = resolve(cpu, bus, mode, Access::ReadModifyWrite);
        rmw_memory(cpu, bus, addr, op);
    }
    true
}
