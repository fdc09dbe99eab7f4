/*!
logical.rs - Logical opcode family handler (AND / EOR / ORA / BIT)

AND, EOR and ORA combine the operand into A and set Z/N from the result.
BIT only touches flags: Z from A & M, N and V from bits 7 and 6 of M.
All forms resolve with read intent.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{AddressingMode, read_operand};
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a logical instruction; false if not in this family.
pub(super) fn handle<C: CpuRegs, B: Bus>(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    cpu: &mut C,
    bus: &mut B,
) -> bool {
    let op: fn(&mut C, u8) = match mnemonic {
        Mnemonic::And => and,
        Mnemonic::Eor => eor,
        Mnemonic::Ora => ora,
        Mnemonic::Bit => bit,
        _ => return false,
    };
    let v = read_operand(cpu, bus, mode);
    op(cpu, v);
    true
}
