/*!
compare.rs - Compare opcode family handler (CMP / CPX / CPY)

C = register >= operand (unsigned), Z/N from register - operand. No
register is modified.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{AddressingMode, read_operand};
use crate::cpu::execute::compare;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a compare instruction; false if not in this family.
pub(super) fn handle<C: CpuRegs, B: Bus>(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    cpu: &mut C,
    bus: &mut B,
) -> bool {
    let reg = match mnemonic {
        Mnemonic::Cmp => cpu.a(),
        Mnemonic::Cpx => cpu.x(),
        Mnemonic::Cpy => cpu.y(),
        _ => return false,
    };
    let v = read_operand(cpu, bus, mode);
    compare(cpu, reg, v);
    true
}
