/*!
arithmetic.rs - Arithmetic opcode family handler (ADC / SBC)

Binary arithmetic only: the 2A03 has no decimal mode, so the D flag is
stored but never consulted. SBC is ADC of the one's complement of the
operand, which yields the borrow-as-inverted-carry convention.

Page-cross penalties apply to the absolute,X / absolute,Y / (indirect),Y
forms through read-intent address resolution.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{AddressingMode, read_operand};
use crate::cpu::execute::{adc, sbc};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

/// Attempt to execute ADC/SBC; false if not in this family.
pub(super) fn handle<C: CpuRegs, B: Bus>(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    cpu: &mut C,
    bus: &mut B,
) -> bool {
    match mnemonic {
        Mnemonic::Adc => {
            let v = read_operand(cpu, bus, mode);
            adc(cpu, v);
        }
        Mnemonic::Sbc => {
            let v = read_operand(cpu, bus, mode);
            sbc(cpu, v);
        }
        _ => return false,
    }
    true
}
