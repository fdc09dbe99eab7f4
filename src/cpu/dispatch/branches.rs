/*!
branches.rs - Relative branch opcode handler (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles (opcode + displacement fetch).
If branch is taken: +1 cycle.
If branch is taken and target crosses a page boundary: +2 total (vs base).

The extra cycles are real dummy reads issued by `execute::branch`.
*/

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::execute::branch;
use crate::cpu::flags::Status;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a branch instruction; false if not a branch.
pub(super) fn handle<C: CpuRegs, B: Bus>(
    mnemonic: Mnemonic,
    _mode: AddressingMode,
    cpu: &mut C,
    bus: &mut B,
) -> bool {
    let take = match mnemonic {
        Mnemonic::Bpl => !cpu.is_flag_set(Status::NEGATIVE),
        Mnemonic::Bmi => cpu.is_flag_set(Status::NEGATIVE),
        Mnemonic::Bvc => !cpu.is_flag_set(Status::OVERFLOW),
        Mnemonic::Bvs => cpu.is_flag_set(Status::OVERFLOW),
        Mnemonic::Bcc => !cpu.is_flag_set(Status::CARRY),
        Mnemonic::Bcs => cpu.is_flag_set(Status::CARRY),
        Mnemonic::Bne => !cpu.is_flag_set(Status::ZERO),
        Mnemonic::Beq => cpu.is_flag_set(Status::ZERO),
        _ => return false,
    };
    branch(cpu, bus, take);
    true
}
