/*!
dispatch - Orchestrator for a single 2A03 instruction step.

Overview
========
Coordinates one instruction:
1. Fetch the opcode at PC (one bus cycle, PC += 1).
2. Decode it through the total opcode table (`table::decode`).
3. Hand the decoded mnemonic + addressing mode to the family handlers in a
   fixed chain; exactly one of them claims it.

Families
========
- load_store: LDA/LDX/LDY, STA/STX/STY
- logical: AND/EOR/ORA, BIT
- arithmetic: ADC/SBC
- compare: CMP/CPX/CPY
- rmw: ASL/LSR/ROL/ROR (accumulator + memory), INC/DEC memory
- branches: BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ
- control_flow: JMP/JSR/RTS/BRK/RTI
- misc: transfers, stack, flag set/clear, register INX/INY/DEX/DEY, NOP

Cycle Accounting
================
There is no per-opcode cycle arithmetic here. Each handler performs the bus
accesses the hardware performs and every access charges one cycle, so
`step` just reports how far the counter moved.

Design Notes
============
- The decoded instruction is a local of `step`; no "current opcode" state
  lives in the CPU.
- Unofficial opcodes reach `misc` as `Nop` and are logged at trace level.
*/

use crate::bus::Bus;
use crate::cpu::addressing::fetch_byte;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::{Instruction, decode};

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

/// Execute one instruction and return the cycles it consumed.
pub(crate) fn step<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u64 {
    let start = cpu.cycles();
    let pc = cpu.pc();
    let opcode = fetch_byte(cpu, bus);
    let instr = decode(opcode);
    if !instr.official {
        log::trace!("unofficial opcode ${opcode:02X} at ${pc:04X} executed as NOP");
    }
    execute(instr, cpu, bus);
    cpu.cycles() - start
}

/// Run the family chain for an already-fetched instruction.
fn execute<C: CpuRegs, B: Bus>(instr: Instruction, cpu: &mut C, bus: &mut B) {
    let Instruction { mnemonic, mode, .. } = instr;
    let handled = load_store::handle(mnemonic, mode, cpu, bus)
        || logical::handle(mnemonic, mode, cpu, bus)
        || arithmetic::handle(mnemonic, mode, cpu, bus)
        || compare::handle(mnemonic, mode, cpu, bus)
        || rmw::handle(mnemonic, mode, cpu, bus)
        || branches::handle(mnemonic, mode, cpu, bus)
        || control_flow::handle(mnemonic, mode, cpu, bus)
        || misc::handle(mnemonic, mode, cpu, bus);
    debug_assert!(handled, "no family handler for {mnemonic}");
}
