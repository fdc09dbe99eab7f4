/*!
misc.rs - Transfers / Stack / Flag / register INC-DEC / NOP family handler

Overview
========
Transfers:
  TAX, TAY, TXA, TYA, TSX, TXS (TXS leaves flags alone)

Stack:
  PHA, PLA, PHP, PLP

Flag operations:
  CLC, SEC, CLI, SEI, CLD, SED, CLV

Register increment / decrement:
  INX, INY, DEX, DEY

NOP:
  The official $EA and every unofficial opcode. Implied forms spend the
  dummy read at PC; forms with an operand resolve it and read the operand
  once, discarding the value.

Timing
======
Every instruction here starts with the implied dummy read at PC, giving
2 cycles for single-byte register / flag ops, 3 for pushes (one stack write)
and 4 for pulls (internal SP increment + stack read).
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Access, AddressingMode, read_operand, resolve};
use crate::cpu::execute::{dex, dey, inx, iny, pha, php, pla, plp, tax, tay, tsx, txa, txs, tya};
use crate::cpu::flags::Status;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a miscellaneous instruction.
///
/// Returns:
///   true  - handled here
///   false - not part of this family; caller should continue dispatch
pub(super) fn handle<C: CpuRegs, B: Bus>(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    cpu: &mut C,
    bus: &mut B,
) -> bool {
    use Mnemonic::*;

    if mnemonic == Nop {
        if mode.has_operand() {
            read_operand(cpu, bus, mode);
        } else {
            resolve(cpu, bus, mode, Access::Read);
        }
        return true;
    }

    let op: fn(&mut C, &mut B) = match mnemonic {
        // -------- Transfers --------
        Tax => |c, _| tax(c),
        Tay => |c, _| tay(c),
        Txa => |c, _| txa(c),
        Tya => |c, _| tya(c),
        Tsx => |c, _| tsx(c),
        Txs => |c, _| txs(c),

        // -------- Register INC / DEC --------
        Inx => |c, _| inx(c),
        Iny => |c, _| iny(c),
        Dex => |c, _| dex(c),
        Dey => |c, _| dey(c),

        // -------- Stack --------
        Pha => pha,
        Pla => pla,
        Php => php,
        Plp => plp,

        // -------- Flags --------
        Clc => |c, _| c.assign_flag(Status::CARRY, false),
        Sec => |c, _| c.assign_flag(Status::CARRY, true),
        Cli => |c, _| c.assign_flag(Status::IRQ_DISABLE, false),
        Sei => |c, _| c.assign_flag(Status::IRQ_DISABLE, true),
        Cld => |c, _| c.assign_flag(Status::DECIMAL, false),
        Sed => |c, _| c.assign_flag(Status::DECIMAL, true),
        Clv => |c, _| c.assign_flag(Status::OVERFLOW, false),

        _ => return false,
    };

    // Single-byte instructions: dummy read of the next opcode byte.
    resolve(cpu, bus, mode, Access::Read);
    op(cpu, bus);
    true
}
