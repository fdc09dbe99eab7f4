/*!
load_store.rs - Load / Store opcode family handler

Loads (set Z/N flags):
    LDA, LDX, LDY

Stores (no flags changed):
    STA, STX, STY

Cycle Accounting
================
Loads resolve with read intent, so indexed forms pay the extra cycle only
when the index crosses a page. Stores resolve with write intent, which
always spends the dummy read on indexed forms and never reads the target.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Access, AddressingMode, read_operand, resolve};
use crate::cpu::cycles::write;
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

/// Attempt to execute a load/store instruction.
///
/// Returns:
/// - true if this mnemonic was recognized and executed
/// - false if it does not belong to the load/store family
pub(super) fn handle<C: CpuRegs, B: Bus>(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    cpu: &mut C,
    bus: &mut B,
) -> bool {
    match mnemonic {
        Mnemonic::Lda => {
            let v = read_operand(cpu, bus, mode);
            lda(cpu, v);
        }
        Mnemonic::Ldx => {
            let v = read_operand(cpu, bus, mode);
            ldx(cpu, v);
        }
        Mnemonic::Ldy => {
            let v = read_operand(cpu, bus, mode);
            ldy(cpu, v);
        }
        Mnemonic::Sta => {
            let v = cpu.a();
            store(cpu, bus, mode, v);
        }
        Mnemonic::Stx => {
            let v = cpu.x();
            store(cpu, bus, mode, v);
        }
        Mnemonic::Sty => {
            let v = cpu.y();
            store(cpu, bus, mode, v);
        }
        _ => return false,
    }
    true
}

#[inline]
fn store<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, mode: AddressingMode, v: u8) {
    let addr = resolve(cpu, bus, mode, Access::Write);
    write(cpu, bus, addr, v);
}
