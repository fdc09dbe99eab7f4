/*!
addressing.rs - 2A03 addressing modes and effective-address resolution
with exact bus traffic.

Overview
========
`resolve(cpu, bus, mode, access)` turns the operand bytes that follow an
opcode into an effective address, performing every fetch and dummy read the
hardware performs on the way. Each access goes through `cycles::read`, so
the cycle count of an instruction is simply the number of accesses it
makes (plus stack-internal cycles).

Access Intent
=============
Indexed modes behave differently depending on what the instruction will do
with the address:
- `Access::Read`: the un-fixed address (original high byte, indexed low
  byte) is read only when the index carried into the high byte.
- `Access::Write` / `Access::ReadModifyWrite`: the un-fixed address is
  always read once before the real access.

Mode Contracts
==============
- Implied / Accumulator: one dummy read at PC; PC is not advanced.
- Immediate / Relative: returns PC and advances it with no access; the
  caller's read of the returned address is the operand fetch.
- Zero page,X / Zero page,Y: dummy read of the base before indexing, sum
  wraps inside page 0.
- (indirect,X): dummy read of the pointer, both pointer bytes read inside
  page 0.
- Indirect (JMP): pointer+1 carries into the next page unless the
  `jmp_indirect_page_wrap` feature is enabled.

Caller Assumptions
==================
- PC points at the first operand byte (the opcode has been fetched).
*/

use crate::bus::Bus;
use crate::cpu::cycles::read;
use crate::cpu::regs::CpuRegs;

/// The thirteen 6502 addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect,
    IndirectIndexed,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            Self::Implied | Self::Accumulator => 0,
            Self::Immediate
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::Relative
            | Self::IndexedIndirect
            | Self::IndirectIndexed => 1,
            Self::Absolute | Self::AbsoluteX | Self::AbsoluteY | Self::Indirect => 2,
        }
    }

    /// True when the mode names a memory operand (anything but implied/A).
    #[inline]
    pub const fn has_operand(self) -> bool {
        self.operand_len() != 0
    }
}

/// What the instruction will do with the resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
    ReadModifyWrite,
}

/// Fetch next byte from the instruction stream, incrementing PC.
#[inline]
pub(crate) fn fetch_byte<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u8 {
    let pc = cpu.pc();
    let v = read(cpu, bus, pc);
    cpu.advance_pc_one();
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
#[inline]
pub(crate) fn fetch_word<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B) -> u16 {
    let lo = fetch_byte(cpu, bus) as u16;
    let hi = fetch_byte(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Resolve the effective address for `mode`, performing its bus accesses.
pub(crate) fn resolve<C: CpuRegs, B: Bus>(
    cpu: &mut C,
    bus: &mut B,
    mode: AddressingMode,
    access: Access,
) -> u16 {
    match mode {
        AddressingMode::Implied | AddressingMode::Accumulator => {
            let pc = cpu.pc();
            read(cpu, bus, pc);
            pc
        }
        AddressingMode::Immediate | AddressingMode::Relative => {
            let pc = cpu.pc();
            cpu.advance_pc_one();
            pc
        }
        AddressingMode::ZeroPage => fetch_byte(cpu, bus) as u16,
        AddressingMode::ZeroPageX => {
            let x = cpu.x();
            zero_page_indexed(cpu, bus, x)
        }
        AddressingMode::ZeroPageY => {
            let y = cpu.y();
            zero_page_indexed(cpu, bus, y)
        }
        AddressingMode::Absolute => fetch_word(cpu, bus),
        AddressingMode::AbsoluteX => {
            let base = fetch_word(cpu, bus);
            let x = cpu.x();
            indexed(cpu, bus, base, x, access)
        }
        AddressingMode::AbsoluteY => {
            let base = fetch_word(cpu, bus);
            let y = cpu.y();
            indexed(cpu, bus, base, y, access)
        }
        AddressingMode::Indirect => {
            let ptr = fetch_word(cpu, bus);
            read_word_indirect(cpu, bus, ptr)
        }
        AddressingMode::IndexedIndirect => {
            let ptr = fetch_byte(cpu, bus);
            read(cpu, bus, ptr as u16);
            let zp = ptr.wrapping_add(cpu.x());
            read_word_zp(cpu, bus, zp)
        }
        AddressingMode::IndirectIndexed => {
            let ptr = fetch_byte(cpu, bus);
            let base = read_word_zp(cpu, bus, ptr);
            let y = cpu.y();
            indexed(cpu, bus, base, y, access)
        }
    }
}

/// Resolve with read intent and return the operand value.
#[inline]
pub(crate) fn read_operand<C: CpuRegs, B: Bus>(
    cpu: &mut C,
    bus: &mut B,
    mode: AddressingMode,
) -> u8 {
    let addr = resolve(cpu, bus, mode, Access::Read);
    read(cpu, bus, addr)
}

// -------------------------
// Mode building blocks
// -------------------------

#[inline]
fn zero_page_indexed<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, index: u8) -> u16 {
    let base = fetch_byte(cpu, bus);
    read(cpu, bus, base as u16);
    base.wrapping_add(index) as u16
}

/// Add `index` to the low byte of `base`; the dummy read hits the address
/// formed before the high byte is fixed up.
#[inline]
fn indexed<C: CpuRegs, B: Bus>(
    cpu: &mut C,
    bus: &mut B,
    base: u16,
    index: u8,
    access: Access,
) -> u16 {
    let [lo, hi] = base.to_le_bytes();
    let (new_lo, carried) = lo.overflowing_add(index);
    let unfixed = u16::from_le_bytes([new_lo, hi]);
    if carried || access != Access::Read {
        read(cpu, bus, unfixed);
    }
    if carried {
        u16::from_le_bytes([new_lo, hi.wrapping_add(1)])
    } else {
        unfixed
    }
}

/// Read a 16-bit little endian pointer from zero page; the high byte comes
/// from `(ptr + 1) & 0xFF`.
#[inline]
fn read_word_zp<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, ptr: u8) -> u16 {
    let lo = read(cpu, bus, ptr as u16) as u16;
    let hi = read(cpu, bus, ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// JMP (indirect) target fetch.
#[inline]
fn read_word_indirect<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, ptr: u16) -> u16 {
    let lo = read(cpu, bus, ptr) as u16;
    let hi_addr = if cfg!(feature = "jmp_indirect_page_wrap") {
        (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF)
    } else {
        ptr.wrapping_add(1)
    };
    let hi = read(cpu, bus, hi_addr) as u16;
    (hi << 8) | lo
}
