/*!
cycles.rs - Bus-cycle accounting for the 2A03 core.

Purpose
=======
Provides:
  - `read` / `write` : the only way the core touches the bus; each call is
                       one bus cycle and charges one cycle to the state.
  - `idle`           : one internal cycle with no bus traffic (stack
                       pointer pre-increment on pulls).
  - `base_cycles(op)`: published cycle count of each official opcode,
                       without page-cross or branch penalties. Used as the
                       timing reference in tests and by tooling; execution
                       never consults it, the count falls out of the bus
                       accesses an instruction performs.
  - `has_page_penalty(op)`: official opcodes that cost +1 when their
                       indexed address crosses a page.

Frame Budget
============
`CYCLES_PER_FRAME` is one NTSC frame of CPU time (341 * 262 / 3 dots,
rounded up) and is the default budget for `Cpu::run_frame`.
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;

/// CPU cycles in one NTSC frame.
pub const CYCLES_PER_FRAME: u64 = 29_781;

/// One bus read cycle.
#[inline]
pub(crate) fn read<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, addr: u16) -> u8 {
    cpu.tick();
    bus.read(addr)
}

/// One bus write cycle.
#[inline]
pub(crate) fn write<C: CpuRegs, B: Bus>(cpu: &mut C, bus: &mut B, addr: u16, value: u8) {
    cpu.tick();
    bus.write(addr, value);
}

/// One internal cycle (no bus access).
#[inline]
pub(crate) fn idle<C: CpuRegs>(cpu: &mut C) {
    cpu.tick();
}

/// Return the published cycle count for an official opcode, `None` for
/// unofficial ones. Page-cross (+1) and branch (+1 taken, +1 page cross)
/// penalties are not included.
pub fn base_cycles(op: u8) -> Option<u32> {
    let cycles = match op {
        // Immediate
        0xA9 | 0xA2 | 0xA0 | 0x69 | 0xE9 | 0x29 | 0x49 | 0x09 | 0xC9 | 0xE0 | 0xC0 => 2,
        // Implied: transfers, inc/dec register, flags, NOP
        0xAA | 0xA8 | 0x8A | 0x98 | 0xBA | 0x9A | 0xE8 | 0xC8 | 0xCA | 0x88 => 2,
        0x18 | 0x38 | 0x58 | 0x78 | 0xB8 | 0xD8 | 0xF8 | 0xEA => 2,
        // Accumulator shifts
        0x0A | 0x4A | 0x2A | 0x6A => 2,
        // Branches (not taken)
        0x10 | 0x30 | 0x50 | 0x70 | 0x90 | 0xB0 | 0xD0 | 0xF0 => 2,

        // Zero page read / store
        0xA5 | 0xA6 | 0xA4 | 0x85 | 0x86 | 0x84 | 0x65 | 0xE5 | 0x25 | 0x45 | 0x05 => 3,
        0xC5 | 0xE4 | 0xC4 | 0x24 => 3,
        // PHA, PHP, JMP abs
        0x48 | 0x08 | 0x4C => 3,

        // Zero page,X / zero page,Y
        0xB5 | 0xB6 | 0xB4 | 0x95 | 0x96 | 0x94 | 0x75 | 0xF5 | 0x35 | 0x55 | 0x15 => 4,
        0xD5 => 4,
        // Absolute read / store
        0xAD | 0xAE | 0xAC | 0x8D | 0x8E | 0x8C | 0x6D | 0xED | 0x2D | 0x4D | 0x0D => 4,
        0xCD | 0xEC | 0xCC | 0x2C => 4,
        // Absolute,X / absolute,Y reads
        0xBD | 0xB9 | 0xBE | 0xBC | 0x7D | 0x79 | 0xFD | 0xF9 | 0x3D | 0x39 | 0x5D => 4,
        0x59 | 0x1D | 0x19 | 0xDD | 0xD9 => 4,
        // PLA, PLP
        0x68 | 0x28 => 4,

        // Zero page RMW
        0x06 | 0x46 | 0x26 | 0x66 | 0xE6 | 0xC6 => 5,
        // Absolute,X / absolute,Y stores
        0x9D | 0x99 => 5,
        // (indirect),Y reads
        0xB1 | 0x71 | 0xF1 | 0x31 | 0x51 | 0x11 | 0xD1 => 5,
        // JMP (indirect)
        0x6C => 5,

        // Zero page,X RMW
        0x16 | 0x56 | 0x36 | 0x76 | 0xF6 | 0xD6 => 6,
        // Absolute RMW
        0x0E | 0x4E | 0x2E | 0x6E | 0xEE | 0xCE => 6,
        // (indirect,X)
        0xA1 | 0x81 | 0x61 | 0xE1 | 0x21 | 0x41 | 0x01 | 0xC1 => 6,
        // (indirect),Y store
        0x91 => 6,
        // JSR, RTS, RTI
        0x20 | 0x60 | 0x40 => 6,

        // Absolute,X RMW
        0x1E | 0x5E | 0x3E | 0x7E | 0xFE | 0xDE => 7,
        // BRK
        0x00 => 7,

        _ => return None,
    };
    Some(cycles)
}

/// True for official read instructions using absolute,X / absolute,Y /
/// (indirect),Y, which take one extra cycle when the index carries into the
/// high byte.
pub fn has_page_penalty(op: u8) -> bool {
    matches!(
        op,
        0xBD | 0xB9 | 0xBE | 0xBC | // LDA abs,X/Y, LDX abs,Y, LDY abs,X
        0x7D | 0x79 | 0xFD | 0xF9 | // ADC / SBC abs,X/Y
        0x3D | 0x39 | 0x5D | 0x59 | 0x1D | 0x19 | // AND / EOR / ORA abs,X/Y
        0xDD | 0xD9 | // CMP abs,X/Y
        0xB1 | 0x71 | 0xF1 | 0x31 | 0x51 | 0x11 | 0xD1 // (ind),Y reads
    )
}
