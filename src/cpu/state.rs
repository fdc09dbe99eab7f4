/*!
state.rs - 2A03 architectural state (registers, flags, cycle counter).

Overview
========
`CpuState` is the single owner of every architecturally visible register
plus the elapsed-cycle counter. It deliberately excludes:
  - Bus / memory logic
  - Instruction decode / dispatch logic
Those live in `addressing`, `execute` and `dispatch`, which reach the state
only through the `CpuRegs` trait.

Lifecycle
=========
`power_on` places the documented values (A=X=Y=0, SP=$FD, status decoded
from $34), zeroes the counter and loads PC through the RESET vector. The
vector fetch is host-side and is not charged as CPU cycles.
*/

use crate::bus::Bus;
use crate::cpu::flags::{POWER_ON_STATUS, Status};

/// Page holding the hardware stack; SP is the low byte of the address.
pub const STACK_PAGE: u16 = 0x0100;

/// Stack pointer value after power-on / reset.
pub const POWER_ON_SP: u8 = 0xFD;

/// Vectors (little-endian word at each address).
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Register file plus the bus-cycle counter.
///
/// `cycles` counts bus cycles since the last budget reset (see `Cpu::run`);
/// it is the only timing state the core keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
    pub cycles: u64,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: POWER_ON_SP,
            pc: 0x0000,
            status: Status::from_stack_byte(POWER_ON_STATUS),
            cycles: 0,
        }
    }
}

impl CpuState {
    /// Create a new CPU state using power-up defaults (PC not yet loaded).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset registers and load PC from the reset vector at $FFFC/$FFFD.
    pub fn power_on<B: Bus>(&mut self, bus: &mut B) {
        *self = Self::default();
        let lo = bus.read(RESET_VECTOR) as u16;
        let hi = bus.read(RESET_VECTOR.wrapping_add(1)) as u16;
        self.pc = (hi << 8) | lo;
    }
}
