/*!
regs.rs - `CpuRegs` trait: the register, flag and cycle interface that
addressing, execute and dispatch code is generic over.

The trait does NOT include bus access, stack operations or instruction
fetch. Those stay explicit at call sites (`&mut B where B: Bus`) so the
borrow of the bus and the borrow of the state never overlap.

Implementations Provided:
=========================
- `CpuState` (the canonical state owner)
*/

use crate::cpu::flags::Status;
use crate::cpu::state::{CpuState, STACK_PAGE};

/// Minimal 2A03 register + flag API needed by instruction semantic and
/// dispatch code.
///
/// ALL mutating methods take &mut self, enabling generic call sites:
///   fn op<T: CpuRegs>(cpu: &mut T) { ... }
pub trait CpuRegs {
    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> Status;

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------
    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: Status);

    // ---------------------------------------------------------------------
    // Cycle counter
    // ---------------------------------------------------------------------

    /// Bus cycles elapsed since the last budget reset.
    fn cycles(&self) -> u64;

    /// Charge one cycle. Only `cycles::{read, write, idle}` should call this.
    fn tick(&mut self);

    // ---------------------------------------------------------------------
    // Stack helpers
    // ---------------------------------------------------------------------

    /// Full stack address currently pointed at by SP ($0100-$01FF).
    #[inline]
    fn stack_addr(&self) -> u16 {
        STACK_PAGE | self.sp() as u16
    }

    // ---------------------------------------------------------------------
    // Program Counter helpers
    // ---------------------------------------------------------------------

    /// Advance PC by 1 (wrapping at 16 bits).
    #[inline]
    fn advance_pc_one(&mut self) {
        let pc = self.pc().wrapping_add(1);
        self.set_pc(pc);
    }

    // ---------------------------------------------------------------------
    // Flag operations
    // ---------------------------------------------------------------------

    #[inline]
    fn is_flag_set(&self, flag: Status) -> bool {
        self.status().contains(flag)
    }

    /// Set or clear `flag` according to `value`.
    #[inline]
    fn assign_flag(&mut self, flag: Status, value: bool) {
        let mut s = self.status();
        s.set(flag, value);
        self.set_status(s);
    }

    /// Composite: update ZERO and NEGATIVE based on result.
    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.assign_flag(Status::ZERO, result == 0);
        self.assign_flag(Status::NEGATIVE, (result & 0x80) != 0);
    }
}

// -------------------------------------------------------------------------
// Implementation: CpuState (canonical)
// -------------------------------------------------------------------------

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    fn status(&self) -> Status {
        self.status
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    fn set_status(&mut self, v: Status) {
        self.status = v;
    }

    #[inline]
    fn cycles(&self) -> u64 {
        self.cycles
    }
    #[inline]
    fn tick(&mut self) {
        self.cycles += 1;
    }
}
