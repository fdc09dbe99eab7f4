/*!
core::Cpu - Public 2A03 CPU façade wrapping `CpuState`.

Overview
========
`Cpu` owns a single `CpuState` plus a lifetime cycle total. All instruction
work is delegated to the generic dispatcher, which reaches the registers
through the `CpuRegs` trait implemented by `CpuState`.

Budgets
=======
`run(bus, budget)` zeroes the per-budget counter (`state.cycles`) and steps
whole instructions while the counter is below the budget. An instruction is
never split, so the counter may end a few cycles past the budget; the amount
consumed is returned and also folded into `total_cycles`.

`run_frame` is `run` with `CYCLES_PER_FRAME` (one NTSC frame of CPU time).

Interrupts
==========
There is no NMI / IRQ input. The only interrupt-shaped path is BRK, which
goes through the IRQ vector like any other instruction.
*/

use crate::bus::Bus;
use crate::cpu::cycles::CYCLES_PER_FRAME;
use crate::cpu::dispatch;
use crate::cpu::flags::Status;
use crate::cpu::state::CpuState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cpu {
    state: CpuState,
    total_cycles: u64,
}

impl Cpu {
    /// Construct a CPU holding power-on register values; PC is not loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a CPU in its power-on state with PC loaded from RESET.
    pub fn power_on<B: Bus>(bus: &mut B) -> Self {
        let mut cpu = Self::new();
        cpu.reset(bus);
        cpu
    }

    /// Return to the power-on state and reload PC from the RESET vector.
    ///
    /// Both counters are cleared; the vector read is not charged.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) {
        self.state.power_on(bus);
        self.total_cycles = 0;
        log::debug!("cpu reset: pc=${:04X}", self.state.pc);
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return mutable reference to internal state.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Cycles consumed since power-on / reset across every `step` and `run`.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> Status {
        self.state.status
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: Status) {
        self.state.status = v;
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn flag(&self, flag: Status) -> bool {
        self.state.status.contains(flag)
    }

    pub fn set_flag(&mut self, flag: Status, on: bool) {
        self.state.status.set(flag, on);
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Execute one instruction and return the cycles it took.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u64 {
        let used = dispatch::step(&mut self.state, bus);
        self.total_cycles += used;
        used
    }

    /// Run whole instructions until at least `budget` cycles have elapsed.
    ///
    /// Returns the cycles actually consumed (>= `budget` unless `budget` is 0).
    pub fn run<B: Bus>(&mut self, bus: &mut B, budget: u64) -> u64 {
        self.state.cycles = 0;
        while self.state.cycles < budget {
            dispatch::step(&mut self.state, bus);
        }
        let used = self.state.cycles;
        self.total_cycles += used;
        let pc = self.state.pc;
        log::trace!("run: budget={budget} used={used} pc=${pc:04X}");
        used
    }

    /// Run one NTSC frame's worth of CPU cycles.
    pub fn run_frame<B: Bus>(&mut self, bus: &mut B) -> u64 {
        self.run(bus, CYCLES_PER_FRAME)
    }
}
