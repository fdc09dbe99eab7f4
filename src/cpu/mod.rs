/*!
cpu::mod - Public façade for the 2A03 CPU core.

Layout:

```text
    state.rs        - Architectural registers, status, cycle counter.
    flags.rs        - `Status` flag set and its stack-byte encoding.
    regs.rs         - `CpuRegs` trait the generic helpers operate through.
    cycles.rs       - Cycle-charging bus access + reference timing table.
    addressing.rs   - Addressing modes and effective-address resolution.
    execute.rs      - Instruction semantics (ALU, stack, RMW, branch).
    table.rs        - Total opcode table (mnemonic + mode for all 256 bytes).
    dispatch/       - One-instruction step and the per-family handlers.
    core/           - `Cpu` facade: power-on, step, budgeted run.
```

The public surface is the `Cpu` facade plus the decode / timing metadata.
Downstream code should not rely on internal module layout.

Feature flags:

```text
    jmp_indirect_page_wrap - `JMP ($xxFF)` fetches its high byte from $xx00
                             (NMOS page-wrap quirk) instead of the next page.
```

Usage:
```rust
use rp2a03::{Cpu, Ram};

let mut ram = Ram::new();
ram.load(0x8000, &[0xA9, 0x01, 0xEA]); // LDA #$01 ; NOP
ram.set_word(0xFFFC, 0x8000);
let mut cpu = Cpu::power_on(&mut ram);
cpu.step(&mut ram);
assert_eq!(cpu.a(), 0x01);
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod flags;
pub mod regs;
pub mod state;
pub mod table;

#[cfg(test)]
mod tests;

// Re-exports:
// - Cpu (facade over CpuState)
// - CpuState (raw state; exposed for tests, snapshots, trait impls)
// - decode / timing metadata
pub use crate::cpu::addressing::AddressingMode;
pub use crate::cpu::core::Cpu;
pub use crate::cpu::cycles::{CYCLES_PER_FRAME, base_cycles, has_page_penalty};
pub use crate::cpu::flags::Status;
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{CpuState, IRQ_VECTOR, RESET_VECTOR};
pub use crate::cpu::table::{Instruction, Mnemonic, decode};
