#![doc = r#"
rp2a03 library crate.

A cycle-counting interpreter for the Ricoh 2A03 CPU core (a 6502 without
decimal arithmetic), driven against a flat 64 KiB memory.

Modules:
- bus: `Bus` trait (byte read / write) and the flat `Ram` implementation
- cartridge: iNES v1 loader; maps NROM PRG (and trainer) into a `Bus`
- cpu: 2A03 core (facade + state + addressing + dispatch + execute modules)

Every bus access the core makes costs exactly one cycle, so instruction
timing is a property of the access sequence rather than a lookup.

In tests, shared program builders and a recording bus are available under
`crate::test_utils`.
"#]

pub mod bus;
pub mod cartridge;
pub mod cpu;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, Ram};
pub use cartridge::{Cartridge, CartridgeError, Mirroring};
pub use cpu::{CYCLES_PER_FRAME, Cpu, CpuState, Status};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
