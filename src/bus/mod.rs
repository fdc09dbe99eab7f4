#![doc = r#"
Bus module: the CPU-visible address space contract and the flat memory
implementation used by the runner and tests.

Overview
- `Bus`: byte-addressable read/write over the full 16-bit address space.
  Every call corresponds to exactly one CPU bus cycle; the CPU core is the
  one that counts them, implementations only move bytes.
- ram: `Ram`, a flat 64 KiB array with no mirroring or device windows.

Notes
- Reads take `&mut self` so device-backed implementations can model read
  side effects (open bus, latches) without interior mutability.
- The CPU borrows the bus mutably for the duration of `step`/`run`; the host
  keeps ownership between calls.
"#]

pub mod ram;

pub use ram::{RAM_SIZE, Ram};

/// CPU-visible memory.
///
/// Implementations must accept any `u16` address. The CPU issues dummy reads
/// and dummy writes exactly where the hardware does, so an implementation
/// observing accesses sees the real 2A03 bus pattern.
pub trait Bus {
    /// Read one byte.
    fn read(&mut self, addr: u16) -> u8;

    /// Write one byte.
    fn write(&mut self, addr: u16, value: u8);
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}
