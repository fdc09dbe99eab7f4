//! Shared test utilities: iNES (v1) image builders, flat-RAM program setup
//! and a bus that records every access.
//!
//! Notes on iNES header fields used here:
//! - bytes[0..4] = b"NES\x1A"
//! - byte 4 = PRG ROM size in 16 KiB units
//! - byte 5 = CHR ROM size in 8 KiB units (0 => CHR RAM)
//! - byte 6 = Flags 6 (mirroring, battery, trainer, four-screen, mapper low nibble)
//! - byte 7 = Flags 7 (NES 2.0 indicator, mapper high nibble)
//! - byte 8 = PRG RAM size in 8 KiB units (0 => 8 KiB by convention)
//! - bytes 9..15 = padding
//!
//! Vectors:
//! - For 16 KiB PRG (NROM-128): vectors are at PRG offset 0x3FFA..=0x3FFF
//! - For 32 KiB PRG (NROM-256): vectors are at PRG offset 0x7FFA..=0x7FFF

#![allow(dead_code)]

use crate::bus::{Bus, Ram};
use crate::cartridge::Cartridge;
use crate::cpu::core::Cpu;
use crate::cpu::state::{IRQ_VECTOR, RESET_VECTOR};

/// Build a minimal iNES (v1) image with configurable PRG/CHR sizes and flags.
///
/// - `prg_16k`: number of 16 KiB PRG units (1 => 16 KiB, 2 => 32 KiB)
/// - `chr_8k`: number of 8 KiB CHR units (0 => no CHR in file)
/// - `flags6` / `flags7`: raw header flag bytes
/// - `prg_ram_8k`: PRG RAM size in 8 KiB units
/// - `trainer`: optional 512-byte trainer to insert after header
pub fn build_ines(
    prg_16k: usize,
    chr_8k: usize,
    flags6: u8,
    flags7: u8,
    prg_ram_8k: u8,
    trainer: Option<&[u8; 512]>,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        16 + trainer.map_or(0, |_| 512) + prg_16k * 16 * 1024 + chr_8k * 8 * 1024,
    );

    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(chr_8k as u8);
    bytes.push(flags6);
    bytes.push(flags7);
    bytes.push(prg_ram_8k);
    bytes.extend_from_slice(&[0u8; 7]);

    if let Some(t) = trainer {
        bytes.extend_from_slice(t);
    }

    // PRG filled with NOPs so stray execution is harmless
    bytes.extend(std::iter::repeat_n(0xEA, prg_16k * 16 * 1024));
    bytes.extend(std::iter::repeat_n(0xCC, chr_8k * 8 * 1024));

    bytes
}

/// Build an NROM-128 image holding `prg` at $8000 with vectors set to the
/// provided (reset, nmi, irq) addresses, defaulting to $8000.
pub fn build_nrom_with_prg(prg: &[u8], vectors: Option<(u16, u16, u16)>) -> Vec<u8> {
    assert!(
        prg.len() <= 16 * 1024 - 6,
        "Program must fit below the vectors of a 16 KiB PRG bank"
    );

    let mut rom = build_ines(1, 1, 0, 0, 1, None);
    let prg_start = 16;
    let prg_end = prg_start + 16 * 1024;
    rom[prg_start..prg_start + prg.len()].copy_from_slice(prg);

    let (reset, nmi, irq) = vectors.unwrap_or((0x8000, 0x8000, 0x8000));
    set_vectors_in_prg(&mut rom[prg_start..prg_end], reset, nmi, irq);
    rom
}

/// Write CPU vectors (NMI, RESET, IRQ/BRK) into a 16 KiB or 32 KiB PRG slice.
pub fn set_vectors_in_prg(prg: &mut [u8], reset: u16, nmi: u16, irq: u16) {
    let base = match prg.len() {
        16384 => 0x3FFA,
        32768 => 0x7FFA,
        other => panic!("Unsupported PRG length for vector placement: {other} bytes"),
    };
    write_le_u16(prg, base, nmi);
    write_le_u16(prg, base + 2, reset);
    write_le_u16(prg, base + 4, irq);
}

#[inline]
fn write_le_u16(buf: &mut [u8], offset: usize, value: u16) {
    let [lo, hi] = value.to_le_bytes();
    buf[offset] = lo;
    buf[offset + 1] = hi;
}

/// Parse + load an NROM image of `prg` into flat RAM and power the CPU on.
/// Program starts at $8000; BRK vectors to $8000 as well.
pub fn setup(prg: &[u8]) -> (Cpu, Ram) {
    let rom = build_nrom_with_prg(prg, None);
    let cart = Cartridge::from_ines_bytes(&rom).expect("parse");
    let mut ram = Ram::new();
    cart.load_into(&mut ram).expect("load");
    let cpu = Cpu::power_on(&mut ram);
    (cpu, ram)
}

/// Place `prg` at `origin` in flat RAM, point RESET there and power on.
/// The BRK vector is set to `irq`.
pub fn setup_at(origin: u16, prg: &[u8], irq: u16) -> (Cpu, Ram) {
    let mut ram = Ram::new();
    ram.load(origin, prg);
    ram.set_word(RESET_VECTOR, origin);
    ram.set_word(IRQ_VECTOR, irq);
    let cpu = Cpu::power_on(&mut ram);
    (cpu, ram)
}

// -------------------------------------------------------------------------
// Recording bus
// -------------------------------------------------------------------------

/// One observed bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    Read(u16),
    Write(u16, u8),
}

/// Flat RAM that logs each access in order.
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub ram: Ram,
    pub events: Vec<BusEvent>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// RAM with `prg` at `origin` and RESET pointing at it. No events logged.
    pub fn with_program(origin: u16, prg: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.ram.load(origin, prg);
        bus.ram.set_word(RESET_VECTOR, origin);
        bus
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Addresses of all writes, in order.
    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                BusEvent::Write(a, v) => Some((a, v)),
                BusEvent::Read(_) => None,
            })
            .collect()
    }
}

impl Bus for RecordingBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.events.push(BusEvent::Read(addr));
        self.ram.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.events.push(BusEvent::Write(addr, value));
        self.ram.write(addr, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_basic_ines() {
        let rom = build_ines(2, 1, 0x01, 0x00, 1, None);
        assert_eq!(&rom[0..4], b"NES\x1A");
        assert_eq!(rom[4], 2);
        assert_eq!(rom[5], 1);
        assert_eq!(rom[6], 0x01);
        assert_eq!(rom[8], 1);
        assert_eq!(rom.len(), 16 + 2 * 16 * 1024 + 8 * 1024);
    }

    #[test]
    fn writes_vectors_for_16k_prg() {
        let mut prg = vec![0u8; 16 * 1024];
        set_vectors_in_prg(&mut prg, 0x8123, 0x8456, 0x8ABC);
        assert_eq!(&prg[0x3FFA..], &[0x56, 0x84, 0x23, 0x81, 0xBC, 0x8A]);
    }

    #[test]
    fn writes_vectors_for_32k_prg() {
        let mut prg = vec![0u8; 32 * 1024];
        set_vectors_in_prg(&mut prg, 0x8123, 0x8456, 0x8ABC);
        assert_eq!(&prg[0x7FFA..], &[0x56, 0x84, 0x23, 0x81, 0xBC, 0x8A]);
    }

    #[test]
    fn setup_starts_at_program() {
        let (cpu, ram) = setup(&[0xA9, 0x01]);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(ram.peek(0x8000), 0xA9);
        assert_eq!(ram.peek(0xC000), 0xA9);
    }

    #[test]
    fn recording_bus_logs_in_order() {
        let mut bus = RecordingBus::new();
        bus.write(0x0010, 1);
        let _ = bus.read(0x0010);
        assert_eq!(
            bus.events,
            vec![BusEvent::Write(0x0010, 1), BusEvent::Read(0x0010)]
        );
        assert_eq!(bus.writes(), vec![(0x0010, 1)]);
    }
}
