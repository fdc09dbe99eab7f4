/*!
Cartridge with iNES (v1) loader and NROM (mapper 0) image placement.

Features:
- Parse iNES (v1) header from bytes or file path
- Extract PRG ROM, optional 512-byte trainer, CHR size (CHR RAM when the
  CHR count is 0) and PRG RAM size
- Determine mirroring, battery-backed RAM, four-screen VRAM, mapper ID
- Copy the PRG image into any `Bus` so the CPU can run it from flat memory

Notes:
- iNES 2.0 is detected and rejected with an error.
- PRG RAM size policy:
  - If header byte 8 (PRG-RAM size in 8 KiB units) is 0, assume 8 KiB by convention.
  - Otherwise size_in_units * 8 KiB.
- NROM placement rules (`load_into`):
  - 16 KiB PRG (NROM-128): written at $8000 and mirrored at $C000.
  - 32 KiB PRG (NROM-256): fills $8000-$FFFF.
  - Trainer, when present, lands at $7000.
*/

use std::fmt;
use std::fs;
use std::path::Path;

use crate::bus::Bus;

const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;
const PRG_UNIT: usize = 16 * 1024;
const CHR_UNIT: usize = 8 * 1024;
const PRG_RAM_UNIT: usize = 8 * 1024;

/// CPU address the PRG image starts at.
pub const PRG_BASE: u16 = 0x8000;
/// CPU address the trainer is copied to.
pub const TRAINER_BASE: u16 = 0x7000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Reasons an iNES image cannot be parsed or placed.
#[derive(Debug)]
pub enum CartridgeError {
    /// Fewer than 16 bytes; no header to read.
    TooShort,
    /// First four bytes are not `NES\x1A`.
    BadMagic,
    /// NES 2.0 header.
    Nes2Unsupported,
    /// Image ends inside the named section.
    Truncated(&'static str),
    /// Only mapper 0 images can be placed in flat memory.
    UnsupportedMapper(u16),
    /// NROM carries 16 or 32 KiB of PRG.
    UnsupportedPrgSize(usize),
    Io(std::io::Error),
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "data too small for iNES header"),
            Self::BadMagic => write!(f, "invalid iNES header magic (expected NES<1A>)"),
            Self::Nes2Unsupported => write!(f, "NES 2.0 format is not supported"),
            Self::Truncated(section) => write!(f, "data too small for {section}"),
            Self::UnsupportedMapper(id) => write!(f, "unsupported mapper id: {id}"),
            Self::UnsupportedPrgSize(len) => {
                write!(f, "unsupported PRG ROM size for NROM: {len} bytes")
            }
            Self::Io(e) => write!(f, "failed to read iNES file: {e}"),
        }
    }
}

impl std::error::Error for CartridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CartridgeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

pub struct Cartridge {
    prg_rom: Vec<u8>,
    trainer: Option<Vec<u8>>,

    // Metadata
    mapper_id: u16,
    mirroring: Mirroring,
    battery: bool,

    // Size metadata for convenience accessors
    chr_len: usize,
    prg_ram_len: usize,
    chr_is_ram: bool,
}

// Debug implemented manually so the PRG image is not dumped
impl fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cartridge")
            .field("mapper_id", &self.mapper_id)
            .field("mirroring", &self.mirroring)
            .field("battery", &self.battery)
            .field("has_trainer", &self.trainer.is_some())
            .field("prg_rom_len", &self.prg_rom.len())
            .field("chr_len", &self.chr_len)
            .field("prg_ram_len", &self.prg_ram_len)
            .field("chr_is_ram", &self.chr_is_ram)
            .finish()
    }
}

impl Cartridge {
    // -------------- Construction --------------

    /// Parse a cartridge from raw iNES bytes.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_LEN {
            return Err(CartridgeError::TooShort);
        }

        // Header: 16 bytes
        // 0-3: 'N', 'E', 'S', 0x1A
        if &data[0..4] != b"NES\x1A" {
            return Err(CartridgeError::BadMagic);
        }

        let prg_rom_16k_units = data[4] as usize;
        let chr_rom_8k_units = data[5] as usize;
        let flags6 = data[6];
        let flags7 = data[7];
        let prg_ram_8k_units = data[8] as usize;

        // NES 2.0 if (flags7 & 0x0C) == 0x08
        if (flags7 & 0x0C) == 0x08 {
            return Err(CartridgeError::Nes2Unsupported);
        }

        // Mapper ID: high nibble from flags7 and low nibble from flags6
        let mapper_id = (flags7 & 0xF0) as u16 | (flags6 >> 4) as u16;

        let four_screen = (flags6 & 0b0000_1000) != 0;
        let vertical_mirroring = (flags6 & 0b0000_0001) != 0;
        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if vertical_mirroring {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let battery = (flags6 & 0b0000_0010) != 0;
        let has_trainer = (flags6 & 0b0000_0100) != 0;

        let mut offset = HEADER_LEN;
        let trainer = if has_trainer {
            let bytes = data
                .get(offset..offset + TRAINER_LEN)
                .ok_or(CartridgeError::Truncated("trainer"))?;
            offset += TRAINER_LEN;
            Some(bytes.to_vec())
        } else {
            None
        };

        let prg_rom_len = prg_rom_16k_units * PRG_UNIT;
        let prg_rom = data
            .get(offset..offset + prg_rom_len)
            .ok_or(CartridgeError::Truncated("PRG ROM"))?
            .to_vec();
        offset += prg_rom_len;

        let (chr_len, chr_is_ram) = if chr_rom_8k_units == 0 {
            (CHR_UNIT, true)
        } else {
            let len = chr_rom_8k_units * CHR_UNIT;
            if data.len() < offset + len {
                return Err(CartridgeError::Truncated("CHR ROM"));
            }
            (len, false)
        };

        let prg_ram_len = if prg_ram_8k_units == 0 {
            PRG_RAM_UNIT
        } else {
            prg_ram_8k_units * PRG_RAM_UNIT
        };

        Ok(Self {
            prg_rom,
            trainer,
            mapper_id,
            mirroring,
            battery,
            chr_len,
            prg_ram_len,
            chr_is_ram,
        })
    }

    /// Load a cartridge from an iNES file (.nes).
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let bytes = fs::read(path)?;
        Self::from_ines_bytes(&bytes)
    }

    // -------------- Placement --------------

    /// Copy the image into CPU address space.
    ///
    /// Only NROM (16 or 32 KiB PRG) is accepted; anything else is rejected
    /// before a single byte is written.
    pub fn load_into<B: Bus>(&self, bus: &mut B) -> Result<(), CartridgeError> {
        if self.mapper_id != 0 {
            return Err(CartridgeError::UnsupportedMapper(self.mapper_id));
        }
        let banks: &[u16] = match self.prg_rom.len() {
            len if len == PRG_UNIT => &[PRG_BASE, 0xC000],
            len if len == 2 * PRG_UNIT => &[PRG_BASE],
            other => return Err(CartridgeError::UnsupportedPrgSize(other)),
        };

        if let Some(trainer) = &self.trainer {
            write_block(bus, TRAINER_BASE, trainer);
        }
        for &base in banks {
            write_block(bus, base, &self.prg_rom);
        }

        log::info!(
            "loaded NROM image: {} KiB PRG, mirroring {:?}, trainer {}",
            self.prg_rom.len() / 1024,
            self.mirroring,
            self.trainer.is_some()
        );
        Ok(())
    }

    // -------------- Accessors --------------

    pub fn mapper_id(&self) -> u16 {
        self.mapper_id
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    pub fn battery_backed(&self) -> bool {
        self.battery
    }

    pub fn has_trainer(&self) -> bool {
        self.trainer.is_some()
    }

    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    pub fn prg_rom_len(&self) -> usize {
        self.prg_rom.len()
    }

    pub fn chr_len(&self) -> usize {
        self.chr_len
    }

    pub fn chr_is_ram(&self) -> bool {
        self.chr_is_ram
    }

    pub fn prg_ram_len(&self) -> usize {
        self.prg_ram_len
    }
}

fn write_block<B: Bus>(bus: &mut B, base: u16, bytes: &[u8]) {
    let mut addr = base;
    for &b in bytes {
        bus.write(addr, b);
        addr = addr.wrapping_add(1);
    }
}
