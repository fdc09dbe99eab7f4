/*!
RAM module: flat 64 KiB CPU address space.

CPU address map:
- $0000-$FFFF: one byte per address, all readable and writable

There is no mirroring and no device window; program images are copied in
by the loader (see `cartridge::Cartridge::load_into`) or by tests through
`load`. Hardware-specific address decoding belongs in a different `Bus`
implementation.
*/

use crate::bus::Bus;

/// Size of the CPU address space (in bytes).
pub const RAM_SIZE: usize = 0x1_0000;

/// Flat byte array covering every CPU address.
#[derive(Clone)]
pub struct Ram {
    data: Box<[u8]>,
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Ram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ram")
            .field("len", &self.data.len())
            .finish()
    }
}

impl Ram {
    /// Create a new RAM instance initialized to 0.
    pub fn new() -> Self {
        Self {
            data: vec![0; RAM_SIZE].into_boxed_slice(),
        }
    }

    /// Clear RAM contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Copy `bytes` starting at `origin`, wrapping past $FFFF back to $0000.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        let mut addr = origin;
        for &b in bytes {
            self.data[addr as usize] = b;
            addr = addr.wrapping_add(1);
        }
    }

    /// Store a little-endian word at `addr` (vector setup).
    pub fn set_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.data[addr as usize] = lo;
        self.data[addr.wrapping_add(1) as usize] = hi;
    }

    /// Read without going through the `Bus` trait (no `&mut` needed).
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Expose the internal slice (read-only). Useful for diagnostics or hashing.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Bus for Ram {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
