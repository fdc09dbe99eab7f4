/*!
flags.rs - 2A03 processor status register.

Bit Layout
==========
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (no storage; always 1 in a pushed byte)
  B = BREAK (stored; set by BRK, restored by PLP/RTI)
  D = DECIMAL (stored and toggled, never affects arithmetic on the 2A03)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY

Stack Byte Codec
================
`to_stack_byte` packs the seven stored flags and forces bit 5.
`from_stack_byte` restores all seven flags and drops bit 5, so the unused
bit is never observable as state.
*/

use bitflags::bitflags;

bitflags! {
    /// Seven stored status flags. Bit 5 is deliberately not a member.
    #[repr(transparent)]
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const IRQ_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

/// Bit 5 of a pushed status byte.
pub const UNUSED: u8 = 0b0010_0000;

/// Status byte the register is decoded from at power-on and reset.
pub const POWER_ON_STATUS: u8 = 0x34;

impl Status {
    /// Encode for PHP/BRK: stored flags with bit 5 forced to 1.
    #[inline]
    pub const fn to_stack_byte(self) -> u8 {
        self.bits() | UNUSED
    }

    /// Decode for PLP/RTI: every flag bit is taken from `byte`, bit 5 dropped.
    #[inline]
    pub const fn from_stack_byte(byte: u8) -> Self {
        Self::from_bits_truncate(byte)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::from_stack_byte(POWER_ON_STATUS)
    }
}

impl std::fmt::Display for Status {
    /// `NV-BDIZC` style rendering; clear flags print as `-`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const LETTERS: [(Status, char); 7] = [
            (Status::NEGATIVE, 'N'),
            (Status::OVERFLOW, 'V'),
            (Status::BREAK, 'B'),
            (Status::DECIMAL, 'D'),
            (Status::IRQ_DISABLE, 'I'),
            (Status::ZERO, 'Z'),
            (Status::CARRY, 'C'),
        ];
        for (i, (flag, letter)) in LETTERS.iter().enumerate() {
            if i == 2 {
                write!(f, "-")?;
            }
            let c = if self.contains(*flag) { *letter } else { '-' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
