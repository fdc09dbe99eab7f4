/*!
table.rs - Total 256-entry opcode table.

Purpose
=======
Maps every opcode byte to an `Instruction { mnemonic, mode, official }`.
The table is total: the 151 official opcodes carry their mnemonic, the
remaining 105 decode to `Nop` with the addressing mode from the standard
6502 opcode matrix, so an unofficial opcode still consumes its operand
bytes and the bus accesses of its mode.

Design
------
- `MODES` is the full 16x16 addressing-mode matrix (row = high nibble).
- `OPCODES` is built at compile time: every slot starts as an unofficial
  `Nop` using `MODES`, then the official entries are written over it.
- `decode(op)` is a plain index; there is no failure path.
*/

use crate::cpu::addressing::AddressingMode;

/// Official 2A03 instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Assembler spelling.
    pub const fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    /// False for the unofficial opcodes that execute as `Nop`.
    pub official: bool,
}

/// Decode an opcode byte. Total over 0..=255.
#[inline]
pub fn decode(op: u8) -> Instruction {
    OPCODES[op as usize]
}

// ------------------------------------------
// Addressing-mode matrix
// ------------------------------------------

const IMP: AddressingMode = AddressingMode::Implied;
const ACC: AddressingMode = AddressingMode::Accumulator;
const IMM: AddressingMode = AddressingMode::Immediate;
const ZP: AddressingMode = AddressingMode::ZeroPage;
const ZPX: AddressingMode = AddressingMode::ZeroPageX;
const ZPY: AddressingMode = AddressingMode::ZeroPageY;
const REL: AddressingMode = AddressingMode::Relative;
const ABS: AddressingMode = AddressingMode::Absolute;
const ABX: AddressingMode = AddressingMode::AbsoluteX;
const ABY: AddressingMode = AddressingMode::AbsoluteY;
const IND: AddressingMode = AddressingMode::Indirect;
const IZX: AddressingMode = AddressingMode::IndexedIndirect;
const IZY: AddressingMode = AddressingMode::IndirectIndexed;

// BRK is listed as immediate: it fetches (and discards) a signature byte.
#[rustfmt::skip]
const MODES: [AddressingMode; 256] = [
//  0    1    2    3    4    5    6    7    8    9    A    B    C    D    E    F
    IMM, IZX, IMP, IZX, ZP,  ZP,  ZP,  ZP,  IMP, IMM, ACC, IMM, ABS, ABS, ABS, ABS, // 0
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 1
    ABS, IZX, IMP, IZX, ZP,  ZP,  ZP,  ZP,  IMP, IMM, ACC, IMM, ABS, ABS, ABS, ABS, // 2
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 3
    IMP, IZX, IMP, IZX, ZP,  ZP,  ZP,  ZP,  IMP, IMM, ACC, IMM, ABS, ABS, ABS, ABS, // 4
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 5
    IMP, IZX, IMP, IZX, ZP,  ZP,  ZP,  ZP,  IMP, IMM, ACC, IMM, IND, ABS, ABS, ABS, // 6
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 7
    IMM, IZX, IMM, IZX, ZP,  ZP,  ZP,  ZP,  IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // 8
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPY, ZPY, IMP, ABY, IMP, ABY, ABX, ABX, ABY, ABY, // 9
    IMM, IZX, IMM, IZX, ZP,  ZP,  ZP,  ZP,  IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // A
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPY, ZPY, IMP, ABY, IMP, ABY, ABX, ABX, ABY, ABY, // B
    IMM, IZX, IMM, IZX, ZP,  ZP,  ZP,  ZP,  IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // C
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // D
    IMM, IZX, IMM, IZX, ZP,  ZP,  ZP,  ZP,  IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // E
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // F
];

// ------------------------------------------
// Opcode table
// ------------------------------------------

static OPCODES: [Instruction; 256] = build();

const fn op(mnemonic: Mnemonic, mode: AddressingMode) -> Instruction {
    Instruction {
        mnemonic,
        mode,
        official: true,
    }
}

const fn build() -> [Instruction; 256] {
    use Mnemonic::*;

    let mut t = [Instruction {
        mnemonic: Nop,
        mode: IMP,
        official: false,
    }; 256];
    let mut i = 0;
    while i < 256 {
        t[i].mode = MODES[i];
        i += 1;
    }

    // Loads
    t[0xA9] = op(Lda, IMM);
    t[0xA5] = op(Lda, ZP);
    t[0xB5] = op(Lda, ZPX);
    t[0xAD] = op(Lda, ABS);
    t[0xBD] = op(Lda, ABX);
    t[0xB9] = op(Lda, ABY);
    t[0xA1] = op(Lda, IZX);
    t[0xB1] = op(Lda, IZY);
    t[0xA2] = op(Ldx, IMM);
    t[0xA6] = op(Ldx, ZP);
    t[0xB6] = op(Ldx, ZPY);
    t[0xAE] = op(Ldx, ABS);
    t[0xBE] = op(Ldx, ABY);
    t[0xA0] = op(Ldy, IMM);
    t[0xA4] = op(Ldy, ZP);
    t[0xB4] = op(Ldy, ZPX);
    t[0xAC] = op(Ldy, ABS);
    t[0xBC] = op(Ldy, ABX);

    // Stores
    t[0x85] = op(Sta, ZP);
    t[0x95] = op(Sta, ZPX);
    t[0x8D] = op(Sta, ABS);
    t[0x9D] = op(Sta, ABX);
    t[0x99] = op(Sta, ABY);
    t[0x81] = op(Sta, IZX);
    t[0x91] = op(Sta, IZY);
    t[0x86] = op(Stx, ZP);
    t[0x96] = op(Stx, ZPY);
    t[0x8E] = op(Stx, ABS);
    t[0x84] = op(Sty, ZP);
    t[0x94] = op(Sty, ZPX);
    t[0x8C] = op(Sty, ABS);

    // Transfers
    t[0xAA] = op(Tax, IMP);
    t[0xA8] = op(Tay, IMP);
    t[0x8A] = op(Txa, IMP);
    t[0x98] = op(Tya, IMP);
    t[0xBA] = op(Tsx, IMP);
    t[0x9A] = op(Txs, IMP);

    // Stack
    t[0x48] = op(Pha, IMP);
    t[0x08] = op(Php, IMP);
    t[0x68] = op(Pla, IMP);
    t[0x28] = op(Plp, IMP);

    // Logical
    t[0x29] = op(And, IMM);
    t[0x25] = op(And, ZP);
    t[0x35] = op(And, ZPX);
    t[0x2D] = op(And, ABS);
    t[0x3D] = op(And, ABX);
    t[0x39] = op(And, ABY);
    t[0x21] = op(And, IZX);
    t[0x31] = op(And, IZY);
    t[0x49] = op(Eor, IMM);
    t[0x45] = op(Eor, ZP);
    t[0x55] = op(Eor, ZPX);
    t[0x4D] = op(Eor, ABS);
    t[0x5D] = op(Eor, ABX);
    t[0x59] = op(Eor, ABY);
    t[0x41] = op(Eor, IZX);
    t[0x51] = op(Eor, IZY);
    t[0x09] = op(Ora, IMM);
    t[0x05] = op(Ora, ZP);
    t[0x15] = op(Ora, ZPX);
    t[0x0D] = op(Ora, ABS);
    t[0x1D] = op(Ora, ABX);
    t[0x19] = op(Ora, ABY);
    t[0x01] = op(Ora, IZX);
    t[0x11] = op(Ora, IZY);
    t[0x24] = op(Bit, ZP);
    t[0x2C] = op(Bit, ABS);

    // Arithmetic
    t[0x69] = op(Adc, IMM);
    t[0x65] = op(Adc, ZP);
    t[0x75] = op(Adc, ZPX);
    t[0x6D] = op(Adc, ABS);
    t[0x7D] = op(Adc, ABX);
    t[0x79] = op(Adc, ABY);
    t[0x61] = op(Adc, IZX);
    t[0x71] = op(Adc, IZY);
    t[0xE9] = op(Sbc, IMM);
    t[0xE5] = op(Sbc, ZP);
    t[0xF5] = op(Sbc, ZPX);
    t[0xED] = op(Sbc, ABS);
    t[0xFD] = op(Sbc, ABX);
    t[0xF9] = op(Sbc, ABY);
    t[0xE1] = op(Sbc, IZX);
    t[0xF1] = op(Sbc, IZY);

    // Compare
    t[0xC9] = op(Cmp, IMM);
    t[0xC5] = op(Cmp, ZP);
    t[0xD5] = op(Cmp, ZPX);
    t[0xCD] = op(Cmp, ABS);
    t[0xDD] = op(Cmp, ABX);
    t[0xD9] = op(Cmp, ABY);
    t[0xC1] = op(Cmp, IZX);
    t[0xD1] = op(Cmp, IZY);
    t[0xE0] = op(Cpx, IMM);
    t[0xE4] = op(Cpx, ZP);
    t[0xEC] = op(Cpx, ABS);
    t[0xC0] = op(Cpy, IMM);
    t[0xC4] = op(Cpy, ZP);
    t[0xCC] = op(Cpy, ABS);

    // Increments / decrements
    t[0xE6] = op(Inc, ZP);
    t[0xF6] = op(Inc, ZPX);
    t[0xEE] = op(Inc, ABS);
    t[0xFE] = op(Inc, ABX);
    t[0xC6] = op(Dec, ZP);
    t[0xD6] = op(Dec, ZPX);
    t[0xCE] = op(Dec, ABS);
    t[0xDE] = op(Dec, ABX);
    t[0xE8] = op(Inx, IMP);
    t[0xC8] = op(Iny, IMP);
    t[0xCA] = op(Dex, IMP);
    t[0x88] = op(Dey, IMP);

    // Shifts / rotates
    t[0x0A] = op(Asl, ACC);
    t[0x06] = op(Asl, ZP);
    t[0x16] = op(Asl, ZPX);
    t[0x0E] = op(Asl, ABS);
    t[0x1E] = op(Asl, ABX);
    t[0x4A] = op(Lsr, ACC);
    t[0x46] = op(Lsr, ZP);
    t[0x56] = op(Lsr, ZPX);
    t[0x4E] = op(Lsr, ABS);
    t[0x5E] = op(Lsr, ABX);
    t[0x2A] = op(Rol, ACC);
    t[0x26] = op(Rol, ZP);
    t[0x36] = op(Rol, ZPX);
    t[0x2E] = op(Rol, ABS);
    t[0x3E] = op(Rol, ABX);
    t[0x6A] = op(Ror, ACC);
    t[0x66] = op(Ror, ZP);
    t[0x76] = op(Ror, ZPX);
    t[0x6E] = op(Ror, ABS);
    t[0x7E] = op(Ror, ABX);

    // Jumps / calls / interrupts
    t[0x4C] = op(Jmp, ABS);
    t[0x6C] = op(Jmp, IND);
    t[0x20] = op(Jsr, ABS);
    t[0x60] = op(Rts, IMP);
    t[0x00] = op(Brk, IMM);
    t[0x40] = op(Rti, IMP);

    // Branches
    t[0x10] = op(Bpl, REL);
    t[0x30] = op(Bmi, REL);
    t[0x50] = op(Bvc, REL);
    t[0x70] = op(Bvs, REL);
    t[0x90] = op(Bcc, REL);
    t[0xB0] = op(Bcs, REL);
    t[0xD0] = op(Bne, REL);
    t[0xF0] = op(Beq, REL);

    // Flags
    t[0x18] = op(Clc, IMP);
    t[0x38] = op(Sec, IMP);
    t[0x58] = op(Cli, IMP);
    t[0x78] = op(Sei, IMP);
    t[0xB8] = op(Clv, IMP);
    t[0xD8] = op(Cld, IMP);
    t[0xF8] = op(Sed, IMP);

    t[0xEA] = op(Nop, IMP);

    t
}
