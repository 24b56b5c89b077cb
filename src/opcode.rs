//! The sixteen LC-3 opcode classes.

use crate::bits::bits;
use std::fmt;

/// Instruction class selected by bits [15:12] of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Br = 0x0,
    Add = 0x1,
    Ld = 0x2,
    St = 0x3,
    Jsr = 0x4,
    And = 0x5,
    Ldr = 0x6,
    Str = 0x7,
    Rti = 0x8,
    Not = 0x9,
    Ldi = 0xA,
    Sti = 0xB,
    Ret = 0xC,
    /// Unused by the ISA
    Reserved = 0xD,
    Lea = 0xE,
    Trap = 0xF,
}

impl Opcode {
    /// Classify a full instruction word by its top four bits
    pub fn from_word(word: u16) -> Self {
        Self::from_bits(bits(word, 15, 12))
    }

    /// Map a 4-bit value to its opcode. Only the low four bits are considered.
    pub fn from_bits(value: u16) -> Self {
        match value & 0xF {
            0x0 => Opcode::Br,
            0x1 => Opcode::Add,
            0x2 => Opcode::Ld,
            0x3 => Opcode::St,
            0x4 => Opcode::Jsr,
            0x5 => Opcode::And,
            0x6 => Opcode::Ldr,
            0x7 => Opcode::Str,
            0x8 => Opcode::Rti,
            0x9 => Opcode::Not,
            0xA => Opcode::Ldi,
            0xB => Opcode::Sti,
            0xC => Opcode::Ret,
            0xE => Opcode::Lea,
            0xF => Opcode::Trap,
            _ => Opcode::Reserved,
        }
    }

    /// The 4-bit encoding of this opcode
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Base mnemonic. JSR covers both JSR and JSRR, BR carries no condition flags.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Br => "BR",
            Opcode::Add => "ADD",
            Opcode::Ld => "LD",
            Opcode::St => "ST",
            Opcode::Jsr => "JSR",
            Opcode::And => "AND",
            Opcode::Ldr => "LDR",
            Opcode::Str => "STR",
            Opcode::Rti => "RTI",
            Opcode::Not => "NOT",
            Opcode::Ldi => "LDI",
            Opcode::Sti => "STI",
            Opcode::Ret => "RET",
            Opcode::Reserved => "[RESERVED]",
            Opcode::Lea => "LEA",
            Opcode::Trap => "TRAP",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
