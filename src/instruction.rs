use crate::bits::{bit, bits, sign_extend};
use crate::opcode::Opcode;
use std::fmt::{self, Display, Formatter};

/// Width of the mnemonic column, including the padding after it
const MNEMONIC_WIDTH: usize = 7;

/// A general purpose register, R0 through R7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Register(u8);

impl Register {
    /// Build a register from a 3-bit field. Higher bits are ignored.
    pub fn from_bits(value: u16) -> Self {
        Register((value & 0x7) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Second source operand of ADD and AND
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Register mode (bit 5 clear)
    Register(Register),
    /// Immediate mode (bit 5 set), already sign-extended from 5 bits
    Immediate(i16),
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(reg) => write!(f, "{}", reg),
            Operand::Immediate(value) => write!(f, "#{:+}", value),
        }
    }
}

/// A decoded instruction with all of its operand fields extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Br {
        n: bool,
        z: bool,
        p: bool,
        offset: i16,
    },
    Add {
        dr: Register,
        sr1: Register,
        src: Operand,
    },
    And {
        dr: Register,
        sr1: Register,
        src: Operand,
    },
    Ld { dr: Register, offset: i16 },
    Ldi { dr: Register, offset: i16 },
    St { sr: Register, offset: i16 },
    Sti { sr: Register, offset: i16 },
    Lea { dr: Register, offset: i16 },
    Ldr {
        dr: Register,
        base: Register,
        offset: i16,
    },
    Str {
        sr: Register,
        base: Register,
        offset: i16,
    },
    Not { dr: Register, sr: Register },
    Jsr { offset: i16 },
    Jsrr { base: Register },
    Trap { vector: u8 },
    Ret,
    Rti,
    Reserved,
}

impl Operation {
    /// Decode a raw word. Every 16-bit value has a decode.
    pub fn decode(word: u16) -> Self {
        let reg_hi = Register::from_bits(bits(word, 11, 9));
        let reg_mid = Register::from_bits(bits(word, 8, 6));
        let pc_offset9 = sign_extend(bits(word, 8, 0), 9);

        match Opcode::from_word(word) {
            Opcode::Br => Operation::Br {
                n: bit(word, 11),
                z: bit(word, 10),
                p: bit(word, 9),
                offset: pc_offset9,
            },
            opcode @ (Opcode::Add | Opcode::And) => {
                let src = if bit(word, 5) {
                    Operand::Immediate(sign_extend(bits(word, 4, 0), 5))
                } else {
                    Operand::Register(Register::from_bits(bits(word, 2, 0)))
                };
                if opcode == Opcode::Add {
                    Operation::Add {
                        dr: reg_hi,
                        sr1: reg_mid,
                        src,
                    }
                } else {
                    Operation::And {
                        dr: reg_hi,
                        sr1: reg_mid,
                        src,
                    }
                }
            }
            Opcode::Ld => Operation::Ld {
                dr: reg_hi,
                offset: pc_offset9,
            },
            Opcode::Ldi => Operation::Ldi {
                dr: reg_hi,
                offset: pc_offset9,
            },
            Opcode::St => Operation::St {
                sr: reg_hi,
                offset: pc_offset9,
            },
            Opcode::Sti => Operation::Sti {
                sr: reg_hi,
                offset: pc_offset9,
            },
            Opcode::Lea => Operation::Lea {
                dr: reg_hi,
                offset: pc_offset9,
            },
            Opcode::Ldr => Operation::Ldr {
                dr: reg_hi,
                base: reg_mid,
                offset: sign_extend(bits(word, 5, 0), 6),
            },
            Opcode::Str => Operation::Str {
                sr: reg_hi,
                base: reg_mid,
                offset: sign_extend(bits(word, 5, 0), 6),
            },
            Opcode::Not => Operation::Not {
                dr: reg_hi,
                sr: reg_mid,
            },
            // Bit 11 set selects the register form
            Opcode::Jsr if bit(word, 11) => Operation::Jsrr { base: reg_mid },
            Opcode::Jsr => Operation::Jsr {
                offset: sign_extend(bits(word, 10, 0), 11),
            },
            Opcode::Trap => Operation::Trap {
                vector: bits(word, 7, 0) as u8,
            },
            Opcode::Ret => Operation::Ret,
            Opcode::Rti => Operation::Rti,
            Opcode::Reserved => Operation::Reserved,
        }
    }

    /// Mnemonic as printed, including BR condition flags
    pub fn mnemonic(&self) -> String {
        match self {
            Operation::Br { n, z, p, .. } => {
                let mut name = String::from("BR");
                for (set, flag) in [(*n, 'n'), (*z, 'z'), (*p, 'p')] {
                    if set {
                        name.push(flag);
                    }
                }
                name
            }
            Operation::Add { .. } => "ADD".to_string(),
            Operation::And { .. } => "AND".to_string(),
            Operation::Ld { .. } => "LD".to_string(),
            Operation::Ldi { .. } => "LDI".to_string(),
            Operation::St { .. } => "ST".to_string(),
            Operation::Sti { .. } => "STI".to_string(),
            Operation::Lea { .. } => "LEA".to_string(),
            Operation::Ldr { .. } => "LDR".to_string(),
            Operation::Str { .. } => "STR".to_string(),
            Operation::Not { .. } => "NOT".to_string(),
            Operation::Jsr { .. } => "JSR".to_string(),
            Operation::Jsrr { .. } => "JSRR".to_string(),
            Operation::Trap { .. } => "TRAP".to_string(),
            Operation::Ret => "RET".to_string(),
            Operation::Rti => "RTI".to_string(),
            Operation::Reserved => "[RESERVED]".to_string(),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Operand-less forms print bare, without column padding
        match self {
            Operation::Ret | Operation::Rti | Operation::Reserved => {
                return f.write_str(&self.mnemonic());
            }
            _ => {}
        }

        write!(f, "{:<width$}", self.mnemonic(), width = MNEMONIC_WIDTH)?;

        match self {
            Operation::Br { offset, .. } | Operation::Jsr { offset } => {
                write!(f, "[OFFSET {:+}]", offset)
            }
            Operation::Add { dr, sr1, src } | Operation::And { dr, sr1, src } => {
                write!(f, "{} {} {}", dr, sr1, src)
            }
            Operation::Ld { dr: reg, offset }
            | Operation::Ldi { dr: reg, offset }
            | Operation::St { sr: reg, offset }
            | Operation::Sti { sr: reg, offset }
            | Operation::Lea { dr: reg, offset } => write!(f, "{} [OFFSET {:+}]", reg, offset),
            Operation::Ldr {
                dr: reg,
                base,
                offset,
            }
            | Operation::Str {
                sr: reg,
                base,
                offset,
            } => write!(f, "{} {} #{:+}", reg, base, offset),
            Operation::Not { dr, sr } => write!(f, "{} {}", dr, sr),
            Operation::Jsrr { base } => write!(f, "{}", base),
            Operation::Trap { vector } => write!(f, "x{:X}", vector),
            Operation::Ret | Operation::Rti | Operation::Reserved => Ok(()),
        }
    }
}

/// A raw LC-3 instruction word. Operand fields are extracted on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    word: u16,
}

impl Instruction {
    pub fn new(word: u16) -> Self {
        Instruction { word }
    }

    /// The raw 16-bit value
    pub fn word(&self) -> u16 {
        self.word
    }

    pub fn opcode(&self) -> Opcode {
        Opcode::from_word(self.word)
    }

    /// Structured decode of the operand fields
    pub fn operation(&self) -> Operation {
        Operation::decode(self.word)
    }

    /// Sixteen '0'/'1' characters, most significant bit first
    pub fn binary_string(&self) -> String {
        format!("{:016b}", self.word)
    }

    /// `x` followed by four uppercase hex digits
    pub fn hex_string(&self) -> String {
        format!("x{:04X}", self.word)
    }

    /// Assembly-like rendering, e.g. `ADD    R0 R1 #-1`
    pub fn assembly_string(&self) -> String {
        self.operation().to_string()
    }
}

impl From<u16> for Instruction {
    fn from(word: u16) -> Self {
        Instruction::new(word)
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.operation(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(n: u16) -> Register {
        Register::from_bits(n)
    }

    #[test]
    fn test_decode_add_register_mode() {
        let op = Operation::decode(0x1042);
        assert_eq!(
            op,
            Operation::Add {
                dr: reg(0),
                sr1: reg(1),
                src: Operand::Register(reg(2)),
            }
        );
    }

    #[test]
    fn test_decode_and_immediate_mode() {
        let op = Operation::decode(0x55E0);
        assert_eq!(
            op,
            Operation::And {
                dr: reg(2),
                sr1: reg(7),
                src: Operand::Immediate(0),
            }
        );
    }

    #[test]
    fn test_decode_branch_flags() {
        match Operation::decode(0x0BFE) {
            Operation::Br { n, z, p, offset } => {
                assert!(n);
                assert!(!z);
                assert!(p);
                assert_eq!(offset, -2);
            }
            other => panic!("expected BR, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_jsr_variants() {
        assert_eq!(Operation::decode(0x4BC0), Operation::Jsrr { base: reg(7) });
        assert_eq!(Operation::decode(0x4400), Operation::Jsr { offset: -1024 });
        assert_eq!(Operation::decode(0x40C0), Operation::Jsr { offset: 192 });
    }

    #[test]
    fn test_decode_base_offset() {
        assert_eq!(
            Operation::decode(0x7FE0),
            Operation::Str {
                sr: reg(7),
                base: reg(7),
                offset: -32,
            }
        );
        assert_eq!(
            Operation::decode(0x6C1F),
            Operation::Ldr {
                dr: reg(6),
                base: reg(0),
                offset: 31,
            }
        );
    }

    #[test]
    fn test_decode_trap_and_bare_forms() {
        assert_eq!(Operation::decode(0xF0FF), Operation::Trap { vector: 0xFF });
        assert_eq!(Operation::decode(0xC1C0), Operation::Ret);
        assert_eq!(Operation::decode(0x8000), Operation::Rti);
        assert_eq!(Operation::decode(0xDFFF), Operation::Reserved);
    }

    #[test]
    fn test_instruction_accessors() {
        let insn = Instruction::from(0xE005);
        assert_eq!(insn.word(), 0xE005);
        assert_eq!(insn.opcode(), Opcode::Lea);
        assert_eq!(
            insn.operation(),
            Operation::Lea {
                dr: reg(0),
                offset: 5,
            }
        );
    }

    #[test]
    fn test_register_display() {
        assert_eq!(reg(5).to_string(), "R5");
        assert_eq!(Register::from_bits(0xF).index(), 7);
    }
}
