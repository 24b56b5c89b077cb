//! LC-3 machine code disassembler.
//!
//! Each 16-bit word is decoded on its own into an [`instruction::Instruction`], which renders
//! as a binary string, a hexadecimal string and an assembly-like line:
//!
//! ```
//! use lc3dis::instruction::Instruction;
//!
//! let insn = Instruction::new(0x1042);
//! assert_eq!(insn.hex_string(), "x1042");
//! assert_eq!(insn.binary_string(), "0001000001000010");
//! assert_eq!(insn.assembly_string(), "ADD    R0 R1 R2");
//! ```
//!
//! The [`disassembler`] module drives a stream of text lines through the decoder and lays out
//! the listing; [`cli`] and [`config`] back the `lc3dis` binary.

pub mod bits;
pub mod cli;
pub mod config;
pub mod disassembler;
pub mod error;
pub mod input;
pub mod instruction;
pub mod opcode;

#[cfg(test)]
mod disassembler_tests;

pub use error::Error;
pub use instruction::{Instruction, Operation};
pub use opcode::Opcode;
