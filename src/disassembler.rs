use crate::error::Error;
use crate::input::{parse_word, InputMode};
use crate::instruction::Instruction;
use log::{debug, info, trace};
use std::io::{BufRead, Write};

/// Address of the first word when no origin is given
pub const DEFAULT_ORIGIN: u16 = 0x3000;

/// Output options for the disassembly listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Radix of the input lines (-x / -b)
    pub input_mode: InputMode,
    /// Only print the assembly column (-a flag)
    pub assembly_only: bool,
    /// Address label of the first word (-o flag)
    pub origin: u16,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            input_mode: InputMode::Hex,
            assembly_only: false,
            origin: DEFAULT_ORIGIN,
        }
    }
}

/// What an empty input line means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankLines {
    /// End of input (interactive standard input)
    Stop,
    /// Ignore the line (files)
    Skip,
}

/// Line counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub decoded: usize,
    pub rejected: usize,
}

/// Turns a stream of textual words into listing lines.
///
/// The only state carried between lines is the address label, which starts at the origin and
/// advances by one for every rendered line, including rejected ones.
pub struct Disassembler {
    options: OutputOptions,
    address: u16,
    summary: Summary,
}

impl Disassembler {
    pub fn new(options: OutputOptions) -> Self {
        Disassembler {
            options,
            address: options.origin,
            summary: Summary::default(),
        }
    }

    /// Address label of the next line
    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Render an already parsed word and advance the address
    pub fn format_word(&mut self, word: u16) -> String {
        let instruction = Instruction::new(word);
        trace!("{:04x}: {:04x} {:?}", self.address, word, instruction.opcode());

        let line = if self.options.assembly_only {
            instruction.assembly_string()
        } else {
            format!(
                "x{:04X} | {} | {} | {}",
                self.address,
                instruction.hex_string(),
                instruction.binary_string(),
                instruction.assembly_string()
            )
        };

        self.summary.decoded += 1;
        self.address = self.address.wrapping_add(1);
        line
    }

    /// Render one non-empty input line and advance the address
    pub fn format_line(&mut self, line: &str) -> String {
        match parse_word(line, self.options.input_mode) {
            Ok(word) => self.format_word(word),
            Err(e) => {
                debug!("Rejected line at x{:04X}: {:?}", self.address, line);
                self.summary.rejected += 1;
                self.address = self.address.wrapping_add(1);
                e.to_string()
            }
        }
    }

    /// Disassemble every line of `reader` into `writer`
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        writer: &mut W,
        blank_lines: BlankLines,
    ) -> Result<Summary, Error> {
        for bytes in reader.split(b'\n') {
            let bytes = bytes?;
            let text = String::from_utf8_lossy(&bytes);
            let line = text.strip_suffix('\r').unwrap_or(&*text);

            if line.is_empty() {
                match blank_lines {
                    BlankLines::Stop => {
                        debug!("Empty line, stopping at x{:04X}", self.address);
                        break;
                    }
                    BlankLines::Skip => continue,
                }
            }

            writeln!(writer, "{}", self.format_line(line))?;
        }
        writer.flush()?;

        info!(
            "Disassembled {} words ({} rejected)",
            self.summary.decoded, self.summary.rejected
        );
        Ok(self.summary)
    }
}

/// Convenience function to render a slice of words with the given options
pub fn disassemble_words(words: &[u16], options: OutputOptions) -> Vec<String> {
    let mut disassembler = Disassembler::new(options);
    words
        .iter()
        .map(|&word| disassembler.format_word(word))
        .collect()
}
