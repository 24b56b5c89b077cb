//! Command-line argument handling for the `lc3dis` binary.

use crate::config::Config;
use crate::disassembler::OutputOptions;
use crate::error::Error;
use crate::input::{parse_word, InputMode};
use std::path::PathBuf;

pub const USAGE: &str = "[-x] [-b] [-a] [-h] [-o <offset>] [-c <config>] <file>";

/// Where the words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

/// Parsed arguments. Unset options fall back to the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub input_mode: Option<InputMode>,
    pub assembly_only: bool,
    pub origin: Option<u16>,
    pub config: Option<PathBuf>,
    pub source: Source,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Args),
}

impl Args {
    /// Parse arguments, excluding the program name. Options are applied left to right and
    /// the last input file given wins.
    pub fn parse<I, S>(args: I) -> Result<Command, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input_mode = None;
        let mut assembly_only = false;
        let mut origin = None;
        let mut config = None;
        let mut source = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-x" => input_mode = Some(InputMode::Hex),
                "-b" => input_mode = Some(InputMode::Binary),
                "-a" => assembly_only = true,
                "-h" | "--help" => return Ok(Command::Help),
                "-o" => {
                    let value = args.next().ok_or(Error::MissingValue("-o"))?;
                    let value = value.as_ref();
                    let offset = parse_word(value, InputMode::Hex)
                        .map_err(|_| Error::InvalidOffset(value.to_string()))?;
                    origin = Some(offset);
                }
                "-c" => {
                    let value = args.next().ok_or(Error::MissingValue("-c"))?;
                    config = Some(PathBuf::from(value.as_ref()));
                }
                "-" => source = Some(Source::Stdin),
                other if other.starts_with('-') => {
                    return Err(Error::Usage(format!("unknown option '{}'", other)));
                }
                path => source = Some(Source::File(PathBuf::from(path))),
            }
        }

        Ok(Command::Run(Args {
            input_mode,
            assembly_only,
            origin,
            config,
            source: source.ok_or(Error::NoInput)?,
        }))
    }

    /// Merge these arguments over a configuration
    pub fn output_options(&self, config: &Config) -> OutputOptions {
        let defaults = config.output_options();
        OutputOptions {
            input_mode: self.input_mode.unwrap_or(defaults.input_mode),
            assembly_only: self.assembly_only || defaults.assembly_only,
            origin: self.origin.unwrap_or(defaults.origin),
        }
    }
}

/// Full help text
pub fn help(program: &str) -> String {
    format!(
        "\
Usage: {program} {usage}

Convert hexadecimal or binary LC-3 machine code into readable assembly-like text.
The output is meant for debugging and is not necessarily valid assembly source.

The input file can be standard input, given as a dash: '-'. An empty line then ends
the input. When a file is read, empty lines are ignored.

  -x: Hexadecimal input (default). Each line must be a hexadecimal number.
  -b: Binary input. Each line must be a binary number.
  -a: Only print the assembly, without the address, hexadecimal and binary columns.
  -h: Print this help.
  -o: Address of the first word in LC-3 memory, in hexadecimal. Default is 3000.
  -c: Read default settings from a TOML file (keys: input, assembly_only, origin).
",
        program = program,
        usage = USAGE
    )
}
