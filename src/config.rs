//! Optional TOML configuration file.
//!
//! ```toml
//! input = "binary"
//! assembly_only = true
//! origin = 0x4000
//! ```
//!
//! Every key is optional. Command-line flags override values from the file.

use crate::disassembler::{OutputOptions, DEFAULT_ORIGIN};
use crate::error::Error;
use crate::input::InputMode;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Radix of the input words
    pub input: InputMode,
    /// Only print the assembly column
    pub assembly_only: bool,
    /// Address label of the first word
    pub origin: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: InputMode::Hex,
            assembly_only: false,
            origin: DEFAULT_ORIGIN,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            input_mode: self.input,
            assembly_only: self.assembly_only,
            origin: self.origin,
        }
    }
}
