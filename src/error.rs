// Driver error handling

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    // Command-line errors
    Usage(String),
    InvalidOffset(String),
    MissingValue(&'static str), // flag
    NoInput,

    // Configuration errors
    Config(String),

    // IO errors
    Open { path: PathBuf, source: io::Error },
    Io(io::Error),
}

impl Error {
    /// Whether the usage line should be shown alongside this error
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::Usage(_) | Error::InvalidOffset(_) | Error::MissingValue(_) | Error::NoInput
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(msg) => write!(f, "{}", msg),
            Error::InvalidOffset(value) => {
                write!(
                    f,
                    "invalid offset '{}', provide a hexadecimal number",
                    value
                )
            }
            Error::MissingValue(flag) => write!(f, "option '{}' requires a value", flag),
            Error::NoInput => write!(f, "no input file"),
            Error::Config(msg) => write!(f, "invalid configuration: {}", msg),
            Error::Open { path, source } => {
                write!(f, "cannot open '{}': {}", path.display(), source)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { source, .. } => Some(source),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Config(error.to_string())
    }
}
