use std::fmt;
use std::io;

use thiserror::Error;

/// Which field of a record failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    X,
    Y,
    Z,
    Value,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::X => "x coordinate",
            Field::Y => "y coordinate",
            Field::Z => "z coordinate",
            Field::Value => "value",
        };

        f.write_str(s)
    }
}

/// A record that could not be turned into a point. Line numbers are 1-based
/// and count every physical line of the input, blank ones included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line}: expected at least 4 fields (x y z ... value), found {found}")]
    TooFewFields { line: usize, found: usize },
    #[error("line {line}: {field} `{token}` is not a number")]
    NotNumeric {
        line: usize,
        field: Field,
        token: String,
    },
    #[error("line {line}: {field} `{token}` is not finite")]
    NonFinite {
        line: usize,
        field: Field,
        token: String,
    },
}

impl FormatError {
    /// 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            FormatError::TooFewFields { line, .. }
            | FormatError::NotNumeric { line, .. }
            | FormatError::NonFinite { line, .. } => *line,
        }
    }
}

/// Failure reading a tensor file from disk.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("tensor file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}
