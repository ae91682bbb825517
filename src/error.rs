//! Error enum
use std::fmt;
use std::path::PathBuf;
use std::string::FromUtf8Error;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// An input file could not be opened or read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An input file is not valid UTF-8.
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
    /// Source and target files have a different number of lines.
    LengthMismatch {
        source_lines: usize,
        target_lines: usize,
    },
    /// Target line (1-based) has no token to build a prefix from.
    EmptyTarget { line: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Read { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            Error::Decode { path, source } => {
                write!(f, "{} is not valid UTF-8: {}", path.display(), source)
            }
            Error::LengthMismatch {
                source_lines,
                target_lines,
            } => write!(
                f,
                "source has {} lines but target has {} (use --truncate to keep the shorter)",
                source_lines, target_lines
            ),
            Error::EmptyTarget { line } => {
                write!(f, "target line {} is empty, cannot build a prefix", line)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Read { source, .. } => Some(source),
            Error::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}
