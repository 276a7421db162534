use std::{fmt, io, path::Path};

use crate::parsing::ParsingError;

/// Failure to read a commodore file from disk (or standard input) ahead of
/// parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// The two ways reading a command tree can fail: the input could not be
/// read at all, or it was read but is not valid commodore.
#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    Format(ParsingError),
}

impl ReadError {
    pub fn is_format(&self) -> bool {
        matches!(self, ReadError::Format(_))
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(error) => write!(f, "unable to read input: {}", error),
            ReadError::Format(error) => write!(f, "invalid command file: {}", error),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(error) => Some(error),
            ReadError::Format(error) => Some(error),
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(error: io::Error) -> Self {
        ReadError::Io(error)
    }
}

impl From<ParsingError> for ReadError {
    fn from(error: ParsingError) -> Self {
        ReadError::Format(error)
    }
}
