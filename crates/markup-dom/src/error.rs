//! Error handling for markup output.
//!
//! Building a document never fails. The only fallible operations sit at the
//! output edge, where encoded bytes are handed to an I/O sink or decoded into
//! a `String`.

use std::error::Error;
use std::fmt::{self, Display};
use std::io;
use std::string::FromUtf8Error;

/// Errors that can occur while emitting a finished document.
#[derive(Debug)]
pub enum MarkupError {
    /// An underlying I/O error occurred.
    Io(io::Error),
    /// The encoded buffer is not valid UTF-8. This can only happen when raw
    /// bytes were injected through one of the unsafe encoder slots.
    InvalidUtf8(FromUtf8Error),
}

impl Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::Io(err) => write!(f, "I/O error: {err}"),
            MarkupError::InvalidUtf8(err) => {
                write!(f, "Encoded markup is not valid UTF-8: {err}")
            }
        }
    }
}

impl Error for MarkupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MarkupError::Io(err) => Some(err),
            MarkupError::InvalidUtf8(err) => Some(err),
        }
    }
}

impl From<io::Error> for MarkupError {
    fn from(err: io::Error) -> Self {
        MarkupError::Io(err)
    }
}

impl From<FromUtf8Error> for MarkupError {
    fn from(err: FromUtf8Error) -> Self {
        MarkupError::InvalidUtf8(err)
    }
}

/// Result type alias for markup output operations.
pub type MarkupResult<T> = Result<T, MarkupError>;
