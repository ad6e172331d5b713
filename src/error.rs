//! Error types for TOON decoding and the serde bridges.
//!
//! The encoder is total over the value model and has no failure path, so the
//! variants here cover the decoding side plus the generic message channel
//! serde requires.
//!
//! Decode errors carry the 1-based line number where the problem was
//! detected:
//!
//! ```rust
//! use toon_codec::{decode, Error};
//!
//! let err = decode("???").unwrap_err();
//! assert!(matches!(err, Error::Syntax { line: 1, .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors the crate can produce.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// A line matched none of the decoder's classifications, or matched one
    /// but was structurally invalid in context. Such lines are never
    /// skipped silently.
    #[error("syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    /// A construct the grammar names but the decoder does not reconstruct
    /// (generic `- ` list blocks).
    #[error("unsupported construct at line {line}: {msg}")]
    Unsupported { line: usize, msg: String },

    /// Generic message, used by the serde `to_value`/`from_value` bridges.
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn syntax(line: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            msg: msg.into(),
        }
    }

    pub(crate) fn unsupported(line: usize, msg: impl Into<String>) -> Self {
        Error::Unsupported {
            line,
            msg: msg.into(),
        }
    }

    /// Creates an error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
