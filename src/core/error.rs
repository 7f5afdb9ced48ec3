use thiserror::Error;

use super::codec::DecodeError;
use super::parser::ParseError;

/// Errors surfaced by the localization core.
///
/// Lookup misses are deliberately absent: a missing locale or key is a soft
/// condition answered with [`DEFAULT_TEXT`](super::DEFAULT_TEXT).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalizationError {
    /// A required argument was empty.
    #[error("invalid argument: `{0}` must not be empty")]
    InvalidArgument(&'static str),
    /// The spreadsheet could not be imported.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A locale blob could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T, E = LocalizationError> = std::result::Result<T, E>;
