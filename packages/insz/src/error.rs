//! Error types for the INSZ decoder
//!
//! Two families live here:
//! - [`FatalError`]: the decoder's own taxonomy. These are *values* carried by
//!   [`DecodeOutcome::Fatal`](crate::types::DecodeOutcome::Fatal), never
//!   returned through `Result`.
//! - [`DecoderError`]: failures of the surrounding layers (request parsing,
//!   stream I/O, argument parsing).

use serde::Serialize;
use thiserror::Error;

use crate::types::{Components, DateParts};

/// Why a decode call could not produce a result.
///
/// Variants from [`FatalError::InvalidSequence`] onward carry the parsed
/// components so a caller can still display what was read.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FatalError {
    /// Input was not a text value
    #[error("Input is not a text value")]
    InvalidInputType,

    /// Normalized input is neither 9 nor 11 characters long
    #[error("Expected 9 or 11 digits, found {length_found}")]
    InvalidLength { length_found: usize },

    /// Normalized input contains something other than ASCII digits
    #[error("Input contains non-digit characters")]
    InvalidFormat,

    /// Sequence outside 001..=998, or no positive birth order derivable
    #[error("Invalid sequence number: {value:03}")]
    InvalidSequence { value: u16, components: Components },

    /// Resolved year, month and day do not form a calendar date
    #[error(
        "Invalid birth date: {}-{}-{}",
        date_parts.year,
        date_parts.mm,
        date_parts.dd
    )]
    InvalidDate {
        date_parts: DateParts,
        components: Components,
    },
}

/// Fieldless mirror of [`FatalError`], usable as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidInputType,
    InvalidLength,
    InvalidFormat,
    InvalidSequence,
    InvalidDate,
}

impl ErrorKind {
    /// Stable key for this kind (e.g. `INVALID_LENGTH`).
    pub fn as_key(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInputType => "INVALID_INPUT_TYPE",
            ErrorKind::InvalidLength => "INVALID_LENGTH",
            ErrorKind::InvalidFormat => "INVALID_FORMAT",
            ErrorKind::InvalidSequence => "INVALID_SEQUENCE",
            ErrorKind::InvalidDate => "INVALID_DATE",
        }
    }
}

impl FatalError {
    /// The kind of this error, without its diagnostic context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FatalError::InvalidInputType => ErrorKind::InvalidInputType,
            FatalError::InvalidLength { .. } => ErrorKind::InvalidLength,
            FatalError::InvalidFormat => ErrorKind::InvalidFormat,
            FatalError::InvalidSequence { .. } => ErrorKind::InvalidSequence,
            FatalError::InvalidDate { .. } => ErrorKind::InvalidDate,
        }
    }

    /// Components parsed before the failure, if parsing got that far.
    pub fn components(&self) -> Option<&Components> {
        match self {
            FatalError::InvalidSequence { components, .. }
            | FatalError::InvalidDate { components, .. } => Some(components),
            _ => None,
        }
    }
}

/// Error type for the request, batch and command-line layers
#[derive(Error, Debug)]
pub enum DecoderError {
    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading requests or writing outcomes
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Algorithm name that is not one of the supported modes
    #[error("Unknown algorithm '{0}': expected auto, force-1900s or force-2000s")]
    UnknownAlgorithm(String),

    /// Request line exceeds the configured size limit
    #[error("Request of {size} bytes exceeds the maximum of {max} bytes")]
    RequestTooLarge { size: usize, max: usize },
}

/// Result type alias for the outer layers
pub type Result<T> = std::result::Result<T, DecoderError>;
