//! INSZ Decoder
//!
//! Decodes Belgian national register numbers (INSZ/NISS, `YYMMDD-SSS-CC`)
//! for educational purposes. This library provides functionality for:
//! - Normalizing and structurally parsing 9- and 11-digit numbers
//! - Computing both modulo-97 checksum candidates (19xx and 20xx)
//! - Resolving the birth century, forced or from the checksum
//! - Validating the birth date and deriving gender and birth order
//!
//! Decoding is a pure function of the input, the algorithm mode and the
//! current year (used only to guess a century). It is not an official
//! validation and makes no claim about the person behind a number.
//!
//! # Example
//!
//! ```
//! use insz_decoder::{decode, AlgorithmMode, ChecksumStatus, DecodeOutcome};
//!
//! match decode("93051822361", AlgorithmMode::Auto) {
//!     DecodeOutcome::Decoded(d) => {
//!         assert_eq!(d.status, ChecksumStatus::Valid);
//!         assert_eq!(d.birth_year.year, 1993);
//!     }
//!     DecodeOutcome::Fatal(f) => panic!("unexpected {}", f.error),
//! }
//! ```

pub mod calendar;
pub mod century;
pub mod checksum;
pub mod cli;
pub mod clock;
pub mod config;
pub mod decoder;
pub mod error;
pub mod gender;
pub mod normalize;
pub mod service;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
pub use century::{CenturyBasis, CenturyDecision};
pub use clock::{Clock, FixedYear, SystemClock};
pub use decoder::{decode, Decoder};
pub use error::{DecoderError, ErrorKind, FatalError, Result};
pub use service::{BatchSummary, DecodeRequest, DecodeService};
pub use types::{
    AlgorithmMode, Century, ChecksumCandidates, ChecksumStatus, Components, DateParts,
    DecodeOutcome, Decoded, Fatal, Gender, ResolvedYear,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
