//! The decoding pipeline
//!
//! normalize → parse → sequence → checksums → century → calendar →
//! gender and birth order → [`Decoded`].
//!
//! Every stage either hands its output to the next one or ends the call with
//! a [`FatalError`]. Checksum mismatches are not fatal; they only set the
//! status of the result.
//!
//! # Example
//!
//! ```
//! use insz_decoder::{AlgorithmMode, ChecksumStatus, Decoder, FixedYear, Gender};
//!
//! let decoder = Decoder::with_clock(FixedYear(2026));
//! let outcome = decoder.decode("93.05.18-223.61", AlgorithmMode::Auto);
//!
//! let decoded = outcome.as_decoded().unwrap();
//! assert_eq!(decoded.status, ChecksumStatus::Valid);
//! assert_eq!(decoded.birth_year.year, 1993);
//! assert_eq!(decoded.gender, Gender::Male);
//! assert_eq!(decoded.birth_order, 112);
//! ```

use crate::calendar::birth_date;
use crate::century::decide;
use crate::checksum::{candidates, given_checksum};
use crate::clock::{Clock, SystemClock};
use crate::error::FatalError;
use crate::gender::{birth_order, gender};
use crate::normalize::{normalize, parse, sequence_value};
use crate::types::{AlgorithmMode, DecodeOutcome, Decoded};

/// Decodes national register numbers.
///
/// Holds nothing but the clock used for century guessing; a single decoder
/// can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder<C = SystemClock> {
    clock: C,
}

impl Decoder<SystemClock> {
    /// Decoder that guesses centuries against the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Decoder<C> {
    /// Decoder with an explicit source for the current year.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Decode `input` under the given algorithm mode.
    ///
    /// Never panics on malformed input; every failure is a
    /// [`DecodeOutcome::Fatal`].
    pub fn decode(&self, input: &str, algorithm: AlgorithmMode) -> DecodeOutcome {
        match self.run(input, algorithm) {
            Ok(decoded) => DecodeOutcome::Decoded(decoded),
            Err(error) => DecodeOutcome::fatal(Some(input), error),
        }
    }

    fn run(&self, input: &str, algorithm: AlgorithmMode) -> Result<Decoded, FatalError> {
        let normalized = normalize(input)?;
        let components = parse(&normalized)?;
        let sequence = sequence_value(&components)?;

        let checksums = candidates(&components);
        let decision = decide(algorithm, given_checksum(&components), &checksums);

        // Two ASCII digits always parse
        let yy: i32 = components.yy().parse().unwrap_or_default();
        let birth_year = decision.resolve_year(yy, &self.clock);
        let birth_date = birth_date(&components, birth_year)?;

        let birth_order = birth_order(sequence, &components)?;

        Ok(Decoded {
            input: input.to_string(),
            status: decision.status,
            components,
            birth_year,
            birth_date,
            checksums,
            algorithm,
            suggested_algorithm: decision.suggested_algorithm(),
            sequence,
            gender: gender(sequence),
            birth_order,
        })
    }
}

/// Decode with a [`Decoder`] on the system clock.
pub fn decode(input: &str, algorithm: AlgorithmMode) -> DecodeOutcome {
    Decoder::new().decode(input, algorithm)
}
