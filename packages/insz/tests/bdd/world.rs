//! World struct for Cucumber BDD tests
//!
//! Holds the decoder settings and the last outcome of a scenario.

use cucumber::World;
use insz_decoder::{AlgorithmMode, DecodeOutcome, Decoded, Decoder, Fatal, FixedYear};

/// Year scenarios run against unless they set one
const DEFAULT_CURRENT_YEAR: i32 = 2026;

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct DecoderWorld {
    /// Year the decoder guesses centuries against
    pub current_year: i32,
    /// Algorithm mode for the next decode
    pub algorithm: AlgorithmMode,
    /// Outcome of the last decode
    pub outcome: Option<DecodeOutcome>,
}

impl Default for DecoderWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderWorld {
    pub fn new() -> Self {
        Self {
            current_year: DEFAULT_CURRENT_YEAR,
            algorithm: AlgorithmMode::Auto,
            outcome: None,
        }
    }

    /// Decode `input` with the scenario's settings and keep the outcome
    pub fn decode(&mut self, input: &str) {
        let decoder = Decoder::with_clock(FixedYear(self.current_year));
        self.outcome = Some(decoder.decode(input, self.algorithm));
    }

    /// The last outcome, which must be a decoded result
    pub fn decoded(&self) -> &Decoded {
        match &self.outcome {
            Some(DecodeOutcome::Decoded(d)) => d,
            Some(DecodeOutcome::Fatal(f)) => panic!("Expected a decoded result, got {:?}", f),
            None => panic!("No number was decoded in this scenario"),
        }
    }

    /// The last outcome, which must be fatal
    pub fn fatal(&self) -> &Fatal {
        match &self.outcome {
            Some(DecodeOutcome::Fatal(f)) => f,
            Some(DecodeOutcome::Decoded(d)) => panic!("Expected a fatal outcome, got {:?}", d),
            None => panic!("No number was decoded in this scenario"),
        }
    }
}
