//! Request layer over the decoder
//!
//! Accepts JSON requests of the form
//! `{"input": "93051822361", "algorithm": "auto"}`, where `input` may be any
//! JSON value and `algorithm` is optional. A non-string `input` is answered
//! with an `INVALID_INPUT_TYPE` outcome rather than coerced.
//!
//! [`DecodeService::decode_stream`] processes newline-delimited requests and
//! writes one JSON line per request.
//!
//! # Example
//!
//! ```
//! use insz_decoder::service::DecodeService;
//! use insz_decoder::FixedYear;
//!
//! let service = DecodeService::with_clock(FixedYear(2026));
//! let outcome = service.decode_line(r#"{"input": "93051822361"}"#).unwrap();
//! assert!(outcome.as_decoded().unwrap().is_valid());
//! ```

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::config::MAX_REQUEST_SIZE;
use crate::decoder::Decoder;
use crate::error::{DecoderError, FatalError, Result};
use crate::types::{AlgorithmMode, ChecksumStatus, DecodeOutcome};

/// A single decode request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeRequest {
    /// Anything; only strings are decoded
    pub input: serde_json::Value,
    #[serde(default)]
    pub algorithm: AlgorithmMode,
}

impl DecodeRequest {
    pub fn new(input: impl Into<String>, algorithm: AlgorithmMode) -> Self {
        Self {
            input: serde_json::Value::String(input.into()),
            algorithm,
        }
    }
}

/// Output line for a request that could not be read
#[derive(Debug, Serialize)]
struct RequestErrorLine {
    line: usize,
    error: String,
}

/// Counts per outcome of a processed stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub valid: usize,
    pub checksum_invalid: usize,
    pub checksum_missing: usize,
    pub fatal: usize,
    /// Lines that were not a readable request
    pub rejected: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.valid + self.checksum_invalid + self.checksum_missing + self.fatal + self.rejected
    }

    fn record(&mut self, outcome: &DecodeOutcome) {
        match outcome {
            DecodeOutcome::Fatal(_) => self.fatal += 1,
            DecodeOutcome::Decoded(d) => match d.status {
                ChecksumStatus::Valid => self.valid += 1,
                ChecksumStatus::ChecksumInvalid => self.checksum_invalid += 1,
                ChecksumStatus::ChecksumMissing => self.checksum_missing += 1,
            },
        }
    }
}

/// Decodes requests with a shared [`Decoder`].
#[derive(Debug, Clone, Default)]
pub struct DecodeService<C = SystemClock> {
    decoder: Decoder<C>,
}

impl DecodeService<SystemClock> {
    pub fn new() -> Self {
        Self {
            decoder: Decoder::new(),
        }
    }
}

impl<C: Clock> DecodeService<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            decoder: Decoder::with_clock(clock),
        }
    }

    pub fn decoder(&self) -> &Decoder<C> {
        &self.decoder
    }

    /// Decode one request.
    pub fn decode_request(&self, request: &DecodeRequest) -> DecodeOutcome {
        match &request.input {
            serde_json::Value::String(input) => self.decoder.decode(input, request.algorithm),
            other => {
                tracing::debug!(input_type = json_type(other), "Rejecting non-text input");
                DecodeOutcome::fatal(None, FatalError::InvalidInputType)
            }
        }
    }

    /// Parse and decode one JSON request line.
    ///
    /// # Errors
    ///
    /// Returns `DecoderError::RequestTooLarge` for lines over
    /// [`MAX_REQUEST_SIZE`] and `DecoderError::Json` for malformed requests.
    pub fn decode_line(&self, line: &str) -> Result<DecodeOutcome> {
        if line.len() > MAX_REQUEST_SIZE {
            return Err(DecoderError::RequestTooLarge {
                size: line.len(),
                max: MAX_REQUEST_SIZE,
            });
        }
        let request: DecodeRequest = serde_json::from_str(line)?;
        Ok(self.decode_request(&request))
    }

    /// Decode newline-delimited requests from `reader` into `writer`.
    ///
    /// Blank lines are skipped. A line that is not a readable request
    /// produces `{"line": n, "error": "..."}` and processing continues.
    ///
    /// # Errors
    ///
    /// Returns `DecoderError::Io` if reading or writing fails.
    pub fn decode_stream<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            match self.decode_line(&line) {
                Ok(outcome) => {
                    tracing::debug!(
                        line = line_number,
                        fatal = outcome.is_fatal(),
                        "Decoded request"
                    );
                    summary.record(&outcome);
                    serde_json::to_writer(&mut writer, &outcome)?;
                }
                Err(e) => {
                    tracing::warn!(line = line_number, error = %e, "Skipping unreadable request");
                    summary.rejected += 1;
                    let error_line = RequestErrorLine {
                        line: line_number,
                        error: e.to_string(),
                    };
                    serde_json::to_writer(&mut writer, &error_line)?;
                }
            }
            writeln!(writer)?;
        }

        writer.flush()?;
        tracing::info!(
            total = summary.total(),
            valid = summary.valid,
            checksum_invalid = summary.checksum_invalid,
            checksum_missing = summary.checksum_missing,
            fatal = summary.fatal,
            rejected = summary.rejected,
            "Batch complete"
        );
        Ok(summary)
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
