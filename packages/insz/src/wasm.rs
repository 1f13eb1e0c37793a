//! WASM bindings for the INSZ decoder
//!
//! Feature-gated behind the `wasm` feature flag. Exposes [`WasmDecoder`] to
//! a JavaScript front end, which owns input handling and localized rendering.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { WasmDecoder } from 'insz-decoder';
//!
//! await init();
//! const decoder = new WasmDecoder();
//!
//! const outcome = decoder.decode('93.05.18-223.61', 'auto');
//! if (outcome.outcome === 'decoded') {
//!     console.log(outcome.status, outcome.birth_date, outcome.gender);
//! } else {
//!     console.log(outcome.error.kind);  // e.g. "INVALID_LENGTH"
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::clock::{Clock, FixedYear, SystemClock};
use crate::decoder::Decoder;
use crate::error::FatalError;
use crate::types::{AlgorithmMode, DecodeOutcome};

/// Helper to create consistent error JsValues
fn wasm_error(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}

/// Clock used by the binding: the system clock unless a year was pinned
#[derive(Debug, Clone, Copy)]
enum WasmClock {
    System,
    Fixed(FixedYear),
}

impl Clock for WasmClock {
    fn current_year(&self) -> i32 {
        match self {
            WasmClock::System => SystemClock.current_year(),
            WasmClock::Fixed(fixed) => fixed.current_year(),
        }
    }
}

/// WASM-compatible decoder.
#[wasm_bindgen]
pub struct WasmDecoder {
    decoder: Decoder<WasmClock>,
}

#[wasm_bindgen]
impl WasmDecoder {
    /// Create a decoder that guesses centuries against the current year.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            decoder: Decoder::with_clock(WasmClock::System),
        }
    }

    /// Create a decoder that guesses centuries against `year`.
    #[wasm_bindgen(js_name = withCurrentYear)]
    pub fn with_current_year(year: i32) -> Self {
        Self {
            decoder: Decoder::with_clock(WasmClock::Fixed(FixedYear(year))),
        }
    }

    /// Decode a number.
    ///
    /// # Arguments
    /// * `input` - The number as typed; anything but a string yields an
    ///   `INVALID_INPUT_TYPE` outcome
    /// * `algorithm` - `auto` (default), `force-1900s` or `force-2000s`
    ///
    /// # Returns
    /// * `Ok(JsValue)` - The outcome object
    /// * `Err(JsValue)` - Unknown algorithm, or serialization failure
    pub fn decode(&self, input: JsValue, algorithm: Option<String>) -> Result<JsValue, JsValue> {
        let algorithm = match algorithm.as_deref() {
            Some(name) => name
                .parse::<AlgorithmMode>()
                .map_err(|e| wasm_error(&e.to_string()))?,
            None => AlgorithmMode::Auto,
        };

        let outcome = self.decode_outcome(input.as_string(), algorithm);

        serde_wasm_bindgen::to_value(&outcome)
            .map_err(|e| wasm_error(&format!("Failed to serialize outcome: {}", e)))
    }

    /// Get the decoder version.
    pub fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl WasmDecoder {
    /// The non-JsValue part of `decode`, testable outside a WASM runtime.
    fn decode_outcome(&self, input: Option<String>, algorithm: AlgorithmMode) -> DecodeOutcome {
        match input {
            Some(text) => self.decoder.decode(&text, algorithm),
            None => DecodeOutcome::fatal(None, FatalError::InvalidInputType),
        }
    }
}

impl Default for WasmDecoder {
    fn default() -> Self {
        Self::new()
    }
}
