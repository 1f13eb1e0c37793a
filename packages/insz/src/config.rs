//! Configuration constants for the INSZ decoder
//!
//! Centralized values used throughout the decoder for:
//! - The structure of a national register number (lengths, separators)
//! - Checksum arithmetic
//! - Century guessing when no checksum settles the birth year
//! - Resource limits of the request/batch layer
//!
//! These are compile-time constants. Runtime behaviour that callers may
//! want to vary (algorithm mode, the current year) is passed explicitly.

/// Length of a number without the two checksum digits (`YYMMDDSSS`).
pub const SHORT_LENGTH: usize = 9;

/// Length of a complete number (`YYMMDDSSSCC`).
pub const FULL_LENGTH: usize = 11;

/// Length of the `YYMMDD` date part.
pub const DATE_PART_LENGTH: usize = 6;

/// Length of the `SSS` sequence part.
pub const SEQUENCE_PART_LENGTH: usize = 3;

/// Characters stripped during normalization in addition to whitespace.
pub const SEPARATORS: [char; 2] = ['.', '-'];

/// Modulus of the checksum: `CC = 97 - (N mod 97)`.
pub const CHECKSUM_MODULUS: u64 = 97;

/// Prefix digit prepended to `YYMMDDSSS` for people born in 2000 or later.
pub const CENTURY_2000_PREFIX: u64 = 2_000_000_000;

/// Lowest valid sequence number. `000` is reserved.
pub const SEQUENCE_MIN: u16 = 1;

/// Highest valid sequence number. `999` is reserved.
pub const SEQUENCE_MAX: u16 = 998;

/// How many years past the current two-digit year still count as 20xx.
///
/// With a current year of 2026, `yy <= 31` guesses 20yy and anything
/// above guesses 19yy.
pub const CENTURY_GUESS_WINDOW: i32 = 5;

/// Maximum size of a single JSON request line in bytes.
///
/// A request holds one identifier of at most a few dozen characters;
/// anything beyond this is rejected before parsing.
pub const MAX_REQUEST_SIZE: usize = 4_096;
