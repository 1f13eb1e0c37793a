//! Input normalization and structural parsing
//!
//! Turns raw text such as `93.05.18-223.61` into [`Components`]:
//!
//! 1. **Normalize**: strip whitespace, `.` and `-`; the remainder must be
//!    9 or 11 characters long.
//! 2. **Parse**: every remaining character must be an ASCII digit; slice into
//!    `YYMMDD`, `SSS` and the optional `CC`.
//! 3. **Sequence**: `SSS` must lie in `001..=998`.

use crate::config::{
    DATE_PART_LENGTH, FULL_LENGTH, SEPARATORS, SEQUENCE_MAX, SEQUENCE_MIN, SHORT_LENGTH,
};
use crate::error::FatalError;
use crate::types::Components;

/// Strip separators and check the length of what remains.
///
/// Length is counted in characters, so a non-ASCII character that survives
/// stripping still counts once and is rejected later by [`parse`].
///
/// # Errors
///
/// Returns `FatalError::InvalidLength` if the stripped input is not 9 or 11
/// characters long.
pub fn normalize(raw: &str) -> Result<String, FatalError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !SEPARATORS.contains(c))
        .collect();

    let length_found = cleaned.chars().count();
    if length_found != SHORT_LENGTH && length_found != FULL_LENGTH {
        return Err(FatalError::InvalidLength { length_found });
    }
    Ok(cleaned)
}

/// Slice normalized digits into their components.
///
/// # Errors
///
/// Returns `FatalError::InvalidFormat` if any character is not an ASCII
/// digit (Unicode digits from other scripts included), and
/// `FatalError::InvalidLength` if called with un-normalized input.
pub fn parse(normalized: &str) -> Result<Components, FatalError> {
    if !normalized.chars().all(|c| c.is_ascii_digit()) {
        return Err(FatalError::InvalidFormat);
    }

    // All ASCII from here on, so byte offsets are character offsets
    let length = normalized.len();
    if length != SHORT_LENGTH && length != FULL_LENGTH {
        return Err(FatalError::InvalidLength {
            length_found: length,
        });
    }

    let (date_part, rest) = normalized.split_at(DATE_PART_LENGTH);
    let (sequence_part, checksum_part) = rest.split_at(SHORT_LENGTH - DATE_PART_LENGTH);
    let checksum_part = (!checksum_part.is_empty()).then(|| checksum_part.to_string());

    Ok(Components::new(date_part, sequence_part, checksum_part))
}

/// Numeric sequence value, checked against the reserved `000` and `999`.
///
/// # Errors
///
/// Returns `FatalError::InvalidSequence` carrying the offending value and
/// the components.
pub fn sequence_value(components: &Components) -> Result<u16, FatalError> {
    let invalid = |value: u16| FatalError::InvalidSequence {
        value,
        components: components.clone(),
    };

    let value: u16 = components
        .sequence_part()
        .parse()
        .map_err(|_| invalid(0))?;

    if !(SEQUENCE_MIN..=SEQUENCE_MAX).contains(&value) {
        return Err(invalid(value));
    }
    Ok(value)
}
