//! Gender and birth order from the sequence number
//!
//! Odd sequence numbers are assigned to men and even ones to women, so the
//! n-th man registered on a day gets `2n - 1` and the n-th woman `2n`.

use crate::error::FatalError;
use crate::types::{Components, Gender};

/// Gender by parity of the sequence number.
pub fn gender(sequence: u16) -> Gender {
    if sequence % 2 == 1 {
        Gender::Male
    } else {
        Gender::Female
    }
}

/// Birth order among people of the same gender registered that day.
///
/// # Errors
///
/// Returns `FatalError::InvalidSequence` if no positive order follows from
/// the sequence (only possible for a sequence of 0).
pub fn birth_order(sequence: u16, components: &Components) -> Result<u16, FatalError> {
    let order = match gender(sequence) {
        // (sequence + 1) / 2 without overflowing at u16::MAX
        Gender::Male => sequence / 2 + 1,
        Gender::Female => sequence / 2,
    };

    if order == 0 {
        return Err(FatalError::InvalidSequence {
            value: sequence,
            components: components.clone(),
        });
    }
    Ok(order)
}
