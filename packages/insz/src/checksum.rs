//! Modulo-97 checksum arithmetic
//!
//! The two check digits are `97 - (N mod 97)`, where `N` is the number
//! formed by `YYMMDDSSS`. People born in 2000 or later get a `2` prefixed
//! to `N` before the division. Both candidates are always computed; deciding
//! which one applies is the job of [`crate::century`].
//!
//! A candidate lies in `1..=97`. It is compared against the literal two-digit
//! value of `CC`, so `97` is a legitimate checksum and `00` never matches.

use crate::config::{CENTURY_2000_PREFIX, CHECKSUM_MODULUS};
use crate::types::{ChecksumCandidates, Components};

/// `97 - (n mod 97)`
pub fn mod97_checksum(n: u64) -> u8 {
    // Result is in 1..=97, always fits
    (CHECKSUM_MODULUS - n % CHECKSUM_MODULUS) as u8
}

/// Compute the 19xx and 20xx candidates for the given components.
pub fn candidates(components: &Components) -> ChecksumCandidates {
    // Nine ASCII digits always parse into a u64
    let base: u64 = components.checksum_base().parse().unwrap_or_default();

    ChecksumCandidates {
        century_1900: mod97_checksum(base),
        century_2000: mod97_checksum(CENTURY_2000_PREFIX + base),
    }
}

/// The numeric value of the `CC` digits, if present.
pub fn given_checksum(components: &Components) -> Option<u8> {
    components.checksum_part()?.parse().ok()
}
