//! Century resolution
//!
//! Decides which century a two-digit birth year belongs to, and with what
//! checksum status, as a decision table keyed by
//! `(mode, checksum matches 19xx, checksum matches 20xx)`:
//!
//! | mode        | 19xx  | 20xx  | basis          | status           |
//! |-------------|-------|-------|----------------|------------------|
//! | force-1900s | -     | -     | forced 19xx    | missing          |
//! | force-1900s | yes   | *     | forced 19xx    | valid            |
//! | force-1900s | no    | *     | forced 19xx    | invalid          |
//! | force-2000s | -     | -     | forced 20xx    | missing          |
//! | force-2000s | *     | yes   | forced 20xx    | valid            |
//! | force-2000s | *     | no    | forced 20xx    | invalid          |
//! | auto        | -     | -     | unconfirmed    | missing          |
//! | auto        | yes   | no    | confirmed 19xx | valid            |
//! | auto        | no    | yes   | confirmed 20xx | valid            |
//! | auto        | yes   | yes   | ambiguous      | valid            |
//! | auto        | no    | no    | unconfirmed    | invalid          |
//!
//! `-` means no checksum digits were given. Unconfirmed and ambiguous rows
//! fall back to [`guess_year`].
//!
//! The ambiguous row cannot occur for real input: the two candidates differ
//! by `2_000_000_000 mod 97`, which is non-zero. It is kept as its own row so
//! the behaviour stays visible: the number counts as valid, no algorithm is
//! suggested, and the displayed year is a guess.

use crate::clock::Clock;
use crate::config::CENTURY_GUESS_WINDOW;
use crate::types::{AlgorithmMode, Century, ChecksumCandidates, ChecksumStatus, ResolvedYear};

/// What the chosen century rests on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenturyBasis {
    /// The caller forced this century
    Forced(Century),
    /// Auto mode: the checksum matched this century only
    Confirmed(Century),
    /// Auto mode: the checksum matched both centuries
    Ambiguous,
    /// Auto mode: no checksum, or it matched neither century
    Unconfirmed,
}

/// One row of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenturyDecision {
    pub basis: CenturyBasis,
    pub status: ChecksumStatus,
}

impl CenturyDecision {
    /// Algorithm to suggest to the caller, set only on a confirmed auto match.
    pub fn suggested_algorithm(&self) -> Option<Century> {
        match self.basis {
            CenturyBasis::Confirmed(century) => Some(century),
            _ => None,
        }
    }

    /// Resolve the two-digit year `yy` to a four-digit year.
    ///
    /// The clock is read only when the decision leaves the century open.
    pub fn resolve_year<C: Clock>(&self, yy: i32, clock: &C) -> ResolvedYear {
        match self.basis {
            CenturyBasis::Forced(century) | CenturyBasis::Confirmed(century) => ResolvedYear {
                year: century.base_year() + yy,
                guessed: false,
            },
            CenturyBasis::Ambiguous | CenturyBasis::Unconfirmed => ResolvedYear {
                year: guess_year(yy, clock.current_year()),
                guessed: true,
            },
        }
    }
}

/// Look up the decision for a mode and the checksum comparison.
///
/// `checksum` is the numeric value of the `CC` digits, `None` when absent.
pub fn decide(
    mode: AlgorithmMode,
    checksum: Option<u8>,
    candidates: &ChecksumCandidates,
) -> CenturyDecision {
    use ChecksumStatus::{ChecksumInvalid, ChecksumMissing, Valid};
    use Century::{Years1900, Years2000};

    let matches = checksum.map(|cc| (cc == candidates.century_1900, cc == candidates.century_2000));

    let (basis, status) = match (mode, matches) {
        (AlgorithmMode::Force1900s, None) => (CenturyBasis::Forced(Years1900), ChecksumMissing),
        (AlgorithmMode::Force1900s, Some((true, _))) => (CenturyBasis::Forced(Years1900), Valid),
        (AlgorithmMode::Force1900s, Some((false, _))) => {
            (CenturyBasis::Forced(Years1900), ChecksumInvalid)
        }

        (AlgorithmMode::Force2000s, None) => (CenturyBasis::Forced(Years2000), ChecksumMissing),
        (AlgorithmMode::Force2000s, Some((_, true))) => (CenturyBasis::Forced(Years2000), Valid),
        (AlgorithmMode::Force2000s, Some((_, false))) => {
            (CenturyBasis::Forced(Years2000), ChecksumInvalid)
        }

        (AlgorithmMode::Auto, None) => (CenturyBasis::Unconfirmed, ChecksumMissing),
        (AlgorithmMode::Auto, Some((true, false))) => (CenturyBasis::Confirmed(Years1900), Valid),
        (AlgorithmMode::Auto, Some((false, true))) => (CenturyBasis::Confirmed(Years2000), Valid),
        (AlgorithmMode::Auto, Some((true, true))) => (CenturyBasis::Ambiguous, Valid),
        (AlgorithmMode::Auto, Some((false, false))) => {
            (CenturyBasis::Unconfirmed, ChecksumInvalid)
        }
    };

    CenturyDecision { basis, status }
}

/// Guess the four-digit year for `yy` given the current year.
///
/// Two-digit years up to five past the current one are taken as 20yy,
/// anything later as 19yy. This is a heuristic, not a fact about the person.
pub fn guess_year(yy: i32, current_year: i32) -> i32 {
    let current_yy = current_year.rem_euclid(100);
    if yy <= current_yy + CENTURY_GUESS_WINDOW {
        2000 + yy
    } else {
        1900 + yy
    }
}
