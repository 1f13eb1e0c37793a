//! Calendar validation of the encoded birth date
//!
//! Runs after century resolution because whether `0229` is a real date
//! depends on the four-digit year.

use chrono::NaiveDate;

use crate::error::FatalError;
use crate::types::{Components, DateParts, ResolvedYear};

/// Build the birth date from the resolved year and the `MMDD` digits.
///
/// Rejects month 0 or above 12 (BIS-style months included), day 0, days past
/// the end of the month, and 29 February outside leap years.
///
/// # Errors
///
/// Returns `FatalError::InvalidDate` with the raw date digits, the year that
/// was tried, and the components.
pub fn birth_date(components: &Components, year: ResolvedYear) -> Result<NaiveDate, FatalError> {
    let month = components.mm().parse::<u32>().ok();
    let day = components.dd().parse::<u32>().ok();

    month
        .zip(day)
        .and_then(|(month, day)| NaiveDate::from_ymd_opt(year.year, month, day))
        .ok_or_else(|| FatalError::InvalidDate {
            date_parts: DateParts {
                yy: components.yy().to_string(),
                mm: components.mm().to_string(),
                dd: components.dd().to_string(),
                year: year.year,
            },
            components: components.clone(),
        })
}
