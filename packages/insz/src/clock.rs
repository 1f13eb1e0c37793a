//! Source of the current year
//!
//! Guessing a century is the only place the decoder depends on the world
//! outside its arguments. That dependency goes through [`Clock`] so tests
//! and callers can pin it.

use chrono::Datelike;

/// Provides the current calendar year.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Reads the year from the local system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl Clock for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}
