//! Core types for the INSZ decoder

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DecoderError, FatalError};

/// Caller-selected policy for resolving the birth century
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmMode {
    /// Let the checksum decide; guess when it cannot
    #[default]
    #[serde(rename = "auto")]
    Auto,
    /// Always assume 19yy
    #[serde(rename = "force-1900s", alias = "19xx")]
    Force1900s,
    /// Always assume 20yy
    #[serde(rename = "force-2000s", alias = "20xx")]
    Force2000s,
}

impl AlgorithmMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmMode::Auto => "auto",
            AlgorithmMode::Force1900s => "force-1900s",
            AlgorithmMode::Force2000s => "force-2000s",
        }
    }
}

impl fmt::Display for AlgorithmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmMode {
    type Err = DecoderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(AlgorithmMode::Auto),
            "force-1900s" | "19xx" => Ok(AlgorithmMode::Force1900s),
            "force-2000s" | "20xx" => Ok(AlgorithmMode::Force2000s),
            _ => Err(DecoderError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// One of the two centuries a national register number can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Century {
    #[serde(rename = "19xx")]
    Years1900,
    #[serde(rename = "20xx")]
    Years2000,
}

impl Century {
    /// First year of the century (1900 or 2000).
    pub fn base_year(&self) -> i32 {
        match self {
            Century::Years1900 => 1900,
            Century::Years2000 => 2000,
        }
    }

    /// Century a resolved four-digit year falls in.
    pub fn of_year(year: i32) -> Self {
        if year >= 2000 {
            Century::Years2000
        } else {
            Century::Years1900
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Century::Years1900 => "19xx",
            Century::Years2000 => "20xx",
        }
    }
}

impl fmt::Display for Century {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checksum classification of a structurally valid number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecksumStatus {
    /// The checksum confirms the number
    Valid,
    /// A checksum was given but does not match
    ChecksumInvalid,
    /// The number has no checksum digits (9-digit input)
    ChecksumMissing,
}

impl ChecksumStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumStatus::Valid => "valid",
            ChecksumStatus::ChecksumInvalid => "checksum-invalid",
            ChecksumStatus::ChecksumMissing => "checksum-missing",
        }
    }
}

impl fmt::Display for ChecksumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender as encoded by the parity of the sequence number.
///
/// This is the registry's parity convention, not a statement about the
/// person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural slices of a normalized number.
///
/// Only the parser constructs these, so every part is known to be ASCII
/// digits of the right length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Components {
    date_part: String,
    sequence_part: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum_part: Option<String>,
}

impl Components {
    pub(crate) fn new(
        date_part: impl Into<String>,
        sequence_part: impl Into<String>,
        checksum_part: Option<String>,
    ) -> Self {
        Self {
            date_part: date_part.into(),
            sequence_part: sequence_part.into(),
            checksum_part,
        }
    }

    /// The `YYMMDD` part
    pub fn date_part(&self) -> &str {
        &self.date_part
    }

    /// The `SSS` part
    pub fn sequence_part(&self) -> &str {
        &self.sequence_part
    }

    /// The `CC` part, absent for 9-digit input
    pub fn checksum_part(&self) -> Option<&str> {
        self.checksum_part.as_deref()
    }

    pub fn yy(&self) -> &str {
        self.date_part.get(0..2).unwrap_or_default()
    }

    pub fn mm(&self) -> &str {
        self.date_part.get(2..4).unwrap_or_default()
    }

    pub fn dd(&self) -> &str {
        self.date_part.get(4..6).unwrap_or_default()
    }

    /// `YYMMDDSSS`, the digits the checksum is computed over.
    pub fn checksum_base(&self) -> String {
        format!("{}{}", self.date_part, self.sequence_part)
    }
}

impl fmt::Display for Components {
    /// Renders as `YYMMDD-SSS-CC` (or `YYMMDD-SSS`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.date_part, self.sequence_part)?;
        if let Some(cc) = &self.checksum_part {
            write!(f, "-{cc}")?;
        }
        Ok(())
    }
}

/// Raw date digits and the year they were checked against
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DateParts {
    pub yy: String,
    pub mm: String,
    pub dd: String,
    pub year: i32,
}

/// Both checksum candidates, always computed regardless of mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChecksumCandidates {
    /// `97 - (YYMMDDSSS mod 97)`
    #[serde(rename = "expected_19xx")]
    pub century_1900: u8,
    /// `97 - (2YYMMDDSSS mod 97)`
    #[serde(rename = "expected_20xx")]
    pub century_2000: u8,
}

impl ChecksumCandidates {
    pub fn for_century(&self, century: Century) -> u8 {
        match century {
            Century::Years1900 => self.century_1900,
            Century::Years2000 => self.century_2000,
        }
    }
}

/// Four-digit birth year and whether it was guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedYear {
    pub year: i32,
    /// No checksum confirmed the century; the year came from the heuristic
    pub guessed: bool,
}

impl ResolvedYear {
    pub fn century(&self) -> Century {
        Century::of_year(self.year)
    }
}

/// A structurally valid number, decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// Input exactly as supplied
    pub input: String,
    pub status: ChecksumStatus,
    pub components: Components,
    pub birth_year: ResolvedYear,
    pub birth_date: NaiveDate,
    pub checksums: ChecksumCandidates,
    pub algorithm: AlgorithmMode,
    /// Set in auto mode when exactly one century matched the checksum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_algorithm: Option<Century>,
    pub sequence: u16,
    pub gender: Gender,
    /// Position among people of the same gender registered that day
    pub birth_order: u16,
}

impl Decoded {
    pub fn is_valid(&self) -> bool {
        self.status == ChecksumStatus::Valid
    }

    /// `None` when there was no checksum to check.
    pub fn checksum_valid(&self) -> Option<bool> {
        match self.status {
            ChecksumStatus::Valid => Some(true),
            ChecksumStatus::ChecksumInvalid => Some(false),
            ChecksumStatus::ChecksumMissing => None,
        }
    }

    /// Checksum candidate for the century of the resolved year.
    pub fn expected_checksum(&self) -> u8 {
        self.checksums.for_century(self.birth_year.century())
    }

    /// Birth date as `dd/mm/yyyy`.
    pub fn formatted_birth_date(&self) -> String {
        self.birth_date.format("%d/%m/%Y").to_string()
    }
}

/// A decode call that ended in a [`FatalError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fatal {
    /// Input exactly as supplied; `None` when it was not text
    pub input: Option<String>,
    pub error: FatalError,
}

/// Result of a decode call: either fatal or decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DecodeOutcome {
    Fatal(Fatal),
    Decoded(Decoded),
}

impl DecodeOutcome {
    pub(crate) fn fatal(input: Option<&str>, error: FatalError) -> Self {
        DecodeOutcome::Fatal(Fatal {
            input: input.map(str::to_string),
            error,
        })
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, DecodeOutcome::Fatal(_))
    }

    pub fn as_decoded(&self) -> Option<&Decoded> {
        match self {
            DecodeOutcome::Decoded(d) => Some(d),
            DecodeOutcome::Fatal(_) => None,
        }
    }

    pub fn as_fatal(&self) -> Option<&Fatal> {
        match self {
            DecodeOutcome::Fatal(f) => Some(f),
            DecodeOutcome::Decoded(_) => None,
        }
    }

    /// The echoed input, if it was text.
    pub fn input(&self) -> Option<&str> {
        match self {
            DecodeOutcome::Fatal(f) => f.input.as_deref(),
            DecodeOutcome::Decoded(d) => Some(&d.input),
        }
    }

    /// Parsed components, when parsing got far enough to produce them.
    pub fn components(&self) -> Option<&Components> {
        match self {
            DecodeOutcome::Fatal(f) => f.error.components(),
            DecodeOutcome::Decoded(d) => Some(&d.components),
        }
    }
}
