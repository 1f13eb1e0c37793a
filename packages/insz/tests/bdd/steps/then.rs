//! Then step definitions
//!
//! Steps that verify the decoded outcome.

use cucumber::then;

use crate::world::DecoderWorld;

// =============================================================================
// Fatal outcomes
// =============================================================================

#[then(expr = "decoding fails with {string}")]
fn assert_fatal_kind(world: &mut DecoderWorld, kind: String) {
    let fatal = world.fatal();
    assert_eq!(
        fatal.error.kind().as_key(),
        kind,
        "Unexpected error: {}",
        fatal.error
    );
}

#[then(expr = "the reported components are {string}")]
fn assert_fatal_components(world: &mut DecoderWorld, expected: String) {
    let components = world
        .outcome
        .as_ref()
        .and_then(|o| o.components())
        .expect("Expected components in the outcome");
    assert_eq!(components.to_string(), expected);
}

// =============================================================================
// Decoded results
// =============================================================================

#[then(expr = "the status is {string}")]
fn assert_status(world: &mut DecoderWorld, status: String) {
    assert_eq!(world.decoded().status.as_str(), status);
}

#[then(expr = "the birth date is {string}")]
fn assert_birth_date(world: &mut DecoderWorld, date: String) {
    assert_eq!(world.decoded().formatted_birth_date(), date);
}

#[then(expr = "the birth year is {int}")]
fn assert_birth_year(world: &mut DecoderWorld, year: i32) {
    assert_eq!(world.decoded().birth_year.year, year);
}

#[then("the birth year is guessed")]
fn assert_year_guessed(world: &mut DecoderWorld) {
    assert!(world.decoded().birth_year.guessed, "Expected a guessed year");
}

#[then("the birth year is confirmed")]
fn assert_year_confirmed(world: &mut DecoderWorld) {
    assert!(
        !world.decoded().birth_year.guessed,
        "Expected a year that was not guessed"
    );
}

#[then(expr = "the suggested algorithm is {string}")]
fn assert_suggested(world: &mut DecoderWorld, algorithm: String) {
    let suggested = world.decoded().suggested_algorithm.map(|c| c.as_str());
    assert_eq!(suggested, Some(algorithm.as_str()));
}

#[then("no algorithm is suggested")]
fn assert_no_suggestion(world: &mut DecoderWorld) {
    assert_eq!(world.decoded().suggested_algorithm, None);
}

#[then(expr = "the gender is {string} with birth order {int}")]
fn assert_gender(world: &mut DecoderWorld, gender: String, order: u16) {
    let decoded = world.decoded();
    assert_eq!(decoded.gender.as_str(), gender);
    assert_eq!(decoded.birth_order, order);
}

#[then(expr = "the expected checksums are {int} for 19xx and {int} for 20xx")]
fn assert_checksums(world: &mut DecoderWorld, c1900: u8, c2000: u8) {
    let checksums = world.decoded().checksums;
    assert_eq!(checksums.century_1900, c1900);
    assert_eq!(checksums.century_2000, c2000);
}
