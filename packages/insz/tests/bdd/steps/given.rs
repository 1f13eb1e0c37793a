//! Given step definitions
//!
//! Steps that configure the decoder for a scenario.

use cucumber::given;
use insz_decoder::AlgorithmMode;

use crate::world::DecoderWorld;

#[given(expr = "the current year is {int}")]
fn set_current_year(world: &mut DecoderWorld, year: i32) {
    world.current_year = year;
}

#[given(expr = "the algorithm is {string}")]
fn set_algorithm(world: &mut DecoderWorld, algorithm: String) {
    world.algorithm = algorithm
        .parse::<AlgorithmMode>()
        .unwrap_or_else(|e| panic!("Bad algorithm in scenario: {e}"));
}
