//! When step definitions
//!
//! Steps that decode numbers.

use cucumber::when;

use crate::world::DecoderWorld;

#[when(expr = "I decode {string}")]
fn decode_number(world: &mut DecoderWorld, input: String) {
    world.decode(&input);
}
