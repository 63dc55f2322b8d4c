//! Fuzz target for DiceKey::from_human_readable_form
//!
//! # Invariants
//!
//! - Parsing NEVER panics
//! - Any key that parses has a rotation-invariant seed
//! - The seed of a parsed key parses back to its canonical form

#![no_main]

use dicekeys_core::DiceKey;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let Ok(key) = DiceKey::from_human_readable_form(text) else {
        return;
    };

    let seed = key.to_seed(true);
    let rotated = key.rotated_clockwise_90_degrees();
    assert_eq!(rotated.to_seed(true), seed);
    assert_eq!(rotated.to_seed(false), key.to_seed(false));

    let reparsed = DiceKey::from_human_readable_form(&seed).expect("seed is a valid reading");
    assert_eq!(reparsed, key.rotated_to_canonical_form(true));
});
