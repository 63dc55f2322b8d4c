//! Property-based tests for DiceKey canonicalization
//!
//! Canonicalization decides which seed every derived secret comes from, so
//! these tests check the rotation properties for arbitrary keys rather than a
//! handful of examples.

use dicekeys_core::{DiceKey, Face, FaceDigit, FaceLetter, NUMBER_OF_FACES, Orientation};
use proptest::prelude::*;

/// Strategy for generating arbitrary faces
fn arbitrary_face() -> impl Strategy<Value = Face> {
    (
        prop::sample::select(FaceLetter::ALL.to_vec()),
        prop::sample::select(FaceDigit::ALL.to_vec()),
        prop::sample::select(Orientation::ALL.to_vec()),
    )
        .prop_map(|(letter, digit, orientation)| Face::new(letter, digit, orientation))
}

/// Strategy for generating arbitrary DiceKeys
fn arbitrary_dice_key() -> impl Strategy<Value = DiceKey> {
    prop::collection::vec(arbitrary_face(), NUMBER_OF_FACES).prop_map(|faces| {
        DiceKey::from_faces(&faces).expect("strategy always yields 25 faces")
    })
}

fn rotate(key: &DiceKey, times: usize) -> DiceKey {
    (0..times).fold(*key, |k, _| k.rotated_clockwise_90_degrees())
}

#[test]
fn prop_seed_is_rotation_invariant() {
    proptest!(|(key in arbitrary_dice_key(), times in 0usize..4)| {
        let rotated = rotate(&key, times);

        // PROPERTY: every corner of origin yields the same seed
        prop_assert_eq!(rotated.to_seed(true), key.to_seed(true));
        prop_assert_eq!(rotated.to_seed(false), key.to_seed(false));
    });
}

#[test]
fn prop_canonical_form_is_idempotent() {
    proptest!(|(key in arbitrary_dice_key(), include in any::<bool>())| {
        let once = key.rotated_to_canonical_form(include);
        let twice = once.rotated_to_canonical_form(include);

        prop_assert_eq!(twice, once);
    });
}

#[test]
fn prop_four_rotations_are_identity() {
    proptest!(|(key in arbitrary_dice_key())| {
        let turned = rotate(&key, 4);

        prop_assert_eq!(turned.to_human_readable_form(true), key.to_human_readable_form(true));
    });
}

#[test]
fn prop_seed_without_orientations_ignores_orientations() {
    proptest!(|(
        key in arbitrary_dice_key(),
        orientations in prop::collection::vec(prop::sample::select(Orientation::ALL.to_vec()), NUMBER_OF_FACES),
    )| {
        let reoriented: Vec<Face> = key
            .faces()
            .iter()
            .zip(&orientations)
            .map(|(face, &orientation)| Face { orientation, ..*face })
            .collect();
        let reoriented = DiceKey::from_faces(&reoriented).expect("25 faces");

        // PROPERTY: only letters and digits reach the seed
        prop_assert_eq!(reoriented.to_seed(false), key.to_seed(false));
        prop_assert_eq!(key.without_orientations().to_seed(false), key.to_seed(false));
    });
}

#[test]
fn prop_canonical_form_is_minimal() {
    proptest!(|(key in arbitrary_dice_key(), include in any::<bool>())| {
        let seed = key.to_seed(include);

        for times in 0..4 {
            let form = rotate(&key, times).to_human_readable_form(include);
            prop_assert!(seed <= form, "seed {} sorts after rotation {}: {}", seed, times, form);
        }
    });
}

#[test]
fn prop_human_readable_form_round_trip() {
    proptest!(|(key in arbitrary_dice_key())| {
        let parsed = DiceKey::from_human_readable_form(&key.to_human_readable_form(true))
            .expect("generated form is valid");

        prop_assert_eq!(parsed, key);
    });
}

#[test]
fn prop_seed_length() {
    proptest!(|(key in arbitrary_dice_key())| {
        prop_assert_eq!(key.to_seed(true).len(), 75);
        prop_assert_eq!(key.to_seed(false).len(), 50);
    });
}

const READING: &str =
    "Z6tY5rX4bW3lV2tU1rT6bS5lR4tP3rO2bN1lM6tL5rK4bJ3lI2tH1rG6bF5lD4tC3rB2bA1lZ6t";

#[test]
fn seed_vector_with_orientations() {
    let key: DiceKey = READING.parse().expect("valid reading");

    insta::assert_snapshot!(
        key.to_seed(true),
        @"D4rJ3tO2lU1bZ6rC3bI2rN1tT6lY5bB2lH1bM6rS5tX4lA1tG6lL5bR4rW3tZ6rF5tK4lP3bV2r"
    );
}

#[test]
fn seed_vector_without_orientations() {
    let key: DiceKey = READING.parse().expect("valid reading");

    insta::assert_snapshot!(
        key.to_seed(false),
        @"D4J3O2U1Z6C3I2N1T6Y5B2H1M6S5X4A1G6L5R4W3Z6F5K4P3V2"
    );
}

#[test]
fn seed_vector_matches_single_rotation() {
    let key: DiceKey = READING.parse().expect("valid reading");

    // The canonical rotation of this reading is one clockwise turn.
    assert_eq!(
        key.rotated_clockwise_90_degrees().to_human_readable_form(true),
        key.to_seed(true)
    );
}
