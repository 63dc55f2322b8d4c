//! Seeds for request execution.

use dicekeys_core::DiceKey;
use dicekeys_proto::DerivationOptions;

/// Seed string for deriving under `options`.
///
/// Orientations are part of the seed unless the options set
/// `excludeOrientationOfFaces`.
#[must_use]
pub fn seed_for(dice_key: &DiceKey, options: &DerivationOptions) -> String {
    dice_key.to_seed(options.include_orientations())
}

/// Check the `cornerLetters` hint against a DiceKey.
///
/// The hint names the corners as the user held the key when the options were
/// created, so any of the four rotations matches. Comparison ignores case.
/// Returns `None` when the options carry no hint.
#[must_use]
pub fn matches_corner_letters_hint(dice_key: &DiceKey, options: &DerivationOptions) -> Option<bool> {
    let hint = options.corner_letters.as_deref()?.to_ascii_uppercase();

    let mut rotation = *dice_key;
    for _ in 0..4 {
        if rotation.corner_letters() == hint {
            return Some(true);
        }
        rotation = rotation.rotated_clockwise_90_degrees();
    }

    tracing::debug!(hint = %hint, "corner letters hint does not match");
    Some(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const READING: &str =
        "Z6tY5rX4bW3lV2tU1rT6bS5lR4tP3rO2bN1lM6tL5rK4bJ3lI2tH1rG6bF5lD4tC3rB2bA1lZ6t";

    fn key() -> DiceKey {
        READING.parse().expect("valid reading")
    }

    fn options(json: &str) -> DerivationOptions {
        DerivationOptions::from_json(json).expect("valid options")
    }

    #[test]
    fn seed_includes_orientations_by_default() {
        let seed = seed_for(&key(), &options("{}"));
        assert_eq!(seed.len(), 75);
        assert_eq!(seed, key().to_seed(true));
    }

    #[test]
    fn seed_excludes_orientations_on_request() {
        let seed = seed_for(&key(), &options(r#"{"excludeOrientationOfFaces":true}"#));
        assert_eq!(seed.len(), 50);
        assert_eq!(seed, key().to_seed(false));
    }

    #[test]
    fn seed_is_rotation_invariant() {
        let rotated = key().rotated_clockwise_90_degrees();
        let options = options("{}");
        assert_eq!(seed_for(&rotated, &options), seed_for(&key(), &options));
    }

    #[test]
    fn corner_hint_matches_any_rotation() {
        let key = key();
        let mut rotation = key;
        for _ in 0..4 {
            let hint = format!(r#"{{"cornerLetters":"{}"}}"#, rotation.corner_letters().to_lowercase());
            assert_eq!(matches_corner_letters_hint(&key, &options(&hint)), Some(true));
            rotation = rotation.rotated_clockwise_90_degrees();
        }
    }

    #[test]
    fn corner_hint_mismatch_and_absence() {
        assert_eq!(matches_corner_letters_hint(&key(), &options(r#"{"cornerLetters":"QQQQ"}"#)), Some(false));
        assert_eq!(matches_corner_letters_hint(&key(), &options("{}")), None);
    }
}
