//! Per-seed derivation options.
//!
//! Derivation options travel with every request as a JSON string
//! (`derivationOptionsJson`). They describe what to derive from the seed and
//! who may ask for it. The exact JSON text matters downstream (it is fed into
//! key derivation), so requests keep the original string alongside the
//! decoded value.

use serde::{Deserialize, Serialize};

use crate::{errors::Result, requirements::AuthenticationRequirements};

/// Kind of value derived from the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum DerivationOptionsType {
    Password,
    Secret,
    SigningKey,
    SymmetricKey,
    UnsealingKey,
}

/// Hash function used for derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashFunction {
    /// BLAKE2b (fast, no memory cost)
    #[serde(rename = "BLAKE2b")]
    Blake2b,
    /// Argon2id (memory-hard)
    Argon2id,
}

/// Word list used when deriving word-based passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordListName {
    /// 512 English words of at most 5 characters
    #[serde(rename = "EN_512_words_5_chars_max_ed_4_20200917")]
    En512Words5CharsMax,
    /// 1024 English words of at most 6 characters
    #[serde(rename = "EN_1024_words_6_chars_max_ed_4_20200917")]
    En1024Words6CharsMax,
}

/// Options controlling how a secret or key is derived from a seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivationOptions {
    /// What is being derived
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub derivation_type: Option<DerivationOptionsType>,

    /// Who may use the derived value
    #[serde(flatten)]
    pub requirements: AuthenticationRequirements,

    /// Free-text reminder of which DiceKey was used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_hint: Option<String>,

    /// Letters at the four corners of the DiceKey, clockwise from the corner
    /// the user scanned as top-left
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_letters: Option<String>,

    /// Token proving these options were derived with this seed before
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_of_prior_derivation: Option<String>,

    /// Must be `true` for clients to retrieve raw symmetric, unsealing, or
    /// signing keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_may_retrieve_key: Option<bool>,

    /// Derive from a seed without face orientations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_orientation_of_faces: Option<bool>,

    /// Hash function selector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_function: Option<HashFunction>,

    /// Memory cost for memory-hard hash functions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_function_memory_limit_in_bytes: Option<u64>,

    /// Pass count for memory-hard hash functions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_function_memory_passes: Option<u64>,

    /// Output size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_in_bytes: Option<u32>,

    /// Output size in words (word-based passwords)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_in_words: Option<u32>,

    /// Output size in bits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_in_bits: Option<u32>,

    /// Word list for word-based passwords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_list: Option<WordListName>,
}

impl DerivationOptions {
    /// Decode from JSON.
    ///
    /// # Errors
    ///
    /// - `ProtoError::InvalidJson` if the text is not a JSON object of the
    ///   expected shape
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as compact JSON, omitting unset fields.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// True only when `clientMayRetrieveKey` is explicitly `true`.
    #[must_use]
    pub fn allows_key_retrieval(&self) -> bool {
        self.client_may_retrieve_key == Some(true)
    }

    /// True unless `excludeOrientationOfFaces` is explicitly `true`.
    #[must_use]
    pub fn include_orientations(&self) -> bool {
        self.exclude_orientation_of_faces != Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::ProtoError, requirements::WebBasedApplicationIdentity};

    #[test]
    fn empty_object_decodes_to_default() {
        assert_eq!(DerivationOptions::from_json("{}"), Ok(DerivationOptions::default()));
    }

    #[test]
    fn decodes_flattened_requirements() {
        let options = DerivationOptions::from_json(
            r#"{
                "type": "SymmetricKey",
                "allow": [{"host": "*.example.com", "paths": ["/app/"]}],
                "allowAndroidPrefixes": ["com.example"],
                "requireAuthenticationHandshake": true,
                "clientMayRetrieveKey": true
            }"#,
        )
        .expect("valid options");

        assert_eq!(options.derivation_type, Some(DerivationOptionsType::SymmetricKey));
        assert_eq!(
            options.requirements.allow,
            Some(vec![WebBasedApplicationIdentity::with_paths(
                "*.example.com",
                vec!["/app/".to_string()]
            )])
        );
        assert_eq!(options.requirements.allow_android_prefixes, Some(vec!["com.example".into()]));
        assert!(options.requirements.requires_handshake());
        assert!(options.allows_key_retrieval());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let options = DerivationOptions::from_json(r#"{"futureField": 1, "seedHint": "blue"}"#)
            .expect("unknown fields ignored");
        assert_eq!(options.seed_hint.as_deref(), Some("blue"));
    }

    #[test]
    fn decodes_hash_and_length_selectors() {
        let options = DerivationOptions::from_json(
            r#"{
                "hashFunction": "Argon2id",
                "hashFunctionMemoryLimitInBytes": 67108864,
                "hashFunctionMemoryPasses": 3,
                "lengthInWords": 8,
                "wordList": "EN_1024_words_6_chars_max_ed_4_20200917"
            }"#,
        )
        .expect("valid options");

        assert_eq!(options.hash_function, Some(HashFunction::Argon2id));
        assert_eq!(options.hash_function_memory_limit_in_bytes, Some(67_108_864));
        assert_eq!(options.hash_function_memory_passes, Some(3));
        assert_eq!(options.length_in_words, Some(8));
        assert_eq!(options.word_list, Some(WordListName::En1024Words6CharsMax));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            DerivationOptions::from_json(r#"{"type": "Bogus"}"#),
            Err(ProtoError::InvalidJson(_))
        ));
        assert!(matches!(DerivationOptions::from_json("not json"), Err(ProtoError::InvalidJson(_))));
    }

    #[test]
    fn key_retrieval_requires_explicit_true() {
        let mut options = DerivationOptions::default();
        assert!(!options.allows_key_retrieval());
        options.client_may_retrieve_key = Some(false);
        assert!(!options.allows_key_retrieval());
        options.client_may_retrieve_key = Some(true);
        assert!(options.allows_key_retrieval());
    }

    #[test]
    fn orientations_included_by_default() {
        let mut options = DerivationOptions::default();
        assert!(options.include_orientations());
        options.exclude_orientation_of_faces = Some(true);
        assert!(!options.include_orientations());
    }

    #[test]
    fn encodes_only_set_fields() {
        let options = DerivationOptions {
            derivation_type: Some(DerivationOptionsType::Password),
            hash_function: Some(HashFunction::Blake2b),
            length_in_bits: Some(128),
            ..Default::default()
        };

        insta::assert_snapshot!(
            options.to_json().expect("serializable"),
            @r#"{"type":"Password","hashFunction":"BLAKE2b","lengthInBits":128}"#
        );
    }

    #[test]
    fn encodes_requirements_at_top_level() {
        let options = DerivationOptions {
            requirements: AuthenticationRequirements {
                allow: Some(vec![WebBasedApplicationIdentity::new("example.com")]),
                ..Default::default()
            },
            client_may_retrieve_key: Some(true),
            ..Default::default()
        };

        insta::assert_snapshot!(
            options.to_json().expect("serializable"),
            @r#"{"allow":[{"host":"example.com"}],"clientMayRetrieveKey":true}"#
        );
    }
}
