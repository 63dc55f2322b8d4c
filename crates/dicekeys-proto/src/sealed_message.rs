//! Packaged sealed message.
//!
//! Everything needed to unseal a message later: the derivation options used to
//! derive the sealing key (as the exact JSON string), the ciphertext, and any
//! unsealing instructions (also a JSON string).

use serde::{Deserialize, Serialize};

use crate::{base64url, errors::Result};

/// Wire form of a previously sealed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagedSealedMessage {
    /// Derivation options of the key that sealed the message
    pub derivation_options_json: String,
    /// base64url-encoded ciphertext
    pub ciphertext: String,
    /// Message-level unsealing instructions, as JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsealing_instructions: Option<String>,
}

impl PackagedSealedMessage {
    /// Decode from JSON.
    ///
    /// # Errors
    ///
    /// - `ProtoError::InvalidJson` if a required field is missing or the text
    ///   is not JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Ciphertext bytes.
    ///
    /// # Errors
    ///
    /// - `ProtoError::InvalidBase64` if the ciphertext is not base64url
    pub fn ciphertext_bytes(&self) -> Result<Vec<u8>> {
        base64url::decode(&self.ciphertext)
    }
}
