//! Message-level unsealing instructions.
//!
//! Attached to a sealed message when it is sealed. They carry the same
//! authentication requirements as derivation options and are enforced in
//! addition to the seed's own requirements.

use serde::{Deserialize, Serialize};

use crate::{errors::Result, requirements::AuthenticationRequirements};

/// Restrictions on who may unseal a particular message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsealingInstructions {
    /// Who may unseal the message
    #[serde(flatten)]
    pub requirements: AuthenticationRequirements,
}

impl UnsealingInstructions {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::WebBasedApplicationIdentity;

    #[test]
    fn decodes_requirements_from_top_level() {
        let instructions = UnsealingInstructions::from_json(
            r#"{"allow": [{"host": "app.example.com"}], "type": "ignored"}"#,
        )
        .expect("valid instructions");

        assert!(instructions.requirements.declares_allow_list());
        assert!(instructions.requirements.allows_web_origin("app.example.com", "/"));
    }

    #[test]
    fn encodes_without_wrapper() {
        let instructions = UnsealingInstructions {
            requirements: AuthenticationRequirements {
                allow: Some(vec![WebBasedApplicationIdentity::new("example.com")]),
                require_authentication_handshake: Some(true),
                ..Default::default()
            },
        };

        insta::assert_snapshot!(
            instructions.to_json().expect("serializable"),
            @r#"{"allow":[{"host":"example.com"}],"requireAuthenticationHandshake":true}"#
        );
    }
}
