//! Request decoding configuration.

use dicekeys_proto::ProtoError;

use crate::error::RequestError;

/// What to do when derivation options or unsealing instructions are present
/// but are not valid JSON of the expected shape.
///
/// Absent or empty JSON is never malformed; it always decodes to the empty
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedJsonPolicy {
    /// Fail the request with a decode error
    #[default]
    Reject,
    /// Treat the malformed value as empty and continue
    DefaultToEmpty,
}

impl MalformedJsonPolicy {
    /// Apply this policy to a decode result.
    ///
    /// `field` names the value for logging; `reject` builds the error used
    /// under [`MalformedJsonPolicy::Reject`].
    pub(crate) fn apply<T: Default>(
        self,
        decoded: Result<T, ProtoError>,
        field: &'static str,
        reject: fn(String) -> RequestError,
    ) -> Result<T, RequestError> {
        match (decoded, self) {
            (Ok(value), _) => Ok(value),
            (Err(err), Self::Reject) => Err(reject(err.to_string())),
            (Err(err), Self::DefaultToEmpty) => {
                tracing::warn!(field, error = %err, "malformed JSON treated as empty");
                Ok(T::default())
            },
        }
    }
}

/// Request decoding configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    /// Handling of malformed derivation options and unsealing instructions
    pub malformed_json: MalformedJsonPolicy,
}

impl RequestConfig {
    /// Configuration that treats malformed JSON as empty.
    #[must_use]
    pub fn lenient() -> Self {
        Self { malformed_json: MalformedJsonPolicy::DefaultToEmpty }
    }
}
