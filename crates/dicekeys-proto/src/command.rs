//! API command catalog.
//!
//! The catalog is closed: every request names exactly one of these commands.
//! Wire names are the camelCase spellings below.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ProtoError;

/// Commands a client may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiCommand {
    /// Derive a password
    GetPassword,
    /// Derive a raw secret
    GetSecret,
    /// Derive a public sealing key
    GetSealingKey,
    /// Derive a private unsealing key
    GetUnsealingKey,
    /// Derive a raw symmetric key
    GetSymmetricKey,
    /// Derive a private signing key
    GetSigningKey,
    /// Derive a public signature-verification key
    GetSignatureVerificationKey,
    /// Seal a plaintext with a derived symmetric key
    SealWithSymmetricKey,
    /// Unseal a packaged message with a derived symmetric key
    UnsealWithSymmetricKey,
    /// Unseal a packaged message with a derived unsealing key
    UnsealWithUnsealingKey,
    /// Sign a message with a derived signing key
    GenerateSignature,
}

impl ApiCommand {
    /// Every command in the catalog.
    pub const ALL: [Self; 11] = [
        Self::GetPassword,
        Self::GetSecret,
        Self::GetSealingKey,
        Self::GetUnsealingKey,
        Self::GetSymmetricKey,
        Self::GetSigningKey,
        Self::GetSignatureVerificationKey,
        Self::SealWithSymmetricKey,
        Self::UnsealWithSymmetricKey,
        Self::UnsealWithUnsealingKey,
        Self::GenerateSignature,
    ];

    /// Wire name of this command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetPassword => "getPassword",
            Self::GetSecret => "getSecret",
            Self::GetSealingKey => "getSealingKey",
            Self::GetUnsealingKey => "getUnsealingKey",
            Self::GetSymmetricKey => "getSymmetricKey",
            Self::GetSigningKey => "getSigningKey",
            Self::GetSignatureVerificationKey => "getSignatureVerificationKey",
            Self::SealWithSymmetricKey => "sealWithSymmetricKey",
            Self::UnsealWithSymmetricKey => "unsealWithSymmetricKey",
            Self::UnsealWithUnsealingKey => "unsealWithUnsealingKey",
            Self::GenerateSignature => "generateSignature",
        }
    }

    /// True for commands that hand raw private or symmetric key material to
    /// the client.
    ///
    /// These are only permitted when the seed's derivation options set
    /// `clientMayRetrieveKey`. Public keys (sealing, signature verification)
    /// are not included.
    #[must_use]
    pub const fn returns_private_key(self) -> bool {
        matches!(self, Self::GetSymmetricKey | Self::GetUnsealingKey | Self::GetSigningKey)
    }

    /// True for commands that consume a packaged sealed message.
    #[must_use]
    pub const fn is_unsealing(self) -> bool {
        matches!(self, Self::UnsealWithSymmetricKey | Self::UnsealWithUnsealingKey)
    }
}

impl fmt::Display for ApiCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiCommand {
    type Err = ProtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| ProtoError::UnknownCommand(s.to_string()))
    }
}
