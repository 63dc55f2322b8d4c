//! Request decoding and authorization errors.
//!
//! Every error names the contract the request violated. Errors are always
//! returned to the caller of the decoding or authorization entry point; none
//! are recovered internally.

use std::fmt;

use dicekeys_proto::ApiCommand;
use thiserror::Error;

/// Which layer of authentication requirements rejected a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationRequirementIn {
    /// The seed's derivation options
    DerivationOptions,
    /// The sealed message's unsealing instructions
    UnsealingInstructions,
}

impl fmt::Display for AuthenticationRequirementIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DerivationOptions => f.write_str("derivation options"),
            Self::UnsealingInstructions => f.write_str("unsealing instructions"),
        }
    }
}

/// Errors that can occur while decoding or authorizing a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Packaged sealed message JSON failed to parse
    #[error("invalid packaged sealed message: {reason}")]
    InvalidPackagedSealedMessage {
        /// Parser error
        reason: String,
    },

    /// Required query parameter was missing
    #[error("parameter not found: {0}")]
    ParameterNotFound(String),

    /// An authentication gate rejected the client
    #[error("client not authorized by {0}")]
    ClientNotAuthorized(AuthenticationRequirementIn),

    /// Command returns a raw key but the derivation options do not set
    /// `clientMayRetrieveKey`
    #[error("command {command} requires derivation options with clientMayRetrieveKey set to true")]
    CommandRequiresClientMayRetrieveKey {
        /// Command that was requested
        command: ApiCommand,
    },

    /// Request URL could not be parsed
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Caller origin could not be resolved
    #[error("invalid caller origin: {0}")]
    InvalidOrigin(String),

    /// Binary parameter was not valid base64url
    #[error("parameter {field} is not valid base64url: {reason}")]
    InvalidParameterEncoding {
        /// Parameter name
        field: String,
        /// Decoder error
        reason: String,
    },

    /// Command name is not in the catalog
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Command does not belong to the request variant being built
    #[error("command {command} cannot be used with a {variant} request")]
    CommandNotSupported {
        /// Command that was requested
        command: ApiCommand,
        /// Request variant being constructed
        variant: &'static str,
    },

    /// Derivation options JSON failed to parse
    #[error("invalid derivation options: {0}")]
    InvalidDerivationOptions(String),

    /// Unsealing instructions JSON failed to parse
    #[error("invalid unsealing instructions: {0}")]
    InvalidUnsealingInstructions(String),
}

impl RequestError {
    /// Returns true if an authorization gate rejected the request.
    ///
    /// All other errors mean the request itself was malformed.
    #[must_use]
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, Self::ClientNotAuthorized(_) | Self::CommandRequiresClientMayRetrieveKey { .. })
    }
}
