//! DiceKeys API wire types.
//!
//! JSON structures exchanged with API clients: derivation options attached to
//! every request, unsealing instructions attached to sealed messages, and the
//! packaged form of a sealed message. Field names are part of the wire
//! contract and use the camelCase spelling clients send.
//!
//! Both derivation options and unsealing instructions embed the same
//! [`AuthenticationRequirements`] value, flattened into the enclosing JSON
//! object.
//!
//! # Invariants
//!
//! - Unknown fields are ignored on decode.
//! - Absent optional fields decode to `None`, never to an error.
//! - Unset optional fields are omitted on encode.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod base64url;
pub mod command;
pub mod derivation_options;
pub mod errors;
pub mod requirements;
pub mod sealed_message;
pub mod unsealing_instructions;

pub use command::ApiCommand;
pub use derivation_options::{DerivationOptions, DerivationOptionsType, HashFunction, WordListName};
pub use errors::{ProtoError, Result};
pub use requirements::{AuthenticationRequirements, WebBasedApplicationIdentity};
pub use sealed_message::PackagedSealedMessage;
pub use unsealing_instructions::UnsealingInstructions;
