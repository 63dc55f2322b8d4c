//! Fuzz target for unsealing request construction
//!
//! Builds packaged sealed messages from structured input so the fuzzer reaches
//! the embedded derivation options and unsealing instructions, not just the
//! outer JSON parser.
//!
//! # Strategy
//!
//! - Raw: arbitrary text as the packaged message
//! - Structured: valid envelope around arbitrary embedded JSON strings
//!
//! # Invariants
//!
//! - Construction NEVER panics
//! - Under the lenient policy a well-formed envelope always decodes
//! - Gate 3 only rejects with the unsealing-instructions layer

#![no_main]

use arbitrary::Arbitrary;
use dicekeys_api::{
    AuthenticationRequirementIn, RequestConfig, RequestError, UnsealingRequest,
};
use dicekeys_proto::{ApiCommand, AuthenticationRequirements, PackagedSealedMessage};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Input {
    Raw(String),
    Structured {
        unseal_with_unsealing_key: bool,
        derivation_options_json: String,
        ciphertext: String,
        unsealing_instructions: Option<String>,
        accept_derivation_options: bool,
    },
}

fuzz_target!(|input: Input| {
    match input {
        Input::Raw(json) => {
            let _ = UnsealingRequest::new(
                ApiCommand::UnsealWithSymmetricKey,
                json,
                &RequestConfig::default(),
            );
        },
        Input::Structured {
            unseal_with_unsealing_key,
            derivation_options_json,
            ciphertext,
            unsealing_instructions,
            accept_derivation_options,
        } => {
            let command = if unseal_with_unsealing_key {
                ApiCommand::UnsealWithUnsealingKey
            } else {
                ApiCommand::UnsealWithSymmetricKey
            };
            let message = PackagedSealedMessage {
                derivation_options_json,
                ciphertext,
                unsealing_instructions,
            };
            let Ok(json) = message.to_json() else {
                return;
            };

            let _ = UnsealingRequest::new(command, json.as_str(), &RequestConfig::default());

            let request = UnsealingRequest::new(command, json, &RequestConfig::lenient())
                .expect("lenient policy accepts any well-formed envelope");

            // Pass gate 2 unconditionally, reject everything at gate 3
            let derivation_options = request.options().derivation_options().requirements.clone();
            let context = move |requirements: &AuthenticationRequirements, allow_null: bool| {
                if *requirements == derivation_options {
                    accept_derivation_options || allow_null
                } else {
                    allow_null && requirements.is_empty()
                }
            };

            if let Err(RequestError::ClientNotAuthorized(layer)) = request.authorize(&context) {
                if accept_derivation_options {
                    assert_eq!(layer, AuthenticationRequirementIn::UnsealingInstructions);
                }
            }
        },
    }
});
