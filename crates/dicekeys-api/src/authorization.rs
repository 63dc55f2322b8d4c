//! Request authorization gates.
//!
//! Every request passes up to three gates, in order. The first failure is
//! returned and later gates are not consulted.
//!
//! ```text
//!   request
//!      |
//!      v
//!  [1] capability      command returns a private key
//!      |               => derivation options must set clientMayRetrieveKey
//!      v
//!  [2] derivation      caller must satisfy the derivation options'
//!      |               authentication requirements
//!      v
//!  [3] unsealing       unsealing requests only: caller must satisfy the
//!      |               message's unsealing instructions, if any
//!      v
//!   authorized
//! ```
//!
//! Gate 2 decides what empty requirements mean:
//!
//! - `getSealingKey` with no derivation options JSON: anyone may seal
//! - `unsealWithUnsealingKey` whose instructions declare a web allow list: the
//!   instructions alone authorize the caller
//! - otherwise: empty requirements reject
//!
//! Gate 3 always lets empty instructions through.

use dicekeys_proto::{ApiCommand, AuthenticationRequirements};

use crate::{
    context::RequestContext,
    error::{AuthenticationRequirementIn, RequestError},
    request::{RequestOptions, UnsealingRequest},
};

/// Gates for every non-unsealing request.
pub(crate) fn authorize_derivation(
    command: ApiCommand,
    options: &RequestOptions,
    context: &impl RequestContext,
) -> Result<(), RequestError> {
    debug_assert!(!command.is_unsealing());

    require_key_retrieval_allowed(command, options)?;

    let allow_null =
        command == ApiCommand::GetSealingKey && options.is_derivation_options_json_empty();
    require_satisfied(
        context,
        &options.derivation_options().requirements,
        allow_null,
        AuthenticationRequirementIn::DerivationOptions,
    )?;

    tracing::debug!(command = %command, "request authorized");
    Ok(())
}

/// Gates for unsealing requests.
pub(crate) fn authorize_unsealing(
    request: &UnsealingRequest,
    context: &impl RequestContext,
) -> Result<(), RequestError> {
    let command = request.command();
    debug_assert!(command.is_unsealing());

    let options = request.options();
    require_key_retrieval_allowed(command, options)?;

    let instructions = request.unsealing_instructions();
    let allow_null = command == ApiCommand::UnsealWithUnsealingKey
        && instructions.is_some_and(|instructions| instructions.requirements.declares_allow_list());
    require_satisfied(
        context,
        &options.derivation_options().requirements,
        allow_null,
        AuthenticationRequirementIn::DerivationOptions,
    )?;

    if let Some(instructions) = instructions {
        require_satisfied(
            context,
            &instructions.requirements,
            true,
            AuthenticationRequirementIn::UnsealingInstructions,
        )?;
    }

    tracing::debug!(command = %command, "unsealing request authorized");
    Ok(())
}

/// Gate 1: commands that hand back a private key need explicit consent in the
/// derivation options.
fn require_key_retrieval_allowed(
    command: ApiCommand,
    options: &RequestOptions,
) -> Result<(), RequestError> {
    if command.returns_private_key() && !options.derivation_options().allows_key_retrieval() {
        tracing::warn!(command = %command, "key retrieval not permitted by derivation options");
        return Err(RequestError::CommandRequiresClientMayRetrieveKey { command });
    }
    Ok(())
}

fn require_satisfied(
    context: &impl RequestContext,
    requirements: &AuthenticationRequirements,
    allow_null_requirement: bool,
    layer: AuthenticationRequirementIn,
) -> Result<(), RequestError> {
    if context.satisfies_authentication_requirements(requirements, allow_null_requirement) {
        return Ok(());
    }

    tracing::warn!(%layer, allow_null_requirement, "client not authorized");
    Err(RequestError::ClientNotAuthorized(layer))
}
