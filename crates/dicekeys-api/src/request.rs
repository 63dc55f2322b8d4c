//! API request variants.
//!
//! Every request names a command and carries the derivation options of the
//! seed it operates on. Variants differ in their payload:
//!
//! - [`DerivationRequest`]: derive a password, secret, or key
//! - [`SealWithSymmetricKeyRequest`]: seal a plaintext
//! - [`GenerateSignatureRequest`]: sign a message
//! - [`UnsealingRequest`]: unseal a packaged sealed message, whose derivation
//!   options and unsealing instructions come from the message itself
//!
//! Requests are built either from in-process values or from URL query
//! parameters, and are immutable afterwards.

use dicekeys_proto::{
    ApiCommand, DerivationOptions, PackagedSealedMessage, UnsealingInstructions,
};

use crate::{
    authorization,
    config::RequestConfig,
    context::RequestContext,
    error::RequestError,
    url_parameters::UrlParameters,
};

/// Query parameter naming the command
pub const COMMAND_PARAMETER: &str = "command";
/// Query parameter carrying the derivation options JSON
pub const DERIVATION_OPTIONS_JSON_PARAMETER: &str = "derivationOptionsJson";
/// Query parameter allowing the executor to modify the derivation options
pub const DERIVATION_OPTIONS_JSON_MAY_BE_MODIFIED_PARAMETER: &str =
    "derivationOptionsJsonMayBeModified";
/// Query parameter carrying the base64url plaintext to seal
pub const PLAINTEXT_PARAMETER: &str = "plaintext";
/// Query parameter carrying the base64url message to sign
pub const MESSAGE_PARAMETER: &str = "message";
/// Query parameter carrying the packaged sealed message JSON
pub const PACKAGED_SEALED_MESSAGE_JSON_PARAMETER: &str = "packagedSealedMessageJson";

/// Derivation options shared by every request variant.
///
/// Keeps the JSON text exactly as received, because downstream key
/// derivation consumes the text rather than the decoded value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    derivation_options_json: Option<String>,
    derivation_options_json_may_be_modified: bool,
    derivation_options: DerivationOptions,
}

impl RequestOptions {
    /// Decode derivation options from JSON text.
    ///
    /// Absent or empty JSON yields empty derivation options.
    ///
    /// # Errors
    ///
    /// - `RequestError::InvalidDerivationOptions` if the JSON is malformed and
    ///   the config rejects malformed JSON
    pub fn new(
        derivation_options_json: Option<String>,
        derivation_options_json_may_be_modified: bool,
        config: &RequestConfig,
    ) -> Result<Self, RequestError> {
        let derivation_options = match derivation_options_json.as_deref() {
            None | Some("") => DerivationOptions::default(),
            Some(json) => config.malformed_json.apply(
                DerivationOptions::from_json(json),
                DERIVATION_OPTIONS_JSON_PARAMETER,
                RequestError::InvalidDerivationOptions,
            )?,
        };

        Ok(Self {
            derivation_options_json,
            derivation_options_json_may_be_modified,
            derivation_options,
        })
    }

    /// Read `derivationOptionsJson` and `derivationOptionsJsonMayBeModified`.
    ///
    /// Both parameters are optional.
    pub fn from_url_parameters(
        parameters: &UrlParameters,
        config: &RequestConfig,
    ) -> Result<Self, RequestError> {
        Self::new(
            parameters.optional_field(DERIVATION_OPTIONS_JSON_PARAMETER).map(str::to_string),
            parameters.flag(DERIVATION_OPTIONS_JSON_MAY_BE_MODIFIED_PARAMETER),
            config,
        )
    }

    /// Decoded derivation options.
    #[must_use]
    pub fn derivation_options(&self) -> &DerivationOptions {
        &self.derivation_options
    }

    /// Derivation options JSON exactly as received.
    #[must_use]
    pub fn derivation_options_json(&self) -> Option<&str> {
        self.derivation_options_json.as_deref()
    }

    /// True if the JSON is absent or the empty string.
    #[must_use]
    pub fn is_derivation_options_json_empty(&self) -> bool {
        self.derivation_options_json.as_deref().is_none_or(str::is_empty)
    }

    /// True if the executor may rewrite the derivation options.
    #[must_use]
    pub fn derivation_options_json_may_be_modified(&self) -> bool {
        self.derivation_options_json_may_be_modified
    }
}

/// Request to derive a password, secret, or key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationRequest {
    command: ApiCommand,
    options: RequestOptions,
}

impl DerivationRequest {
    /// Commands served by derivation requests.
    pub const COMMANDS: [ApiCommand; 7] = [
        ApiCommand::GetPassword,
        ApiCommand::GetSecret,
        ApiCommand::GetSealingKey,
        ApiCommand::GetUnsealingKey,
        ApiCommand::GetSymmetricKey,
        ApiCommand::GetSigningKey,
        ApiCommand::GetSignatureVerificationKey,
    ];

    /// Build a derivation request.
    ///
    /// # Errors
    ///
    /// - `RequestError::CommandNotSupported` if `command` is not a derivation
    ///   command
    pub fn new(command: ApiCommand, options: RequestOptions) -> Result<Self, RequestError> {
        if !Self::COMMANDS.contains(&command) {
            return Err(RequestError::CommandNotSupported { command, variant: "derivation" });
        }
        Ok(Self { command, options })
    }

    /// Build from URL query parameters.
    pub fn from_url_parameters(
        command: ApiCommand,
        parameters: &UrlParameters,
        config: &RequestConfig,
    ) -> Result<Self, RequestError> {
        Self::new(command, RequestOptions::from_url_parameters(parameters, config)?)
    }

    /// Requested command.
    #[must_use]
    pub fn command(&self) -> ApiCommand {
        self.command
    }

    /// Shared request options.
    #[must_use]
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Run the authorization gates for this request.
    pub fn authorize(&self, context: &impl RequestContext) -> Result<(), RequestError> {
        authorization::authorize_derivation(self.command, &self.options, context)
    }
}

/// Request to seal a plaintext with a derived symmetric key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealWithSymmetricKeyRequest {
    options: RequestOptions,
    plaintext: Vec<u8>,
}

impl SealWithSymmetricKeyRequest {
    /// Build a sealing request.
    #[must_use]
    pub fn new(options: RequestOptions, plaintext: Vec<u8>) -> Self {
        Self { options, plaintext }
    }

    /// Build from URL query parameters. `plaintext` is required and
    /// base64url-encoded.
    pub fn from_url_parameters(
        parameters: &UrlParameters,
        config: &RequestConfig,
    ) -> Result<Self, RequestError> {
        let plaintext = parameters.required_base64url_field(PLAINTEXT_PARAMETER)?;
        let options = RequestOptions::from_url_parameters(parameters, config)?;
        Ok(Self { options, plaintext })
    }

    /// Shared request options.
    #[must_use]
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Plaintext to seal.
    #[must_use]
    pub fn plaintext(&self) -> &[u8] {
        &self.plaintext
    }

    /// Run the authorization gates for this request.
    pub fn authorize(&self, context: &impl RequestContext) -> Result<(), RequestError> {
        authorization::authorize_derivation(ApiCommand::SealWithSymmetricKey, &self.options, context)
    }
}

/// Request to sign a message with a derived signing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSignatureRequest {
    options: RequestOptions,
    message: Vec<u8>,
}

impl GenerateSignatureRequest {
    /// Build a signing request.
    #[must_use]
    pub fn new(options: RequestOptions, message: Vec<u8>) -> Self {
        Self { options, message }
    }

    /// Build from URL query parameters. `message` is required and
    /// base64url-encoded.
    pub fn from_url_parameters(
        parameters: &UrlParameters,
        config: &RequestConfig,
    ) -> Result<Self, RequestError> {
        let message = parameters.required_base64url_field(MESSAGE_PARAMETER)?;
        let options = RequestOptions::from_url_parameters(parameters, config)?;
        Ok(Self { options, message })
    }

    /// Shared request options.
    #[must_use]
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Message to sign.
    #[must_use]
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Run the authorization gates for this request.
    pub fn authorize(&self, context: &impl RequestContext) -> Result<(), RequestError> {
        authorization::authorize_derivation(ApiCommand::GenerateSignature, &self.options, context)
    }
}

/// Request to unseal a packaged sealed message.
///
/// The derivation options come from the packaged message, not from the
/// request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsealingRequest {
    command: ApiCommand,
    packaged_sealed_message_json: String,
    packaged_sealed_message: PackagedSealedMessage,
    options: RequestOptions,
    unsealing_instructions: Option<UnsealingInstructions>,
}

impl UnsealingRequest {
    /// Build an unsealing request from packaged sealed message JSON.
    ///
    /// # Errors
    ///
    /// - `RequestError::CommandNotSupported` if `command` is not an unsealing
    ///   command
    /// - `RequestError::InvalidPackagedSealedMessage` if the JSON does not
    ///   parse
    /// - `RequestError::InvalidDerivationOptions` /
    ///   `RequestError::InvalidUnsealingInstructions` if the embedded JSON is
    ///   malformed and the config rejects malformed JSON
    pub fn new(
        command: ApiCommand,
        packaged_sealed_message_json: impl Into<String>,
        config: &RequestConfig,
    ) -> Result<Self, RequestError> {
        if !command.is_unsealing() {
            return Err(RequestError::CommandNotSupported { command, variant: "unsealing" });
        }

        let packaged_sealed_message_json = packaged_sealed_message_json.into();
        let packaged_sealed_message = PackagedSealedMessage::from_json(&packaged_sealed_message_json)
            .map_err(|err| RequestError::InvalidPackagedSealedMessage { reason: err.to_string() })?;

        let unsealing_instructions = match packaged_sealed_message.unsealing_instructions.as_deref() {
            None | Some("") => None,
            Some(json) => Some(config.malformed_json.apply(
                UnsealingInstructions::from_json(json),
                "unsealingInstructions",
                RequestError::InvalidUnsealingInstructions,
            )?),
        };

        let options = RequestOptions::new(
            Some(packaged_sealed_message.derivation_options_json.clone()),
            false,
            config,
        )?;

        Ok(Self {
            command,
            packaged_sealed_message_json,
            packaged_sealed_message,
            options,
            unsealing_instructions,
        })
    }

    /// Build from URL query parameters. `packagedSealedMessageJson` is
    /// required.
    pub fn from_url_parameters(
        command: ApiCommand,
        parameters: &UrlParameters,
        config: &RequestConfig,
    ) -> Result<Self, RequestError> {
        let json = parameters.required_field(PACKAGED_SEALED_MESSAGE_JSON_PARAMETER)?;
        Self::new(command, json, config)
    }

    /// Requested command.
    #[must_use]
    pub fn command(&self) -> ApiCommand {
        self.command
    }

    /// Derivation options taken from the packaged message.
    #[must_use]
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Decoded packaged sealed message.
    #[must_use]
    pub fn packaged_sealed_message(&self) -> &PackagedSealedMessage {
        &self.packaged_sealed_message
    }

    /// Packaged sealed message JSON exactly as received.
    #[must_use]
    pub fn packaged_sealed_message_json(&self) -> &str {
        &self.packaged_sealed_message_json
    }

    /// Message-level unsealing instructions, if the message carries any.
    #[must_use]
    pub fn unsealing_instructions(&self) -> Option<&UnsealingInstructions> {
        self.unsealing_instructions.as_ref()
    }

    /// Run the authorization gates for this request.
    pub fn authorize(&self, context: &impl RequestContext) -> Result<(), RequestError> {
        authorization::authorize_unsealing(self, context)
    }
}

/// Any API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Derive a password, secret, or key
    Derivation(DerivationRequest),
    /// Seal a plaintext
    SealWithSymmetricKey(SealWithSymmetricKeyRequest),
    /// Sign a message
    GenerateSignature(GenerateSignatureRequest),
    /// Unseal a packaged sealed message
    Unsealing(UnsealingRequest),
}

impl ApiRequest {
    /// Parse a request from an API URL.
    ///
    /// # Errors
    ///
    /// - `RequestError::InvalidUrl` if the URL does not parse
    /// - any error from [`ApiRequest::from_url_parameters`]
    pub fn from_url(url: &str, config: &RequestConfig) -> Result<Self, RequestError> {
        Self::from_url_parameters(&UrlParameters::from_url(url)?, config)
    }

    /// Build a request from query parameters, dispatching on `command`.
    ///
    /// # Errors
    ///
    /// - `RequestError::ParameterNotFound` if `command` or a field the
    ///   command requires is missing
    /// - `RequestError::UnknownCommand` if `command` is not in the catalog
    pub fn from_url_parameters(
        parameters: &UrlParameters,
        config: &RequestConfig,
    ) -> Result<Self, RequestError> {
        let name = parameters.required_field(COMMAND_PARAMETER)?;
        let command: ApiCommand =
            name.parse().map_err(|_| RequestError::UnknownCommand(name.to_string()))?;

        let request = match command {
            ApiCommand::SealWithSymmetricKey => Self::SealWithSymmetricKey(
                SealWithSymmetricKeyRequest::from_url_parameters(parameters, config)?,
            ),
            ApiCommand::GenerateSignature => Self::GenerateSignature(
                GenerateSignatureRequest::from_url_parameters(parameters, config)?,
            ),
            ApiCommand::UnsealWithSymmetricKey | ApiCommand::UnsealWithUnsealingKey => {
                Self::Unsealing(UnsealingRequest::from_url_parameters(command, parameters, config)?)
            },
            ApiCommand::GetPassword
            | ApiCommand::GetSecret
            | ApiCommand::GetSealingKey
            | ApiCommand::GetUnsealingKey
            | ApiCommand::GetSymmetricKey
            | ApiCommand::GetSigningKey
            | ApiCommand::GetSignatureVerificationKey => {
                Self::Derivation(DerivationRequest::from_url_parameters(command, parameters, config)?)
            },
        };

        tracing::debug!(command = %command, "decoded request");
        Ok(request)
    }

    /// Requested command.
    #[must_use]
    pub fn command(&self) -> ApiCommand {
        match self {
            Self::Derivation(request) => request.command(),
            Self::SealWithSymmetricKey(_) => ApiCommand::SealWithSymmetricKey,
            Self::GenerateSignature(_) => ApiCommand::GenerateSignature,
            Self::Unsealing(request) => request.command(),
        }
    }

    /// Shared request options.
    #[must_use]
    pub fn options(&self) -> &RequestOptions {
        match self {
            Self::Derivation(request) => request.options(),
            Self::SealWithSymmetricKey(request) => request.options(),
            Self::GenerateSignature(request) => request.options(),
            Self::Unsealing(request) => request.options(),
        }
    }

    /// Decoded derivation options.
    #[must_use]
    pub fn derivation_options(&self) -> &DerivationOptions {
        self.options().derivation_options()
    }

    /// Derivation options JSON exactly as received.
    #[must_use]
    pub fn derivation_options_json(&self) -> Option<&str> {
        self.options().derivation_options_json()
    }

    /// Run this request's authorization gates.
    ///
    /// # Errors
    ///
    /// - `RequestError::CommandRequiresClientMayRetrieveKey` from the
    ///   capability gate
    /// - `RequestError::ClientNotAuthorized` naming the layer that rejected
    ///   the caller
    pub fn authorize(&self, context: &impl RequestContext) -> Result<(), RequestError> {
        match self {
            Self::Derivation(request) => request.authorize(context),
            Self::SealWithSymmetricKey(request) => request.authorize(context),
            Self::GenerateSignature(request) => request.authorize(context),
            Self::Unsealing(request) => request.authorize(context),
        }
    }
}
