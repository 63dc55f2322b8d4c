//! DiceKeys API request decoding and authorization.
//!
//! Turns incoming API calls (URL query parameters or in-process values) into
//! typed requests and decides whether each request may proceed to the
//! cryptographic operation it asks for. No cryptography happens here: a
//! request that passes [`ApiRequest::authorize`] is handed to an external
//! executor, one that fails is dropped with a [`RequestError`].
//!
//! ```text
//! URL / in-process values
//!        │
//!        ▼
//! ApiRequest (derivation options + unsealing instructions)
//!        │
//!        ▼
//! Gate 1: key retrieval opt-in
//! Gate 2: derivation-options authentication
//! Gate 3: unsealing-instructions authentication
//!        │
//!        ▼
//! Authorized → external executor
//! ```
//!
//! # Components
//!
//! - [`ApiRequest`]: tagged union of request variants
//! - [`RequestContext`]: evaluator contract for authentication requirements
//! - [`CallerContext`]: reference evaluator for web and Android callers
//! - [`UrlParameters`]: percent-decoded query parameters
//! - [`RequestConfig`]: decoding policy for malformed JSON
//!
//! # Invariants
//!
//! - Gates run in a fixed order and the first failure ends evaluation.
//! - Requests are immutable once built; authorization has no side effects.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod authorization;
pub mod config;
pub mod context;
pub mod error;
pub mod request;
pub mod seed;
pub mod url_parameters;

pub use config::{MalformedJsonPolicy, RequestConfig};
pub use context::{CallerContext, CallerIdentity, RequestContext, WebOrigin};
pub use error::{AuthenticationRequirementIn, RequestError};
pub use request::{
    ApiRequest, DerivationRequest, GenerateSignatureRequest, RequestOptions,
    SealWithSymmetricKeyRequest, UnsealingRequest,
};
pub use seed::{matches_corner_letters_hint, seed_for};
pub use url_parameters::UrlParameters;
