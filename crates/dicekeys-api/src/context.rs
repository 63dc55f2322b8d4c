//! Authentication requirement evaluation.
//!
//! [`RequestContext`] is the contract the authorization gates consult. The
//! execution environment implements it with whatever it knows about the
//! caller: the origin a web request will be answered to, the signed package
//! name of an Android caller, and whether the caller presented a valid
//! handshake token. [`CallerContext`] is a reference implementation over an
//! already-resolved caller identity.
//!
//! # Security
//!
//! - Requirements that name no client and require no handshake return
//!   `allow_null_requirement`. The gate decides what an empty requirement
//!   means, never the evaluator.
//! - A handshake requirement is checked before any allow-list matching, and
//!   is never waived by `allow_null_requirement`.
//! - A handshake-only requirement is satisfied by any caller whose handshake
//!   was validated.
//! - A web caller is only matched against `allow`, an Android caller only
//!   against `allowAndroidPrefixes`.

use dicekeys_proto::AuthenticationRequirements;
use url::Url;

use crate::error::RequestError;

/// Evaluates authentication requirements against the current caller.
pub trait RequestContext {
    /// True if the caller satisfies `requirements`.
    ///
    /// When `requirements` is empty (no client named, no handshake required),
    /// returns `allow_null_requirement`.
    fn satisfies_authentication_requirements(
        &self,
        requirements: &AuthenticationRequirements,
        allow_null_requirement: bool,
    ) -> bool;
}

impl<F> RequestContext for F
where
    F: Fn(&AuthenticationRequirements, bool) -> bool,
{
    fn satisfies_authentication_requirements(
        &self,
        requirements: &AuthenticationRequirements,
        allow_null_requirement: bool,
    ) -> bool {
        self(requirements, allow_null_requirement)
    }
}

/// Origin a web caller will receive the response at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebOrigin {
    host: String,
    path: String,
}

impl WebOrigin {
    /// Origin from an already-resolved host and path.
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self { host: host.into(), path: path.into() }
    }

    /// Origin of an `https` URL.
    ///
    /// The host includes the port when it is not the default port.
    ///
    /// # Errors
    ///
    /// - `RequestError::InvalidOrigin` if the URL cannot be parsed, is not
    ///   `https`, or has no host
    pub fn from_url(url: &str) -> Result<Self, RequestError> {
        let url = Url::parse(url).map_err(|err| RequestError::InvalidOrigin(err.to_string()))?;
        if url.scheme() != "https" {
            return Err(RequestError::InvalidOrigin(format!(
                "scheme must be https, got {}",
                url.scheme()
            )));
        }
        let Some(host) = url.host_str() else {
            return Err(RequestError::InvalidOrigin("URL has no host".to_string()));
        };
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self { host, path: url.path().to_string() })
    }

    /// Host, with port if non-default.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path component.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Resolved identity of the client that sent a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerIdentity {
    /// Web application identified by its response origin
    Web(WebOrigin),
    /// Android application identified by its signed package name
    Android {
        /// Package name, e.g. `com.example.app`
        package_name: String,
    },
}

/// Reference [`RequestContext`] over a resolved caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    identity: CallerIdentity,
    handshake_validated: bool,
}

impl CallerContext {
    /// Context for a web caller.
    #[must_use]
    pub fn web(origin: WebOrigin) -> Self {
        Self { identity: CallerIdentity::Web(origin), handshake_validated: false }
    }

    /// Context for an Android caller.
    pub fn android(package_name: impl Into<String>) -> Self {
        Self {
            identity: CallerIdentity::Android { package_name: package_name.into() },
            handshake_validated: false,
        }
    }

    /// Record whether the caller presented a valid handshake token.
    #[must_use]
    pub fn with_handshake_validated(mut self, validated: bool) -> Self {
        self.handshake_validated = validated;
        self
    }

    /// The caller's identity.
    #[must_use]
    pub fn identity(&self) -> &CallerIdentity {
        &self.identity
    }
}

impl RequestContext for CallerContext {
    fn satisfies_authentication_requirements(
        &self,
        requirements: &AuthenticationRequirements,
        allow_null_requirement: bool,
    ) -> bool {
        if requirements.is_empty() {
            return allow_null_requirement;
        }

        if requirements.requires_handshake() && !self.handshake_validated {
            tracing::debug!("authentication handshake required but not validated");
            return false;
        }

        if !requirements.names_client() {
            return true;
        }

        match &self.identity {
            CallerIdentity::Web(origin) => {
                requirements.allows_web_origin(origin.host(), origin.path())
            },
            CallerIdentity::Android { package_name } => {
                requirements.allows_android_package(package_name)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use dicekeys_proto::WebBasedApplicationIdentity;

    use super::*;

    fn allow(hosts: &[&str]) -> AuthenticationRequirements {
        AuthenticationRequirements {
            allow: Some(hosts.iter().map(|h| WebBasedApplicationIdentity::new(*h)).collect()),
            ..Default::default()
        }
    }

    fn web(url: &str) -> CallerContext {
        CallerContext::web(WebOrigin::from_url(url).expect("valid origin"))
    }

    #[test]
    fn empty_requirements_follow_allow_null() {
        let context = web("https://example.com/");
        let empty = AuthenticationRequirements::default();

        assert!(context.satisfies_authentication_requirements(&empty, true));
        assert!(!context.satisfies_authentication_requirements(&empty, false));
    }

    #[test]
    fn web_caller_matches_allow_list() {
        let requirements = allow(&["*.example.com"]);

        assert!(web("https://app.example.com/x").satisfies_authentication_requirements(&requirements, false));
        assert!(!web("https://other.org/").satisfies_authentication_requirements(&requirements, true));
    }

    #[test]
    fn non_default_port_is_part_of_host() {
        let origin = WebOrigin::from_url("https://example.com:8443/app").expect("valid origin");
        assert_eq!(origin.host(), "example.com:8443");
        assert_eq!(origin.path(), "/app");

        let origin = WebOrigin::from_url("https://example.com:443/").expect("valid origin");
        assert_eq!(origin.host(), "example.com");
    }

    #[test]
    fn origin_requires_https() {
        assert!(matches!(
            WebOrigin::from_url("http://example.com/"),
            Err(RequestError::InvalidOrigin(_))
        ));
        assert!(matches!(WebOrigin::from_url("example.com"), Err(RequestError::InvalidOrigin(_))));
    }

    #[test]
    fn android_caller_matches_prefixes_only() {
        let requirements = AuthenticationRequirements {
            allow_android_prefixes: Some(vec!["com.example".to_string()]),
            ..allow(&["example.com"])
        };

        assert!(
            CallerContext::android("com.example.app")
                .satisfies_authentication_requirements(&requirements, false)
        );
        assert!(
            !CallerContext::android("com.examplesignedbyattacker")
                .satisfies_authentication_requirements(&requirements, false)
        );
        assert!(
            !CallerContext::android("example.com")
                .satisfies_authentication_requirements(&requirements, false)
        );
    }

    #[test]
    fn handshake_requirement_checked_first() {
        let requirements = AuthenticationRequirements {
            require_authentication_handshake: Some(true),
            ..allow(&["example.com"])
        };
        let context = web("https://example.com/");

        assert!(!context.satisfies_authentication_requirements(&requirements, false));
        assert!(
            context
                .with_handshake_validated(true)
                .satisfies_authentication_requirements(&requirements, false)
        );
    }

    #[test]
    fn handshake_only_requirement_is_not_waived_by_allow_null() {
        let requirements = AuthenticationRequirements {
            require_authentication_handshake: Some(true),
            ..Default::default()
        };

        assert!(!web("https://example.com/").satisfies_authentication_requirements(&requirements, true));
        assert!(
            !CallerContext::android("com.example.app")
                .satisfies_authentication_requirements(&requirements, true)
        );
    }

    #[test]
    fn handshake_only_requirement_accepts_validated_caller() {
        let requirements = AuthenticationRequirements {
            require_authentication_handshake: Some(true),
            ..Default::default()
        };

        assert!(
            web("https://anywhere.org/")
                .with_handshake_validated(true)
                .satisfies_authentication_requirements(&requirements, false)
        );
        assert!(
            CallerContext::android("com.example.app")
                .with_handshake_validated(true)
                .satisfies_authentication_requirements(&requirements, false)
        );
    }

    #[test]
    fn closures_are_contexts() {
        let null_only = |_: &AuthenticationRequirements, allow_null: bool| allow_null;
        assert!(null_only.satisfies_authentication_requirements(&allow(&["a.com"]), true));
        assert!(!null_only.satisfies_authentication_requirements(&allow(&["a.com"]), false));
    }
}
