//! Authentication requirements shared by derivation options and unsealing
//! instructions.
//!
//! A requirements value restricts which clients may use a derived key or
//! unseal a message: web applications by host (and optionally path prefix),
//! Android applications by package-name prefix, and optionally only clients
//! that completed an authentication handshake.
//!
//! # Security
//!
//! - Wildcard hosts (`*.example.com`) match the bare domain and its
//!   subdomains, never a host that merely ends with the same characters
//!   (`evilexample.com`).
//! - Android prefixes and package names both get an implicit trailing `.`
//!   before comparison, so `com.example` does not match
//!   `com.examplesignedbyattacker`.

use serde::{Deserialize, Serialize};

/// A web application permitted to use a derived key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebBasedApplicationIdentity {
    /// Host (hostname plus non-default port). A leading `*.` matches the
    /// domain and any of its subdomains.
    pub host: String,
    /// Path prefixes the request must come from. `None` or empty allows any
    /// path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
}

impl WebBasedApplicationIdentity {
    /// Identity matching a host on any path.
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into(), paths: None }
    }

    /// Identity matching a host on the given path prefixes.
    pub fn with_paths(host: impl Into<String>, paths: Vec<String>) -> Self {
        Self { host: host.into(), paths: Some(paths) }
    }

    /// True if a request from `host` at `path` matches this identity.
    #[must_use]
    pub fn matches(&self, host: &str, path: &str) -> bool {
        self.matches_host(host) && self.matches_path(path)
    }

    fn matches_host(&self, host: &str) -> bool {
        match self.host.strip_prefix("*.") {
            Some(domain) => {
                host == domain
                    || host.strip_suffix(domain).is_some_and(|sub| sub.ends_with('.'))
            },
            None => host == self.host,
        }
    }

    fn matches_path(&self, path: &str) -> bool {
        match &self.paths {
            Some(prefixes) if !prefixes.is_empty() => {
                prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
            },
            _ => true,
        }
    }
}

/// Restrictions on which clients may use a derived key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationRequirements {
    /// Web applications permitted to use the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<WebBasedApplicationIdentity>>,

    /// Clients must present a token obtained through the authentication
    /// handshake before their origin is trusted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_authentication_handshake: Option<bool>,

    /// Android package-name prefixes permitted to use the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_android_prefixes: Option<Vec<String>>,
}

impl AuthenticationRequirements {
    /// True if these requirements restrict nothing: no client is named and
    /// no handshake is required.
    ///
    /// Whether an empty requirement permits everyone or no one is decided by
    /// the caller, not by the requirements value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.names_client() && !self.requires_handshake()
    }

    /// True if a web allow list or Android prefix list is declared.
    #[must_use]
    pub fn names_client(&self) -> bool {
        self.declares_allow_list()
            || self.allow_android_prefixes.as_ref().is_some_and(|prefixes| !prefixes.is_empty())
    }

    /// True if a non-empty web allow list is declared.
    #[must_use]
    pub fn declares_allow_list(&self) -> bool {
        self.allow.as_ref().is_some_and(|allow| !allow.is_empty())
    }

    /// True if the authentication handshake is required.
    #[must_use]
    pub fn requires_handshake(&self) -> bool {
        self.require_authentication_handshake == Some(true)
    }

    /// True if a web request from `host` at `path` is on the allow list.
    #[must_use]
    pub fn allows_web_origin(&self, host: &str, path: &str) -> bool {
        self.allow.iter().flatten().any(|identity| identity.matches(host, path))
    }

    /// True if `package_name` starts with one of the Android prefixes.
    #[must_use]
    pub fn allows_android_package(&self, package_name: &str) -> bool {
        let package = format!("{package_name}.");
        self.allow_android_prefixes
            .iter()
            .flatten()
            .any(|prefix| package.starts_with(&format!("{prefix}.")))
    }
}
