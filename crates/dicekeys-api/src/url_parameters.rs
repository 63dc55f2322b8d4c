//! Query parameters of an API request URL.
//!
//! Names and values are percent-decoded only: a literal `+` stays a `+`, so
//! base64 text and JSON carrying `+` survive unescaped. Invalid UTF-8 after
//! decoding is replaced lossily. When a name repeats, the last value wins.

use std::collections::HashMap;

use dicekeys_proto::base64url;
use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::RequestError;

/// Decoded `name=value` pairs from a request URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParameters {
    parameters: HashMap<String, String>,
}

impl UrlParameters {
    /// Parse the query of an absolute URL.
    ///
    /// # Errors
    ///
    /// - `RequestError::InvalidUrl` if the URL cannot be parsed
    pub fn from_url(url: &str) -> Result<Self, RequestError> {
        let url = Url::parse(url).map_err(|err| RequestError::InvalidUrl(err.to_string()))?;
        Ok(url.query().map(Self::from_query).unwrap_or_default())
    }

    /// Parse a bare query string (without the leading `?`).
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(name), decode_component(value))
            })
            .collect()
    }

    /// Value of an optional parameter.
    #[must_use]
    pub fn optional_field(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Value of a required parameter.
    ///
    /// # Errors
    ///
    /// - `RequestError::ParameterNotFound` if the parameter is absent
    pub fn required_field(&self, name: &str) -> Result<&str, RequestError> {
        self.optional_field(name).ok_or_else(|| RequestError::ParameterNotFound(name.to_string()))
    }

    /// Bytes of a required base64url-encoded parameter.
    ///
    /// # Errors
    ///
    /// - `RequestError::ParameterNotFound` if the parameter is absent
    /// - `RequestError::InvalidParameterEncoding` if it is not base64url
    pub fn required_base64url_field(&self, name: &str) -> Result<Vec<u8>, RequestError> {
        let text = self.required_field(name)?;
        base64url::decode(text).map_err(|err| RequestError::InvalidParameterEncoding {
            field: name.to_string(),
            reason: err.to_string(),
        })
    }

    /// True if the parameter is present with the literal value `true`.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.optional_field(name) == Some("true")
    }
}

fn decode_component(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UrlParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { parameters: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_decodes_values() {
        let params = UrlParameters::from_url(
            "https://dicekeys.app/?command=getPassword&derivationOptionsJson=%7B%22type%22%3A%22Password%22%7D",
        )
        .expect("valid URL");

        assert_eq!(params.optional_field("command"), Some("getPassword"));
        assert_eq!(params.optional_field("derivationOptionsJson"), Some(r#"{"type":"Password"}"#));
    }

    #[test]
    fn plus_is_not_a_space() {
        let params = UrlParameters::from_url(
            "https://dicekeys.app/?plaintext=ab+c/d&derivationOptionsJson=%7B%22seedHint%22%3A%22a%2Bb%20c%22%7D",
        )
        .expect("valid URL");

        assert_eq!(params.optional_field("plaintext"), Some("ab+c/d"));
        assert_eq!(params.optional_field("derivationOptionsJson"), Some(r#"{"seedHint":"a+b c"}"#));
    }

    #[test]
    fn name_without_value_is_empty() {
        let params = UrlParameters::from_query("respondTo&&command=getSecret");
        assert_eq!(params.optional_field("respondTo"), Some(""));
        assert_eq!(params.optional_field("command"), Some("getSecret"));
    }

    #[test]
    fn url_without_query_has_no_parameters() {
        let params = UrlParameters::from_url("https://dicekeys.app/").expect("valid URL");
        assert_eq!(params, UrlParameters::default());
    }

    #[test]
    fn last_duplicate_wins() {
        let params = UrlParameters::from_query("command=getSecret&command=getPassword");
        assert_eq!(params.optional_field("command"), Some("getPassword"));
    }

    #[test]
    fn missing_required_field_is_named() {
        let params = UrlParameters::from_query("command=getSecret");
        assert_eq!(
            params.required_field("plaintext"),
            Err(RequestError::ParameterNotFound("plaintext".to_string()))
        );
    }

    #[test]
    fn base64url_field_decodes() {
        let params = UrlParameters::from_query("plaintext=aGVsbG8");
        assert_eq!(params.required_base64url_field("plaintext"), Ok(b"hello".to_vec()));
    }

    #[test]
    fn invalid_base64url_field_is_named() {
        let params = UrlParameters::from_query("plaintext=*");
        assert!(matches!(
            params.required_base64url_field("plaintext"),
            Err(RequestError::InvalidParameterEncoding { field, .. }) if field == "plaintext"
        ));
    }

    #[test]
    fn flag_requires_literal_true() {
        let params = UrlParameters::from_query("a=true&b=1&c=TRUE");
        assert!(params.flag("a"));
        assert!(!params.flag("b"));
        assert!(!params.flag("c"));
        assert!(!params.flag("missing"));
    }

    #[test]
    fn unparseable_url_is_rejected() {
        assert!(matches!(UrlParameters::from_url("not a url"), Err(RequestError::InvalidUrl(_))));
    }
}
