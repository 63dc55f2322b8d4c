//! Fuzz target for ApiRequest::from_url_parameters
//!
//! Feeds arbitrary query strings through request decoding and, when a request
//! decodes, through the authorization gates.
//!
//! # Invariants
//!
//! - Decoding NEVER panics; malformed input returns an error
//! - A context that rejects every requirement never authorizes a request

#![no_main]

use dicekeys_api::{ApiRequest, RequestConfig, UrlParameters};
use dicekeys_proto::AuthenticationRequirements;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };
    let parameters = UrlParameters::from_query(query);

    for config in [RequestConfig::default(), RequestConfig::lenient()] {
        let Ok(request) = ApiRequest::from_url_parameters(&parameters, &config) else {
            continue;
        };

        let reject_all = |_: &AuthenticationRequirements, _: bool| false;
        assert!(request.authorize(&reject_all).is_err(), "rejecting context authorized {request:?}");

        let accept_all = |_: &AuthenticationRequirements, _: bool| true;
        let _ = request.authorize(&accept_all);
    }
});
