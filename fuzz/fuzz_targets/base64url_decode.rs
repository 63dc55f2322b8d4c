//! Fuzz target for base64url decoding
//!
//! # Invariants
//!
//! - Decoding NEVER panics on arbitrary text
//! - Decoded bytes re-encode to the unpadded input

#![no_main]

use dicekeys_proto::base64url;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let Ok(bytes) = base64url::decode(text) else {
        return;
    };
    let reencoded = base64url::encode(&bytes);
    let decoded_again = base64url::decode(&reencoded).expect("encoder output decodes");
    assert_eq!(decoded_again, bytes);
});
