//! base64url (RFC 4648 §5) transport for binary fields.
//!
//! Encoding never emits padding. Decoding accepts padded and unpadded input:
//! the url-safe alphabet is mapped back to the standard one, the text is
//! padded to a multiple of four characters, and the result is decoded as
//! standard base64.

use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};

use crate::errors::{ProtoError, Result};

/// Encode bytes as unpadded base64url.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode base64url text, with or without trailing `=` padding.
///
/// # Errors
///
/// - `ProtoError::InvalidBase64` if the text is not valid base64url,
///   including any non-ASCII input
pub fn decode(text: &str) -> Result<Vec<u8>> {
    // Padding is computed in bytes; multi-byte characters would skew it
    if !text.is_ascii() {
        return Err(ProtoError::InvalidBase64("non-ASCII character".to_string()));
    }

    let mut standard: String = text
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let remainder = standard.len() % 4;
    if remainder != 0 {
        standard.extend(std::iter::repeat_n('=', 4 - remainder));
    }

    Ok(STANDARD.decode(standard)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_uses_url_safe_alphabet_without_padding() {
        assert_eq!(encode(&[0xfb, 0xff]), "-_8");
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn decode_accepts_missing_padding() {
        assert_eq!(decode("Zg").expect("valid"), b"f");
        assert_eq!(decode("Zm8").expect("valid"), b"fo");
        assert_eq!(decode("Zm9v").expect("valid"), b"foo");
    }

    #[test]
    fn decode_accepts_existing_padding() {
        assert_eq!(decode("Zg==").expect("valid"), b"f");
    }

    #[test]
    fn decode_maps_url_safe_characters() {
        assert_eq!(decode("-_8").expect("valid"), vec![0xfb, 0xff]);
    }

    #[test]
    fn decode_rejects_invalid_characters() {
        assert!(matches!(decode("Zm9v!"), Err(ProtoError::InvalidBase64(_))));
        assert!(matches!(decode("Z"), Err(ProtoError::InvalidBase64(_))));
    }

    #[test]
    fn decode_rejects_non_ascii() {
        assert!(matches!(decode("aé"), Err(ProtoError::InvalidBase64(_))));
        assert!(matches!(decode("Zm9v€"), Err(ProtoError::InvalidBase64(_))));
    }
}
