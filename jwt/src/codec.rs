//! Segment codec: base64url without padding (RFC 7515).

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

/// Encode raw bytes into an unpadded base64url segment.
#[inline]
#[must_use]
pub fn encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode an unpadded base64url segment back into raw bytes.
///
/// # Errors
/// Returns the underlying decode error on any character or length violation,
/// including the `=` padding the compact form forbids.
#[inline]
pub fn decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_emits_no_padding() {
        // lengths 1..3 exercise every padding case
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(b"fo"), "Zm8");
        assert_eq!(encode(b"foo"), "Zm9v");
    }

    #[test]
    fn encode_is_url_safe() {
        let encoded = encode(&[0xfb, 0xff, 0xbf]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn decode_inverts_encode() {
        let bytes = b"{\"typ\":\"JWT\",\"alg\":\"HS256\"}";
        assert_eq!(decode(&encode(bytes)).as_deref(), Ok(bytes.as_slice()));
    }

    #[test]
    fn decode_rejects_padding_and_garbage() {
        assert!(decode("Zg==").is_err());
        assert!(decode("not-base64!!").is_err());
    }
}
