//! Error taxonomy for token operations.

use thiserror::Error;

/// Result alias for all engine operations.
pub type JwtResult<T> = Result<T, JwtError>;

/// Everything that can go wrong while building, signing, parsing, or
/// validating a token. Each failure is terminal for its operation; the
/// engine never retries or recovers internally.
#[derive(Debug, Error)]
pub enum JwtError {
    /// The signer reports an algorithm name this engine does not implement.
    #[error("unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The compact string did not split into exactly three segments.
    #[error("malformed token: expected 3 dot-separated segments, found {0}")]
    MalformedToken(usize),

    /// A segment was not valid unpadded base64url.
    #[error("base64url decoding failed: {0}")]
    DecodingFailure(#[from] base64::DecodeError),

    /// JSON encoding or decoding of the header or payload failed.
    #[error("JSON encoding failed: {0}")]
    EncodingFailure(#[from] serde_json::Error),

    /// Key material could not be parsed at signer construction.
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    /// The signer could not produce a signature.
    #[error("signing failed: {0}")]
    SigningFailure(String),

    /// The signature does not verify over the received segments. Covers
    /// tampering as well as a wrong secret or key.
    #[error("signature verification failed")]
    InvalidSignature,

    /// The token header's typ/alg does not match the bound signer.
    #[error("token header does not match the bound signer")]
    AlgorithmMismatch,

    /// The exp claim is in the past.
    #[error("token has expired")]
    Expired,

    /// The nbf claim is in the future.
    #[error("token not yet valid")]
    NotYetValid,
}
