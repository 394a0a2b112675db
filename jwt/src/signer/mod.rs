//! Signing capability: one algorithm plus its key material behind a trait.

use std::fmt;

use crate::error::{JwtError, JwtResult};

mod hmac;
mod rsa;

pub use self::hmac::HmacSigner;
pub use self::rsa::RsaSigner;

/// The closed set of algorithms this engine implements.
///
/// Adding an algorithm later means adding a variant and a [`Signer`]
/// implementation, not modifying callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC-SHA256 over a shared secret.
    Hs256,
    /// RSA-PKCS#1 v1.5 with SHA-256.
    Rs256,
}

impl Algorithm {
    /// The stable wire identifier for this algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HS256",
            Algorithm::Rs256 => "RS256",
        }
    }

    /// Resolve a wire identifier back to an algorithm.
    ///
    /// # Errors
    /// `UnsupportedAlgorithm` for any name outside the closed set.
    pub fn from_name(name: &str) -> JwtResult<Self> {
        match name {
            "HS256" => Ok(Algorithm::Hs256),
            "RS256" => Ok(Algorithm::Rs256),
            other => Err(JwtError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A signing capability bound to one algorithm and its key material.
///
/// Implementations are immutable after construction and may be shared
/// freely across threads; the key material must outlive the signer.
pub trait Signer: Send + Sync {
    /// Stable algorithm identifier, e.g. `"HS256"`. Fixed per instance.
    fn algorithm_name(&self) -> &'static str;

    /// Sign `message` and return the raw signature bytes.
    ///
    /// # Errors
    /// `SigningFailure` when no signing key is held or the primitive fails.
    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>>;

    /// Check `signature` against `message`.
    ///
    /// Never errors: any mismatch, absent key, or malformed signature is
    /// `false`. Implementations must not leak, through timing, how much of
    /// the signature matched.
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for alg in [Algorithm::Hs256, Algorithm::Rs256] {
            assert_eq!(Algorithm::from_name(alg.name()).unwrap(), alg);
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(matches!(
            Algorithm::from_name("none"),
            Err(JwtError::UnsupportedAlgorithm(name)) if name == "none"
        ));
    }
}
