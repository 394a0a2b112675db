//! HS256: HMAC-SHA256 over a shared secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::{Algorithm, Signer};
use crate::error::{JwtError, JwtResult};

type HmacSha256 = Hmac<Sha256>;

/// Shared-secret signer. The same secret signs and verifies, so every
/// holder of it can mint tokens; distribute accordingly.
pub struct HmacSigner {
    secret: Zeroizing<Vec<u8>>,
}

impl HmacSigner {
    /// Build a signer around a shared secret of any length.
    ///
    /// The secret is wiped from memory when the signer is dropped.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
        }
    }
}

impl Signer for HmacSigner {
    fn algorithm_name(&self) -> &'static str {
        Algorithm::Hs256.name()
    }

    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| JwtError::SigningFailure(e.to_string()))?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        // ct_eq runs in time independent of where the first mismatch sits
        match self.sign(message) {
            Ok(expected) => expected.ct_eq(signature).into(),
            Err(_) => false,
        }
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print the secret
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_is_deterministic() {
        let signer = HmacSigner::new(b"123456".to_vec());
        let a = signer.sign(b"header.payload").unwrap();
        let b = signer.sign(b"header.payload").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn verify_accepts_own_signature() {
        let signer = HmacSigner::new(b"123456".to_vec());
        let sig = signer.sign(b"msg").unwrap();
        assert!(signer.verify(b"msg", &sig));
    }

    #[test]
    fn verify_rejects_wrong_secret_and_wrong_length() {
        let signer = HmacSigner::new(b"123456".to_vec());
        let other = HmacSigner::new(b"654321".to_vec());
        let sig = other.sign(b"msg").unwrap();
        assert!(!signer.verify(b"msg", &sig));
        assert!(!signer.verify(b"msg", &sig[..16]));
        assert!(!signer.verify(b"msg", b""));
    }
}
