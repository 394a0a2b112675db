//! RS256: RSA-PKCS#1 v1.5 signatures over a SHA-256 digest.

use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::sha2::Sha256;
use rsa::signature::{Keypair, SignatureEncoding, Signer as _, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};

use super::{Algorithm, Signer};
use crate::error::{JwtError, JwtResult};

/// Asymmetric signer. The private half is required to sign, the public
/// half to verify; an issuing service holds both, a checking service only
/// the public key.
///
/// Key material is parsed once here, so malformed keys fail at
/// construction rather than inside sign or verify.
#[derive(Debug)]
pub struct RsaSigner {
    signing: Option<SigningKey<Sha256>>,
    verifying: Option<VerifyingKey<Sha256>>,
}

impl RsaSigner {
    /// Build a signer from a PKCS#8 DER private key. The public half is
    /// derived from it, so this signer both signs and verifies.
    ///
    /// # Errors
    /// `InvalidKey` if the DER is not a usable RSA private key.
    pub fn from_pkcs8_der(der: &[u8]) -> JwtResult<Self> {
        let private_key = RsaPrivateKey::from_pkcs8_der(der)
            .map_err(|e| JwtError::InvalidKey(format!("RSA private key: {e}")))?;
        let signing = SigningKey::<Sha256>::new(private_key);
        let verifying = signing.verifying_key();
        Ok(Self {
            signing: Some(signing),
            verifying: Some(verifying),
        })
    }

    /// Build a verify-only signer from an SPKI DER public key.
    ///
    /// # Errors
    /// `InvalidKey` if the DER is not a usable RSA public key.
    pub fn from_public_key_der(der: &[u8]) -> JwtResult<Self> {
        let public_key = RsaPublicKey::from_public_key_der(der)
            .map_err(|e| JwtError::InvalidKey(format!("RSA public key: {e}")))?;
        Ok(Self {
            signing: None,
            verifying: Some(VerifyingKey::<Sha256>::new(public_key)),
        })
    }
}

impl Signer for RsaSigner {
    fn algorithm_name(&self) -> &'static str {
        Algorithm::Rs256.name()
    }

    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        let key = self
            .signing
            .as_ref()
            .ok_or_else(|| JwtError::SigningFailure("no private key held".to_string()))?;
        let signature = key
            .try_sign(message)
            .map_err(|e| JwtError::SigningFailure(e.to_string()))?;
        Ok(signature.to_bytes().as_ref().to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Some(key) = self.verifying.as_ref() else {
            return false;
        };
        let Ok(signature) = Signature::try_from(signature) else {
            return false;
        };
        key.verify(message, &signature).is_ok()
    }
}
