//! Self-contained JSON Web Token engine.
//!
//! Builds, signs, serializes, parses, and verifies compact JWTs for the
//! services that share a secret or key pair. Two algorithms are supported
//! behind one [`Signer`] seam:
//!
//! - HS256 — HMAC-SHA256 over a shared secret ([`HmacSigner`])
//! - RS256 — RSA-PKCS#1 v1.5 with SHA-256 ([`RsaSigner`])
//!
//! The engine performs no I/O and keeps no process-wide state. A [`Token`]
//! borrows its signer, so one signer (immutable after construction) can back
//! any number of concurrent issuance or verification operations, each on its
//! own `Token` instance.
//!
//! ```no_run
//! use tollgate_jwt::{HmacSigner, Token};
//!
//! # fn main() -> tollgate_jwt::JwtResult<()> {
//! let signer = HmacSigner::new(b"123456".to_vec());
//!
//! let mut token = Token::new(&signer)?;
//! token.add_data("userName", "Jfeng".into());
//! let compact = token.serialize()?;
//!
//! let mut incoming = Token::new(&signer)?;
//! let claims = incoming.parse(&compact)?;
//! assert_eq!(claims["userName"], "Jfeng");
//! # Ok(())
//! # }
//! ```
//!
//! Verification order is fixed: the signature is checked over the raw
//! encoded segments before any decoded content is trusted. Callers guarding
//! a request path should collapse every [`JwtError`] from `parse` into a
//! single uniform rejection so the failure reason cannot be probed from
//! outside.

pub mod codec;
mod claims;
mod error;
pub mod signer;
mod token;

pub use claims::{Header, Payload, RegisteredClaims};
pub use error::{JwtError, JwtResult};
pub use signer::{Algorithm, HmacSigner, RsaSigner, Signer};
pub use token::Token;
