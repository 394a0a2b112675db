//! Token orchestration: build-and-sign, or parse-and-validate.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::claims::{Header, Payload, RegisteredClaims, JWT_TYPE};
use crate::codec;
use crate::error::{JwtError, JwtResult};
use crate::signer::{Algorithm, Signer};

/// One token lifecycle bound to one signer.
///
/// A `Token` is single-use: either populate claims and [`serialize`] it, or
/// feed an external compact string to [`parse`]. After a successful
/// `serialize` the compact form is cached and further calls return it
/// unchanged. Use a fresh instance per issuance or verification; the
/// borrowed signer itself is safe to share.
///
/// [`serialize`]: Token::serialize
/// [`parse`]: Token::parse
pub struct Token<'s> {
    header: Header,
    payload: Payload,
    signer: &'s dyn Signer,
    compact: Option<String>,
    signature: Option<Vec<u8>>,
}

impl<'s> Token<'s> {
    /// Bind a fresh token to `signer`.
    ///
    /// The header is fixed here from the signer's algorithm; the payload
    /// starts with only `iat`, stamped now.
    ///
    /// # Errors
    /// `UnsupportedAlgorithm` if the signer names an algorithm outside the
    /// supported set.
    pub fn new(signer: &'s dyn Signer) -> JwtResult<Self> {
        let algorithm = Algorithm::from_name(signer.algorithm_name())?;
        Ok(Self {
            header: Header::new(algorithm.name()),
            payload: Payload::new(),
            signer,
            compact: None,
            signature: None,
        })
    }

    /// The token's header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The token's claim set.
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Raw signature bytes, present after a successful serialize or parse.
    #[must_use]
    pub fn signature(&self) -> Option<&[u8]> {
        self.signature.as_deref()
    }

    /// Merge registered claims. Only `Some` fields overwrite; `None` leaves
    /// the existing value in place, so incremental calls accumulate.
    pub fn set_registered_claims(&mut self, claims: RegisteredClaims) {
        self.payload.merge(claims);
    }

    /// Insert or overwrite one custom claim under `data`.
    pub fn add_data(&mut self, key: impl Into<String>, value: Value) {
        self.payload.data.insert(key.into(), value);
    }

    /// Insert or overwrite every entry of `entries` under `data`. Last
    /// write wins on key collision.
    pub fn update_data(&mut self, entries: impl IntoIterator<Item = (String, Value)>) {
        for (key, value) in entries {
            self.payload.data.insert(key, value);
        }
    }

    /// Produce the signed compact form
    /// `base64url(header) "." base64url(payload) "." base64url(signature)`.
    ///
    /// The signature covers the UTF-8 bytes of the two dot-joined encoded
    /// segments, never the decoded JSON. Output is deterministic for fixed
    /// content; once signed, the token is immutable and repeat calls return
    /// the cached string.
    ///
    /// # Errors
    /// `EncodingFailure` if JSON encoding fails, `SigningFailure` if the
    /// signer cannot sign (e.g. an [`RsaSigner`](crate::RsaSigner) without
    /// a private key).
    pub fn serialize(&mut self) -> JwtResult<String> {
        if let Some(compact) = &self.compact {
            return Ok(compact.clone());
        }

        let header_seg = codec::encode(&serde_json::to_vec(&self.header)?);
        let payload_seg = codec::encode(&serde_json::to_vec(&self.payload)?);
        let message = format!("{header_seg}.{payload_seg}");

        let signature = self.signer.sign(message.as_bytes())?;
        let signature_seg = codec::encode(&signature);

        let compact = format!("{message}.{signature_seg}");
        tracing::debug!(alg = %self.header.alg, "issued token");

        self.signature = Some(signature);
        self.compact = Some(compact.clone());
        Ok(compact)
    }

    /// Parse and validate an external compact string, returning the custom
    /// claims under `data`.
    ///
    /// The signature is verified over the raw encoded segments *before*
    /// the header or payload is decoded; nothing unauthenticated is acted
    /// upon. The header must then carry typ `"JWT"` and the bound signer's
    /// algorithm, which also rejects cross-algorithm substitution. Finally
    /// `exp`/`nbf` are checked against the current time.
    ///
    /// # Errors
    /// `MalformedToken`, `DecodingFailure`, `InvalidSignature`,
    /// `EncodingFailure`, `AlgorithmMismatch`, `Expired`, or `NotYetValid`
    /// per the step that fails. Callers guarding a request path should map
    /// all of these to one uniform rejection.
    pub fn parse(&mut self, compact: &str) -> JwtResult<&Map<String, Value>> {
        let segments: Vec<&str> = compact.split('.').collect();
        if segments.len() != 3 {
            return Err(JwtError::MalformedToken(segments.len()));
        }
        let (header_seg, payload_seg, signature_seg) = (segments[0], segments[1], segments[2]);

        let signature = codec::decode(signature_seg)?;

        let message = format!("{header_seg}.{payload_seg}");
        if !self.signer.verify(message.as_bytes(), &signature) {
            tracing::debug!(alg = %self.header.alg, "rejected token: bad signature");
            return Err(JwtError::InvalidSignature);
        }

        let header: Header = serde_json::from_slice(&codec::decode(header_seg)?)?;
        if header.typ != JWT_TYPE || header.alg != self.signer.algorithm_name() {
            return Err(JwtError::AlgorithmMismatch);
        }

        let payload: Payload = serde_json::from_slice(&codec::decode(payload_seg)?)?;

        let now = Utc::now().timestamp();
        if let Some(exp) = payload.exp {
            if exp <= now {
                return Err(JwtError::Expired);
            }
        }
        if let Some(nbf) = payload.nbf {
            if nbf > now {
                return Err(JwtError::NotYetValid);
            }
        }

        tracing::debug!(alg = %header.alg, "validated token");
        self.header = header;
        self.payload = payload;
        self.signature = Some(signature);
        self.compact = Some(compact.to_string());
        Ok(&self.payload.data)
    }
}
