//! Header and claim-set data structures with JSON as the wire encoding.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub(crate) const JWT_TYPE: &str = "JWT";

/// JWT header. `typ` is always `"JWT"`; `alg` is fixed at token
/// construction from the bound signer and never mutated afterward.
///
/// Field order matters: it produces the documented wire form
/// `{"typ":"JWT","alg":"HS256"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Token type, the constant `"JWT"`.
    pub typ: String,
    /// Signing algorithm identifier, `"HS256"` or `"RS256"`.
    pub alg: String,
}

impl Header {
    pub(crate) fn new(alg: &str) -> Self {
        Self {
            typ: JWT_TYPE.to_string(),
            alg: alg.to_string(),
        }
    }
}

/// The claim set carried by a token: registered claims plus a `data`
/// sub-object of arbitrary custom claims.
///
/// Every field except `iat` is omitted from the wire form when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Expiry (unix seconds). A token is invalid once `exp <= now`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Not-before (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Issued-at (unix seconds). Stamped at construction, always present.
    pub iat: i64,
    /// JWT ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Custom claims. Last write wins on key collision.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

impl Payload {
    /// Fresh payload stamped with the current time.
    pub(crate) fn new() -> Self {
        Self {
            iss: None,
            sub: None,
            aud: None,
            exp: None,
            nbf: None,
            iat: Utc::now().timestamp(),
            jti: None,
            data: Map::new(),
        }
    }

    /// Selective merge: only `Some` fields overwrite, `None` keeps the
    /// existing value. Incremental claim-setting calls accumulate.
    pub(crate) fn merge(&mut self, partial: RegisteredClaims) {
        if let Some(iss) = partial.iss {
            self.iss = Some(iss);
        }
        if let Some(sub) = partial.sub {
            self.sub = Some(sub);
        }
        if let Some(aud) = partial.aud {
            self.aud = Some(aud);
        }
        if let Some(exp) = partial.exp {
            self.exp = Some(exp);
        }
        if let Some(nbf) = partial.nbf {
            self.nbf = Some(nbf);
        }
        if let Some(jti) = partial.jti {
            self.jti = Some(jti);
        }
    }
}

/// Partial update carrier for the registered claims.
///
/// Construct with struct-update syntax and set only what should change:
///
/// ```
/// use tollgate_jwt::RegisteredClaims;
///
/// let partial = RegisteredClaims {
///     exp: Some(1_700_000_000),
///     ..Default::default()
/// };
/// ```
///
/// `iat` is absent on purpose: it is stamped once at token construction.
#[derive(Debug, Clone, Default)]
pub struct RegisteredClaims {
    /// Issuer.
    pub iss: Option<String>,
    /// Subject.
    pub sub: Option<String>,
    /// Audience.
    pub aud: Option<String>,
    /// Expiry (unix seconds).
    pub exp: Option<i64>,
    /// Not-before (unix seconds).
    pub nbf: Option<i64>,
    /// JWT ID.
    pub jti: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_wire_form_is_fixed() {
        let header = Header::new("HS256");
        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(json, r#"{"typ":"JWT","alg":"HS256"}"#);
    }

    #[test]
    fn unset_claims_are_omitted() {
        let payload = Payload::new();
        let value = serde_json::to_value(&payload).unwrap();
        let obj = value.as_object().unwrap();
        // only iat survives; optional fields and empty data are dropped
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("iat"));
    }

    #[test]
    fn merge_keeps_fields_the_partial_leaves_unset() {
        let mut payload = Payload::new();
        payload.merge(RegisteredClaims {
            exp: Some(100),
            ..Default::default()
        });
        payload.merge(RegisteredClaims {
            nbf: Some(50),
            ..Default::default()
        });

        assert_eq!(payload.exp, Some(100));
        assert_eq!(payload.nbf, Some(50));
    }

    #[test]
    fn merge_overwrites_on_repeat() {
        let mut payload = Payload::new();
        payload.merge(RegisteredClaims {
            iss: Some("auth".into()),
            exp: Some(100),
            ..Default::default()
        });
        payload.merge(RegisteredClaims {
            exp: Some(200),
            ..Default::default()
        });

        assert_eq!(payload.iss.as_deref(), Some("auth"));
        assert_eq!(payload.exp, Some(200));
    }

    #[test]
    fn payload_round_trips_through_json() {
        let mut payload = Payload::new();
        payload.sub = Some("user-17".into());
        payload.data.insert("role".into(), json!("admin"));

        let bytes = serde_json::to_vec(&payload).unwrap();
        let decoded: Payload = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(decoded.sub.as_deref(), Some("user-17"));
        assert_eq!(decoded.iat, payload.iat);
        assert_eq!(decoded.data["role"], json!("admin"));
    }
}
