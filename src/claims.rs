use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

/// Claims decoded from an identity token's payload segment.
///
/// The shape is provider-defined and not validated beyond structural
/// decodability. Decode-only: the signature is never checked, so these
/// claims are trustworthy only immediately after a redirect from the
/// provider over a secure channel, and only for UI purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims {
    inner: Map<String, Value>,
}

impl Claims {
    /// Get a raw claim value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// The `email` claim.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.get("email").and_then(Value::as_str)
    }

    /// Whether the provider marked the email as verified.
    ///
    /// An absent or non-boolean `email_verified` claim reads as not
    /// verified.
    #[must_use]
    pub fn email_verified(&self) -> bool {
        self.get("email_verified")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The `sub` claim (subject identifier).
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    /// The `iss` claim (issuer).
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.get("iss").and_then(Value::as_str)
    }

    /// All claims as a JSON map.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.inner
    }
}

/// Decode the payload segment of a compact signed token without
/// verifying the signature.
///
/// Any failure at any step — missing payload segment, invalid base64,
/// invalid UTF-8, invalid JSON — is logged and swallowed. `None` means
/// "claims unavailable", not "unauthenticated"; callers decide policy.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    match try_decode(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::warn!(error = %e, "identity token claims decode failed");
            None
        }
    }
}

fn try_decode(token: &str) -> Result<Claims, Error> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| Error::Decode("token has no payload segment".into()))?;
    // Providers emit unpadded base64url; tolerate padded input too.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| Error::Decode(format!("invalid base64: {e}")))?;
    let json = std::str::from_utf8(&bytes)
        .map_err(|e| Error::Decode(format!("invalid UTF-8: {e}")))?;
    let inner: Map<String, Value> =
        serde_json::from_str(json).map_err(|e| Error::Decode(format!("invalid JSON: {e}")))?;
    Ok(Claims { inner })
}
