//! Local inspection of bearer-token claims.
//!
//! The token is treated as a JWT: the second dot-separated segment is
//! base64-decoded as JSON and its `exp` claim (Unix seconds) drives the
//! client-side expiry check. The signature is NOT verified here; the server
//! remains the authority and rejects forged tokens with 401.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Accepts both URL-safe and standard alphabets, padded or not.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not valid base64")]
    Encoding,
    #[error("token payload is not valid JSON: {0}")]
    Payload(String),
}

/// Claims the client reads. Unknown claims are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Expiry, Unix seconds. NumericDate allows fractions; numeric strings
    /// are accepted too.
    #[serde(deserialize_with = "numeric_date")]
    pub exp: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumericDate {
    Number(f64),
    Text(String),
}

fn numeric_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match RawNumericDate::deserialize(deserializer)? {
        RawNumericDate::Number(n) => Ok(n),
        RawNumericDate::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| D::Error::custom(format!("exp is not numeric: {raw:?}"))),
    }
}

impl TokenClaims {
    /// Whether the token is expired at `now_ms` (Unix milliseconds).
    #[allow(clippy::cast_precision_loss)]
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms as f64 >= self.exp * 1000.0
    }
}

/// Decode the claims segment of `token`.
///
/// # Errors
///
/// Returns [`TokenError`] when the token has no payload segment, the segment
/// is not base64, or it does not hold a JSON object with a numeric `exp`.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let payload = token.split('.').nth(1).filter(|p| !p.is_empty()).ok_or(TokenError::MissingPayload)?;
    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .map_err(|_| TokenError::Encoding)?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))
}
