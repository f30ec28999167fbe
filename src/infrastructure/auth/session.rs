use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::settings::AppConfig;

/// Checks whether a request carries a live session issued by the external
/// admin surface. This service never issues tokens itself; the probe only
/// gates things like the dashboard link in the footer.
#[derive(Clone)]
pub struct SessionVerifier {
    decoding: DecodingKey,
}

#[derive(Debug, Deserialize)]
struct SessionClaims {
    #[allow(dead_code)]
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

impl SessionVerifier {
    pub fn new(config: &AppConfig) -> Self {
        let secret = Zeroizing::new(config.session_token_secret.clone());
        SessionVerifier {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Boolean-ish session presence: any malformed, unsigned or expired
    /// token simply reads as "not authenticated", never as an error.
    pub fn is_authenticated(&self, authorization: Option<&str>) -> bool {
        let Some(token) = authorization.and_then(|h| h.strip_prefix("Bearer ")) else {
            return false;
        };

        decode::<SessionClaims>(token, &self.decoding, &Validation::new(Algorithm::HS256)).is_ok()
    }
}
