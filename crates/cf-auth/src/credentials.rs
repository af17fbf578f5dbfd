//! API credentials and request signing
//!
//! Implements the HMAC-SHA512-over-SHA256 signature required by the
//! derivatives API's private endpoints.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::{Digest, Sha256, Sha512};

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// API credentials for authenticated requests
///
/// The secret is decoded from base64 once at construction, so a malformed
/// secret is rejected before any request is attempted. The decoded bytes are
/// zeroized when the Credentials are dropped.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (decoded from base64, zeroized on drop)
    secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key and a base64-encoded secret
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] if the secret is not valid
    /// base64.
    pub fn new(api_key: impl Into<String>, secret: impl AsRef<str>) -> AuthResult<Self> {
        let api_key = api_key.into();

        let decoded = BASE64
            .decode(secret.as_ref())
            .map_err(|e| AuthError::InvalidCredentials(format!("Invalid base64 secret: {}", e)))?;

        Ok(Self {
            api_key,
            secret: SecretBox::new(Box::new(decoded)),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `CF_API_KEY` and `CF_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("CF_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("CF_API_KEY".to_string()))?;
        let secret = std::env::var("CF_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("CF_API_SECRET".to_string()))?;

        Self::new(api_key, secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request
    ///
    /// Signature algorithm:
    /// 1. SHA256(post_data + nonce + endpoint)
    /// 2. HMAC-SHA512(decoded_secret, SHA256_result)
    /// 3. Base64 encode result
    ///
    /// # Arguments
    /// * `endpoint` - API endpoint path (e.g., "/api/v3/sendorder")
    /// * `nonce` - Nonce for this request; the empty string under V3
    /// * `post_data` - Concatenated query string and POST body
    ///
    /// # Returns
    /// Base64-encoded signature for the `Authent` header
    pub fn sign(&self, endpoint: &str, nonce: &str, post_data: &str) -> String {
        // Step 1: SHA256(post_data + nonce + endpoint)
        let mut sha256 = Sha256::new();
        sha256.update(post_data.as_bytes());
        sha256.update(nonce.as_bytes());
        sha256.update(endpoint.as_bytes());
        let digest = sha256.finalize();

        // Step 2: HMAC-SHA512 over the digest, keyed by the decoded secret
        let mut mac = HmacSha512::new_from_slice(self.secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(&digest);
        let result = mac.finalize();

        // Step 3: Base64 encode
        BASE64.encode(result.into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str =
        "kQH5HW/8p1uGOVjbgWA7FunAmGO8lsSUXNsu3eow76sz84Q18fWxnyRzBHCd3pd5nE9qa99HAZtuZuj6F1huXg==";

    #[test]
    fn test_invalid_base64_secret_rejected() {
        let result = Credentials::new("key", "not base64!!!");
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key", "dGVzdF9zZWNyZXQ=").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_known_answer_empty_data() {
        // Precomputed: SHA256("" + "" + "/api/v3/instruments"),
        // HMAC-SHA512 keyed by the decoded test secret, base64.
        let creds = Credentials::new("API_KEY", TEST_SECRET).unwrap();
        let signature = creds.sign("/api/v3/instruments", "", "");
        assert_eq!(
            signature,
            "Qw08gFVTXc2il2TsrTUZ16TTzQVgjcEUn1VwnpdMEYkDw/i4TamXtdd5yV/8gO8+QDtZ/C/xTawG/0TWjC/U0A=="
        );
    }

    #[test]
    fn test_known_answer_query_data() {
        let creds = Credentials::new("API_KEY", TEST_SECRET).unwrap();
        let signature = creds.sign("/api/v3/orderbook", "", "symbol=PI_XBTUSD");
        assert_eq!(
            signature,
            "vKCewVjuP5mTBJFucjSm10obcV47MG2U/f6RdpS4ukVtkp0fBW7O+0OIJqqSIXvqEkvEobhA/4cyQpf5ss56aA=="
        );
    }

    #[test]
    fn test_known_answer_post_body() {
        let creds = Credentials::new("API_KEY", TEST_SECRET).unwrap();
        let signature = creds.sign(
            "/api/v3/sendorder",
            "",
            "orderType=lmt&symbol=PI_XBTUSD&side=buy&size=1&limitPrice=1",
        );
        assert_eq!(
            signature,
            "KylMiqhjQfPiIh1EUOgDr4NpMFL19XAxplmSt3Est3m9NO3zGkuEnRP+p0eyh4/ETiF97sROOCI5eLSYjfx/Pw=="
        );
    }

    #[test]
    fn test_known_answer_with_nonce() {
        // V2 variant: the nonce sits between the data and the endpoint path.
        let creds = Credentials::new("API_KEY", TEST_SECRET).unwrap();
        let signature = creds.sign("/api/v3/accounts", "16164923765940000", "");
        assert_eq!(
            signature,
            "oBJENEn//0OhqbdrR8Gng6GOYMA4F2GNFjGMof73gEyMe+KLMdWtsFZKPO7wOUiqLfMg8RLldrcL0iZZVYSAiQ=="
        );
    }

    #[test]
    fn test_signing_deterministic() {
        let creds = Credentials::new("API_KEY", TEST_SECRET).unwrap();
        let a = creds.sign("/api/v3/fills", "", "lastFillTime=2016-02-01T00:00:00.000Z");
        let b = creds.sign("/api/v3/fills", "", "lastFillTime=2016-02-01T00:00:00.000Z");
        assert_eq!(a, b);
        assert!(BASE64.decode(&a).is_ok());
    }
}
