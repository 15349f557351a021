//! Access-token verification.
//!
//! Access tokens are HS256-signed JWTs minted by the identity provider
//! and presented by clients as `Authorization: Bearer <token>`. This
//! module verifies the signature, expiry, issuer, and audience, and
//! exposes the decoded [`Claims`] to the permission guards.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use brewhouse_core::permission::Permission;

use super::AuthError;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the identity provider's stable user identifier.
    pub sub: String,
    /// Issuer URL of the identity provider.
    pub iss: String,
    /// Audience this token was minted for (our API identifier).
    pub aud: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Permissions granted to the subject. Tokens without the claim
    /// decode as an empty set and fail every permission check.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Claims {
    /// Whether this token grants the given permission.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.iter().any(|p| p == permission.as_str())
    }
}

/// Configuration for access-token verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
    /// Expected `iss` claim.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var        | Required |
    /// |----------------|----------|
    /// | `JWT_SECRET`   | **yes**  |
    /// | `JWT_ISSUER`   | **yes**  |
    /// | `JWT_AUDIENCE` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if any variable is not set, or if `JWT_SECRET` is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let issuer =
            std::env::var("JWT_ISSUER").expect("JWT_ISSUER must be set in the environment");
        let audience =
            std::env::var("JWT_AUDIENCE").expect("JWT_AUDIENCE must be set in the environment");

        Self {
            secret,
            issuer,
            audience,
        }
    }
}

/// Verify an access token and return the embedded [`Claims`].
///
/// Checks the signature, expiration (with the library's default
/// 60-second leeway), issuer, and audience. An expired token is
/// reported as [`AuthError::TokenExpired`]; every other failure is
/// [`AuthError::InvalidToken`].
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::default(); // HS256, validates exp
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken(err.to_string()),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{encode, EncodingKey, Header};

    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            issuer: "https://idp.example.test/".to_string(),
            audience: "drinks".to_string(),
        }
    }

    /// Mint a token for the given claims with the test secret.
    fn mint<T: serde::Serialize>(claims: &T, config: &JwtConfig) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed")
    }

    fn valid_claims(config: &JwtConfig, permissions: &[&str]) -> Claims {
        let now = chrono::Utc::now().timestamp();
        Claims {
            sub: "auth0|barista".to_string(),
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            iat: now,
            exp: now + 3600,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_verify_valid_token() {
        let config = test_config();
        let token = mint(&valid_claims(&config, &["read-detail", "create"]), &config);

        let claims = verify_token(&token, &config).expect("verification should succeed");
        assert_eq!(claims.sub, "auth0|barista");
        assert!(claims.has_permission(Permission::ReadDetail));
        assert!(claims.has_permission(Permission::Create));
        assert!(!claims.has_permission(Permission::Delete));
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let mut claims = valid_claims(&config, &[]);
        claims.iat = now - 600;
        claims.exp = now - 300; // expired 5 minutes ago (well past leeway)

        let token = mint(&claims, &config);

        let result = verify_token(&token, &config);
        assert!(
            matches!(result, Err(AuthError::TokenExpired)),
            "expired token must fail as TokenExpired, got {result:?}"
        );
    }

    #[test]
    fn test_different_secret_fails() {
        let config = test_config();
        let token = mint(&valid_claims(&config, &[]), &config);

        let mut other = test_config();
        other.secret = "a-completely-different-secret".to_string();

        let result = verify_token(&token, &other);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_issuer_fails() {
        let config = test_config();
        let mut claims = valid_claims(&config, &[]);
        claims.iss = "https://rogue.example.test/".to_string();

        let result = verify_token(&mint(&claims, &config), &config);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_audience_fails() {
        let config = test_config();
        let mut claims = valid_claims(&config, &[]);
        claims.aud = "some-other-api".to_string();

        let result = verify_token(&mint(&claims, &config), &config);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_missing_permissions_claim_decodes_empty() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();

        // No `permissions` key at all.
        let raw = serde_json::json!({
            "sub": "auth0|visitor",
            "iss": config.issuer,
            "aud": config.audience,
            "iat": now,
            "exp": now + 3600,
        });

        let claims = verify_token(&mint(&raw, &config), &config)
            .expect("token without permissions should still verify");
        assert!(claims.permissions.is_empty());
        assert!(!claims.has_permission(Permission::ReadDetail));
    }
}
