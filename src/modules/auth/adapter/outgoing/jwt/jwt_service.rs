use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use super::jwt_config::JwtConfig;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

/// Verifies HS256 bearer tokens issued by the external identity service.
#[derive(Debug, Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenProvider for JwtTokenService {
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;

        let decoded = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.config.secret_key.as_bytes()),
            &validation,
        )
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::TokenExpired,
            ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::MalformedToken,
        })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    const SECRET: &str = "test-secret-key-that-is-long-enough!";

    fn service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig::for_tests(SECRET))
    }

    fn mint(secret: &str, issued_at: i64, expires_at: i64, not_before: i64) -> String {
        let claims = TokenClaims {
            sub: Uuid::new_v4(),
            exp: expires_at,
            iat: issued_at,
            nbf: not_before,
            token_type: "access".to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_yields_claims() {
        let now = Utc::now().timestamp();
        let token = mint(SECRET, now, now + 600, now);

        let claims = service().verify_token(&token).unwrap();

        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let token = mint(SECRET, now - 1200, now - 600, now - 1200);

        let result = service().verify_token(&token);

        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }

    #[test]
    fn token_before_nbf_is_rejected() {
        let now = Utc::now().timestamp();
        let token = mint(SECRET, now, now + 600, now + 300);

        let result = service().verify_token(&token);

        assert!(matches!(result, Err(TokenError::TokenNotYetValid)));
    }

    #[test]
    fn token_signed_with_wrong_secret_is_rejected() {
        let now = Utc::now().timestamp();
        let token = mint("another-secret-key-that-is-long-enough", now, now + 600, now);

        let result = service().verify_token(&token);

        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let result = service().verify_token("not.a.token");

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }
}
