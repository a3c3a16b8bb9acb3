//! End-to-end test routes, compiled only with the `test-helpers`
//! feature. They mint tokens against the same JWT_SECRET the server
//! verifies with, so an external test suite can exercise the auth-gated
//! endpoints without an identity service.

use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::TokenClaims;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Debug)]
enum TokenKind {
    Valid,
    Expired,
    NotYetValid,
    InvalidSignature,
    Malformed,
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Valid" => Ok(TokenKind::Valid),
            "Expired" => Ok(TokenKind::Expired),
            "NotYetValid" => Ok(TokenKind::NotYetValid),
            "InvalidSignature" => Ok(TokenKind::InvalidSignature),
            "Malformed" => Ok(TokenKind::Malformed),
            _ => Err(format!("Unknown token_kind: {}", s)),
        }
    }
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Additional safety check
    if env == "production" {
        tracing::error!("🚨 Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Generate access tokens in various states (Valid, Expired, NotYetValid,
/// InvalidSignature, Malformed)
/// GET /test/token/{token_kind}/{user_id}
pub async fn generate_test_token(path: web::Path<(String, String)>) -> Result<HttpResponse> {
    let (token_kind_str, user_id_str) = path.into_inner();

    let user_id = Uuid::parse_str(&user_id_str)
        .map_err(|_| actix_web::error::ErrorBadRequest("Invalid UUID format"))?;

    let token_kind: TokenKind = token_kind_str
        .parse()
        .map_err(|e: String| actix_web::error::ErrorBadRequest(e))?;

    let valid_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "test-secret".to_string());

    // Intentionally wrong secret for InvalidSignature testing
    let invalid_secret = "wrong-secret";

    let now = Utc::now().timestamp();

    let (claims, secret) = match token_kind {
        TokenKind::Valid => {
            let claims = TokenClaims {
                sub: user_id,
                exp: now + 3600,
                iat: now,
                nbf: now - 32,
                token_type: "access".to_string(),
            };
            (claims, valid_secret.as_str())
        }
        TokenKind::Expired => {
            let claims = TokenClaims {
                sub: user_id,
                iat: now - 7200,
                nbf: now - 7200,
                exp: now - 60, // Expired 60 seconds ago
                token_type: "access".to_string(),
            };
            (claims, valid_secret.as_str())
        }
        TokenKind::NotYetValid => {
            let claims = TokenClaims {
                sub: user_id,
                iat: now,
                nbf: now + 300, // Not valid for another 5 minutes (> 30s leeway)
                exp: now + 3600,
                token_type: "access".to_string(),
            };
            (claims, valid_secret.as_str())
        }
        TokenKind::InvalidSignature => {
            let claims = TokenClaims {
                sub: user_id,
                iat: now,
                nbf: now,
                exp: now + 3600,
                token_type: "access".to_string(),
            };
            (claims, invalid_secret)
        }
        TokenKind::Malformed => {
            let malformed_token = format!("malformed.{}.token", Uuid::new_v4());
            return Ok(HttpResponse::Ok().json(TokenResponse {
                token: malformed_token,
            }));
        }
    };

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route(
                "/token/{token_kind}/{user_id}",
                web::get().to(generate_test_token),
            ),
    );
}
