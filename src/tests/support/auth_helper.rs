use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::{TokenClaims, TokenProvider};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only_0123456789";
pub const TEST_ISSUER: &str = "portfolio";
pub const TEST_ADMIN_EMAIL: &str = "owner@example.com";

pub fn test_jwt_service() -> JwtTokenService {
    let config = JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        access_token_expiry: 3600,
    };
    JwtTokenService::new(config)
}

/// Registered as `web::Data<Arc<dyn TokenProvider + Send + Sync>>`.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// `Authorization` header carrying a valid admin access token.
pub fn bearer() -> (&'static str, String) {
    let token = test_jwt_service()
        .generate_access_token(TEST_ADMIN_EMAIL)
        .expect("test token");
    ("Authorization", format!("Bearer {token}"))
}

/// Correctly signed token whose `token_type` is `token_type`.
pub fn token_with_type(token_type: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: TEST_ADMIN_EMAIL.to_string(),
        exp: now + 600,
        iat: now,
        nbf: now,
        iss: TEST_ISSUER.to_string(),
        token_type: token_type.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("encode test token")
}
