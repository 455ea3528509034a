use crate::config::{env_or, required, ConfigError};

const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(
        secret_key: String,
        issuer: String,
        access_token_expiry: i64,
    ) -> Result<Self, ConfigError> {
        // HS256 wants at least 32 bytes of key.
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::invalid(
                "JWT_SECRET",
                format!("must be at least {MIN_SECRET_LEN} characters"),
            ));
        }

        if !(1..=MAX_ACCESS_EXPIRY).contains(&access_token_expiry) {
            return Err(ConfigError::invalid(
                "JWT_ACCESS_EXPIRY",
                format!("must be between 1 and {MAX_ACCESS_EXPIRY} seconds"),
            ));
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            required("JWT_SECRET")?,
            env_or("JWT_ISSUER", "portfolio".to_string())?,
            env_or("JWT_ACCESS_EXPIRY", 1800)?,
        )
    }
}
