use std::fmt;

use argon2::password_hash::PasswordHash;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};

use crate::config::{required, ConfigError};

// ========================= Admin credentials =========================

/// The site owner's login, loaded from configuration.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password_hash: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

impl AdminCredentials {
    pub fn new(email: &str, password_hash: String) -> Result<Self, ConfigError> {
        let email = normalize_email(email)
            .map_err(|e| ConfigError::invalid("ADMIN_EMAIL", e.to_string()))?;

        PasswordHash::new(&password_hash)
            .map_err(|e| ConfigError::invalid("ADMIN_PASSWORD_HASH", e.to_string()))?;

        Ok(Self {
            email,
            password_hash,
        })
    }

    /// Reads `ADMIN_EMAIL` and `ADMIN_PASSWORD_HASH` (argon2 PHC string).
    pub fn from_env() -> Result<Self, ConfigError> {
        let email = required("ADMIN_EMAIL")?;
        let password_hash = required("ADMIN_PASSWORD_HASH")?;
        Self::new(&email, password_hash)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

// ========================= Login command =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

/// Validated login input.
#[derive(Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginCommandError> {
        let email = normalize_email(&email)?;

        if password.trim().is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            email: String,
            password: String,
        }

        let h = Helper::deserialize(deserializer)?;
        LoginCommand::new(h.email, h.password).map_err(serde::de::Error::custom)
    }
}

fn normalize_email(email: &str) -> Result<String, LoginCommandError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(LoginCommandError::EmptyEmail);
    }

    if !EmailAddress::is_valid(email) {
        return Err(LoginCommandError::InvalidEmailFormat);
    }

    Ok(email.to_lowercase())
}
