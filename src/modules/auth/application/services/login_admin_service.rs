use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::auth::application::domain::{AdminCredentials, LoginCommand};
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LoginError, LoginResult,
};
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};

pub struct LoginAdminService {
    credentials: AdminCredentials,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginAdminService {
    pub fn new(
        credentials: AdminCredentials,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            credentials,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        // The hash is checked even for an unknown email so both paths cost the same.
        let password_ok = self
            .hasher
            .verify_password(command.password(), self.credentials.password_hash())
            .await
            .map_err(|e| {
                error!(error = %e, "password verification failed");
                LoginError::Internal(e.to_string())
            })?;

        if !password_ok || command.email() != self.credentials.email() {
            warn!(email = %command.email(), "rejected admin login");
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(self.credentials.email())
            .map_err(|e| {
                error!(error = %e, "token generation failed");
                LoginError::Internal(e.to_string())
            })?;

        info!(email = %self.credentials.email(), "admin logged in");

        Ok(LoginResult {
            access_token,
            token_type: "Bearer",
            expires_in: self.tokens.access_token_ttl(),
            email: self.credentials.email().to_string(),
        })
    }
}
