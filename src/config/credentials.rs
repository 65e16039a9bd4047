//! Transport credentials

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Credentials for the chat transport
#[derive(Debug, Deserialize)]
pub struct CredentialsConfig {
    /// Bot access token
    pub bot_token: SecretString,
}

impl CredentialsConfig {
    /// Validate credentials configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bot_token.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("BOT_TOKEN"));
        }
        Ok(())
    }
}
