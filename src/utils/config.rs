use serde::Deserialize;
use std::env;

/// Runtime configuration, loaded from the environment at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Token issuance settings.
    pub auth: AuthConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

/// Token issuance settings.
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Symmetric signing secret; must be exactly 32 bytes.
    pub token_secret: String,
    /// Validity window of issued access tokens, in seconds.
    pub access_token_duration_secs: i64,
}

// The secret must never reach logs, so Debug redacts it.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"<redacted>")
            .field(
                "access_token_duration_secs",
                &self.access_token_duration_secs,
            )
            .finish()
    }
}

impl Config {
    /// Loads configuration from the environment, reading a `.env` file
    /// first if one is present.
    ///
    /// `TOKEN_SECRET` is required; everything else has a default.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
            },
            auth: AuthConfig {
                token_secret: env::var("TOKEN_SECRET")?,
                access_token_duration_secs: env::var("ACCESS_TOKEN_DURATION_SECS")
                    .unwrap_or_else(|_| "900".to_string())
                    .parse()?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_the_secret() {
        let auth = AuthConfig {
            token_secret: "0123456789abcdef0123456789abcdef".to_string(),
            access_token_duration_secs: 900,
        };

        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("0123456789abcdef"));
        assert!(rendered.contains("<redacted>"));
    }
}
