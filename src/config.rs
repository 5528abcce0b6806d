//! Application configuration loaded from environment variables.
//!
//! Secrets are read once at startup and cached in memory. The FaceIO
//! server key and the QR token secret never leave the server; only the
//! FaceIO public ID and the identity provider API key are publishable.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// GCP project ID (Firestore)
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Identity provider (Identity Toolkit) API key (publishable)
    pub identity_api_key: String,
    /// Identity provider base URL (overridable for tests)
    pub identity_base_url: String,
    /// FaceIO application public ID (publishable, shipped to the widget)
    pub faceio_public_id: String,
    /// FaceIO REST base URL (overridable for tests)
    pub faceio_base_url: String,

    // --- Secrets ---
    /// FaceIO server API key (used only for the delete call, never shipped)
    pub faceio_api_key: String,
    /// HMAC secret for rotating QR tokens (raw bytes)
    pub qr_token_secret: Vec<u8>,
    /// JWT signing key for session tokens (raw bytes)
    pub session_signing_key: Vec<u8>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// For local development, secrets can be set via a `.env` file. In
    /// production they are injected as environment variables by the
    /// deployment (Cloud Run secret bindings).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            identity_api_key: env::var("IDENTITY_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("IDENTITY_API_KEY"))?,
            identity_base_url: env::var("IDENTITY_BASE_URL")
                .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".to_string()),
            faceio_public_id: env::var("FACEIO_PUBLIC_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FACEIO_PUBLIC_ID"))?,
            faceio_base_url: env::var("FACEIO_BASE_URL")
                .unwrap_or_else(|_| "https://api.faceio.net".to_string()),
            faceio_api_key: env::var("FACEIO_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FACEIO_API_KEY"))?,
            qr_token_secret: env::var("QR_TOKEN_SECRET")
                .map_err(|_| ConfigError::Missing("QR_TOKEN_SECRET"))?
                .into_bytes(),
            session_signing_key: env::var("SESSION_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("SESSION_SIGNING_KEY"))?
                .into_bytes(),
        })
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            identity_api_key: "test_identity_key".to_string(),
            identity_base_url: "http://127.0.0.1:0".to_string(),
            faceio_public_id: "fio_test_app".to_string(),
            faceio_base_url: "http://127.0.0.1:0".to_string(),
            faceio_api_key: "test_faceio_key".to_string(),
            qr_token_secret: b"test_qr_token_secret_32_bytes!!!".to_vec(),
            session_signing_key: b"test_session_key_32_bytes_min!!!".to_vec(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("IDENTITY_API_KEY", "test_key");
        env::set_var("FACEIO_PUBLIC_ID", "fio_app");
        env::set_var("FACEIO_API_KEY", "server_key");
        env::set_var("QR_TOKEN_SECRET", "qr_secret_32_bytes_for_testing!!");
        env::set_var("SESSION_SIGNING_KEY", "session_key_32_bytes_for_test!!!");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.identity_api_key, "test_key");
        assert_eq!(config.faceio_public_id, "fio_app");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.identity_base_url,
            "https://identitytoolkit.googleapis.com/v1"
        );
        assert_eq!(config.faceio_base_url, "https://api.faceio.net");
    }
}
