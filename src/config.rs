//! Application configuration loaded from environment variables.
//!
//! The store backend is chosen once at startup; there is no implicit
//! runtime fallback between backends.

use std::env;

/// Which activity-store backend to run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-process store, data lost on restart. Default for local dev.
    Memory,
    /// Firestore-backed durable store.
    Firestore,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL for CORS allow-listing
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Store backend selection
    pub store_backend: StoreBackend,
    /// GCP project ID (required for the firestore backend)
    pub gcp_project_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store_backend = match env::var("STORE_BACKEND").as_deref() {
            Ok("firestore") => StoreBackend::Firestore,
            Ok("memory") | Err(_) => StoreBackend::Memory,
            Ok(other) => return Err(ConfigError::InvalidBackend(other.to_string())),
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
            store_backend,
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            store_backend: StoreBackend::Memory,
            gcp_project_id: "test-project".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Unknown STORE_BACKEND value: {0} (expected 'memory' or 'firestore')")]
    InvalidBackend(String),
}
