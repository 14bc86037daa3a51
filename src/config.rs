//! Application configuration
//!
//! Upstream endpoints and credentials are explicit values handed to the
//! adapter constructors. The process environment is read in one place only.

use crate::error::{AppError, Result};
use std::path::PathBuf;

/// Default Gemini API base URL
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Configuration for the text-generation service
#[derive(Debug, Clone)]
pub struct GenerationServiceConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

/// Configuration for the auth verification service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    pub api_base: String,
    pub service_key: String,
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub generation: GenerationServiceConfig,
    pub auth: AuthServiceConfig,
    pub database_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `GEMINI_API_KEY`, `SUPABASE_URL` and `SUPABASE_SERVICE_KEY` are
    /// required; the rest have defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            generation: GenerationServiceConfig {
                api_base: env_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
                api_key: require_env("GEMINI_API_KEY")?,
                model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            },
            auth: AuthServiceConfig {
                api_base: require_env("SUPABASE_URL")?,
                service_key: require_env("SUPABASE_SERVICE_KEY")?,
            },
            database_path: env_or("MEETING_CLERK_DB", "meeting-clerk.db").into(),
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| AppError::Config(format!("{} not found in environment variables", name)))
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
