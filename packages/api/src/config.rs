//! Backend location.
//!
//! The base URL is resolved once per process, in order:
//!
//! 1. `WORKSHOP_API_URL` at compile time (how the browser build gets it)
//! 2. `WORKSHOP_API_URL` at runtime, after loading `.env` (native only)
//! 3. `http://localhost:3000/api`

use std::sync::OnceLock;

pub const API_URL_VAR: &str = "WORKSHOP_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Resolve from the build and process environment.
    pub fn from_env() -> Self {
        if let Some(url) = option_env!("WORKSHOP_API_URL").filter(|u| !u.trim().is_empty()) {
            return Self::new(url);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(API_URL_VAR) {
                if !url.trim().is_empty() {
                    return Self::new(url);
                }
            }
        }

        tracing::debug!("{API_URL_VAR} not set, using {DEFAULT_API_URL}");
        Self::new(DEFAULT_API_URL)
    }

    /// Process-wide configuration, resolved on first use.
    pub fn global() -> &'static ApiConfig {
        static CONFIG: OnceLock<ApiConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::from_env)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path starting with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
