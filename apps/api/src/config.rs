use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::skills::catalog::DEFAULT_ROLE;

const DEFAULT_MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Role used when a request names a role the catalog does not know.
    pub default_role: String,
    /// JSON file replacing the built-in role catalog.
    pub role_catalog_path: Option<PathBuf>,
    pub max_resume_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_role: DEFAULT_ROLE.to_string(),
            role_catalog_path: None,
            max_resume_bytes: DEFAULT_MAX_RESUME_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            default_role: lookup("DEFAULT_ROLE")
                .filter(|r| !r.trim().is_empty())
                .unwrap_or(defaults.default_role),
            role_catalog_path: lookup("ROLE_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_resume_bytes: match lookup("MAX_RESUME_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_RESUME_BYTES must be a positive integer")?,
                None => defaults.max_resume_bytes,
            },
        })
    }
}
