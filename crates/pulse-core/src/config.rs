// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Pulse.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `PULSE_`)
//! 2. Config file: `~/.config/pulse/config.toml`
//! 3. Built-in defaults
//!
//! Secrets are not part of this file; see [`crate::auth`].
//!
//! # Examples
//!
//! ```bash
//! # Analyze issues from another repository
//! PULSE_GITHUB__OWNER=rust-lang PULSE_GITHUB__REPO=cargo pulse-server
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::PulseError;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Target repository and GitHub API settings.
    pub github: GitHubConfig,
    /// AI provider settings.
    pub ai: AiConfig,
    /// Corpus assembly settings.
    pub analysis: AnalysisConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

/// Target repository and GitHub API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// REST API base URL.
    pub api_base: String,
    /// Page size used when listing comments (GitHub caps this at 100).
    pub per_page: u8,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: "espressif".to_string(),
            repo: "esp-idf".to_string(),
            api_base: "https://api.github.com".to_string(),
            per_page: 100,
        }
    }
}

/// AI provider settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Provider name used in logs and error messages.
    pub provider: String,
    /// Chat completions endpoint.
    pub api_url: String,
    /// Model identifier.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4".to_string(),
            timeout_seconds: 60,
        }
    }
}

/// Corpus assembly settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum characters kept per comment before the ellipsis.
    pub max_comment_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_comment_length: crate::corpus::DEFAULT_MAX_COMMENT_LENGTH,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Directory served for `/` and other static paths.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
            static_dir: PathBuf::from("."),
        }
    }
}

/// Returns the Pulse configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/pulse`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("pulse");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("pulse")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration from the default path.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `PULSE_` and double underscore
/// for nested keys (e.g., `PULSE_GITHUB__REPO`).
///
/// # Errors
///
/// Returns `PulseError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, PulseError> {
    load_config_from(&config_file_path())
}

/// Load application configuration from an explicit file path.
///
/// The file is optional; environment variables still override it.
///
/// # Errors
///
/// Returns `PulseError::Config` if the file exists but is invalid.
pub fn load_config_from(path: &Path) -> Result<AppConfig, PulseError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("PULSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    if app_config.github.per_page == 0 {
        return Err(PulseError::Config {
            message: "github.per_page must be at least 1".to_string(),
        });
    }

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config_from(&dir.path().join("missing.toml"))
            .expect("should load with defaults");

        assert_eq!(config.github.owner, "espressif");
        assert_eq!(config.github.repo, "esp-idf");
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.ai.model, "gpt-4");
        assert_eq!(config.ai.provider, "openai");
        assert_eq!(config.analysis.max_comment_length, 200);
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    #[serial]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        writeln!(
            file,
            r#"
[github]
owner = "rust-lang"
repo = "cargo"

[analysis]
max_comment_length = 80
"#
        )
        .expect("write config");

        let config = load_config_from(file.path()).expect("should load file");
        assert_eq!(config.github.owner, "rust-lang");
        assert_eq!(config.github.repo, "cargo");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.analysis.max_comment_length, 80);
        assert_eq!(config.ai.model, "gpt-4");
    }

    #[test]
    #[serial]
    #[allow(unsafe_code)]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        // SAFETY: serialized test; no other threads touch these vars.
        unsafe {
            std::env::set_var("PULSE_GITHUB__REPO", "esp-matter");
            std::env::set_var("PULSE_SERVER__PORT", "8080");
        }

        let result = load_config_from(&dir.path().join("missing.toml"));

        unsafe {
            std::env::remove_var("PULSE_GITHUB__REPO");
            std::env::remove_var("PULSE_SERVER__PORT");
        }

        let config = result.expect("should load");
        assert_eq!(config.github.repo, "esp-matter");
        assert_eq!(config.github.owner, "espressif");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    #[serial]
    fn test_zero_page_size_rejected() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "[github]\nper_page = 0").expect("write config");

        let err = load_config_from(file.path()).expect_err("should reject");
        assert!(err.to_string().contains("per_page"));
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with("pulse/config.toml"));
    }
}
