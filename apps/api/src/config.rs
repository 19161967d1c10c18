use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; unparseable values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Parent of the per-request compile directories.
    pub work_dir: PathBuf,
    pub latex_compiler: String,
    pub compile_timeout_secs: u64,
    pub cleanup_grace_secs: u64,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            work_dir: std::env::temp_dir().join("resumify"),
            latex_compiler: "pdflatex".to_string(),
            compile_timeout_secs: 30,
            cleanup_grace_secs: 60,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: env_or("RUST_LOG", defaults.rust_log)?,
            work_dir: env_or("WORK_DIR", defaults.work_dir)?,
            latex_compiler: env_or("LATEX_COMPILER", defaults.latex_compiler)?,
            compile_timeout_secs: env_or("COMPILE_TIMEOUT_SECS", defaults.compile_timeout_secs)?,
            cleanup_grace_secs: env_or("CLEANUP_GRACE_SECS", defaults.cleanup_grace_secs)?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_uses_default() {
        let port: u16 = env_or("RESUMIFY_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_set_variable_is_parsed() {
        std::env::set_var("RESUMIFY_TEST_TIMEOUT", " 45 ");
        let secs: u64 = env_or("RESUMIFY_TEST_TIMEOUT", 30).unwrap();
        assert_eq!(secs, 45);
    }

    #[test]
    fn test_invalid_variable_is_an_error() {
        std::env::set_var("RESUMIFY_TEST_BAD_PORT", "eighty");
        let err = env_or::<u16>("RESUMIFY_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("RESUMIFY_TEST_BAD_PORT"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.latex_compiler, "pdflatex");
        assert_eq!(config.compile_timeout_secs, 30);
        assert_eq!(config.cleanup_grace_secs, 60);
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert!(config.work_dir.ends_with("resumify"));
    }
}
