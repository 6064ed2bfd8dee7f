//! Configuration management for web service
//!
//! Supports loading configuration from environment variables with fallback to defaults.

use std::path::PathBuf;

pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost,http://localhost:8080";
pub const DEFAULT_PROMPTS_PATH: &str = "custom_prompts.json";
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub prompts_path: PathBuf,
    pub max_request_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            prompts_path: PathBuf::from(DEFAULT_PROMPTS_PATH),
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

impl ServiceConfig {
    /// Load ServiceConfig from environment variables
    ///
    /// Environment variables:
    /// - `APP_HOST`: bind address (default: 0.0.0.0)
    /// - `APP_PORT`: bind port (default: 8000)
    /// - `ALLOWED_ORIGINS`: comma-separated CORS origins
    ///   (default: http://localhost,http://localhost:8080)
    /// - `CUSTOM_PROMPTS_PATH`: scenario prompt file (default: custom_prompts.json)
    /// - `MAX_REQUEST_BYTES`: JSON body limit (default: 16 MiB)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("APP_HOST").unwrap_or(defaults.host),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.allowed_origins),
            prompts_path: std::env::var("CUSTOM_PROMPTS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.prompts_path),
            max_request_bytes: std::env::var("MAX_REQUEST_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_request_bytes),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    const ENV_VARS: [&str; 5] = [
        "APP_HOST",
        "APP_PORT",
        "ALLOWED_ORIGINS",
        "CUSTOM_PROMPTS_PATH",
        "MAX_REQUEST_BYTES",
    ];

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvGuard {
        previous: Vec<(&'static str, Option<OsString>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl EnvGuard {
        fn new() -> Self {
            let lock = env_lock().lock().unwrap_or_else(|e| e.into_inner());
            let previous = ENV_VARS
                .iter()
                .map(|name| (*name, std::env::var_os(name)))
                .collect();
            for name in ENV_VARS {
                std::env::remove_var(name);
            }
            Self {
                previous,
                _lock: lock,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (name, value) in &self.previous {
                match value {
                    Some(value) => std::env::set_var(name, value),
                    None => std::env::remove_var(name),
                }
            }
        }
    }

    #[test]
    fn test_service_config_has_sensible_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost", "http://localhost:8080"]
        );
        assert!(config.max_request_bytes > 2 * 1024 * 1024);
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins(" https://a.example , ,https://b.example,"),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_from_env_overrides_defaults() {
        let _guard = EnvGuard::new();
        std::env::set_var("APP_HOST", "127.0.0.1");
        std::env::set_var("APP_PORT", "9000");
        std::env::set_var("ALLOWED_ORIGINS", "https://a.example, https://b.example");
        std::env::set_var("CUSTOM_PROMPTS_PATH", "/etc/skill/prompts.json");
        std::env::set_var("MAX_REQUEST_BYTES", "1024");

        let config = ServiceConfig::from_env();
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.prompts_path, PathBuf::from("/etc/skill/prompts.json"));
        assert_eq!(config.max_request_bytes, 1024);
    }

    #[test]
    fn test_from_env_falls_back_on_unparsable_numbers() {
        let _guard = EnvGuard::new();
        std::env::set_var("APP_PORT", "eighty");
        std::env::set_var("MAX_REQUEST_BYTES", "-1");

        let config = ServiceConfig::from_env();
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_request_bytes, DEFAULT_MAX_REQUEST_BYTES);
    }

    #[test]
    fn test_from_env_without_variables_uses_defaults() {
        let _guard = EnvGuard::new();
        assert_eq!(ServiceConfig::from_env(), ServiceConfig::default());
    }
}
