use std::time::Duration;

use crate::error::{ChatClientError, Result};

pub const DEFAULT_API_VERSION: &str = "2024-05-01-preview";

/// Connection and sampling settings for the chat-completion deployment
#[derive(Debug, Clone, PartialEq)]
pub struct ChatClientConfig {
    pub api_key: String,
    pub endpoint: String,
    pub api_version: String,
    pub deployment: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for ChatClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: String::new(),
            api_version: DEFAULT_API_VERSION.to_string(),
            deployment: String::new(),
            temperature: 0.7,
            top_p: 0.95,
            max_tokens: 4096,
            timeout: Duration::from_secs(30),
            retry_attempts: 3,
            retry_delay: Duration::from_millis(500),
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl ChatClientConfig {
    /// Environment variables:
    /// - `AZURE_OPENAI_KEY`: API key
    /// - `AZURE_OPENAI_ENDPOINT`: resource endpoint, e.g. `https://my-resource.openai.azure.com`
    /// - `AZURE_OPENAI_API_VERSION`: API version (default: 2024-05-01-preview)
    /// - `AZURE_OPENAI_CHAT_DEPLOYMENT`: model deployment name
    ///
    /// Missing credentials are not an error here; see [`ChatClientConfig::validate`].
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(api_key) = non_empty_env("AZURE_OPENAI_KEY") {
            config.api_key = api_key;
        }
        if let Some(endpoint) = non_empty_env("AZURE_OPENAI_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(api_version) = non_empty_env("AZURE_OPENAI_API_VERSION") {
            config.api_version = api_version;
        }
        if let Some(deployment) = non_empty_env("AZURE_OPENAI_CHAT_DEPLOYMENT") {
            config.deployment = deployment;
        }
        config
    }

    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.api_key.trim().is_empty() {
            missing.push("AZURE_OPENAI_KEY");
        }
        if self.endpoint.trim().is_empty() {
            missing.push("AZURE_OPENAI_ENDPOINT");
        }
        if missing.is_empty() {
            log::debug!("Chat client configuration validated");
            Ok(())
        } else {
            log::error!("Missing required environment variables: {:?}", missing);
            Err(ChatClientError::Configuration(missing.join(", ")))
        }
    }

    /// `{endpoint}/openai/deployments/{deployment}/chat/completions`
    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint.trim_end_matches('/'),
            self.deployment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    const ENV_VARS: [&str; 4] = [
        "AZURE_OPENAI_KEY",
        "AZURE_OPENAI_ENDPOINT",
        "AZURE_OPENAI_API_VERSION",
        "AZURE_OPENAI_CHAT_DEPLOYMENT",
    ];

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Clears the Azure variables and restores them on drop
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

    fn configured() -> ChatClientConfig {
        ChatClientConfig {
            api_key: "key".to_string(),
            endpoint: "https://example.openai.azure.com/".to_string(),
            deployment: "gpt-4o".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_match_sampling_settings() {
        let config = ChatClientConfig::default();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_p, 0.95);
        assert_eq!(config.max_tokens, 4096);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_validate_requires_key_and_endpoint() {
        assert!(configured().validate().is_ok());

        let err = ChatClientConfig::default().validate().unwrap_err();
        match err {
            ChatClientError::Configuration(missing) => {
                assert_eq!(missing, "AZURE_OPENAI_KEY, AZURE_OPENAI_ENDPOINT")
            }
            other => panic!("Unexpected error {other:?}"),
        }

        let config = ChatClientConfig {
            endpoint: "   ".to_string(),
            ..configured()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        assert_eq!(
            configured().completions_url(),
            "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions"
        );
    }

    #[test]
    fn test_from_env_reads_azure_variables() {
        let _guard = EnvGuard::new();
        std::env::set_var("AZURE_OPENAI_KEY", "secret");
        std::env::set_var("AZURE_OPENAI_ENDPOINT", " https://res.openai.azure.com ");
        std::env::set_var("AZURE_OPENAI_API_VERSION", "2024-06-01");
        std::env::set_var("AZURE_OPENAI_CHAT_DEPLOYMENT", "gpt-4o-mini");

        let config = ChatClientConfig::from_env();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.endpoint, "https://res.openai.azure.com");
        assert_eq!(config.api_version, "2024-06-01");
        assert_eq!(config.deployment, "gpt-4o-mini");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_env_treats_blank_values_as_missing() {
        let _guard = EnvGuard::new();
        std::env::set_var("AZURE_OPENAI_KEY", "   ");
        std::env::set_var("AZURE_OPENAI_ENDPOINT", "https://res.openai.azure.com");
        std::env::set_var("AZURE_OPENAI_API_VERSION", "");

        let config = ChatClientConfig::from_env();
        assert!(config.api_key.is_empty());
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert!(config.deployment.is_empty());
        match config.validate() {
            Err(ChatClientError::Configuration(missing)) => assert_eq!(missing, "AZURE_OPENAI_KEY"),
            other => panic!("Unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_from_env_without_variables_uses_defaults() {
        let _guard = EnvGuard::new();
        assert_eq!(ChatClientConfig::from_env(), ChatClientConfig::default());
    }
}
