// src/config.rs
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_SYSTEM_PROMPT: &str = "Vous êtes un assistant IA utile et amical.";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Parameters of every upstream completion call.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSettings {
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub base_url: String,
    pub chat: ChatSettings,
    pub timeout: Duration,
    pub max_retries: u32,
    pub bind_addr: String,
    pub admin_key: Option<String>,
}

// Keeps the credentials out of logs.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("chat", &self.chat)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("bind_addr", &self.bind_addr)
            .field("admin_key", &self.admin_key.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let base_url = get("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "OPENAI_BASE_URL",
                reason: "must start with http:// or https://".to_string(),
            });
        }

        let mut chat = ChatSettings::default();
        if let Some(model) = get("CHAT_MODEL") {
            chat.model = model;
        }
        if let Some(prompt) = get("CHAT_SYSTEM_PROMPT") {
            chat.system_prompt = prompt;
        }

        let timeout_secs = parse_or(get("UPSTREAM_TIMEOUT_SECS"), "UPSTREAM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "UPSTREAM_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }
        let max_retries = parse_or(get("UPSTREAM_MAX_RETRIES"), "UPSTREAM_MAX_RETRIES", 0u32)?;

        Ok(Self {
            api_key,
            base_url,
            chat,
            timeout: Duration::from_secs(timeout_secs),
            max_retries,
            bind_addr: get("GATEWAY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            admin_key: get("GATEWAY_ADMIN_KEY"),
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(v) => v.parse().map_err(|e: T::Err| ConfigError::Invalid { key, reason: e.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let cfg = GatewayConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.chat, ChatSettings::default());
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert_eq!(cfg.max_retries, 0);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert!(cfg.admin_key.is_none());
    }

    #[test]
    fn api_key_is_required() {
        let err = GatewayConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("OPENAI_API_KEY"));

        let err = GatewayConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("OPENAI_API_KEY"));
    }

    #[test]
    fn overrides_are_read() {
        let cfg = GatewayConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:1234/v1/"),
            ("CHAT_MODEL", "gpt-4o-mini"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
            ("UPSTREAM_MAX_RETRIES", "2"),
            ("GATEWAY_ADMIN_KEY", "admin"),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, "http://localhost:1234/v1");
        assert_eq!(cfg.chat.model, "gpt-4o-mini");
        assert_eq!(cfg.chat.max_tokens, 150);
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.max_retries, 2);
        assert_eq!(cfg.admin_key.as_deref(), Some("admin"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = GatewayConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("UPSTREAM_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "UPSTREAM_TIMEOUT_SECS", .. }));

        let err = GatewayConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "api.openai.com"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "OPENAI_BASE_URL", .. }));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let cfg = GatewayConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-secret")])).unwrap();
        assert!(!format!("{cfg:?}").contains("sk-secret"));
    }
}
