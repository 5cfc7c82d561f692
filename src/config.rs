use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};

/// Placeholder shipped in the sample `.env`; treated as "no key".
const PLACEHOLDER_KEY: &str = "sk-votre_cle_ici";

const DEFAULT_HUGGINGFACE_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-medium";

/// Sampling parameters sent with every chat completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: usize,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            top_p: 0.9,
            max_tokens: 4000,
            frequency_penalty: 0.3,
            presence_penalty: 0.3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub huggingface_api_key: Option<String>,
    pub huggingface_model_url: String,
    pub sampling: Sampling,
    pub request_timeout: Duration,
    pub database_path: PathBuf,
    pub templates_glob: String,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            openai_api_key: None,
            openai_base_url: "https://api.openai.com".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            huggingface_api_key: None,
            huggingface_model_url: DEFAULT_HUGGINGFACE_MODEL_URL.to_string(),
            sampling: Sampling::default(),
            request_timeout: Duration::from_secs(60),
            database_path: PathBuf::from("tutor.db"),
            templates_glob: "templates/**/*".to_string(),
            static_dir: "./static".to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment. Call after
    /// `dotenv()` so `.env` values are visible.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        let sampling = Sampling {
            temperature: env_parse("TEMPERATURE", defaults.sampling.temperature),
            top_p: env_parse("TOP_P", defaults.sampling.top_p),
            max_tokens: clamp_max_tokens(env_parse("MAX_TOKENS", defaults.sampling.max_tokens)),
            frequency_penalty: env_parse("FREQUENCY_PENALTY", defaults.sampling.frequency_penalty),
            presence_penalty: env_parse("PRESENCE_PENALTY", defaults.sampling.presence_penalty),
        };

        let config = Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env_parse("PORT", defaults.port),
            openai_api_key: usable_key(env::var("OPENAI_API_KEY").ok()),
            openai_base_url: env::var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_model: env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            huggingface_api_key: usable_key(env::var("HUGGINGFACE_API_KEY").ok()),
            huggingface_model_url: env::var("HUGGINGFACE_MODEL_URL")
                .unwrap_or(defaults.huggingface_model_url),
            sampling,
            request_timeout: Duration::from_secs(env_parse("REQUEST_TIMEOUT_SECS", 60)),
            database_path: env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            templates_glob: env::var("TEMPLATES_GLOB").unwrap_or(defaults.templates_glob),
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        };

        config.log_provider_status();
        config
    }

    fn log_provider_status(&self) {
        match (&self.openai_api_key, &self.huggingface_api_key) {
            (Some(_), _) => info!("OPENAI_API_KEY configured, using OpenAI"),
            (None, Some(_)) => info!("HUGGINGFACE_API_KEY configured, using Hugging Face"),
            (None, None) => {
                warn!("No API key configured, answering with the built-in lessons");
            }
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Keeps `max_tokens` inside what hosted chat endpoints accept.
pub fn clamp_max_tokens(max_tokens: usize) -> usize {
    if max_tokens < 100 {
        info!("Increasing max_tokens from {} to minimum of 100", max_tokens);
        100
    } else if max_tokens > 4096 {
        info!("Capping max_tokens from {} to maximum of 4096", max_tokens);
        4096
    } else {
        max_tokens
    }
}

/// Returns the key only when it is non-blank and not the sample placeholder.
pub fn usable_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != PLACEHOLDER_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_placeholder_keys_are_unusable() {
        assert_eq!(usable_key(None), None);
        assert_eq!(usable_key(Some("   ".into())), None);
        assert_eq!(usable_key(Some("sk-votre_cle_ici".into())), None);
        assert_eq!(usable_key(Some(" sk-real ".into())), Some("sk-real".to_string()));
    }

    #[test]
    fn max_tokens_is_clamped() {
        assert_eq!(clamp_max_tokens(10), 100);
        assert_eq!(clamp_max_tokens(9000), 4096);
        assert_eq!(clamp_max_tokens(4000), 4000);
    }

    #[test]
    fn defaults_select_the_rule_engine() {
        let config = Config::default();
        assert!(config.openai_api_key.is_none());
        assert!(config.huggingface_api_key.is_none());
        assert_eq!(config.sampling.max_tokens, 4000);
    }
}
