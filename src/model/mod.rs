pub mod huggingface;
pub mod openai;
pub mod prompt;

use anyhow::Result;
use log::{error, info, warn};
use reqwest::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;
use crate::tutor;
use crate::web::models::ConversationTurn;
use huggingface::HuggingFaceModel;
use openai::OpenAiModel;

/// Number of past exchanges replayed to the hosted model.
pub const HISTORY_TURNS: usize = 5;

const HUGGINGFACE_FALLBACK: &str = "Cher(e) élève, laisse-moi réfléchir un instant... \
Pour une meilleure expérience, configure une clé API OpenAI.";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider answered {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("provider response carried no text")]
    MissingContent,
}

/// Where answers come from, picked once from the configuration.
pub enum Provider {
    OpenAi(OpenAiModel),
    HuggingFace(HuggingFaceModel),
    RuleBased,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAi(_) => "openai",
            Provider::HuggingFace(_) => "huggingface",
            Provider::RuleBased => "rule-based",
        }
    }
}

pub struct ModelManager {
    pub provider: Provider,
}

impl ModelManager {
    pub fn new(config: &Config) -> Result<Self> {
        let provider = if let Some(key) = &config.openai_api_key {
            Provider::OpenAi(OpenAiModel::new(
                &config.openai_base_url,
                key.clone(),
                config.openai_model.clone(),
                config.sampling.clone(),
                config.request_timeout,
            )?)
        } else if let Some(key) = &config.huggingface_api_key {
            Provider::HuggingFace(HuggingFaceModel::new(
                config.huggingface_model_url.clone(),
                key.clone(),
                config.request_timeout,
            )?)
        } else {
            Provider::RuleBased
        };

        info!("Answer provider: {}", provider.name());
        Ok(Self { provider })
    }

    pub fn rule_based() -> Self {
        Self {
            provider: Provider::RuleBased,
        }
    }

    /// Answers a student message. Never fails: provider errors are logged and
    /// turned into a message for the student.
    pub async fn answer(&self, message: &str, history: &[ConversationTurn]) -> String {
        if let Some(result) = tutor::arithmetic::respond(message) {
            info!("Answered with the calculator");
            return result;
        }

        match &self.provider {
            Provider::OpenAi(model) => match model.generate_response(message, history).await {
                Ok(response) => response,
                Err(e) => {
                    let reference = Uuid::new_v4();
                    error!("OpenAI provider error [{}]: {}", reference, e);
                    format!(
                        "Cher(e) élève, je rencontre un petit problème technique \
                         (référence : {reference}). Peux-tu réessayer dans un instant ?"
                    )
                }
            },
            Provider::HuggingFace(model) => match model.generate_response(message).await {
                Ok(response) => response,
                Err(e) => {
                    warn!("Hugging Face provider error: {}", e);
                    HUGGINGFACE_FALLBACK.to_string()
                }
            },
            Provider::RuleBased => tutor::respond(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn arithmetic_short_circuits_every_provider() {
        let manager = ModelManager::rule_based();
        let answer = manager.answer("Combien font 12 + 7 ?", &[]).await;
        assert!(answer.contains("19"));
    }

    #[tokio::test]
    async fn rule_based_provider_uses_the_lessons() {
        let manager = ModelManager::rule_based();
        assert_eq!(manager.answer("bonjour", &[]).await, tutor::respond("bonjour"));
    }

    #[test]
    fn provider_follows_configured_keys() {
        let mut config = Config::default();
        assert_eq!(ModelManager::new(&config).unwrap().provider.name(), "rule-based");

        config.huggingface_api_key = Some("hf_test".into());
        assert_eq!(ModelManager::new(&config).unwrap().provider.name(), "huggingface");

        config.openai_api_key = Some("sk-test".into());
        assert_eq!(ModelManager::new(&config).unwrap().provider.name(), "openai");
    }

    #[tokio::test]
    async fn provider_failure_returns_a_reference_not_the_error() {
        let config = Config {
            openai_api_key: Some("sk-test".into()),
            openai_base_url: "http://127.0.0.1:1".into(),
            request_timeout: Duration::from_secs(2),
            ..Config::default()
        };
        let manager = ModelManager::new(&config).unwrap();

        let answer = manager.answer("c'est quoi un verbe", &[]).await;
        assert!(answer.contains("référence"));
        assert!(!answer.contains("127.0.0.1"));
    }
}
