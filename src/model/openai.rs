use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};

use super::prompt::SYSTEM_PROMPT;
use super::{ProviderError, HISTORY_TURNS};
use crate::config::Sampling;
use crate::web::models::{ConversationTurn, Message, Role};

/// Client for an OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct OpenAiModel {
    base_url: String,
    api_key: String,
    model: String,
    sampling: Sampling,
    client: Client,
}

impl OpenAiModel {
    pub fn new(
        base_url: &str,
        api_key: String,
        model: String,
        sampling: Sampling,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        info!("Using chat completions endpoint at: {}", base_url);

        Ok(Self {
            base_url,
            api_key,
            model,
            sampling,
            client: Client::builder().timeout(timeout).build()?,
        })
    }

    /// System prompt, then the last few turns as user/assistant pairs, then
    /// the new question.
    pub fn build_messages(message: &str, history: &[ConversationTurn]) -> Vec<Message> {
        let recent = &history[history.len().saturating_sub(HISTORY_TURNS)..];

        let mut messages = Vec::with_capacity(2 + recent.len() * 2);
        messages.push(Message {
            role: Role::System,
            content: SYSTEM_PROMPT.to_string(),
        });
        for turn in recent {
            messages.push(Message {
                role: Role::User,
                content: turn.question.clone(),
            });
            messages.push(Message {
                role: Role::Assistant,
                content: turn.reponse.clone(),
            });
        }
        messages.push(Message {
            role: Role::User,
            content: message.to_string(),
        });
        messages
    }

    fn payload(&self, messages: &[Message]) -> Value {
        json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.sampling.temperature,
            "top_p": self.sampling.top_p,
            "max_tokens": self.sampling.max_tokens,
            "frequency_penalty": self.sampling.frequency_penalty,
            "presence_penalty": self.sampling.presence_penalty,
        })
    }

    pub async fn generate_response(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Result<String, ProviderError> {
        let messages = Self::build_messages(message, history);
        let payload = self.payload(&messages);
        let url = format!("{}/v1/chat/completions", self.base_url);

        info!(
            "Sending request to {} with {} messages (max_tokens: {})",
            self.model,
            messages.len(),
            self.sampling.max_tokens
        );
        debug!("Payload: {}", payload);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let response_json: Value = response.json().await?;
        debug!("Response JSON: {}", response_json);

        let content = extract_content(&response_json).ok_or(ProviderError::MissingContent)?;
        info!("Response length: {} characters", content.len());
        Ok(content.trim().to_string())
    }
}

/// `choices[0].message.content` of a chat completion.
fn extract_content(response: &Value) -> Option<&str> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(n: usize) -> ConversationTurn {
        ConversationTurn {
            question: format!("question {n}"),
            reponse: format!("réponse {n}"),
        }
    }

    #[test]
    fn only_the_last_five_turns_are_sent() {
        let history: Vec<_> = (0..7).map(turn).collect();
        let messages = OpenAiModel::build_messages("et maintenant ?", &history);

        assert_eq!(messages.len(), 1 + 5 * 2 + 1);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].content, "question 2");
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].content, "réponse 2");
        assert_eq!(messages[11].role, Role::User);
        assert_eq!(messages[11].content, "et maintenant ?");
    }

    #[test]
    fn empty_history_sends_prompt_and_question() {
        let messages = OpenAiModel::build_messages("bonjour", &[]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
    }

    #[test]
    fn payload_carries_sampling_parameters() {
        let model = OpenAiModel::new(
            "http://localhost:8081/",
            "sk-test".into(),
            "gpt-4o-mini".into(),
            Sampling::default(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(model.base_url, "http://localhost:8081");

        let payload = model.payload(&OpenAiModel::build_messages("salut", &[]));
        assert_eq!(payload["model"], "gpt-4o-mini");
        assert_eq!(payload["max_tokens"], 4000);
        assert_eq!(payload["messages"][0]["role"], "system");
        assert_eq!(payload["messages"][1]["content"], "salut");
        assert!((payload["temperature"].as_f64().unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn content_is_read_from_the_first_choice() {
        let response = json!({
            "choices": [{ "message": { "role": "assistant", "content": "Bonjour !" } }]
        });
        assert_eq!(extract_content(&response), Some("Bonjour !"));
        assert_eq!(extract_content(&json!({ "choices": [] })), None);
    }
}
