use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};

use super::prompt::SYSTEM_PROMPT;
use super::ProviderError;

const ANSWER_MARKER: &str = "Réponse du professeur:";

/// Client for a Hugging Face hosted text-generation model.
pub struct HuggingFaceModel {
    url: String,
    api_key: String,
    client: Client,
}

impl HuggingFaceModel {
    pub fn new(url: String, api_key: String, timeout: Duration) -> Result<Self, ProviderError> {
        info!("Using Hugging Face inference at: {}", url);
        Ok(Self {
            url,
            api_key,
            client: Client::builder().timeout(timeout).build()?,
        })
    }

    pub async fn generate_response(&self, message: &str) -> Result<String, ProviderError> {
        let payload = payload(message);
        debug!("Hugging Face payload: {}", payload);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let result: Value = response.json().await?;
        extract_answer(&result).ok_or(ProviderError::MissingContent)
    }
}

fn payload(message: &str) -> Value {
    json!({
        "inputs": {
            "past_user_inputs": [],
            "generated_responses": [],
            "text": format!("{SYSTEM_PROMPT}\n\nQuestion de l'élève: {message}\n{ANSWER_MARKER}"),
        }
    })
}

/// Text after the last answer marker of `generated_text`. The inference API
/// answers either with an object or with a one-element array.
fn extract_answer(result: &Value) -> Option<String> {
    let generated = result
        .get("generated_text")
        .or_else(|| result.get(0).and_then(|first| first.get("generated_text")))?
        .as_str()?;

    let answer = generated.rsplit(ANSWER_MARKER).next().unwrap_or(generated).trim();
    if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ends_with_the_answer_marker() {
        let text = payload("c'est quoi un verbe")["inputs"]["text"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(text.starts_with(SYSTEM_PROMPT));
        assert!(text.ends_with("Question de l'élève: c'est quoi un verbe\nRéponse du professeur:"));
    }

    #[test]
    fn answer_follows_the_last_marker() {
        let object = json!({
            "generated_text": "prompt Réponse du professeur: écho Réponse du professeur: Un verbe exprime une action."
        });
        assert_eq!(extract_answer(&object).as_deref(), Some("Un verbe exprime une action."));

        let array = json!([{ "generated_text": "Réponse du professeur: Oui !" }]);
        assert_eq!(extract_answer(&array).as_deref(), Some("Oui !"));
    }

    #[test]
    fn missing_or_blank_text_has_no_answer() {
        assert_eq!(extract_answer(&json!({ "error": "Model is loading" })), None);
        assert_eq!(extract_answer(&json!({ "generated_text": "Réponse du professeur:  " })), None);
    }
}
