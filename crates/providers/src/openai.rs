use crate::{BriefFields, ExtractionStrategy, ProviderError};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const SYSTEM_PROMPT: &str = "You extract structured fields from influencer campaign briefs. \
Respond with a JSON object containing exactly these keys: campaign_goals, target_audience, \
deliverables, timeline, budget_hint, tone_of_voice, key_messages. Every value must be a \
string. Use an empty string when a field cannot be determined from the brief.";

#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            timeout_secs: 30,
        }
    }
}

#[derive(Clone)]
pub struct OpenAiExtractor {
    client: Client,
    cfg: Arc<OpenAiConfig>,
}

impl OpenAiExtractor {
    pub fn new(cfg: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            cfg: Arc::new(cfg),
        }
    }
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessageResp,
}

#[derive(Deserialize)]
struct ChatMessageResp {
    content: String,
}

#[derive(Deserialize)]
struct ChatApiResponse {
    choices: Vec<Choice>,
}

#[async_trait::async_trait]
impl ExtractionStrategy for OpenAiExtractor {
    async fn extract(&self, text: &str) -> Result<BriefFields, ProviderError> {
        #[derive(serde::Serialize)]
        struct ChatMessage<'a> {
            role: &'static str,
            content: &'a str,
        }
        #[derive(serde::Serialize)]
        struct ResponseFormat {
            #[serde(rename = "type")]
            kind: &'static str,
        }
        #[derive(serde::Serialize)]
        struct ChatRequest<'a> {
            model: &'a str,
            temperature: f32,
            response_format: ResponseFormat,
            messages: Vec<ChatMessage<'a>>,
        }

        let body = ChatRequest {
            model: &self.cfg.model,
            temperature: self.cfg.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        debug!(model = %self.cfg.model, "requesting brief extraction");

        let resp = self
            .client
            .post(format!("{}/v1/chat/completions", self.cfg.base_url))
            .bearer_auth(&self.cfg.api_key)
            .timeout(Duration::from_secs(self.cfg.timeout_secs))
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::BadStatus(status.as_u16()));
        }

        let parsed: ChatApiResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| ProviderError::MalformedResponse("response has no choices".into()))?;

        parse_fields(content)
    }
}

/// Parse the model's JSON payload. Keys the model omitted default to the
/// empty string; a payload that is not a JSON object is an error.
fn parse_fields(content: &str) -> Result<BriefFields, ProviderError> {
    serde_json::from_str(content).map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_fields;

    #[test]
    fn missing_keys_default_to_empty() {
        let fields = parse_fields(
            r#"{
                "campaign_goals": "drive signups",
                "target_audience": "runners",
                "deliverables": "2 reels",
                "budget_hint": "$5k"
            }"#,
        )
        .unwrap();
        assert_eq!(fields.campaign_goals, "drive signups");
        assert_eq!(fields.budget_hint, "$5k");
        assert_eq!(fields.timeline, "");
        assert_eq!(fields.tone_of_voice, "");
        assert_eq!(fields.key_messages, "");
    }

    #[test]
    fn non_object_payload_is_an_error() {
        assert!(parse_fields("not json").is_err());
        assert!(parse_fields("[1, 2]").is_err());
    }
}
