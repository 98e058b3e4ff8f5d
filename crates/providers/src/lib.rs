//! Strategy abstractions for campaign-brief field extraction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod noop;
pub mod openai;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("not implemented")]
    NotImplemented,
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected status: {0}")]
    BadStatus(u16),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// The seven brief fields. Every slot is always present; a field that could
/// not be determined is the empty string, never a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefFields {
    #[serde(default)]
    pub campaign_goals: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub deliverables: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub budget_hint: String,
    #[serde(default)]
    pub tone_of_voice: String,
    #[serde(default)]
    pub key_messages: String,
}

impl BriefFields {
    /// Field names paired with values, in schema order.
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("campaign_goals", self.campaign_goals.as_str()),
            ("target_audience", self.target_audience.as_str()),
            ("deliverables", self.deliverables.as_str()),
            ("timeline", self.timeline.as_str()),
            ("budget_hint", self.budget_hint.as_str()),
            ("tone_of_voice", self.tone_of_voice.as_str()),
            ("key_messages", self.key_messages.as_str()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.is_empty())
    }
}

/// One way of turning raw brief text into fields. Implementations may fail;
/// the orchestrator in brief-core decides what to fall back to.
#[async_trait::async_trait]
pub trait ExtractionStrategy: Send + Sync {
    async fn extract(&self, text: &str) -> Result<BriefFields, ProviderError>;
}
