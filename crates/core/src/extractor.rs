use crate::config::AppConfig;
use crate::keywords::KeywordExtractor;
use crate::models::{ExtractionMethod, ExtractionResult};
use brief_providers::openai::{OpenAiConfig, OpenAiExtractor};
use brief_providers::{BriefFields, ExtractionStrategy};
use std::sync::Arc;
use tracing::{debug, warn};

/// Orchestrates the remote and keyword strategies. `extract` is total over
/// all string inputs: remote failures degrade the result, never the call.
pub struct BriefExtractor {
    remote: Option<Arc<dyn ExtractionStrategy>>,
    keywords: KeywordExtractor,
}

impl BriefExtractor {
    pub fn new(remote: Option<Arc<dyn ExtractionStrategy>>) -> Self {
        Self {
            remote,
            keywords: KeywordExtractor::new(),
        }
    }

    /// Build from configuration. The remote strategy is wired only when a
    /// non-empty API key is present.
    pub fn from_config(config: &AppConfig) -> Self {
        let remote = config
            .openai
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(|key| {
                Arc::new(OpenAiExtractor::new(OpenAiConfig {
                    api_key: key.to_string(),
                    base_url: config.openai.base_url.clone(),
                    model: config.openai.model.clone(),
                    temperature: config.openai.temperature,
                    timeout_secs: config.openai.timeout_secs,
                })) as Arc<dyn ExtractionStrategy>
            });
        Self::new(remote)
    }

    pub async fn extract(&self, text: &str) -> ExtractionResult {
        // Blank input: skip the remote call entirely.
        if text.trim().is_empty() {
            return ExtractionResult {
                fields: BriefFields::default(),
                method: ExtractionMethod::Keyword,
            };
        }

        if let Some(remote) = &self.remote {
            match remote.extract(text).await {
                Ok(fields) => {
                    return ExtractionResult {
                        fields,
                        method: ExtractionMethod::OpenAi,
                    }
                }
                Err(err) => {
                    warn!("remote extraction failed, falling back to keyword scan: {err}");
                }
            }
        } else {
            debug!("no remote strategy configured, using keyword scan");
        }

        ExtractionResult {
            fields: self.keywords.scan(text),
            method: ExtractionMethod::Keyword,
        }
    }
}
