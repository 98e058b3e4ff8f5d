use brief_providers::BriefFields;
use serde::{Deserialize, Serialize};

/// Which strategy actually produced a result. Provenance, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    OpenAi,
    Keyword,
}

impl ExtractionMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtractionMethod::OpenAi => "openai",
            ExtractionMethod::Keyword => "keyword",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub fields: BriefFields,
    pub method: ExtractionMethod,
}
