use crate::{BriefFields, ExtractionStrategy, ProviderError};

/// Stand-in strategy that always declines. Useful as a configured-but-dead
/// remote in tests and wiring.
#[derive(Debug, Default)]
pub struct NoopExtractor;

#[async_trait::async_trait]
impl ExtractionStrategy for NoopExtractor {
    async fn extract(&self, _text: &str) -> Result<BriefFields, ProviderError> {
        Err(ProviderError::NotImplemented)
    }
}
