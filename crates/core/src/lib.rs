//! Core library: brief field models, keyword scanning, extraction orchestration.

pub mod config;
pub mod extractor;
pub mod keywords;
pub mod models;

pub use brief_providers::BriefFields;
pub use extractor::BriefExtractor;
pub use keywords::KeywordExtractor;
pub use models::{ExtractionMethod, ExtractionResult};
