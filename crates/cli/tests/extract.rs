use brief_core::config::AppConfig;
use brief_core::{BriefExtractor, ExtractionMethod};
use brief_providers::noop::NoopExtractor;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

#[tokio::test]
async fn extracts_fields_from_a_brief_file_without_a_credential() {
    let temp = tempdir().unwrap();
    let brief_path = temp.path().join("brief.txt");
    fs::write(
        &brief_path,
        "Campaign Goals: introduce the new trail shoe\n\
         Target Audience: women 25-34 interested in fitness\n\
         Deliverables:\n\
         two instagram reels\n\
         one story takeover\n\
         Budget: $15,000 USD for this campaign\n\
         Tone of voice: energetic but grounded\n",
    )
    .unwrap();

    let cfg = AppConfig::default();
    assert!(cfg.openai.api_key.is_none());

    let input = fs::read_to_string(&brief_path).unwrap();
    let extractor = BriefExtractor::from_config(&cfg);
    let result = extractor.extract(&input).await;

    assert_eq!(result.method, ExtractionMethod::Keyword);
    assert_eq!(result.fields.campaign_goals, "introduce the new trail shoe");
    assert_eq!(
        result.fields.target_audience,
        "women 25-34 interested in fitness"
    );
    assert_eq!(
        result.fields.deliverables,
        "two instagram reels one story takeover"
    );
    assert!(result.fields.budget_hint.contains("$15,000"));
    assert_eq!(result.fields.tone_of_voice, "energetic but grounded");
}

#[tokio::test]
async fn a_dead_remote_still_yields_a_usable_result() {
    let extractor = BriefExtractor::new(Some(Arc::new(NoopExtractor)));
    let result = extractor
        .extract("Key messages: comfort on any terrain")
        .await;
    assert_eq!(result.method, ExtractionMethod::Keyword);
    assert_eq!(result.fields.key_messages, "comfort on any terrain");
}
