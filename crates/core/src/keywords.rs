//! Deterministic, offline brief scanner. Each field is recovered by rescanning
//! the input for that field's own heading synonyms, so two fields may capture
//! overlapping text; that duplication is accepted scanner behavior.

use brief_providers::{BriefFields, ExtractionStrategy, ProviderError};
use once_cell::sync::Lazy;
use regex::Regex;

const GOAL_HEADINGS: &[&str] = &[
    "campaign goals",
    "campaign goal",
    "goals",
    "goal",
    "objectives",
    "objective",
    "purpose",
];
const AUDIENCE_HEADINGS: &[&str] = &[
    "target audience",
    "audience",
    "demographic",
    "target market",
    "who",
];
const DELIVERABLE_HEADINGS: &[&str] = &[
    "deliverables",
    "deliverable",
    "content requirements",
    "assets",
    "scope of work",
];
const TIMELINE_HEADINGS: &[&str] = &[
    "timeline",
    "timing",
    "schedule",
    "dates",
    "duration",
    "launch date",
    "when",
];
const BUDGET_HEADINGS: &[&str] = &["budget", "cost", "investment", "spend", "pricing", "price"];
const TONE_HEADINGS: &[&str] = &["tone of voice", "tone", "brand voice", "voice", "style"];
const MESSAGE_HEADINGS: &[&str] = &[
    "key messages",
    "key message",
    "messaging",
    "main points",
    "talking points",
];

// A monetary amount: $ plus digits/commas/decimals with an optional k/m
// suffix, or a bare number followed by an uppercase 3-letter currency code.
static ANCHORED_BUDGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:budget|cost|spend|investment|price)\b[^\n$\d]{0,40}(\$\d[\d,]*(?:\.\d+)?(?:\s?[km]\b)?|\d[\d,]*(?:\.\d+)?\s?(?-i:[A-Z]{3})\b)",
    )
    .expect("anchored budget pattern")
});
static BARE_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\d[\d,]*(?:\.\d+)?(?:\s?[kKmM]\b)?").expect("bare amount pattern"));

/// Heading-synonym section scanner. Pure function of the input text: no
/// configuration, no I/O, never fails.
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn scan(&self, text: &str) -> BriefFields {
        BriefFields {
            campaign_goals: scan_section(text, GOAL_HEADINGS),
            target_audience: scan_section(text, AUDIENCE_HEADINGS),
            deliverables: scan_section(text, DELIVERABLE_HEADINGS),
            timeline: scan_section(text, TIMELINE_HEADINGS),
            budget_hint: budget_hint(text),
            tone_of_voice: scan_section(text, TONE_HEADINGS),
            key_messages: scan_section(text, MESSAGE_HEADINGS),
        }
    }
}

#[async_trait::async_trait]
impl ExtractionStrategy for KeywordExtractor {
    async fn extract(&self, text: &str) -> Result<BriefFields, ProviderError> {
        Ok(self.scan(text))
    }
}

/// Find the first line matching one of the heading synonyms, then capture the
/// colon tail of that line plus continuation lines until the next heading.
fn scan_section(text: &str, headings: &[&str]) -> String {
    let lines: Vec<&str> = text.lines().collect();
    for (idx, line) in lines.iter().enumerate() {
        let lowered = line.trim().to_lowercase();
        let matched = headings
            .iter()
            .any(|h| lowered.starts_with(h) || lowered.contains(&format!("{h}:")));
        if !matched {
            continue;
        }

        let mut fragments: Vec<&str> = Vec::new();
        if let Some((_, tail)) = line.split_once(':') {
            let tail = tail.trim();
            if !tail.is_empty() {
                fragments.push(tail);
            }
        }
        for cont in &lines[idx + 1..] {
            if looks_like_heading(cont) {
                break;
            }
            let trimmed = cont.trim();
            if !trimmed.is_empty() {
                fragments.push(trimmed);
            }
        }
        return fragments.join(" ").trim().to_string();
    }
    String::new()
}

// Approximate on purpose: short colon-bearing sentences mid-paragraph can
// stop a capture early. Frozen behavior; see the scanner tests.
fn looks_like_heading(line: &str) -> bool {
    let trimmed = line.trim();
    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    (first.is_uppercase() || matches!(first, '#' | '-' | '*'))
        && trimmed.chars().count() < 80
        && trimmed.contains(':')
}

/// Ordered fallback: amount anchored near a budget word, then any bare
/// $-amount, then the generic heading scan.
fn budget_hint(text: &str) -> String {
    if let Some(caps) = ANCHORED_BUDGET.captures(text) {
        if let Some(amount) = caps.get(1) {
            return amount.as_str().trim().to_string();
        }
    }
    if let Some(amount) = BARE_AMOUNT.find(text) {
        return amount.as_str().trim().to_string();
    }
    scan_section(text, BUDGET_HEADINGS)
}
