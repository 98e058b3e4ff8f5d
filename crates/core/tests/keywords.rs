use brief_core::KeywordExtractor;

#[test]
fn heading_with_inline_value_is_captured() {
    let scanner = KeywordExtractor::new();
    let fields = scanner.scan("Target Audience: women 25-34 interested in fitness");
    assert_eq!(fields.target_audience, "women 25-34 interested in fitness");
    assert_eq!(fields.campaign_goals, "");
}

#[test]
fn continuation_lines_are_joined_until_the_next_heading() {
    let scanner = KeywordExtractor::new();
    let fields = scanner.scan(
        "Campaign Goals:\n\
         raise awareness for the spring launch\n\
         grow the newsletter\n\
         Target Audience: women 25-34\n\
         something else entirely",
    );
    assert_eq!(
        fields.campaign_goals,
        "raise awareness for the spring launch grow the newsletter"
    );
    assert_eq!(fields.target_audience, "women 25-34 something else entirely");
}

#[test]
fn blank_lines_do_not_leave_double_spaces() {
    let scanner = KeywordExtractor::new();
    let fields = scanner.scan("Deliverables:\nthree reels\n\none story takeover");
    assert_eq!(fields.deliverables, "three reels one story takeover");
}

#[test]
fn scan_is_a_pure_function_of_the_text() {
    let scanner = KeywordExtractor::new();
    let text = "Goals: build credibility\nTone: upbeat\nBudget: $8k total";
    assert_eq!(scanner.scan(text), scanner.scan(text));
}

#[test]
fn anchored_budget_amount_wins_over_a_later_bare_amount() {
    let scanner = KeywordExtractor::new();
    let fields = scanner.scan(
        "Budget: $15,000 USD for this campaign.\n\
         We also admired a $99 gadget in an unrelated post.",
    );
    assert!(fields.budget_hint.contains("$15,000"), "{}", fields.budget_hint);
    assert!(!fields.budget_hint.contains("$99"));
}

#[test]
fn budget_accepts_k_suffix_and_currency_codes() {
    let scanner = KeywordExtractor::new();
    assert_eq!(
        scanner.scan("Total spend around $30k for the quarter").budget_hint,
        "$30k"
    );
    assert_eq!(
        scanner.scan("Budget of 20000 NOK across both flights").budget_hint,
        "20000 NOK"
    );
}

#[test]
fn bare_dollar_amount_is_the_second_fallback() {
    let scanner = KeywordExtractor::new();
    let fields = scanner.scan("We have $2,500 set aside for creators.");
    assert_eq!(fields.budget_hint, "$2,500");
}

#[test]
fn budget_heading_scan_is_the_last_fallback() {
    let scanner = KeywordExtractor::new();
    let fields = scanner.scan("Budget:\nto be confirmed with finance");
    assert_eq!(fields.budget_hint, "to be confirmed with finance");
}

#[test]
fn unmatched_fields_are_empty_strings() {
    let scanner = KeywordExtractor::new();
    let fields = scanner.scan("just a plain sentence with no structure");
    assert!(fields.is_empty());
}

// Fields are scanned independently, so the same passage can land in two
// fields. Pinned here so nobody "fixes" it by accident.
#[test]
fn independent_field_scans_may_capture_overlapping_text() {
    let scanner = KeywordExtractor::new();
    let fields = scanner.scan("Goals: build credibility\ninclude our timeline: Q3 push");
    assert!(fields.campaign_goals.contains("Q3 push"));
    assert!(fields.timeline.contains("Q3 push"));
}

// The continuation-stop rule is approximate: a short colon-bearing line that
// starts uppercase reads as a heading and truncates the capture.
#[test]
fn short_colon_lines_stop_the_capture() {
    let scanner = KeywordExtractor::new();
    let fields = scanner.scan(
        "Key messages:\n\
         quality first\n\
         Note: see the attached deck\n\
         durability second",
    );
    assert_eq!(fields.key_messages, "quality first");
}
