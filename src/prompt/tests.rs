use super::*;

use crate::chat::ChatRole;

fn record(fields: &[(&str, Option<&str>)]) -> PaperRecord {
    PaperRecord::new(
        "Trust in Autonomous Vehicles",
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_prettify_key() {
    assert_eq!(prettify_key("summary"), "Summary");
    assert_eq!(prettify_key("publication_year"), "Publication Year");
    assert_eq!(prettify_key("publicationYear"), "Publication Year");
    assert_eq!(prettify_key("main-findings"), "Main Findings");
}

#[test]
fn test_render_orders_preferred_fields_first() {
    let record = record(&[
        ("year", Some("2023")),
        ("summary", Some("a survey")),
        ("abstract", Some("we study trust")),
    ]);

    let text = PromptBuilder::new().render_record(&record);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Title: Trust in Autonomous Vehicles");
    assert_eq!(lines[1], "Abstract: we study trust");
    assert_eq!(lines[2], "Summary: a survey");
    assert_eq!(lines[3], "Year: 2023");
}

#[test]
fn test_render_skips_null_values() {
    let record = record(&[("summary", None), ("year", Some("2019"))]);

    let text = PromptBuilder::new().render_record(&record);
    assert!(!text.contains("Summary"));
    assert!(text.contains("Year: 2019"));
}

#[test]
fn test_render_truncates_long_fields() {
    let long = "x".repeat(50);
    let record = record(&[("summary", Some(long.as_str()))]);

    let text = PromptBuilder::new()
        .with_field_char_cap(10)
        .render_record(&record);

    assert!(text.contains(&format!("Summary: {}...", "x".repeat(10))));
}

#[test]
fn test_render_caps_whole_block() {
    let long = "y".repeat(200);
    let record = record(&[("summary", Some(long.as_str()))]);

    let text = PromptBuilder::new()
        .with_block_char_cap(40)
        .render_record(&record);

    assert_eq!(text.chars().count(), 43); // 40 chars + ellipsis marker
    assert!(text.ends_with("..."));
}

#[test]
fn test_explicit_rename_wins() {
    let record = record(&[("doi_link", Some("https://doi.org/x"))]);

    let text = PromptBuilder::new()
        .with_rename("doi_link", "DOI")
        .render_record(&record);

    assert!(text.contains("DOI: https://doi.org/x"));
}

#[test]
fn test_build_produces_system_and_user_messages() {
    let record = record(&[("summary", Some("we study trust"))]);
    let exchange = PromptBuilder::new()
        .build("trust in autonomous vehicles", &record)
        .expect("build prompt");

    let messages = exchange.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, ChatRole::System);
    assert!(messages[0].content.contains("SEMANTIC"));
    assert!(messages[0].content.contains("STRICT JSON"));
    assert_eq!(messages[1].role, ChatRole::User);
    assert!(messages[1].content.contains("trust in autonomous vehicles"));
    assert!(messages[1].content.contains("Title: Trust in Autonomous Vehicles"));
    assert!(messages[1].content.contains("Return JSON ONLY"));
}
