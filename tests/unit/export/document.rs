use super::*;
use crate::sequence::templates::builtin_templates;

#[test]
fn file_stem_lowercases_and_hyphenates_whitespace_runs() {
    assert_eq!(export_file_stem("Photosynthesis Explained"), "photosynthesis-explained");
    assert_eq!(export_file_stem("A  Lot\tOf   Space"), "a-lot-of-space");
    assert_eq!(export_file_stem("single"), "single");
    assert_eq!(export_file_stem("  padded title  "), "padded-title");
}

#[test]
fn file_stem_falls_back_for_blank_titles() {
    assert_eq!(export_file_stem(""), "animation");
    assert_eq!(export_file_stem("   \t  "), "animation");

    let mut sequence = builtin_templates().remove(0);
    sequence.title = "   ".to_string();
    let doc = to_json_document(&sequence).unwrap();
    assert_eq!(doc.filename, "animation.json");
}

#[test]
fn json_document_round_trips_field_for_field() {
    let sequence = builtin_templates().remove(0);
    let doc = to_json_document(&sequence).unwrap();
    assert_eq!(doc.filename, "photosynthesis-explained.json");
    assert_eq!(doc.mime, "application/json");
    let back: AnimationSequence = serde_json::from_slice(&doc.bytes).unwrap();
    assert_eq!(back, sequence);
}

#[test]
fn viewer_page_embeds_data_and_summary() {
    let sequence = builtin_templates().remove(0);
    let doc = to_standalone_viewer(&sequence).unwrap();
    assert_eq!(doc.filename, "photosynthesis-explained.html");
    assert_eq!(doc.mime, "text/html");
    let html = String::from_utf8(doc.bytes).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Photosynthesis Explained"));
    assert!(html.contains(&format!("has {} steps", sequence.total_steps)));
    // Embedded JSON survives HTML escaping.
    assert!(html.contains("&quot;totalSteps&quot;"));
}

#[test]
fn viewer_page_escapes_markup_in_titles() {
    let mut sequence = builtin_templates().remove(0);
    sequence.title = "<script>alert(1)</script>".to_string();
    let doc = to_standalone_viewer(&sequence).unwrap();
    let html = String::from_utf8(doc.bytes).unwrap();
    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn embed_code_uses_the_fixed_url_template() {
    let code = embed_code("abc-123");
    assert!(code.starts_with("<iframe src=\"https://edubuilder.ai/animate/abc-123\""));
    assert!(code.contains("allow=\"fullscreen\""));
}

#[test]
fn clipboard_json_matches_the_document_bytes() {
    let sequence = builtin_templates().remove(0);
    let doc = to_json_document(&sequence).unwrap();
    let json = sequence_json(&sequence).unwrap();
    assert_eq!(json.as_bytes(), &doc.bytes[..]);
}
