//! JSON extraction from raw provider output.
//!
//! Provider output is noisy free text, not a trusted protocol: it may wrap
//! the payload in commentary or markdown fences. Extraction is therefore
//! maximally permissive about surrounding text and strict about the
//! payload once isolated.

use crate::error::{Error, Result};
use crate::types::Presentation;
use crate::validate::validate;
use serde_json::Value;

/// Locate, parse, and validate the presentation object embedded in `raw`.
///
/// A single greedy span is attempted: from the first `{` to the last `}`.
/// Fails with [`Error::Extraction`] when no such span exists, with
/// [`Error::Parse`] when the span is not valid JSON, and with
/// [`Error::Schema`] when the parsed object violates the schema. If the
/// text contains unrelated brace-delimited substrings around the payload,
/// the greedy span may fail to parse; no multi-candidate recovery is
/// attempted.
pub fn extract_presentation(raw: &str) -> Result<Presentation> {
    let span = locate_span(raw).ok_or(Error::Extraction)?;
    let value: Value = serde_json::from_str(span)?;
    validate(&value)
}

/// The greedy first-`{`-to-last-`}` span, or `None` when absent.
fn locate_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SlideLayout;

    const DECK_JSON: &str = r#"{
        "title": "Onboarding",
        "slides": [
            {"title": "Onboarding", "content": ["Welcome"], "layout": "title"},
            {"title": "Checklist", "content": ["Laptop", "Badge", "Accounts"], "layout": "content"}
        ],
        "responseMessage": "Done."
    }"#;

    #[test]
    fn test_extracts_embedded_object_with_surrounding_prose() {
        let raw = format!("Sure! Here is the deck you asked for:\n{DECK_JSON}\nLet me know!");
        let deck = extract_presentation(&raw).unwrap();
        assert_eq!(deck.title, "Onboarding");
        assert_eq!(deck.slide_count(), 2);
    }

    #[test]
    fn test_extracts_through_markdown_fences() {
        let raw = format!("```json\n{DECK_JSON}\n```");
        let deck = extract_presentation(&raw).unwrap();
        assert_eq!(deck.slides[0].layout, SlideLayout::Title);
    }

    #[test]
    fn test_round_trip_equals_embedded_object() {
        let embedded: Presentation = serde_json::from_str(DECK_JSON).unwrap();
        let raw = format!("prefix {DECK_JSON} suffix");
        assert_eq!(extract_presentation(&raw).unwrap(), embedded);
    }

    #[test]
    fn test_plain_prose_fails_with_extraction_error() {
        let err = extract_presentation("I cannot make slides about that.").unwrap_err();
        assert!(matches!(err, Error::Extraction));
    }

    #[test]
    fn test_reversed_braces_fail_with_extraction_error() {
        let err = extract_presentation("} nothing here {").unwrap_err();
        assert!(matches!(err, Error::Extraction));
    }

    #[test]
    fn test_invalid_span_fails_with_parse_error() {
        let err = extract_presentation("here: {not json at all}").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_greedy_span_spans_unrelated_braces() {
        // Unrelated braces before and after the payload widen the span
        // into something unparsable. That is the documented failure mode.
        let raw = format!("{{oops}} {DECK_JSON} {{trailing}}");
        let err = extract_presentation(&raw).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_schema_violation_surfaces_after_parse() {
        let err = extract_presentation(r#"{"title": "T", "slides": []}"#).unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }
}
