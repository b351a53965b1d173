//! Structural validation of a parsed presentation object.
//!
//! Checks run in a fixed order and stop at the first violation, naming
//! the offending field. There is no partial repair: a deck either passes
//! in full or is rejected.

use crate::error::{Error, Result};
use crate::types::{Presentation, Slide, SlideLayout};
use serde_json::Value;

/// Validate a parsed JSON value against the presentation schema.
///
/// Checks, in order: `title` is a non-empty string; `slides` is a
/// non-empty array; every slide's `layout` is a string (unrecognized tags
/// fall open to `content`) and its `content` is an array of strings
/// (absent coerces to empty); the first slide's layout tag is `title`.
pub fn validate(value: &Value) -> Result<Presentation> {
    let title = match value.get("title").and_then(Value::as_str) {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => return Err(Error::schema("title", "must be a non-empty string")),
    };

    let raw_slides = match value.get("slides").and_then(Value::as_array) {
        Some(s) if !s.is_empty() => s,
        Some(_) => return Err(Error::schema("slides", "must contain at least one slide")),
        None => return Err(Error::schema("slides", "must be an array of slides")),
    };

    let mut slides = Vec::with_capacity(raw_slides.len());
    for (i, raw) in raw_slides.iter().enumerate() {
        slides.push(validate_slide(raw, i)?);
    }

    if slides[0].layout != SlideLayout::Title {
        return Err(Error::schema(
            "slides[0].layout",
            "first slide must use the 'title' layout",
        ));
    }

    let response_message = value
        .get("responseMessage")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Presentation {
        title,
        slides,
        response_message,
    })
}

fn validate_slide(raw: &Value, index: usize) -> Result<Slide> {
    if !raw.is_object() {
        return Err(Error::schema(format!("slides[{index}]"), "must be an object"));
    }

    let layout = match raw.get("layout") {
        None | Some(Value::Null) => SlideLayout::Content,
        Some(Value::String(tag)) => SlideLayout::from_tag(tag),
        Some(_) => {
            return Err(Error::schema(
                format!("slides[{index}].layout"),
                "must be a string",
            ))
        }
    };

    let title = match raw.get("title") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(t)) => t.clone(),
        Some(_) => {
            return Err(Error::schema(
                format!("slides[{index}].title"),
                "must be a string",
            ))
        }
    };

    // Absent content coerces to an empty sequence.
    let content = match raw.get("content") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut content = Vec::with_capacity(items.len());
            for (j, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(s) => content.push(s.to_string()),
                    None => {
                        return Err(Error::schema(
                            format!("slides[{index}].content[{j}]"),
                            "must be a string",
                        ))
                    }
                }
            }
            content
        }
        Some(_) => {
            return Err(Error::schema(
                format!("slides[{index}].content"),
                "must be an array of strings",
            ))
        }
    };

    Ok(Slide {
        title,
        content,
        layout,
    })
}
