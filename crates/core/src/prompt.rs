//! Prompt assembly for the generative-text provider.
//!
//! The instructions must spell out the exact JSON contract the extraction
//! and validation steps parse against. The provider is an untrusted text
//! source, so the contract here is advisory; extraction and validation are
//! the real safety net.

use crate::types::{Message, Presentation};
use std::fmt::Write;

/// Build the full generation prompt from the windowed history, the
/// current presentation (if any), and the new user request.
///
/// Pure function: same inputs, same prompt text.
pub fn build_prompt(
    history: &[Message],
    current: Option<&Presentation>,
    user_message: &str,
) -> String {
    let mut context = String::new();
    for message in history {
        let _ = writeln!(context, "{}: {}", message.role, message.content);
    }

    let current_context = match current {
        Some(p) => format!(
            "\n\nCurrent Presentation Context:\nTitle: {}\nSlides: {}",
            p.title,
            p.slide_count()
        ),
        None => String::new(),
    };

    format!(
        r#"You are an expert PowerPoint presentation creator. Generate structured content based on the user's request.

Previous Conversation:
{context}{current_context}

User's Current Request: {user_message}

Generate a JSON response with this EXACT structure (return ONLY valid JSON, no markdown backticks or extra text):
{{
  "title": "Professional Presentation Title",
  "slides": [
    {{
      "title": "Title Slide",
      "content": ["Subtitle or tagline"],
      "layout": "title"
    }},
    {{
      "title": "Content Slide Title",
      "content": ["Bullet point 1", "Bullet point 2", "Bullet point 3"],
      "layout": "content"
    }}
  ],
  "responseMessage": "I've created a presentation about [topic] with [number] slides covering [brief description]."
}}

RULES:
1. First slide MUST be layout "title" with main title
2. Content slides should have 3-5 concise bullet points
3. Use layout "section" for major section transitions
4. Keep all content professional and clear
5. Total slides should be 8-15 depending on topic complexity
6. Return ONLY the JSON object - no markdown, no backticks, no explanations

If the user wants to edit/modify an existing presentation, update the relevant slides while keeping others intact."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Slide, SlideLayout};

    #[test]
    fn test_prompt_includes_history_in_order() {
        let history = vec![
            Message::user("make a deck"),
            Message::assistant(
                "done",
                Presentation {
                    title: "Deck".to_string(),
                    slides: vec![Slide::new("Deck", SlideLayout::Title)],
                    response_message: None,
                },
            ),
        ];
        let prompt = build_prompt(&history, None, "add a slide");
        let user_pos = prompt.find("user: make a deck").unwrap();
        let assistant_pos = prompt.find("assistant: done").unwrap();
        assert!(user_pos < assistant_pos);
        assert!(prompt.contains("User's Current Request: add a slide"));
    }

    #[test]
    fn test_prompt_states_current_presentation_for_edits() {
        let deck = Presentation {
            title: "Q3 Review".to_string(),
            slides: vec![
                Slide::new("Q3 Review", SlideLayout::Title),
                Slide::new("Numbers", SlideLayout::Content),
            ],
            response_message: None,
        };
        let prompt = build_prompt(&[], Some(&deck), "change slide 2");
        assert!(prompt.contains("Current Presentation Context:"));
        assert!(prompt.contains("Title: Q3 Review"));
        assert!(prompt.contains("Slides: 2"));
    }

    #[test]
    fn test_prompt_omits_presentation_context_when_absent() {
        let prompt = build_prompt(&[], None, "make a deck");
        assert!(!prompt.contains("Current Presentation Context:"));
    }

    #[test]
    fn test_prompt_encodes_output_contract() {
        let prompt = build_prompt(&[], None, "anything");
        assert!(prompt.contains("\"responseMessage\""));
        assert!(prompt.contains("First slide MUST be layout \"title\""));
        assert!(prompt.contains("3-5 concise bullet points"));
        assert!(prompt.contains("8-15"));
        assert!(prompt.contains("Return ONLY the JSON object"));
    }
}
