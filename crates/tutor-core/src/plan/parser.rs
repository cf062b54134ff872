//! Plan response parser.
//!
//! The completion backend is not schema-constrained, so the reply is free
//! text. The one thing it reliably emits is the `Lesson:` marker, so
//! extraction is marker-anchored rather than whitespace-delimited. The
//! grammar, as an explicit contract:
//!
//! - A line whose trimmed form starts with the literal `Lesson:` opens a
//!   new item; the rest of that line is the title.
//! - Every following line belongs to the item's body until the next marker
//!   line or end of input. Bodies may span multiple lines and may contain
//!   blank lines.
//! - Text before the first marker (greetings, preamble) is ignored.
//! - Titles and bodies are whitespace-trimmed; items whose title or body
//!   trims to empty are dropped silently. Only a parse that yields zero
//!   items overall is an error.

use thiserror::Error;

use super::types::LessonDraft;

/// Line prefix that opens a new lesson item.
const MARKER: &str = "Lesson:";

/// Errors from reducing a completion text to lesson items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanParseError {
    #[error("no lessons found in completion text")]
    NoLessons,
}

/// Parse a raw completion text into ordered lesson drafts.
///
/// Items are appended in discovery order; matching is sequential and
/// non-overlapping. Fails only when zero items survive extraction, so
/// callers never persist an empty plan silently.
pub fn parse_plan(raw: &str) -> Result<Vec<LessonDraft>, PlanParseError> {
    let mut items: Vec<LessonDraft> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in raw.lines() {
        if let Some(title) = line.trim_start().strip_prefix(MARKER) {
            if let Some((title, body)) = current.take() {
                push_draft(&mut items, title, &body);
            }
            current = Some((title.trim().to_string(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
        // Lines before the first marker are preamble; skip them.
    }

    if let Some((title, body)) = current.take() {
        push_draft(&mut items, title, &body);
    }

    if items.is_empty() {
        return Err(PlanParseError::NoLessons);
    }
    Ok(items)
}

/// Append a draft unless its title or body trims to empty.
///
/// Dropping rather than failing is deliberate: a single malformed item
/// does not invalidate an otherwise usable plan.
fn push_draft(items: &mut Vec<LessonDraft>, title: String, body_lines: &[&str]) {
    let details = body_lines.join("\n").trim().to_string();
    if title.is_empty() || details.is_empty() {
        return;
    }
    items.push(LessonDraft { title, details });
}
