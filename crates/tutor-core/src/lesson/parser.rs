//! Lesson response parser.
//!
//! Single-item variant of the plan extraction discipline: the whole
//! completion text is the transcript. The assistant is not asked to add a
//! title marker for a single lesson, so there is nothing to scan for.

use thiserror::Error;

/// Errors from reducing a completion text to a transcript.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LessonParseError {
    #[error("completion text for lesson is empty")]
    EmptyResponse,
}

/// Extract the transcript body from a raw completion text.
///
/// Trims surrounding whitespace; fails only for text that trims to empty.
pub fn parse_transcript(raw: &str) -> Result<String, LessonParseError> {
    let transcript = raw.trim();
    if transcript.is_empty() {
        return Err(LessonParseError::EmptyResponse);
    }
    Ok(transcript.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_is_trimmed() {
        let transcript = parse_transcript("\n\n  Welcome to lesson one.\nRepeat after me.  \n")
            .expect("should parse");
        assert_eq!(transcript, "Welcome to lesson one.\nRepeat after me.");
    }

    #[test]
    fn internal_structure_is_preserved() {
        let raw = "Part one.\n\nPart two.";
        assert_eq!(parse_transcript(raw).unwrap(), raw);
    }

    #[test]
    fn empty_text_fails() {
        assert_eq!(
            parse_transcript("").unwrap_err(),
            LessonParseError::EmptyResponse
        );
        assert_eq!(
            parse_transcript("  \n\t\n").unwrap_err(),
            LessonParseError::EmptyResponse
        );
    }
}
