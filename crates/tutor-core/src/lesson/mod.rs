//! Lesson pipeline: transcript prompt construction, response parsing,
//! orchestration.

pub mod parser;
pub mod prompt;
pub mod service;

pub use parser::{LessonParseError, parse_transcript};
pub use prompt::{LessonPrompt, build_lesson_prompt};
pub use service::create_lesson;

use serde::{Deserialize, Serialize};

/// A generated transcript for one planned lesson.
///
/// The title comes from the originating plan item, never re-derived from
/// the completion text. Lessons are produced on demand and not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub title: String,
    pub transcript: String,
}
