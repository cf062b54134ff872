//! Lesson prompt construction. Pure and deterministic, no I/O.

use crate::goals::LearningGoals;
use crate::plan::LearningPlanItem;

/// A system/user instruction pair for one backend invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPrompt {
    pub system: String,
    pub user: String,
}

/// Role and output contract for transcript generation.
const LESSON_SYSTEM_PROMPT: &str = "\
You are a bot designed to create custom tailored listening lessons for learning a specified language.
You are given a lesson description, and will create the transcript for a self-contained listening lesson.
The base language is English, but you should use both English and the target language in the lesson.
Remember that a typical listening lesson might contain repetition, explaining of words in English, pauses and more.
It is important to get the total transcribed audio length close to the desired duration.
";

/// Build the prompt pair for generating one lesson transcript.
///
/// Interpolates the plan's own goals (the same goals that produced the
/// item) plus the item's title and details.
pub fn build_lesson_prompt(goals: &LearningGoals, item: &LearningPlanItem) -> LessonPrompt {
    let user = format!(
        "Create a {} long lesson for learning {}. The listener previously knows {}.\n\
         The lesson description is:\n\
         {}:\n\
         {}",
        goals.lesson_duration,
        goals.target_language,
        goals.target_language_level,
        item.title,
        item.details,
    );

    LessonPrompt {
        system: LESSON_SYSTEM_PROMPT.to_string(),
        user,
    }
}
