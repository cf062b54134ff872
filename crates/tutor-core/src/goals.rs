//! User-supplied learning goals.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the user wants to learn, at what level, and in how many lessons.
///
/// Immutable once submitted. The base/explanation language is fixed to
/// English and not user-configurable. Field names are camelCase on the
/// wire (`targetLanguage`, `numberOfLessons`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningGoals {
    /// Language to learn (e.g. "Japanese").
    pub target_language: String,
    /// How many lessons the plan should contain.
    pub number_of_lessons: i32,
    /// Desired duration per lesson, free text (e.g. "15 minutes").
    pub lesson_duration: String,
    /// The learner's current proficiency, free text (e.g. "a few greetings").
    pub target_language_level: String,
}

/// Rejection of malformed [`LearningGoals`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalsValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("numberOfLessons must be positive, got {0}")]
    NonPositiveLessonCount(i32),
}

impl LearningGoals {
    /// Reject goals with blank fields or a non-positive lesson count.
    ///
    /// Called at the boundary before any backend work happens.
    pub fn validate(&self) -> Result<(), GoalsValidationError> {
        if self.target_language.trim().is_empty() {
            return Err(GoalsValidationError::EmptyField("targetLanguage"));
        }
        if self.number_of_lessons < 1 {
            return Err(GoalsValidationError::NonPositiveLessonCount(
                self.number_of_lessons,
            ));
        }
        if self.lesson_duration.trim().is_empty() {
            return Err(GoalsValidationError::EmptyField("lessonDuration"));
        }
        if self.target_language_level.trim().is_empty() {
            return Err(GoalsValidationError::EmptyField("targetLanguageLevel"));
        }
        Ok(())
    }
}
