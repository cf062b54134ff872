//! Plan prompt construction. Pure and deterministic, no I/O.

use crate::goals::LearningGoals;

/// A system/user instruction pair for one backend invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPrompt {
    pub system: String,
    pub user: String,
}

/// Role and output contract for plan generation.
///
/// The output format described here is what [`super::parser::parse_plan`]
/// extracts; the two must stay in sync.
const PLAN_SYSTEM_PROMPT: &str = "\
You are a bot designed to create custom tailored listening lessons for learning a specified language.
The user will give you details about their learning goals, their current knowledge, and how long they want each lesson to last.
You will respond with a list of lessons for learning the specified language.
These lessons will later be handled by a tutor bot which will take your lesson descriptions and create a transcript for each lesson, lasting the specified duration.
Be detailed enough that the tutor bot can create a lesson of approximately the specified duration from the lesson description and learning goals alone.
The lessons will use English as the base language, and switch between speaking English and the language to learn.
You must reply in the following format:
Lesson: {Lesson title}
{Lesson description}

Lesson: {Lesson 2 title}
{Lesson 2 description}
...and so on
";

/// Build the prompt pair for plan generation.
///
/// The system instruction is fixed; the user instruction interpolates the
/// goal fields. Goals are assumed already validated at the boundary.
pub fn build_plan_prompt(goals: &LearningGoals) -> PlanPrompt {
    let user = format!(
        "I want to learn {}. I know {}.\n\
         I want each lesson to last {}.\n\
         I want {} lessons.\n\n\
         Now, create a learning plan in the desired format:",
        goals.target_language,
        goals.target_language_level,
        goals.lesson_duration,
        goals.number_of_lessons,
    );

    PlanPrompt {
        system: PLAN_SYSTEM_PROMPT.to_string(),
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_goals() -> LearningGoals {
        LearningGoals {
            target_language: "Spanish".to_string(),
            number_of_lessons: 8,
            lesson_duration: "10 minutes".to_string(),
            target_language_level: "a handful of greetings".to_string(),
        }
    }

    #[test]
    fn system_prompt_states_output_format() {
        let prompt = build_plan_prompt(&sample_goals());
        assert!(prompt.system.contains("Lesson: {Lesson title}"));
        assert!(prompt.system.contains("{Lesson description}"));
        assert!(prompt.system.contains("English as the base language"));
    }

    #[test]
    fn user_prompt_interpolates_all_goal_fields() {
        let prompt = build_plan_prompt(&sample_goals());
        assert!(prompt.user.contains("learn Spanish"));
        assert!(prompt.user.contains("a handful of greetings"));
        assert!(prompt.user.contains("last 10 minutes"));
        assert!(prompt.user.contains("8 lessons"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let goals = sample_goals();
        assert_eq!(build_plan_prompt(&goals), build_plan_prompt(&goals));
    }
}
