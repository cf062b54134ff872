//! Plan pipeline: prompt construction, response parsing, orchestration.

pub mod parser;
pub mod prompt;
pub mod service;
pub mod types;

pub use parser::{PlanParseError, parse_plan};
pub use prompt::{PlanPrompt, build_plan_prompt};
pub use service::create_learning_plan;
pub use types::{LearningPlan, LearningPlanItem, LessonDraft};
