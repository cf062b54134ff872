//! Core pipeline for generating language-learning plans and lessons.
//!
//! The flow is one-directional:
//!
//! ```text
//! LearningGoals
//!     |
//!     v
//! plan::prompt::build_plan_prompt
//!     |
//!     v
//! backend::CompletionBackend::complete   (one round trip)
//!     |
//!     v
//! plan::parser::parse_plan               (free text -> ordered drafts)
//!     |
//!     v
//! store::PlanStore::create_plan          (atomic, assigns ids)
//!     |
//!     v
//! LearningPlan
//! ```
//!
//! Lesson generation resolves a stored plan + item, builds a lesson prompt
//! from the plan's own persisted goals, and runs the same backend once.

pub mod backend;
pub mod error;
pub mod goals;
pub mod lesson;
pub mod plan;
pub mod store;

pub use error::ServiceError;
pub use goals::LearningGoals;
pub use lesson::Lesson;
pub use plan::{LearningPlan, LearningPlanItem, LessonDraft};
