//! Row types mapped 1:1 to the database schema.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of `learning_plans`.
///
/// The goals that produced the plan are persisted on the plan row itself so
/// that lesson generation can always use the same goals (rather than
/// re-hardcoded defaults).
#[derive(Debug, Clone, FromRow)]
pub struct PlanRow {
    pub id: Uuid,
    pub target_language: String,
    pub number_of_lessons: i32,
    pub lesson_duration: String,
    pub target_language_level: String,
    pub created_at: DateTime<Utc>,
}

/// One row of `learning_plan_items`.
///
/// `position` records discovery order within the plan; reads always order
/// by it.
#[derive(Debug, Clone, FromRow)]
pub struct PlanItemRow {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub position: i32,
    pub title: String,
    pub details: String,
}
