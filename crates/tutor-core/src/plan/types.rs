//! Plan domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::goals::LearningGoals;

/// One lesson as extracted from the raw completion text, before
/// persistence. Title and details are trimmed and guaranteed non-empty by
/// the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDraft {
    pub title: String,
    pub details: String,
}

/// One planned lesson within a stored plan.
///
/// The identifier is assigned by the store, never by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlanItem {
    pub id: Uuid,
    pub title: String,
    pub details: String,
    /// Zero-based discovery order within the plan.
    pub position: i32,
}

/// A stored learning plan: the goals that produced it plus its ordered
/// items. Plans are created atomically and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub id: Uuid,
    pub goals: LearningGoals,
    pub items: Vec<LearningPlanItem>,
    pub created_at: DateTime<Utc>,
}

impl LearningPlan {
    /// Find an item of this plan by id.
    ///
    /// Returns `None` for ids belonging to other plans; callers treat that
    /// as not-found rather than falling back to a cross-plan lookup.
    pub fn item(&self, item_id: Uuid) -> Option<&LearningPlanItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}
