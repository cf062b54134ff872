//! Persistence abstraction for learning plans.
//!
//! The pipeline consumes persistence as a capability: create a plan
//! atomically, read one back, list them. Identifiers are assigned here and
//! nowhere else. [`PgPlanStore`] is the production implementation;
//! [`MemoryPlanStore`] backs tests and local experimentation.

pub mod memory;
pub mod postgres;

pub use memory::MemoryPlanStore;
pub use postgres::PgPlanStore;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::goals::LearningGoals;
use crate::plan::{LearningPlan, LessonDraft};

/// Durable storage for learning plans.
///
/// Object-safe so orchestrators and the HTTP boundary can hold it as
/// `Arc<dyn PlanStore>`. Implementations must be safe for concurrent use.
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Persist a plan and all its items as one atomic create.
    ///
    /// Assigns identifiers to the plan and to each item, stores the goals
    /// alongside the plan, and preserves item order. Either everything is
    /// stored or nothing is.
    async fn create_plan(
        &self,
        goals: &LearningGoals,
        items: &[LessonDraft],
    ) -> Result<LearningPlan>;

    /// Fetch a plan with its items in plan order, or `None` if absent.
    async fn get_plan(&self, id: Uuid) -> Result<Option<LearningPlan>>;

    /// List all plans, newest first.
    async fn list_plans(&self) -> Result<Vec<LearningPlan>>;
}

// Compile-time assertion: PlanStore must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn PlanStore) {}
};
