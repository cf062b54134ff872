//! Plan orchestration: goals -> prompt -> completion -> parse -> persist.

use tracing::{debug, info};

use crate::backend::CompletionBackend;
use crate::error::ServiceError;
use crate::goals::LearningGoals;
use crate::store::PlanStore;

use super::parser::parse_plan;
use super::prompt::build_plan_prompt;
use super::types::LearningPlan;

/// Create and persist a learning plan from the given goals.
///
/// Invokes the backend exactly once. A backend or parse failure aborts the
/// operation before anything is persisted; the returned plan always
/// carries store-assigned identifiers with item order preserved.
pub async fn create_learning_plan(
    backend: &dyn CompletionBackend,
    store: &dyn PlanStore,
    goals: &LearningGoals,
) -> Result<LearningPlan, ServiceError> {
    goals.validate()?;

    let prompt = build_plan_prompt(goals);
    debug!(backend = backend.name(), "generating learning plan");

    let completion = backend.complete(&prompt.system, &prompt.user).await?;
    let drafts = parse_plan(&completion)?;

    let plan = store
        .create_plan(goals, &drafts)
        .await
        .map_err(ServiceError::Storage)?;

    info!(
        plan_id = %plan.id,
        items = plan.items.len(),
        language = %plan.goals.target_language,
        "learning plan created"
    );
    Ok(plan)
}
