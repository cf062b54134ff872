//! PostgreSQL [`PlanStore`] over `tutor-db`.
//!
//! Plan creation inserts the plan row and every item row inside a single
//! transaction. If any insert fails, the whole create rolls back and no
//! partial plan is visible.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use tutor_db::models::{PlanItemRow, PlanRow};
use tutor_db::queries::{items as item_queries, plans as plan_queries};

use super::PlanStore;
use crate::goals::LearningGoals;
use crate::plan::{LearningPlan, LearningPlanItem, LessonDraft};

/// Production store backed by a shared connection pool.
#[derive(Clone)]
pub struct PgPlanStore {
    pool: PgPool,
}

impl PgPlanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Assemble the domain plan from its rows.
fn assemble(plan: PlanRow, items: Vec<PlanItemRow>) -> LearningPlan {
    LearningPlan {
        id: plan.id,
        goals: LearningGoals {
            target_language: plan.target_language,
            number_of_lessons: plan.number_of_lessons,
            lesson_duration: plan.lesson_duration,
            target_language_level: plan.target_language_level,
        },
        items: items
            .into_iter()
            .map(|row| LearningPlanItem {
                id: row.id,
                title: row.title,
                details: row.details,
                position: row.position,
            })
            .collect(),
        created_at: plan.created_at,
    }
}

#[async_trait]
impl PlanStore for PgPlanStore {
    async fn create_plan(
        &self,
        goals: &LearningGoals,
        items: &[LessonDraft],
    ) -> Result<LearningPlan> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to begin transaction")?;

        let plan_row = sqlx::query_as::<_, PlanRow>(
            "INSERT INTO learning_plans \
             (target_language, number_of_lessons, lesson_duration, target_language_level) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&goals.target_language)
        .bind(goals.number_of_lessons)
        .bind(&goals.lesson_duration)
        .bind(&goals.target_language_level)
        .fetch_one(&mut *tx)
        .await
        .context("failed to insert learning plan")?;

        let mut item_rows = Vec::with_capacity(items.len());
        for (position, draft) in items.iter().enumerate() {
            let row = sqlx::query_as::<_, PlanItemRow>(
                "INSERT INTO learning_plan_items (plan_id, position, title, details) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING *",
            )
            .bind(plan_row.id)
            .bind(position as i32)
            .bind(&draft.title)
            .bind(&draft.details)
            .fetch_one(&mut *tx)
            .await
            .with_context(|| format!("failed to insert plan item {:?}", draft.title))?;

            item_rows.push(row);
        }

        tx.commit().await.context("failed to commit transaction")?;

        Ok(assemble(plan_row, item_rows))
    }

    async fn get_plan(&self, id: Uuid) -> Result<Option<LearningPlan>> {
        let Some(plan_row) = plan_queries::get_plan(&self.pool, id).await? else {
            return Ok(None);
        };
        let items = item_queries::list_items_for_plan(&self.pool, id).await?;
        Ok(Some(assemble(plan_row, items)))
    }

    async fn list_plans(&self) -> Result<Vec<LearningPlan>> {
        let plan_rows = plan_queries::list_plans(&self.pool).await?;

        let mut plans = Vec::with_capacity(plan_rows.len());
        for row in plan_rows {
            let items = item_queries::list_items_for_plan(&self.pool, row.id).await?;
            plans.push(assemble(row, items));
        }
        Ok(plans)
    }
}
