//! Database query functions for the `learning_plans` table.

use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::PlanRow;

/// Fetch a plan row by its ID.
pub async fn get_plan(pool: &PgPool, id: Uuid) -> Result<Option<PlanRow>> {
    let plan = sqlx::query_as::<_, PlanRow>("SELECT * FROM learning_plans WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch learning plan")?;

    Ok(plan)
}

/// List all plan rows, ordered by creation time (newest first).
pub async fn list_plans(pool: &PgPool) -> Result<Vec<PlanRow>> {
    let plans =
        sqlx::query_as::<_, PlanRow>("SELECT * FROM learning_plans ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .context("failed to list learning plans")?;

    Ok(plans)
}
