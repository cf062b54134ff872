//! Database query functions for the `learning_plan_items` table.

use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::PlanItemRow;

/// Fetch the items of a plan in plan order.
pub async fn list_items_for_plan(pool: &PgPool, plan_id: Uuid) -> Result<Vec<PlanItemRow>> {
    let items = sqlx::query_as::<_, PlanItemRow>(
        "SELECT * FROM learning_plan_items WHERE plan_id = $1 ORDER BY position",
    )
    .bind(plan_id)
    .fetch_all(pool)
    .await
    .context("failed to list plan items")?;

    Ok(items)
}
