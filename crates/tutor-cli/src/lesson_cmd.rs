//! `tutor lesson` command.

use anyhow::{Context, Result};
use uuid::Uuid;

use tutor_core::backend::CompletionBackend;
use tutor_core::lesson;
use tutor_core::store::PlanStore;

/// Generate a transcript for one plan item and print it.
pub async fn run_lesson(
    store: &dyn PlanStore,
    backend: &dyn CompletionBackend,
    plan_id: &str,
    item_id: &str,
) -> Result<()> {
    let plan_id =
        Uuid::parse_str(plan_id).with_context(|| format!("invalid plan ID: {plan_id}"))?;
    let item_id =
        Uuid::parse_str(item_id).with_context(|| format!("invalid item ID: {item_id}"))?;

    let generated = lesson::create_lesson(backend, store, plan_id, item_id)
        .await
        .context("failed to generate lesson")?;

    println!("# {}", generated.title);
    println!();
    println!("{}", generated.transcript);
    Ok(())
}
