//! `tutor plan` subcommands.

use anyhow::{Context, Result};
use uuid::Uuid;

use tutor_core::backend::CompletionBackend;
use tutor_core::store::PlanStore;
use tutor_core::{LearningGoals, LearningPlan, plan};

/// Generate and persist a plan from goals given as flags, then print it.
pub async fn run_plan_create(
    store: &dyn PlanStore,
    backend: &dyn CompletionBackend,
    goals: LearningGoals,
) -> Result<()> {
    let created = plan::create_learning_plan(backend, store, &goals)
        .await
        .context("failed to create learning plan")?;

    println!("Created plan {}", created.id);
    print_plan(&created);
    Ok(())
}

/// Show one plan, or list all plans when no id is given.
pub async fn run_plan_show(store: &dyn PlanStore, plan_id: Option<&str>) -> Result<()> {
    match plan_id {
        Some(raw) => {
            let id = Uuid::parse_str(raw).with_context(|| format!("invalid plan ID: {raw}"))?;
            let found = store
                .get_plan(id)
                .await?
                .with_context(|| format!("plan {id} not found"))?;
            print_plan(&found);
        }
        None => {
            let plans = store.list_plans().await?;
            if plans.is_empty() {
                println!("No plans yet. Create one with `tutor plan create`.");
                return Ok(());
            }
            for plan in &plans {
                println!(
                    "{}  {}  {} items  ({})",
                    plan.id,
                    plan.goals.target_language,
                    plan.items.len(),
                    plan.created_at.format("%Y-%m-%d %H:%M"),
                );
            }
        }
    }
    Ok(())
}

fn print_plan(plan: &LearningPlan) {
    println!(
        "  language: {}  level: {}  duration: {}",
        plan.goals.target_language, plan.goals.target_language_level, plan.goals.lesson_duration,
    );
    for item in &plan.items {
        println!();
        println!("  [{}] {}  ({})", item.position + 1, item.title, item.id);
        for line in item.details.lines() {
            println!("      {line}");
        }
    }
}
