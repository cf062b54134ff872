//! In-memory [`PlanStore`] backed by a mutex-guarded map.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::PlanStore;
use crate::goals::LearningGoals;
use crate::plan::{LearningPlan, LearningPlanItem, LessonDraft};

/// Non-durable store for tests and local experimentation.
#[derive(Default)]
pub struct MemoryPlanStore {
    plans: Mutex<HashMap<Uuid, LearningPlan>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored plans. Used by tests to assert atomicity.
    pub fn len(&self) -> usize {
        self.plans.lock().expect("store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PlanStore for MemoryPlanStore {
    async fn create_plan(
        &self,
        goals: &LearningGoals,
        items: &[LessonDraft],
    ) -> Result<LearningPlan> {
        let plan = LearningPlan {
            id: Uuid::new_v4(),
            goals: goals.clone(),
            items: items
                .iter()
                .enumerate()
                .map(|(position, draft)| LearningPlanItem {
                    id: Uuid::new_v4(),
                    title: draft.title.clone(),
                    details: draft.details.clone(),
                    position: position as i32,
                })
                .collect(),
            created_at: Utc::now(),
        };

        self.plans
            .lock()
            .expect("store mutex poisoned")
            .insert(plan.id, plan.clone());
        Ok(plan)
    }

    async fn get_plan(&self, id: Uuid) -> Result<Option<LearningPlan>> {
        Ok(self
            .plans
            .lock()
            .expect("store mutex poisoned")
            .get(&id)
            .cloned())
    }

    async fn list_plans(&self) -> Result<Vec<LearningPlan>> {
        let mut plans: Vec<LearningPlan> = self
            .plans
            .lock()
            .expect("store mutex poisoned")
            .values()
            .cloned()
            .collect();
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_goals() -> LearningGoals {
        LearningGoals {
            target_language: "Italian".to_string(),
            number_of_lessons: 3,
            lesson_duration: "5 minutes".to_string(),
            target_language_level: "none".to_string(),
        }
    }

    fn drafts() -> Vec<LessonDraft> {
        vec![
            LessonDraft {
                title: "Greetings".to_string(),
                details: "Hello, goodbye.".to_string(),
            },
            LessonDraft {
                title: "Numbers".to_string(),
                details: "One to ten.".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn create_assigns_ids_and_positions() {
        let store = MemoryPlanStore::new();
        let plan = store.create_plan(&sample_goals(), &drafts()).await.unwrap();

        assert_eq!(plan.items.len(), 2);
        assert_eq!(plan.items[0].position, 0);
        assert_eq!(plan.items[1].position, 1);
        assert_ne!(plan.items[0].id, plan.items[1].id);
        assert_eq!(plan.goals, sample_goals());
    }

    #[tokio::test]
    async fn get_round_trips_with_order() {
        let store = MemoryPlanStore::new();
        let created = store.create_plan(&sample_goals(), &drafts()).await.unwrap();

        let fetched = store.get_plan(created.id).await.unwrap().expect("present");
        assert_eq!(fetched, created);
        assert_eq!(fetched.items[0].title, "Greetings");
        assert_eq!(fetched.items[1].title, "Numbers");
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = MemoryPlanStore::new();
        assert!(store.get_plan(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_returns_all_plans() {
        let store = MemoryPlanStore::new();
        store.create_plan(&sample_goals(), &drafts()).await.unwrap();
        store.create_plan(&sample_goals(), &drafts()).await.unwrap();

        assert_eq!(store.list_plans().await.unwrap().len(), 2);
    }
}
