//! Lesson orchestration: stored item -> prompt -> completion -> transcript.

use tracing::{debug, info};
use uuid::Uuid;

use crate::backend::CompletionBackend;
use crate::error::ServiceError;
use crate::store::PlanStore;

use super::Lesson;
use super::parser::parse_transcript;
use super::prompt::build_lesson_prompt;

/// Generate a lesson transcript for one item of a stored plan.
///
/// The item must belong to the given plan; a mismatched pair is
/// `NotFound`, never a cross-plan lookup. The lesson prompt uses the same
/// goals that produced the plan. Lessons are not persisted.
pub async fn create_lesson(
    backend: &dyn CompletionBackend,
    store: &dyn PlanStore,
    plan_id: Uuid,
    item_id: Uuid,
) -> Result<Lesson, ServiceError> {
    let plan = store
        .get_plan(plan_id)
        .await
        .map_err(ServiceError::Storage)?
        .ok_or_else(|| ServiceError::plan_not_found(plan_id))?;

    let item = plan
        .item(item_id)
        .ok_or_else(|| ServiceError::item_not_found(item_id))?;

    let prompt = build_lesson_prompt(&plan.goals, item);
    debug!(
        backend = backend.name(),
        plan_id = %plan_id,
        item_id = %item_id,
        "generating lesson transcript"
    );

    let completion = backend.complete(&prompt.system, &prompt.user).await?;
    let transcript = parse_transcript(&completion)?;

    info!(
        plan_id = %plan_id,
        item_id = %item_id,
        title = %item.title,
        "lesson generated"
    );
    Ok(Lesson {
        title: item.title.clone(),
        transcript,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::goals::LearningGoals;
    use crate::lesson::parser::LessonParseError;
    use crate::plan::LessonDraft;
    use crate::store::MemoryPlanStore;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend that records the prompts it receives and replies with a
    /// canned transcript.
    struct RecordingBackend {
        reply: String,
        seen_user_prompts: Mutex<Vec<String>>,
    }

    impl RecordingBackend {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen_user_prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend {
        fn name(&self) -> &str {
            "recording"
        }

        async fn complete(&self, _system: &str, user: &str) -> Result<String, BackendError> {
            self.seen_user_prompts
                .lock()
                .unwrap()
                .push(user.to_string());
            Ok(self.reply.clone())
        }
    }

    fn sample_goals() -> LearningGoals {
        LearningGoals {
            target_language: "Korean".to_string(),
            number_of_lessons: 1,
            lesson_duration: "7 minutes".to_string(),
            target_language_level: "hangul only".to_string(),
        }
    }

    async fn seeded_store() -> (MemoryPlanStore, Uuid, Uuid) {
        let store = MemoryPlanStore::new();
        let plan = store
            .create_plan(
                &sample_goals(),
                &[LessonDraft {
                    title: "Introductions".to_string(),
                    details: "Names and simple self-introduction.".to_string(),
                }],
            )
            .await
            .unwrap();
        let item_id = plan.items[0].id;
        (store, plan.id, item_id)
    }

    #[tokio::test]
    async fn lesson_carries_item_title_and_transcript() {
        let (store, plan_id, item_id) = seeded_store().await;
        let backend = RecordingBackend::new("  Welcome. Annyeonghaseyo.  ");

        let lesson = create_lesson(&backend, &store, plan_id, item_id)
            .await
            .expect("should succeed");

        assert_eq!(lesson.title, "Introductions");
        assert_eq!(lesson.transcript, "Welcome. Annyeonghaseyo.");
    }

    #[tokio::test]
    async fn prompt_uses_the_plans_persisted_goals() {
        let (store, plan_id, item_id) = seeded_store().await;
        let backend = RecordingBackend::new("transcript");

        create_lesson(&backend, &store, plan_id, item_id)
            .await
            .unwrap();

        let prompts = backend.seen_user_prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("learning Korean"));
        assert!(prompts[0].contains("7 minutes"));
        assert!(prompts[0].contains("hangul only"));
        assert!(prompts[0].contains("Introductions"));
    }

    #[tokio::test]
    async fn unknown_plan_is_not_found() {
        let (store, _, item_id) = seeded_store().await;
        let backend = RecordingBackend::new("transcript");

        let err = create_lesson(&backend, &store, Uuid::new_v4(), item_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { what: "plan", .. }));
        assert!(backend.seen_user_prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_item_is_not_found() {
        let (store, plan_id, _) = seeded_store().await;
        let backend = RecordingBackend::new("transcript");

        let err = create_lesson(&backend, &store, plan_id, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound {
                what: "plan item",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn item_from_another_plan_is_not_found() {
        let (store, plan_id, _) = seeded_store().await;

        // A second plan whose item id must not resolve through the first.
        let other = store
            .create_plan(
                &sample_goals(),
                &[LessonDraft {
                    title: "Other".to_string(),
                    details: "Belongs elsewhere.".to_string(),
                }],
            )
            .await
            .unwrap();
        let foreign_item_id = other.items[0].id;

        let backend = RecordingBackend::new("transcript");
        let err = create_lesson(&backend, &store, plan_id, foreign_item_id)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound {
                what: "plan item",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn empty_completion_is_a_parse_error() {
        let (store, plan_id, item_id) = seeded_store().await;
        let backend = RecordingBackend::new("   \n  ");

        let err = create_lesson(&backend, &store, plan_id, item_id)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::LessonParse(LessonParseError::EmptyResponse)
        ));
    }
}
