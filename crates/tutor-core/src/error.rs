//! The error surface of the two services.
//!
//! Every failure is scoped to a single request; nothing here is fatal to
//! the process. The HTTP boundary maps each variant to a status code.

use thiserror::Error;
use uuid::Uuid;

use crate::backend::BackendError;
use crate::goals::GoalsValidationError;
use crate::lesson::LessonParseError;
use crate::plan::PlanParseError;

/// Failure of a plan or lesson creation request.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submitted learning goals are malformed.
    #[error(transparent)]
    Validation(#[from] GoalsValidationError),

    /// The completion backend failed, timed out, or returned nothing usable.
    /// Never retried automatically.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The completion text could not be reduced to at least one lesson item.
    /// No partial or empty plan is persisted when this occurs.
    #[error(transparent)]
    PlanParse(#[from] PlanParseError),

    /// The completion text for a single lesson was unusable.
    #[error(transparent)]
    LessonParse(#[from] LessonParseError),

    /// A referenced plan or item does not resolve, or the item does not
    /// belong to the specified plan.
    #[error("{what} {id} not found")]
    NotFound { what: &'static str, id: Uuid },

    /// The persistence layer failed.
    #[error("storage error: {0:#}")]
    Storage(anyhow::Error),
}

impl ServiceError {
    pub fn plan_not_found(id: Uuid) -> Self {
        Self::NotFound { what: "plan", id }
    }

    pub fn item_not_found(id: Uuid) -> Self {
        Self::NotFound {
            what: "plan item",
            id,
        }
    }
}
