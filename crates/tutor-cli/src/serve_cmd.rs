//! HTTP boundary: axum router over the plan and lesson services.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use tutor_core::backend::CompletionBackend;
use tutor_core::store::PlanStore;
use tutor_core::{LearningGoals, LearningPlan, Lesson, ServiceError, lesson, plan};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Shared service dependencies. Both are stateless and safe for concurrent
/// use, so one instance serves all requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PlanStore>,
    pub backend: Arc<dyn CompletionBackend>,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("{err:#}"),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            // The upstream backend failed us.
            ServiceError::Backend(_) => StatusCode::BAD_GATEWAY,
            ServiceError::PlanParse(_) | ServiceError::LessonParse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/plans", post(create_plan).get(list_plans))
        .route("/plans/{id}", get(get_plan))
        .route("/lessons", post(create_lesson))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn create_plan(
    State(state): State<AppState>,
    Json(goals): Json<LearningGoals>,
) -> Result<Json<LearningPlan>, AppError> {
    let created =
        plan::create_learning_plan(state.backend.as_ref(), state.store.as_ref(), &goals).await?;
    Ok(Json(created))
}

async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<LearningPlan>>, AppError> {
    let plans = state.store.list_plans().await.map_err(AppError::internal)?;
    Ok(Json(plans))
}

async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LearningPlan>, AppError> {
    let found = state
        .store
        .get_plan(id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(format!("plan {id} not found")))?;
    Ok(Json(found))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LessonParams {
    learning_plan_id: Uuid,
    learning_plan_item_id: Uuid,
}

async fn create_lesson(
    State(state): State<AppState>,
    Query(params): Query<LessonParams>,
) -> Result<Json<Lesson>, AppError> {
    let generated = lesson::create_lesson(
        state.backend.as_ref(),
        state.store.as_ref(),
        params.learning_plan_id,
        params.learning_plan_item_id,
    )
    .await?;
    Ok(Json(generated))
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(state: AppState, bind: &str, port: u16) -> Result<()> {
    let app = build_router(state);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("tutor serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("tutor serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
