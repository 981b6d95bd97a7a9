//! Axum route handlers for the Recommendations API.

use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::{AppError, JsonOrDefault, ValidJson, ValidPath, ValidQuery};
use crate::models::recommendation::{Recommendation, RecommendationStatus};
use crate::recommendations::generator::{generate, GenerationParams};
use crate::recommendations::prompts::Language;
use crate::state::AppState;
use crate::storage::{CalendarFilter, RecommendationFilter};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub region_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub language: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptRequest {
    #[serde(default)]
    pub create_event: bool,
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Recommendation {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/recommendations?regionId&status
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    ValidQuery(filter): ValidQuery<RecommendationFilter>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    Ok(Json(state.store.list_recommendations(&filter).await?))
}

/// GET /api/recommendations/:id
pub async fn handle_get_recommendation(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Recommendation>, AppError> {
    let recommendation = state
        .store
        .get_recommendation(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(recommendation))
}

/// POST /api/recommendations/generate
///
/// Reads the window's events and holidays, asks the model for drafts (falling
/// back to one deterministic draft), then persists every draft. Rows written
/// before a failing insert stay written.
pub async fn handle_generate(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<GenerateRequest>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let language: Language = request.language.parse()?;
    if request.end_date < request.start_date {
        return Err(AppError::Validation(format!(
            "endDate {} is before startDate {}",
            request.end_date, request.start_date
        )));
    }

    let window = CalendarFilter {
        region_id: Some(request.region_id),
        start_date: Some(request.start_date),
        end_date: Some(request.end_date),
    };
    let events = state.store.list_events(&window).await?;
    let holidays = state.store.list_holidays(&window).await?;

    info!(
        "Generating recommendations for region {} ({} to {}) with {} events, {} holidays",
        request.region_id,
        request.start_date,
        request.end_date,
        events.len(),
        holidays.len()
    );

    let drafts = generate(
        state.llm.as_ref(),
        &GenerationParams {
            language,
            region_id: request.region_id,
            start_date: request.start_date,
            end_date: request.end_date,
            existing_events: &events,
            existing_holidays: &holidays,
        },
    )
    .await;

    let mut saved = Vec::with_capacity(drafts.len());
    for draft in &drafts {
        saved.push(state.store.create_recommendation(draft).await?);
    }

    info!(
        "Persisted {} recommendation(s) for region {}",
        saved.len(),
        request.region_id
    );
    Ok(Json(saved))
}

/// PUT /api/recommendations/:id/accept
///
/// With `createEvent: true` also materializes a calendar event on the
/// suggested date. The body may be empty; a non-empty body must be valid.
pub async fn handle_accept(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    JsonOrDefault(request): JsonOrDefault<AcceptRequest>,
) -> Result<Json<Recommendation>, AppError> {

    let current = state
        .store
        .get_recommendation(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let next = current.status.transition_to(RecommendationStatus::Accepted)?;

    let new_event = if request.create_event {
        let event = current.to_event().ok_or_else(|| {
            AppError::Validation(format!(
                "Recommendation {id} has no suggestedDate; cannot create an event"
            ))
        })?;
        Some(event)
    } else {
        None
    };

    let updated = state
        .store
        .update_recommendation_status(id, next)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Some(event) = new_event {
        let created = state.store.create_event(&event).await?;
        info!("Recommendation {id} accepted as event {}", created.id);
    }

    Ok(Json(updated))
}

/// PUT /api/recommendations/:id/reject
pub async fn handle_reject(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Recommendation>, AppError> {
    let current = state
        .store
        .get_recommendation(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let next = current.status.transition_to(RecommendationStatus::Rejected)?;

    let updated = state
        .store
        .update_recommendation_status(id, next)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(updated))
}

/// DELETE /api/recommendations/:id
///
/// Idempotent: an unknown id still returns 204.
pub async fn handle_delete_recommendation(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<StatusCode, AppError> {
    let removed = state.store.delete_recommendation(id).await?;
    if removed == 0 {
        debug!("Delete of unknown recommendation {id}");
    }
    Ok(StatusCode::NO_CONTENT)
}
