use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info};

use crate::errors::{AppError, ValidJson, ValidPath, ValidQuery};
use crate::models::event::{Event, EventPatch, NewEvent};
use crate::models::event_type::EventType;
use crate::models::holiday::{Holiday, NewHoliday};
use crate::models::region::Region;
use crate::state::AppState;
use crate::storage::CalendarFilter;

fn event_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Event {id} not found"))
}

/// GET /api/regions
/// Active regions only, ordered by id.
pub async fn handle_list_regions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Region>>, AppError> {
    Ok(Json(state.store.list_active_regions().await?))
}

/// GET /api/regions/:id
pub async fn handle_get_region(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Region>, AppError> {
    let region = state
        .store
        .get_region(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Region {id} not found")))?;
    Ok(Json(region))
}

/// GET /api/event-types
pub async fn handle_list_event_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventType>>, AppError> {
    Ok(Json(state.store.list_event_types().await?))
}

/// GET /api/events?regionId&startDate&endDate
pub async fn handle_list_events(
    State(state): State<AppState>,
    ValidQuery(filter): ValidQuery<CalendarFilter>,
) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.store.list_events(&filter).await?))
}

/// GET /api/events/:id
pub async fn handle_get_event(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Event>, AppError> {
    let event = state
        .store
        .get_event(id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    Ok(Json(event))
}

/// POST /api/events
pub async fn handle_create_event(
    State(state): State<AppState>,
    ValidJson(new_event): ValidJson<NewEvent>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    new_event.validate().map_err(AppError::Validation)?;
    let event = state.store.create_event(&new_event).await?;
    info!("Created event {} ({})", event.id, event.start_date);
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/:id
pub async fn handle_update_event(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(patch): ValidJson<EventPatch>,
) -> Result<Json<Event>, AppError> {
    patch.validate().map_err(AppError::Validation)?;

    // A patch touching only one bound can still invert the stored range.
    if patch.start_date.is_some() != patch.end_date.is_some() {
        let current = state
            .store
            .get_event(id)
            .await?
            .ok_or_else(|| event_not_found(id))?;
        let start = patch.start_date.unwrap_or(current.start_date);
        let end = patch.end_date.unwrap_or(current.end_date);
        if end < start {
            return Err(AppError::Validation(format!(
                "endDate {end} is before startDate {start}"
            )));
        }
    }

    let event = state
        .store
        .update_event(id, &patch)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    Ok(Json(event))
}

/// DELETE /api/events/:id
///
/// Idempotent: an unknown id still returns 204.
pub async fn handle_delete_event(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<StatusCode, AppError> {
    let removed = state.store.delete_event(id).await?;
    if removed == 0 {
        debug!("Delete of unknown event {id}");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/holidays?regionId&startDate&endDate
pub async fn handle_list_holidays(
    State(state): State<AppState>,
    ValidQuery(filter): ValidQuery<CalendarFilter>,
) -> Result<Json<Vec<Holiday>>, AppError> {
    Ok(Json(state.store.list_holidays(&filter).await?))
}

/// POST /api/holidays
pub async fn handle_create_holiday(
    State(state): State<AppState>,
    ValidJson(new_holiday): ValidJson<NewHoliday>,
) -> Result<(StatusCode, Json<Holiday>), AppError> {
    new_holiday.validate().map_err(AppError::Validation)?;
    let holiday = state.store.create_holiday(&new_holiday).await?;
    info!("Created holiday {} on {}", holiday.id, holiday.date);
    Ok((StatusCode::CREATED, Json(holiday)))
}
