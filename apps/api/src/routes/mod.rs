pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::calendar::handlers as calendar;
use crate::lunar;
use crate::recommendations::handlers as recommendations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Calendar API
        .route("/api/regions", get(calendar::handle_list_regions))
        .route("/api/regions/:id", get(calendar::handle_get_region))
        .route("/api/event-types", get(calendar::handle_list_event_types))
        .route(
            "/api/events",
            get(calendar::handle_list_events).post(calendar::handle_create_event),
        )
        .route(
            "/api/events/:id",
            get(calendar::handle_get_event)
                .put(calendar::handle_update_event)
                .delete(calendar::handle_delete_event),
        )
        .route(
            "/api/holidays",
            get(calendar::handle_list_holidays).post(calendar::handle_create_holiday),
        )
        .route("/api/lunar/:date", get(lunar::handle_lunar))
        // Recommendations API
        .route(
            "/api/recommendations",
            get(recommendations::handle_list_recommendations),
        )
        .route(
            "/api/recommendations/generate",
            post(recommendations::handle_generate),
        )
        .route(
            "/api/recommendations/:id",
            get(recommendations::handle_get_recommendation)
                .delete(recommendations::handle_delete_recommendation),
        )
        .route(
            "/api/recommendations/:id/accept",
            put(recommendations::handle_accept),
        )
        .route(
            "/api/recommendations/:id/reject",
            put(recommendations::handle_reject),
        )
        .with_state(state)
}
