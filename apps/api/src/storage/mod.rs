//! Storage Gateway: the only module that talks to the relational store.
//!
//! Handlers depend on the [`CalendarStore`] trait; the production
//! implementation is [`postgres::PgStore`]. Field names cross this boundary in
//! camelCase and are translated to columns through the maps in [`columns`].

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::models::event::{Event, EventPatch, NewEvent};
use crate::models::event_type::EventType;
use crate::models::holiday::{Holiday, NewHoliday};
use crate::models::recommendation::{Recommendation, RecommendationDraft, RecommendationStatus};
use crate::models::region::Region;

pub mod columns;
#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Any failure of the backing store. Not distinguished by cause at the HTTP
/// layer; never retried.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no column mapping for field '{field}' on table {table}")]
    UnmappedField {
        table: &'static str,
        field: &'static str,
    },
}

/// Optional region + inclusive date bounds, shared by events and holidays.
/// Doubles as the query-string shape of the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarFilter {
    pub region_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationFilter {
    pub region_id: Option<i32>,
    pub status: Option<RecommendationStatus>,
}

#[async_trait]
pub trait CalendarStore: Send + Sync {
    async fn list_active_regions(&self) -> Result<Vec<Region>, StorageError>;
    async fn get_region(&self, id: i32) -> Result<Option<Region>, StorageError>;

    async fn list_event_types(&self) -> Result<Vec<EventType>, StorageError>;

    /// Events with `start_date >= filter.start_date` and
    /// `end_date <= filter.end_date`, ordered by start date.
    async fn list_events(&self, filter: &CalendarFilter) -> Result<Vec<Event>, StorageError>;
    async fn get_event(&self, id: i32) -> Result<Option<Event>, StorageError>;
    async fn create_event(&self, event: &NewEvent) -> Result<Event, StorageError>;
    /// Returns `None` when no event has this id.
    async fn update_event(&self, id: i32, patch: &EventPatch) -> Result<Option<Event>, StorageError>;
    /// Returns the number of rows removed (0 for an unknown id).
    async fn delete_event(&self, id: i32) -> Result<u64, StorageError>;

    /// Holidays dated within the inclusive bounds, ordered by date.
    async fn list_holidays(&self, filter: &CalendarFilter) -> Result<Vec<Holiday>, StorageError>;
    async fn create_holiday(&self, holiday: &NewHoliday) -> Result<Holiday, StorageError>;

    /// Newest first.
    async fn list_recommendations(
        &self,
        filter: &RecommendationFilter,
    ) -> Result<Vec<Recommendation>, StorageError>;
    async fn get_recommendation(&self, id: i32) -> Result<Option<Recommendation>, StorageError>;
    async fn create_recommendation(
        &self,
        draft: &RecommendationDraft,
    ) -> Result<Recommendation, StorageError>;
    async fn update_recommendation_status(
        &self,
        id: i32,
        status: RecommendationStatus,
    ) -> Result<Option<Recommendation>, StorageError>;
    async fn delete_recommendation(&self, id: i32) -> Result<u64, StorageError>;
}
