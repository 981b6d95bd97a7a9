//! In-process [`CalendarStore`] used by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::models::event::{Event, EventPatch, NewEvent};
use crate::models::event_type::EventType;
use crate::models::holiday::{Holiday, NewHoliday};
use crate::models::recommendation::{Recommendation, RecommendationDraft, RecommendationStatus};
use crate::models::region::Region;
use crate::storage::{CalendarFilter, CalendarStore, RecommendationFilter, StorageError};

#[derive(Default)]
struct Tables {
    next_id: i32,
    regions: Vec<Region>,
    event_types: Vec<EventType>,
    events: Vec<Event>,
    holidays: Vec<Holiday>,
    recommendations: Vec<Recommendation>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    /// Number of further recommendation inserts that succeed before every
    /// insert fails. `None` never fails.
    recommendation_insert_budget: Mutex<Option<usize>>,
}

impl MemoryStore {
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut tables = store.tables.lock().unwrap();
            tables.regions = vec![
                Region {
                    id: 1,
                    name: "China".to_string(),
                    code: "CN".to_string(),
                    timezone: "Asia/Shanghai".to_string(),
                    is_active: true,
                },
                Region {
                    id: 4,
                    name: "Europe".to_string(),
                    code: "EU".to_string(),
                    timezone: "Europe/London".to_string(),
                    is_active: true,
                },
                Region {
                    id: 13,
                    name: "Antarctica".to_string(),
                    code: "AQ".to_string(),
                    timezone: "UTC".to_string(),
                    is_active: false,
                },
            ];
            tables.event_types = vec![
                EventType {
                    id: 1,
                    name: "Holiday".to_string(),
                    color: "#EF4444".to_string(),
                    icon: "calendar".to_string(),
                },
                EventType {
                    id: 2,
                    name: "Marketing Campaign".to_string(),
                    color: "#3B82F6".to_string(),
                    icon: "megaphone".to_string(),
                },
            ];
            tables.next_id = 100;
        }
        store
    }

    pub fn fail_recommendation_inserts_after(&self, successes: usize) {
        *self.recommendation_insert_budget.lock().unwrap() = Some(successes);
    }

    pub fn events(&self) -> Vec<Event> {
        self.tables.lock().unwrap().events.clone()
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.tables.lock().unwrap().recommendations.clone()
    }
}

fn in_range(filter: &CalendarFilter, start: chrono::NaiveDate, end: chrono::NaiveDate) -> bool {
    filter.start_date.map_or(true, |s| start >= s) && filter.end_date.map_or(true, |e| end <= e)
}

#[async_trait]
impl CalendarStore for MemoryStore {
    async fn list_active_regions(&self) -> Result<Vec<Region>, StorageError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.regions.iter().filter(|r| r.is_active).cloned().collect())
    }

    async fn get_region(&self, id: i32) -> Result<Option<Region>, StorageError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.regions.iter().find(|r| r.id == id).cloned())
    }

    async fn list_event_types(&self) -> Result<Vec<EventType>, StorageError> {
        Ok(self.tables.lock().unwrap().event_types.clone())
    }

    async fn list_events(&self, filter: &CalendarFilter) -> Result<Vec<Event>, StorageError> {
        let tables = self.tables.lock().unwrap();
        let mut events: Vec<Event> = tables
            .events
            .iter()
            .filter(|e| filter.region_id.map_or(true, |r| e.region_id == Some(r)))
            .filter(|e| in_range(filter, e.start_date, e.end_date))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.start_date);
        Ok(events)
    }

    async fn get_event(&self, id: i32) -> Result<Option<Event>, StorageError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.events.iter().find(|e| e.id == id).cloned())
    }

    async fn create_event(&self, event: &NewEvent) -> Result<Event, StorageError> {
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let row = Event {
            id: tables.next_id(),
            title: event.title.clone(),
            description: event.description.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            region_id: event.region_id,
            event_type_id: event.event_type_id,
            is_holiday: event.is_holiday,
            created_at: now,
            updated_at: now,
        };
        tables.events.push(row.clone());
        Ok(row)
    }

    async fn update_event(&self, id: i32, patch: &EventPatch) -> Result<Option<Event>, StorageError> {
        let mut tables = self.tables.lock().unwrap();
        let Some(event) = tables.events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &patch.title {
            event.title = title.clone();
        }
        if let Some(description) = &patch.description {
            event.description = description.clone();
        }
        if let Some(start) = patch.start_date {
            event.start_date = start;
        }
        if let Some(end) = patch.end_date {
            event.end_date = end;
        }
        if let Some(region_id) = patch.region_id {
            event.region_id = region_id;
        }
        if let Some(event_type_id) = patch.event_type_id {
            event.event_type_id = event_type_id;
        }
        if let Some(is_holiday) = patch.is_holiday {
            event.is_holiday = is_holiday;
        }
        event.updated_at = Utc::now();
        Ok(Some(event.clone()))
    }

    async fn delete_event(&self, id: i32) -> Result<u64, StorageError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.events.len();
        tables.events.retain(|e| e.id != id);
        Ok((before - tables.events.len()) as u64)
    }

    async fn list_holidays(&self, filter: &CalendarFilter) -> Result<Vec<Holiday>, StorageError> {
        let tables = self.tables.lock().unwrap();
        let mut holidays: Vec<Holiday> = tables
            .holidays
            .iter()
            .filter(|h| filter.region_id.map_or(true, |r| h.region_id == Some(r)))
            .filter(|h| in_range(filter, h.date, h.date))
            .cloned()
            .collect();
        holidays.sort_by_key(|h| h.date);
        Ok(holidays)
    }

    async fn create_holiday(&self, holiday: &NewHoliday) -> Result<Holiday, StorageError> {
        let mut tables = self.tables.lock().unwrap();
        let row = Holiday {
            id: tables.next_id(),
            name: holiday.name.clone(),
            description: holiday.description.clone(),
            date: holiday.date,
            region_id: holiday.region_id,
            holiday_type: holiday.holiday_type,
            is_recurring: holiday.is_recurring,
            created_at: Utc::now(),
        };
        tables.holidays.push(row.clone());
        Ok(row)
    }

    async fn list_recommendations(
        &self,
        filter: &RecommendationFilter,
    ) -> Result<Vec<Recommendation>, StorageError> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Recommendation> = tables
            .recommendations
            .iter()
            .filter(|r| filter.region_id.map_or(true, |id| r.region_id == Some(id)))
            .filter(|r| filter.status.map_or(true, |s| r.status == s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_recommendation(&self, id: i32) -> Result<Option<Recommendation>, StorageError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.recommendations.iter().find(|r| r.id == id).cloned())
    }

    async fn create_recommendation(
        &self,
        draft: &RecommendationDraft,
    ) -> Result<Recommendation, StorageError> {
        {
            let mut budget = self.recommendation_insert_budget.lock().unwrap();
            match budget.as_mut() {
                Some(0) => return Err(StorageError::Database(sqlx::Error::PoolTimedOut)),
                Some(remaining) => *remaining -= 1,
                None => {}
            }
        }

        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        // Strictly increasing timestamps keep newest-first ordering deterministic.
        let now = Utc::now() + Duration::milliseconds(i64::from(id));
        let row = Recommendation {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            suggested_date: draft.suggested_date,
            confidence_score: draft.confidence_score,
            status: draft.status,
            region_id: draft.region_id,
            event_type_id: draft.event_type_id,
            reasoning: draft.reasoning.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.recommendations.push(row.clone());
        Ok(row)
    }

    async fn update_recommendation_status(
        &self,
        id: i32,
        status: RecommendationStatus,
    ) -> Result<Option<Recommendation>, StorageError> {
        let mut tables = self.tables.lock().unwrap();
        let Some(row) = tables.recommendations.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        row.status = status;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_recommendation(&self, id: i32) -> Result<u64, StorageError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.recommendations.len();
        tables.recommendations.retain(|r| r.id != id);
        Ok((before - tables.recommendations.len()) as u64)
    }
}
