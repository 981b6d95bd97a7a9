use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::present;
use crate::storage::columns::FieldValue;

/// A calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub region_id: Option<i32>,
    pub event_type_id: Option<i32>,
    pub is_holiday: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /api/events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub region_id: Option<i32>,
    #[serde(default)]
    pub event_type_id: Option<i32>,
    #[serde(default)]
    pub is_holiday: bool,
}

impl NewEvent {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title cannot be empty".to_string());
        }
        check_date_order(self.start_date, self.end_date)
    }
}

/// Request body for `PUT /api/events/:id`. Every field is optional; the
/// nullable columns use a nested `Option` so an explicit `null` clears them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "present")]
    pub region_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub event_type_id: Option<Option<i32>>,
    #[serde(default)]
    pub is_holiday: Option<bool>,
}

impl EventPatch {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err("title cannot be empty".to_string());
            }
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => check_date_order(start, end),
            _ => Ok(()),
        }
    }

    /// The fields this patch sets, keyed by their API field name.
    pub fn assignments(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        if let Some(title) = &self.title {
            out.push(("title", FieldValue::Text(Some(title.clone()))));
        }
        if let Some(description) = &self.description {
            out.push(("description", FieldValue::Text(description.clone())));
        }
        if let Some(start) = self.start_date {
            out.push(("startDate", FieldValue::Date(Some(start))));
        }
        if let Some(end) = self.end_date {
            out.push(("endDate", FieldValue::Date(Some(end))));
        }
        if let Some(region_id) = self.region_id {
            out.push(("regionId", FieldValue::Id(region_id)));
        }
        if let Some(event_type_id) = self.event_type_id {
            out.push(("eventTypeId", FieldValue::Id(event_type_id)));
        }
        if let Some(is_holiday) = self.is_holiday {
            out.push(("isHoliday", FieldValue::Flag(is_holiday)));
        }
        out
    }
}

fn check_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), String> {
    if end < start {
        return Err(format!("endDate {end} is before startDate {start}"));
    }
    Ok(())
}
