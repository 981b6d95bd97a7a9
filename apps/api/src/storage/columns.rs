//! Bidirectional field ↔ column tables, one per entity.
//!
//! Every dynamic statement in the Postgres gateway resolves column names
//! through these tables; nothing else in the crate spells a column name for a
//! filter or a write.

use chrono::NaiveDate;

use crate::models::event::NewEvent;
use crate::models::holiday::NewHoliday;
use crate::models::recommendation::RecommendationDraft;
use crate::storage::StorageError;

#[derive(Debug)]
pub struct FieldMap {
    pub table: &'static str,
    /// `(api field, stored column)` pairs.
    pub pairs: &'static [(&'static str, &'static str)],
}

impl FieldMap {
    pub fn column(&self, field: &str) -> Option<&'static str> {
        self.pairs.iter().find(|(f, _)| *f == field).map(|(_, c)| *c)
    }

    pub fn field(&self, column: &str) -> Option<&'static str> {
        self.pairs.iter().find(|(_, c)| *c == column).map(|(f, _)| *f)
    }

    pub fn require_column(&self, field: &'static str) -> Result<&'static str, StorageError> {
        self.column(field).ok_or(StorageError::UnmappedField {
            table: self.table,
            field,
        })
    }
}

pub const REGION_FIELDS: FieldMap = FieldMap {
    table: "regions",
    pairs: &[
        ("id", "id"),
        ("name", "name"),
        ("code", "code"),
        ("timezone", "timezone"),
        ("isActive", "is_active"),
    ],
};

pub const EVENT_TYPE_FIELDS: FieldMap = FieldMap {
    table: "event_types",
    pairs: &[
        ("id", "id"),
        ("name", "name"),
        ("color", "color"),
        ("icon", "icon"),
    ],
};

pub const EVENT_FIELDS: FieldMap = FieldMap {
    table: "events",
    pairs: &[
        ("id", "id"),
        ("title", "title"),
        ("description", "description"),
        ("startDate", "start_date"),
        ("endDate", "end_date"),
        ("regionId", "region_id"),
        ("eventTypeId", "event_type_id"),
        ("isHoliday", "is_holiday"),
        ("createdAt", "created_at"),
        ("updatedAt", "updated_at"),
    ],
};

pub const HOLIDAY_FIELDS: FieldMap = FieldMap {
    table: "holidays",
    pairs: &[
        ("id", "id"),
        ("name", "name"),
        ("description", "description"),
        ("date", "date"),
        ("regionId", "region_id"),
        ("type", "type"),
        ("isRecurring", "is_recurring"),
        ("createdAt", "created_at"),
    ],
};

pub const RECOMMENDATION_FIELDS: FieldMap = FieldMap {
    table: "recommendations",
    pairs: &[
        ("id", "id"),
        ("title", "title"),
        ("description", "description"),
        ("suggestedDate", "suggested_date"),
        ("confidenceScore", "confidence_score"),
        ("status", "status"),
        ("regionId", "region_id"),
        ("eventTypeId", "event_type_id"),
        ("reasoning", "reasoning"),
        ("createdAt", "created_at"),
        ("updatedAt", "updated_at"),
    ],
};

/// A value bound into a dynamic statement.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Date(Option<NaiveDate>),
    Id(Option<i32>),
    Flag(bool),
    Number(f64),
}

impl NewEvent {
    pub fn values(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("title", FieldValue::Text(Some(self.title.clone()))),
            ("description", FieldValue::Text(self.description.clone())),
            ("startDate", FieldValue::Date(Some(self.start_date))),
            ("endDate", FieldValue::Date(Some(self.end_date))),
            ("regionId", FieldValue::Id(self.region_id)),
            ("eventTypeId", FieldValue::Id(self.event_type_id)),
            ("isHoliday", FieldValue::Flag(self.is_holiday)),
        ]
    }
}

impl NewHoliday {
    pub fn values(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", FieldValue::Text(Some(self.name.clone()))),
            ("description", FieldValue::Text(self.description.clone())),
            ("date", FieldValue::Date(Some(self.date))),
            ("regionId", FieldValue::Id(self.region_id)),
            (
                "type",
                FieldValue::Text(Some(self.holiday_type.as_str().to_string())),
            ),
            ("isRecurring", FieldValue::Flag(self.is_recurring)),
        ]
    }
}

impl RecommendationDraft {
    pub fn values(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("title", FieldValue::Text(Some(self.title.clone()))),
            ("description", FieldValue::Text(Some(self.description.clone()))),
            ("suggestedDate", FieldValue::Date(self.suggested_date)),
            ("confidenceScore", FieldValue::Number(self.confidence_score)),
            (
                "status",
                FieldValue::Text(Some(self.status.as_str().to_string())),
            ),
            ("regionId", FieldValue::Id(self.region_id)),
            ("eventTypeId", FieldValue::Id(self.event_type_id)),
            ("reasoning", FieldValue::Text(self.reasoning.clone())),
        ]
    }
}
