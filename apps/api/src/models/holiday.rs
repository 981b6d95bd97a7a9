use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    National,
    Religious,
    Cultural,
}

#[derive(Debug, Error)]
#[error("unknown holiday type '{0}' (expected national, religious or cultural)")]
pub struct UnknownHolidayType(pub String);

impl HolidayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayType::National => "national",
            HolidayType::Religious => "religious",
            HolidayType::Cultural => "cultural",
        }
    }
}

impl FromStr for HolidayType {
    type Err = UnknownHolidayType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "national" => Ok(HolidayType::National),
            "religious" => Ok(HolidayType::Religious),
            "cultural" => Ok(HolidayType::Cultural),
            other => Err(UnknownHolidayType(other.to_string())),
        }
    }
}

impl TryFrom<String> for HolidayType {
    type Error = UnknownHolidayType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub region_id: Option<i32>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type", try_from = "String")]
    pub holiday_type: HolidayType,
    pub is_recurring: bool,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/holidays`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHoliday {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub region_id: Option<i32>,
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    #[serde(default)]
    pub is_recurring: bool,
}

impl NewHoliday {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holiday_reads_type_key() {
        let holiday: NewHoliday = serde_json::from_value(serde_json::json!({
            "name": "Tết",
            "date": "2026-02-17",
            "regionId": 7,
            "type": "cultural",
            "isRecurring": true
        }))
        .unwrap();
        assert_eq!(holiday.holiday_type, HolidayType::Cultural);
        assert!(holiday.is_recurring);
    }

    #[test]
    fn test_unknown_holiday_type_is_rejected() {
        let result: Result<NewHoliday, _> = serde_json::from_value(serde_json::json!({
            "name": "Derby day",
            "date": "2026-03-01",
            "type": "sporting"
        }));
        assert!(result.is_err());
        assert!("sporting".parse::<HolidayType>().is_err());
    }
}
