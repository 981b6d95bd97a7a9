//! Approximate lunar labels for a Gregorian date.
//!
//! This is a fixed-length heuristic (twelve 29.5-day months over a 355-day
//! year counted from January 1st), not the real lunisolar calendar. Callers
//! must treat the result as a display hint only.

use axum::Json;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::errors::{AppError, ValidPath};

const LUNAR_YEAR_DAYS: u32 = 355;
const LUNAR_MONTH_DAYS: f64 = 29.5;

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "十二月",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub month_name: &'static str,
    pub day_name: &'static str,
    pub is_leap_month: bool,
}

pub fn approximate_lunar_date(date: NaiveDate) -> LunarDate {
    let offset = f64::from(date.ordinal() % LUNAR_YEAR_DAYS);
    // Both indices are non-negative and small, so the casts cannot truncate.
    let month_index = (offset / LUNAR_MONTH_DAYS).floor() as usize;
    let day_index = (offset % LUNAR_MONTH_DAYS).floor() as usize;

    LunarDate {
        year: date.year(),
        month: month_index as u32 + 1,
        day: day_index as u32 + 1,
        // The tail of the 355-day cycle lands on a thirteenth index.
        month_name: MONTH_NAMES.get(month_index).copied().unwrap_or(MONTH_NAMES[0]),
        day_name: DAY_NAMES.get(day_index).copied().unwrap_or(DAY_NAMES[0]),
        is_leap_month: false,
    }
}

/// GET /api/lunar/:date
pub async fn handle_lunar(
    ValidPath(raw): ValidPath<String>,
) -> Result<Json<LunarDate>, AppError> {
    let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date '{raw}', expected YYYY-MM-DD")))?;
    Ok(Json(approximate_lunar_date(date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_of_january_is_second_day_of_first_month() {
        let lunar = approximate_lunar_date(ymd(2026, 1, 1));
        assert_eq!(lunar.year, 2026);
        assert_eq!((lunar.month, lunar.day), (1, 2));
        assert_eq!((lunar.month_name, lunar.day_name), ("正月", "初二"));
        assert!(!lunar.is_leap_month);
    }

    #[test]
    fn test_mid_october() {
        // Ordinal 289: 289 / 29.5 = 9.79, 289 mod 29.5 = 23.5
        let lunar = approximate_lunar_date(ymd(2026, 10, 16));
        assert_eq!((lunar.month, lunar.day), (10, 24));
        assert_eq!((lunar.month_name, lunar.day_name), ("十月", "廿四"));
    }

    #[test]
    fn test_cycle_tail_falls_back_to_first_month_name() {
        // Ordinal 354 divides evenly into twelve months.
        let lunar = approximate_lunar_date(ymd(2026, 12, 20));
        assert_eq!(lunar.month, 13);
        assert_eq!(lunar.month_name, "正月");
        assert_eq!((lunar.day, lunar.day_name), (1, "初一"));
    }

    #[test]
    fn test_ordinal_wraps_past_355() {
        // 2024 is a leap year; Dec 31 is ordinal 366, i.e. offset 11.
        let lunar = approximate_lunar_date(ymd(2024, 12, 31));
        assert_eq!(lunar.year, 2024);
        assert_eq!((lunar.month, lunar.day), (1, 12));
        assert_eq!(lunar.day_name, "十二");
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(approximate_lunar_date(ymd(2026, 1, 1))).unwrap();
        assert_eq!(value["monthName"], "正月");
        assert_eq!(value["dayName"], "初二");
        assert_eq!(value["isLeapMonth"], false);
    }

    #[tokio::test]
    async fn test_handler_rejects_unparseable_date() {
        let result = handle_lunar(ValidPath("not-a-date".to_string())).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
