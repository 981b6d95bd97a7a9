use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

use crate::models::event::NewEvent;

/// Review state of a recommendation. Only `Pending` may move, and only to
/// `Accepted` or `Rejected`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Archived,
}

#[derive(Debug, Error)]
#[error("unknown recommendation status '{0}'")]
pub struct UnknownStatus(pub String);

#[derive(Debug, Error, PartialEq)]
#[error("recommendation is {from}, cannot move to {to}")]
pub struct TransitionError {
    pub from: &'static str,
    pub to: &'static str,
}

impl RecommendationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationStatus::Pending => "pending",
            RecommendationStatus::Accepted => "accepted",
            RecommendationStatus::Rejected => "rejected",
            RecommendationStatus::Archived => "archived",
        }
    }

    /// Checks that `self -> next` is an allowed review transition.
    pub fn transition_to(self, next: RecommendationStatus) -> Result<RecommendationStatus, TransitionError> {
        match (self, next) {
            (RecommendationStatus::Pending, RecommendationStatus::Accepted)
            | (RecommendationStatus::Pending, RecommendationStatus::Rejected) => Ok(next),
            _ => Err(TransitionError {
                from: self.as_str(),
                to: next.as_str(),
            }),
        }
    }
}

impl FromStr for RecommendationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RecommendationStatus::Pending),
            "accepted" => Ok(RecommendationStatus::Accepted),
            "rejected" => Ok(RecommendationStatus::Rejected),
            "archived" => Ok(RecommendationStatus::Archived),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for RecommendationStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A persisted marketing-calendar proposal awaiting review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub suggested_date: Option<NaiveDate>,
    pub confidence_score: f64,
    #[sqlx(try_from = "String")]
    pub status: RecommendationStatus,
    pub region_id: Option<i32>,
    pub event_type_id: Option<i32>,
    pub reasoning: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recommendation {
    /// Calendar entry materialized when the recommendation is accepted with
    /// `createEvent`. `None` when there is no suggested date to place it on.
    pub fn to_event(&self) -> Option<NewEvent> {
        let date = self.suggested_date?;
        Some(NewEvent {
            title: self.title.clone(),
            description: Some(self.description.clone()),
            start_date: date,
            end_date: date,
            region_id: self.region_id,
            event_type_id: self.event_type_id,
            is_holiday: false,
        })
    }
}

/// In-memory recommendation produced by the generator, before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDraft {
    pub title: String,
    pub description: String,
    pub suggested_date: Option<NaiveDate>,
    pub confidence_score: f64,
    pub status: RecommendationStatus,
    pub region_id: Option<i32>,
    pub event_type_id: Option<i32>,
    pub reasoning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(suggested_date: Option<NaiveDate>) -> Recommendation {
        Recommendation {
            id: 11,
            title: "El Clásico prediction challenge".to_string(),
            description: "Push AI picks before the derby".to_string(),
            suggested_date,
            confidence_score: 0.9,
            status: RecommendationStatus::Pending,
            region_id: Some(4),
            event_type_id: Some(2),
            reasoning: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_only_pending_can_be_reviewed() {
        use RecommendationStatus::*;
        assert_eq!(Pending.transition_to(Accepted), Ok(Accepted));
        assert_eq!(Pending.transition_to(Rejected), Ok(Rejected));
        assert!(Accepted.transition_to(Rejected).is_err());
        assert!(Rejected.transition_to(Accepted).is_err());
        assert!(Pending.transition_to(Archived).is_err());
        assert!(Archived.transition_to(Accepted).is_err());
    }

    #[test]
    fn test_status_round_trips_through_text() {
        for status in ["pending", "accepted", "rejected", "archived"] {
            let parsed: RecommendationStatus = status.parse().unwrap();
            assert_eq!(parsed.as_str(), status);
        }
        assert!(RecommendationStatus::try_from("done".to_string()).is_err());
    }

    #[test]
    fn test_to_event_uses_suggested_date_for_both_ends() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let event = recommendation(Some(date)).to_event().unwrap();
        assert_eq!(event.start_date, date);
        assert_eq!(event.end_date, date);
        assert!(!event.is_holiday);
        assert_eq!(event.region_id, Some(4));
        assert_eq!(event.event_type_id, Some(2));
        assert_eq!(event.title, "El Clásico prediction challenge");
    }

    #[test]
    fn test_to_event_without_date_is_none() {
        assert!(recommendation(None).to_event().is_none());
    }
}
