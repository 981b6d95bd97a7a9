use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A market segment that scopes events, holidays and recommendations.
/// Seeded by migration; `code` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub timezone: String,
    pub is_active: bool,
}
