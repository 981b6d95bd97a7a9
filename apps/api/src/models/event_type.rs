use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category label attached to events and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: i32,
    pub name: String,
    /// Hex color code, e.g. `#3B82F6`.
    pub color: String,
    pub icon: String,
}
