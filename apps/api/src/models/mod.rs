pub mod event;
pub mod event_type;
pub mod holiday;
pub mod recommendation;
pub mod region;

use serde::{Deserialize, Deserializer};

/// Deserializes a present field as `Some(value)`, so that combined with
/// `#[serde(default)]` a patch can tell an absent field (`None`) from an
/// explicit `null` (`Some(None)`).
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
