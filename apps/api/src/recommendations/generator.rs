//! Recommendation Generator: turns a calendar window into draft recommendations.
//!
//! Flow: build_prompt → chat model → strip fences → parse → clamp/force fields.
//!
//! Never fails: any transport, API, or parse failure yields exactly one
//! deterministic fallback draft. Persistence is the caller's job.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::{info, warn};

use crate::llm_client::{chat_json, ChatModel};
use crate::models::event::Event;
use crate::models::holiday::Holiday;
use crate::models::recommendation::{RecommendationDraft, RecommendationStatus};
use crate::recommendations::profiles::region_profile;
use crate::recommendations::prompts::{
    build_prompt, render_fallback, Language, MARKETING_CAMPAIGN_EVENT_TYPE_ID,
};

pub const TEMPERATURE: f32 = 0.7;
pub const MIN_CONFIDENCE: f64 = 0.7;
pub const MAX_CONFIDENCE: f64 = 1.0;
pub const FALLBACK_CONFIDENCE: f64 = 0.8;

/// Everything the generator needs for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams<'a> {
    pub language: Language,
    pub region_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub existing_events: &'a [Event],
    pub existing_holidays: &'a [Holiday],
}

#[derive(Debug, Deserialize)]
struct GeneratedBatch {
    recommendations: Vec<GeneratedItem>,
}

/// One item as returned by the model. `title` and `description` are required;
/// everything else is repaired or defaulted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedItem {
    title: String,
    description: String,
    #[serde(default, deserialize_with = "lenient_date")]
    suggested_date: Option<NaiveDate>,
    #[serde(default)]
    confidence_score: Option<f64>,
    #[serde(default)]
    reasoning: Option<String>,
    #[serde(default)]
    event_type_id: Option<i32>,
}

/// Accepts `YYYY-MM-DD`; anything else unparseable becomes `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("Dropping unparseable suggestedDate {s:?} from model output");
            None
        }
    }))
}

/// Clamps into `[MIN_CONFIDENCE, MAX_CONFIDENCE]`. Missing or NaN scores take
/// the lower bound.
pub fn clamp_confidence(score: Option<f64>) -> f64 {
    match score {
        Some(s) if !s.is_nan() => s.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
        _ => MIN_CONFIDENCE,
    }
}

/// Asks the model for recommendations, falling back to a single
/// deterministic draft on any failure.
pub async fn generate(model: &dyn ChatModel, params: &GenerationParams<'_>) -> Vec<RecommendationDraft> {
    let prompt = build_prompt(
        params.language,
        params.region_id,
        params.start_date,
        params.end_date,
        params.existing_events,
        params.existing_holidays,
    );

    let batch: GeneratedBatch =
        match chat_json(model, params.language.system_prompt(), &prompt, TEMPERATURE).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(
                    "Recommendation generation failed for region {}, using fallback: {e}",
                    params.region_id
                );
                return vec![fallback_draft(params)];
            }
        };

    info!(
        "Model proposed {} recommendation(s) for region {}",
        batch.recommendations.len(),
        params.region_id
    );

    batch
        .recommendations
        .into_iter()
        .map(|item| {
            let confidence_score = clamp_confidence(item.confidence_score);
            if item.confidence_score != Some(confidence_score) {
                warn!(
                    "Clamped confidenceScore {:?} to {confidence_score} for {:?}",
                    item.confidence_score, item.title
                );
            }
            RecommendationDraft {
                title: item.title,
                description: item.description,
                suggested_date: item.suggested_date,
                confidence_score,
                status: RecommendationStatus::Pending,
                region_id: Some(params.region_id),
                event_type_id: Some(item.event_type_id.unwrap_or(MARKETING_CAMPAIGN_EVENT_TYPE_ID)),
                reasoning: item.reasoning,
            }
        })
        .collect()
}

/// The single draft used when the model call or its parse fails.
pub fn fallback_draft(params: &GenerationParams<'_>) -> RecommendationDraft {
    let profile = region_profile(params.language, params.region_id);
    let (title, description, reasoning) = params.language.fallback_templates();

    RecommendationDraft {
        title: render_fallback(title, profile.name),
        description: render_fallback(description, profile.name),
        suggested_date: Some(params.end_date),
        confidence_score: FALLBACK_CONFIDENCE,
        status: RecommendationStatus::Pending,
        region_id: Some(params.region_id),
        event_type_id: Some(MARKETING_CAMPAIGN_EVENT_TYPE_ID),
        reasoning: Some(render_fallback(reasoning, profile.name)),
    }
}
