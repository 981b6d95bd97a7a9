// Recommendation workflow: region profiles, prompt rendering, the
// fallback-safe generator, and the review endpoints.
// All model calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod profiles;
pub mod prompts;
