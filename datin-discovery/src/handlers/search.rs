use axum::{routing::post, Json, Router};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Number;
use service_core::routing::SlashRedirectExt;
use service_core::validation::ValidatedJson;
use utoipa::ToSchema;
use validator::Validate;

const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchQuery {
    #[schema(example = "test")]
    pub query: String,
    /// Any integer, however large. Accepted but not applied to the results.
    #[serde(default = "default_limit", deserialize_with = "integral_number")]
    #[schema(value_type = i64, default = 10)]
    pub limit: Number,
}

fn default_limit() -> Number {
    Number::from(DEFAULT_LIMIT)
}

/// Accept any JSON integer, including ones beyond 64 bits, and floats with
/// no fractional part. Reject everything else.
fn integral_number<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;

    if number.is_i64() || number.is_u64() {
        return Ok(number);
    }

    match number.as_f64() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => Ok(number),
        _ => Err(de::Error::custom(format!(
            "invalid value: {}, expected an integer",
            number
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResult {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Sample Result 1")]
    pub title: String,
    #[schema(example = 0.95)]
    pub score: f64,
}

impl SearchResult {
    fn new(id: &str, title: &str, score: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            score,
        }
    }
}

/// Placeholder results. No ranking exists yet, so every query gets the same
/// two entries.
fn sample_results() -> Vec<SearchResult> {
    vec![
        SearchResult::new("1", "Sample Result 1", 0.95),
        SearchResult::new("2", "Sample Result 2", 0.87),
    ]
}

/// Search for items
#[utoipa::path(
    post,
    path = "/search/",
    request_body = SearchQuery,
    responses(
        (status = 200, description = "Search results", body = [SearchResult]),
        (status = 422, description = "Malformed search query")
    ),
    tag = "search"
)]
pub async fn search(ValidatedJson(query): ValidatedJson<SearchQuery>) -> Json<Vec<SearchResult>> {
    tracing::debug!(query = %query.query, limit = %query.limit, "Search requested");
    Json(sample_results())
}

pub fn routes() -> Router {
    Router::new().route_with_slash_redirect("/search/", post(search))
}
