//! Population rankings endpoint

use axum::{extract::State, Json};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::extract::population::{extract_population, CountryRecord};
use crate::fetch::fetch_page;
use crate::AppState;

/// GET /api/population
///
/// Fetches the population page, extracts the ranking table, and returns up
/// to 100 `{country, population}` records. Fetch and parse failures both
/// surface as 500 with a `message` field.
pub async fn get_population(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CountryRecord>>> {
    let html = fetch_page(&state.http, &state.config.population_url)
        .await
        .map_err(ApiError::FetchData)?;

    let records = extract_population(&html)?;

    info!(count = records.len(), "Served population rankings");
    Ok(Json(records))
}
