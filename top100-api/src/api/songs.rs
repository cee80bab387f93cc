//! Song streaming rankings endpoint

use axum::{extract::State, Json};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::extract::songs::{extract_songs, SongRecord};
use crate::fetch::fetch_page;
use crate::AppState;

/// GET /api/songs
///
/// Fetches the streaming-rankings page, extracts the first table, and
/// returns up to 100 `{streams, song_title, song_and_artist}` records.
pub async fn get_songs(State(state): State<AppState>) -> ApiResult<Json<Vec<SongRecord>>> {
    let html = fetch_page(&state.http, &state.config.songs_url)
        .await
        .map_err(ApiError::FetchPage)?;

    let records = extract_songs(&html)?;

    info!(count = records.len(), "Served song rankings");
    Ok(Json(records))
}
