//! Artist browse, filter menus and quote requests
//!
//! The browse endpoint takes the complete criteria on every request; the
//! response is recomputed from the full catalog each time.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use artistly_common::booking::{QuoteAcknowledgement, QuoteRequest};
use artistly_common::{Artist, FilterCriteria, FilterDimension, FilterOptions};

use crate::{
    error::{ApiError, ApiResult},
    AppState,
};

/// Artist as shown on a browse card
#[derive(Debug, Clone, Serialize)]
pub struct ArtistCard {
    #[serde(flatten)]
    pub artist: Artist,
    pub languages_summary: String,
}

impl From<&Artist> for ArtistCard {
    fn from(artist: &Artist) -> Self {
        Self {
            languages_summary: artist.languages_summary(),
            artist: artist.clone(),
        }
    }
}

/// GET /api/artists response
#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub criteria: FilterCriteria,
    pub has_active_filters: bool,
    pub total: usize,
    pub artists: Vec<ArtistCard>,
}

/// Build criteria from repeated query pairs
///
/// `category`, `location` and `price_range` may repeat; `search` is single.
/// The first `category` seeds the page like a home-page link does (slugs
/// resolve to artist tags); further values are toggled on top. Empty values
/// impose no constraint.
fn parse_criteria(state: &AppState, pairs: &[(String, String)]) -> ApiResult<FilterCriteria> {
    let mut categories = pairs
        .iter()
        .filter(|(key, _)| key == "category")
        .map(|(_, value)| value.as_str());
    let mut criteria = state.catalog.initial_criteria(categories.next());
    for value in categories {
        let tag = state.catalog.resolve_category(value);
        criteria = criteria.toggle(FilterDimension::Category, &tag, true);
    }

    for (key, value) in pairs {
        criteria = match key.as_str() {
            "category" => continue,
            "location" => criteria.toggle(FilterDimension::Location, value, true),
            "price_range" => criteria.toggle(FilterDimension::PriceRange, value, true),
            "search" => criteria.with_search(value.as_str()),
            other => {
                return Err(ApiError::BadRequest(format!(
                    "Unknown filter parameter: {}",
                    other
                )))
            }
        };
    }
    Ok(criteria)
}

/// GET /api/artists?category=..&location=..&price_range=..&search=..
pub async fn browse_artists(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<BrowseResponse>> {
    let criteria = parse_criteria(&state, &pairs)?;
    let artists: Vec<ArtistCard> = state
        .catalog
        .browse(&criteria)
        .into_iter()
        .map(ArtistCard::from)
        .collect();

    Ok(Json(BrowseResponse {
        has_active_filters: criteria.has_active_filters(),
        total: artists.len(),
        artists,
        criteria,
    }))
}

/// GET /api/artists/filters
///
/// Menu options come from the full catalog, so selecting a filter never
/// narrows the other menus.
pub async fn filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(state.catalog.filter_options().clone())
}

/// GET /api/artists/:id
pub async fn get_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<u32>,
) -> ApiResult<Json<Artist>> {
    state
        .catalog
        .artist(artist_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Artist not found: {}", artist_id)))
}

/// POST /api/artists/:id/quote
///
/// Body is optional; an empty body requests a quote with no event details.
pub async fn request_quote(
    State(state): State<AppState>,
    Path(artist_id): Path<u32>,
    body: Option<Json<QuoteRequest>>,
) -> ApiResult<Json<QuoteAcknowledgement>> {
    let artist = state
        .catalog
        .artist(artist_id)
        .ok_or_else(|| ApiError::NotFound(format!("Artist not found: {}", artist_id)))?;
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let ack = state.quote_desk.request_quote(artist, &request).await?;
    Ok(Json(ack))
}

/// Build artist routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/api/artists", get(browse_artists))
        .route("/api/artists/filters", get(filter_options))
        .route("/api/artists/:id", get(get_artist))
        .route("/api/artists/:id/quote", post(request_quote))
}
