//! Home page data and category listing

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use artistly_common::Category;

use super::artists::ArtistCard;
use crate::AppState;

/// Headline numbers for the hero section
#[derive(Debug, Serialize)]
pub struct HomeStats {
    pub artists: usize,
    pub categories: usize,
    /// Mean artist rating, rounded to one decimal
    pub average_rating: f32,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub categories: Vec<Category>,
    pub featured: Vec<ArtistCard>,
    pub stats: HomeStats,
}

/// GET /api/home
pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    let catalog = &state.catalog;
    let artists = catalog.artists();

    let average_rating = if artists.is_empty() {
        0.0
    } else {
        let mean = artists.iter().map(|a| a.rating).sum::<f32>() / artists.len() as f32;
        (mean * 10.0).round() / 10.0
    };

    Json(HomeResponse {
        categories: catalog.categories().to_vec(),
        featured: catalog.featured().into_iter().map(ArtistCard::from).collect(),
        stats: HomeStats {
            artists: artists.len(),
            categories: catalog.categories().len(),
            average_rating,
        },
    })
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog.categories().to_vec())
}

pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/api/home", get(home))
        .route("/api/categories", get(list_categories))
}
