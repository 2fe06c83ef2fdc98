//! Manager dashboard endpoints

use axum::{
    extract::Query,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use artistly_common::dashboard::{
    self, BookingRequest, DashboardQuery, DashboardStats, ManagedArtist,
};

use crate::AppState;

/// Filtered table rows plus the unfiltered row count for the tab label
#[derive(Debug, Serialize)]
pub struct TableResponse<T> {
    pub total: usize,
    pub matching: usize,
    pub rows: Vec<T>,
}

/// GET /api/dashboard
pub async fn get_stats() -> Json<DashboardStats> {
    Json(dashboard::stats())
}

/// GET /api/dashboard/artists?status=..&search=..
pub async fn list_managed_artists(
    Query(query): Query<DashboardQuery>,
) -> Json<TableResponse<ManagedArtist>> {
    let rows: Vec<ManagedArtist> = dashboard::filter_managed_artists(&query)
        .into_iter()
        .cloned()
        .collect();
    Json(TableResponse {
        total: dashboard::managed_artists().len(),
        matching: rows.len(),
        rows,
    })
}

/// GET /api/dashboard/bookings?status=..&search=..
pub async fn list_booking_requests(
    Query(query): Query<DashboardQuery>,
) -> Json<TableResponse<BookingRequest>> {
    let rows: Vec<BookingRequest> = dashboard::filter_booking_requests(&query)
        .into_iter()
        .cloned()
        .collect();
    Json(TableResponse {
        total: dashboard::booking_requests().len(),
        matching: rows.len(),
        rows,
    })
}

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard", get(get_stats))
        .route("/api/dashboard/artists", get(list_managed_artists))
        .route("/api/dashboard/bookings", get(list_booking_requests))
}
