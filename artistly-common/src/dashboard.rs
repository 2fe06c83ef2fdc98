//! Manager dashboard backed by static mock data
//!
//! Two tables (managed artists, booking requests), each filtered by an
//! exact status match (or `all`) AND a case-insensitive search over three
//! text columns.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Status filter value that disables the status constraint
pub const ALL_STATUSES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistStatus {
    Active,
    Pending,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Declined,
}

impl ArtistStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtistStatus::Active => "active",
            ArtistStatus::Pending => "pending",
            ArtistStatus::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArtistStatus::Active => "Active",
            ArtistStatus::Pending => "Pending",
            ArtistStatus::Inactive => "Inactive",
        }
    }
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Declined => "declined",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Declined => "Declined",
        }
    }
}

/// Artist row in the manager's roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagedArtist {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub city: String,
    pub fee: String,
    pub status: ArtistStatus,
    pub status_label: &'static str,
    pub joined_date: NaiveDate,
    pub bookings: u32,
    pub rating: f32,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub id: u32,
    pub artist_name: String,
    pub event_type: String,
    pub client_name: String,
    pub event_date: NaiveDate,
    pub fee: String,
    pub status: BookingStatus,
    pub status_label: &'static str,
    pub request_date: NaiveDate,
}

/// Headline numbers shown above the tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_artists: usize,
    pub active_artists: usize,
    pub total_bookings: usize,
    pub total_revenue: u64,
}

/// Table filter: status (`all` or a status name) plus free-text search
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardQuery {
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub search: String,
}

fn default_status() -> String {
    ALL_STATUSES.to_string()
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            status: default_status(),
            search: String::new(),
        }
    }
}

impl DashboardQuery {
    fn matches_status(&self, status: &str) -> bool {
        self.status == ALL_STATUSES || self.status == status
    }

    fn matches_search(&self, fields: [&str; 3]) -> bool {
        let needle = self.search.to_lowercase();
        fields.iter().any(|f| f.to_lowercase().contains(&needle))
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn managed(
    id: u32,
    name: &str,
    category: &str,
    city: &str,
    fee: &str,
    status: ArtistStatus,
    joined_date: NaiveDate,
    bookings: u32,
    rating: f32,
    revenue: u64,
) -> ManagedArtist {
    ManagedArtist {
        id,
        name: name.to_string(),
        category: category.to_string(),
        city: city.to_string(),
        fee: fee.to_string(),
        status,
        status_label: status.label(),
        joined_date,
        bookings,
        rating,
        revenue,
    }
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: u32,
    artist_name: &str,
    event_type: &str,
    client_name: &str,
    event_date: NaiveDate,
    fee: &str,
    status: BookingStatus,
    request_date: NaiveDate,
) -> BookingRequest {
    BookingRequest {
        id,
        artist_name: artist_name.to_string(),
        event_type: event_type.to_string(),
        client_name: client_name.to_string(),
        event_date,
        fee: fee.to_string(),
        status,
        status_label: status.label(),
        request_date,
    }
}

static MANAGED_ARTISTS: Lazy<Vec<ManagedArtist>> = Lazy::new(|| {
    vec![
        managed(1, "Sarah Johnson", "Singer", "New York, NY", "$500-1000", ArtistStatus::Active, date(2024, 1, 15), 12, 4.9, 8500),
        managed(2, "Marcus Rodriguez", "DJ", "Los Angeles, CA", "$300-800", ArtistStatus::Pending, date(2024, 1, 20), 8, 4.8, 6200),
        managed(3, "Emma Chen", "Dancer", "Chicago, IL", "$400-900", ArtistStatus::Active, date(2024, 1, 10), 15, 4.9, 11200),
        managed(4, "David Thompson", "Speaker", "Austin, TX", "$800-1500", ArtistStatus::Active, date(2024, 1, 5), 6, 4.7, 9800),
        managed(5, "Aria Patel", "Singer", "San Francisco, CA", "$600-1200", ArtistStatus::Inactive, date(2024, 1, 25), 4, 4.8, 3400),
    ]
});

static BOOKING_REQUESTS: Lazy<Vec<BookingRequest>> = Lazy::new(|| {
    vec![
        booking(1, "Sarah Johnson", "Wedding", "John & Mary Smith", date(2024, 2, 14), "$850", BookingStatus::Pending, date(2024, 1, 28)),
        booking(2, "Marcus Rodriguez", "Corporate Event", "Tech Corp Inc.", date(2024, 2, 20), "$650", BookingStatus::Confirmed, date(2024, 1, 26)),
        booking(3, "Emma Chen", "Birthday Party", "Lisa Johnson", date(2024, 2, 10), "$750", BookingStatus::Declined, date(2024, 1, 25)),
    ]
});

pub fn managed_artists() -> &'static [ManagedArtist] {
    &MANAGED_ARTISTS
}

pub fn booking_requests() -> &'static [BookingRequest] {
    &BOOKING_REQUESTS
}

pub fn stats() -> DashboardStats {
    let artists = managed_artists();
    DashboardStats {
        total_artists: artists.len(),
        active_artists: artists
            .iter()
            .filter(|a| a.status == ArtistStatus::Active)
            .count(),
        total_bookings: booking_requests().len(),
        total_revenue: artists.iter().map(|a| a.revenue).sum(),
    }
}

/// Roster rows matching status and name/category/city search
pub fn filter_managed_artists(query: &DashboardQuery) -> Vec<&'static ManagedArtist> {
    managed_artists()
        .iter()
        .filter(|a| {
            query.matches_status(a.status.as_str())
                && query.matches_search([a.name.as_str(), a.category.as_str(), a.city.as_str()])
        })
        .collect()
}

/// Booking rows matching status and artist/event type/client search
pub fn filter_booking_requests(query: &DashboardQuery) -> Vec<&'static BookingRequest> {
    booking_requests()
        .iter()
        .filter(|b| {
            query.matches_status(b.status.as_str())
                && query.matches_search([b.artist_name.as_str(), b.event_type.as_str(), b.client_name.as_str()])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(status: &str, search: &str) -> DashboardQuery {
        DashboardQuery {
            status: status.to_string(),
            search: search.to_string(),
        }
    }

    #[test]
    fn test_stats() {
        let stats = stats();
        assert_eq!(stats.total_artists, 5);
        assert_eq!(stats.active_artists, 3);
        assert_eq!(stats.total_bookings, 3);
        assert_eq!(stats.total_revenue, 39_100);
    }

    #[test]
    fn test_default_query_returns_all_rows() {
        let q = DashboardQuery::default();
        assert_eq!(filter_managed_artists(&q).len(), 5);
        assert_eq!(filter_booking_requests(&q).len(), 3);
    }

    #[test]
    fn test_artist_status_filter() {
        let rows = filter_managed_artists(&query("active", ""));
        let ids: Vec<u32> = rows.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_artist_search_covers_city() {
        let rows = filter_managed_artists(&query("all", "san fran"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Aria Patel");
    }

    #[test]
    fn test_status_and_search_are_anded() {
        assert!(filter_managed_artists(&query("inactive", "Sarah")).is_empty());
        assert_eq!(filter_managed_artists(&query("active", "singer")).len(), 1);
    }

    #[test]
    fn test_booking_search_covers_client_and_event_type() {
        assert_eq!(filter_booking_requests(&query("all", "tech corp"))[0].id, 2);
        assert_eq!(filter_booking_requests(&query("all", "BIRTHDAY"))[0].id, 3);
        assert_eq!(filter_booking_requests(&query("confirmed", "")).len(), 1);
    }

    #[test]
    fn test_unknown_status_matches_nothing() {
        assert!(filter_booking_requests(&query("archived", "")).is_empty());
    }

    #[test]
    fn test_status_labels_serialize() {
        let json = serde_json::to_value(&managed_artists()[1]).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["status_label"], "Pending");
        assert_eq!(json["joined_date"], "2024-01-20");
    }
}
