//! Read-only catalog records
//!
//! Field names follow the bundled JSON (camelCase) so the data files can be
//! shared with any front end without translation.

use serde::{Deserialize, Serialize};

/// A bookable performer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Unique numeric identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Category tags (never empty)
    pub category: Vec<String>,
    /// Free-text biography
    pub bio: String,
    /// Fee bracket, one of [`crate::onboarding::FEE_RANGES`]
    pub price_range: String,
    /// City, state
    pub location: String,
    /// Spoken languages (never empty)
    pub languages: Vec<String>,
    /// Image URL or path
    pub image: String,
    /// Average rating, 0-5
    pub rating: f32,
    pub review_count: u32,
    pub featured: bool,
}

impl Artist {
    /// Short "Speaks: A, B +N" summary used by artist cards
    pub fn languages_summary(&self) -> String {
        let shown = self
            .languages
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        match self.languages.len() {
            n if n > 2 => format!("{} +{}", shown, n - 2),
            _ => shown,
        }
    }
}

/// A browsable performer category shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// URL slug, used as the `category` query parameter
    pub id: String,
    /// Display name, matching the artist category tags
    pub name: String,
    pub description: String,
    /// Icon key (Mic, User, MessageSquare, Music)
    pub icon: String,
    /// Advertised number of artists in the category
    pub count: u32,
    /// Gradient color classes
    pub color: String,
}
