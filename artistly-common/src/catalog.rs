//! Static artist and category catalog
//!
//! Loaded once at startup, either from the JSON bundled into the binary or
//! from a data directory override, and never modified afterwards.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::filter::{filter_artists, FilterCriteria, FilterOptions};
use crate::models::{Artist, Category};
use crate::{Error, Result};

const ARTISTS_JSON: &str = include_str!("../data/artists.json");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");

/// Immutable collection of artists and categories
#[derive(Debug, Clone)]
pub struct Catalog {
    artists: Vec<Artist>,
    categories: Vec<Category>,
    options: FilterOptions,
}

impl Catalog {
    /// Build a catalog from already-parsed records
    ///
    /// Rejects duplicate artist ids, empty category/language lists and
    /// ratings outside 0-5.
    pub fn new(artists: Vec<Artist>, categories: Vec<Category>) -> Result<Self> {
        let mut ids = HashSet::new();
        for artist in &artists {
            if !ids.insert(artist.id) {
                return Err(Error::Data(format!("Duplicate artist id: {}", artist.id)));
            }
            if artist.category.is_empty() {
                return Err(Error::Data(format!("Artist {} has no category", artist.id)));
            }
            if artist.languages.is_empty() {
                return Err(Error::Data(format!("Artist {} has no languages", artist.id)));
            }
            if !(0.0..=5.0).contains(&artist.rating) {
                return Err(Error::Data(format!(
                    "Artist {} rating out of range: {}",
                    artist.id, artist.rating
                )));
            }
        }

        let options = FilterOptions::from_artists(&artists);
        Ok(Self {
            artists,
            categories,
            options,
        })
    }

    /// Catalog compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(ARTISTS_JSON, CATEGORIES_JSON)
    }

    /// Load `artists.json` and `categories.json` from a directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let artists = std::fs::read_to_string(dir.join("artists.json"))?;
        let categories = std::fs::read_to_string(dir.join("categories.json"))?;
        let catalog = Self::from_json(&artists, &categories)?;
        info!(
            data_dir = %dir.display(),
            artists = catalog.artists.len(),
            categories = catalog.categories.len(),
            "Loaded catalog from data directory"
        );
        Ok(catalog)
    }

    /// Bundled catalog unless a data directory is configured
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        match data_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::bundled(),
        }
    }

    fn from_json(artists: &str, categories: &str) -> Result<Self> {
        let artists: Vec<Artist> = serde_json::from_str(artists)
            .map_err(|e| Error::Data(format!("Parse artists failed: {}", e)))?;
        let categories: Vec<Category> = serde_json::from_str(categories)
            .map_err(|e| Error::Data(format!("Parse categories failed: {}", e)))?;
        Self::new(artists, categories)
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Filter menus, derived from the full collection
    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn artist(&self, id: u32) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    pub fn featured(&self) -> Vec<&Artist> {
        self.artists.iter().filter(|a| a.featured).collect()
    }

    /// Visible artists for the given criteria
    pub fn browse(&self, criteria: &FilterCriteria) -> Vec<&Artist> {
        filter_artists(&self.artists, criteria)
    }

    /// Map an incoming `category` query value to the tag used on artists
    ///
    /// Home page links carry the category slug (`djs`); artists are tagged
    /// with the display name (`DJ`). Unknown values pass through unchanged.
    pub fn resolve_category(&self, value: &str) -> String {
        self.categories
            .iter()
            .find(|c| c.id == value)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| value.to_string())
    }

    /// Browse criteria for a freshly opened browse page
    pub fn initial_criteria(&self, category: Option<&str>) -> FilterCriteria {
        let resolved = category.map(|c| self.resolve_category(c));
        FilterCriteria::seeded(resolved.as_deref())
    }
}
