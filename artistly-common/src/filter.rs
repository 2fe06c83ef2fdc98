//! Artist filter engine
//!
//! Browse results are a pure function of the full artist collection and the
//! current [`FilterCriteria`]. Each constraint is optional (empty means
//! unconstrained) and all non-empty constraints are combined with AND.
//! Filtering is stable: matching artists keep their original relative order.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::Artist;

/// Set-valued filter dimension that can be toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    Category,
    Location,
    PriceRange,
}

/// Active filter selections for the browse page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Artist matches if any of its category tags is selected
    #[serde(default)]
    pub categories: BTreeSet<String>,
    /// Exact, case-sensitive location match
    #[serde(default)]
    pub locations: BTreeSet<String>,
    /// Exact price range match
    #[serde(default)]
    pub price_ranges: BTreeSet<String>,
    /// Case-insensitive substring over name, bio and category tags
    #[serde(default)]
    pub search: String,
}

impl FilterCriteria {
    /// Initial criteria for a browse page, optionally seeded with one category
    pub fn seeded(category: Option<&str>) -> Self {
        match category {
            Some(category) => Self::default().toggle(FilterDimension::Category, category, true),
            None => Self::default(),
        }
    }

    /// True when no constraint is active (identity filter)
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.locations.is_empty()
            && self.price_ranges.is_empty()
            && self.search.is_empty()
    }

    /// True when any checkbox filter is selected
    ///
    /// The search box is not counted; it has its own clear affordance.
    pub fn has_active_filters(&self) -> bool {
        !self.categories.is_empty() || !self.locations.is_empty() || !self.price_ranges.is_empty()
    }

    /// Derive new criteria with `value` added to (`checked`) or removed from one set
    ///
    /// An empty value is never selected; checking it leaves the criteria as is.
    pub fn toggle(&self, dimension: FilterDimension, value: &str, checked: bool) -> Self {
        let mut next = self.clone();
        if value.is_empty() {
            return next;
        }
        let set = match dimension {
            FilterDimension::Category => &mut next.categories,
            FilterDimension::Location => &mut next.locations,
            FilterDimension::PriceRange => &mut next.price_ranges,
        };
        if checked {
            set.insert(value.to_string());
        } else {
            set.remove(value);
        }
        next
    }

    /// Derive new criteria with the search term replaced
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    /// Check a single artist against every non-empty constraint
    pub fn matches(&self, artist: &Artist) -> bool {
        self.matches_search(artist)
            && self.matches_category(artist)
            && self.matches_location(artist)
            && self.matches_price_range(artist)
    }

    fn matches_search(&self, artist: &Artist) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        artist.name.to_lowercase().contains(&needle)
            || artist.bio.to_lowercase().contains(&needle)
            || artist
                .category
                .iter()
                .any(|cat| cat.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, artist: &Artist) -> bool {
        self.categories.is_empty() || artist.category.iter().any(|c| self.categories.contains(c))
    }

    fn matches_location(&self, artist: &Artist) -> bool {
        self.locations.is_empty() || self.locations.contains(&artist.location)
    }

    fn matches_price_range(&self, artist: &Artist) -> bool {
        self.price_ranges.is_empty() || self.price_ranges.contains(&artist.price_range)
    }
}

/// Apply `criteria` to `artists`, preserving original order
pub fn filter_artists<'a>(artists: &'a [Artist], criteria: &FilterCriteria) -> Vec<&'a Artist> {
    let visible: Vec<&Artist> = artists.iter().filter(|a| criteria.matches(a)).collect();

    tracing::debug!(
        total = artists.len(),
        visible = visible.len(),
        search = %criteria.search,
        categories = criteria.categories.len(),
        locations = criteria.locations.len(),
        price_ranges = criteria.price_ranges.len(),
        "Filtered artist collection"
    );

    visible
}

/// Filter menu contents, derived once from the full collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub price_ranges: Vec<String>,
}

impl FilterOptions {
    /// Distinct values in first-seen order
    pub fn from_artists(artists: &[Artist]) -> Self {
        Self {
            categories: distinct(artists.iter().flat_map(|a| a.category.iter())),
            locations: distinct(artists.iter().map(|a| &a.location)),
            price_ranges: distinct(artists.iter().map(|a| &a.price_range)),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|&v| seen.insert(v.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn artist(id: u32, name: &str, category: &[&str], location: &str, price_range: &str) -> Artist {
        Artist {
            id,
            name: name.to_string(),
            category: category.iter().map(|s| s.to_string()).collect(),
            bio: format!("{} performs at events", name),
            price_range: price_range.to_string(),
            location: location.to_string(),
            languages: vec!["English".to_string()],
            image: format!("/images/{}.jpg", id),
            rating: 4.5,
            review_count: 10,
            featured: false,
        }
    }

    /// Artist A (Singer, NYC, $100-300) and artist B (DJ, LA, $300-500)
    fn singer_and_dj() -> Vec<Artist> {
        vec![
            artist(1, "Alice", &["Singer"], "NYC", "$100-300"),
            artist(2, "Bob", &["DJ"], "LA", "$300-500"),
        ]
    }

    fn ids(artists: &[&Artist]) -> Vec<u32> {
        artists.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_category_selects_singer() {
        let artists = singer_and_dj();
        let criteria = FilterCriteria::default().toggle(FilterDimension::Category, "Singer", true);
        assert_eq!(ids(&filter_artists(&artists, &criteria)), vec![1]);
    }

    #[test]
    fn test_search_matches_category_tag_case_insensitively() {
        let artists = singer_and_dj();
        let criteria = FilterCriteria::default().with_search("dj");
        assert_eq!(ids(&filter_artists(&artists, &criteria)), vec![2]);
    }

    #[test]
    fn test_constraints_are_anded() {
        let artists = singer_and_dj();
        let criteria = FilterCriteria::default()
            .toggle(FilterDimension::Location, "NYC", true)
            .toggle(FilterDimension::PriceRange, "$300-500", true);
        assert!(filter_artists(&artists, &criteria).is_empty());
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let artists = singer_and_dj();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(ids(&filter_artists(&artists, &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_search_matches_name_and_bio() {
        let mut artists = singer_and_dj();
        artists[1].bio = "Plays vinyl-only sets".to_string();
        let by_name = FilterCriteria::default().with_search("ALI");
        assert_eq!(ids(&filter_artists(&artists, &by_name)), vec![1]);
        let by_bio = FilterCriteria::default().with_search("Vinyl");
        assert_eq!(ids(&filter_artists(&artists, &by_bio)), vec![2]);
    }

    #[test]
    fn test_location_match_is_case_sensitive() {
        let artists = singer_and_dj();
        let criteria = FilterCriteria::default().toggle(FilterDimension::Location, "nyc", true);
        assert!(filter_artists(&artists, &criteria).is_empty());
    }

    #[test]
    fn test_category_intersection_needs_one_match() {
        let artists = vec![
            artist(1, "Duo", &["Singer", "Instrumentalist"], "NYC", "$500-800"),
            artist(2, "Solo", &["Dancer"], "NYC", "$500-800"),
        ];
        let criteria = FilterCriteria::default()
            .toggle(FilterDimension::Category, "Instrumentalist", true)
            .toggle(FilterDimension::Category, "Magician", true);
        assert_eq!(ids(&filter_artists(&artists, &criteria)), vec![1]);
    }

    #[test]
    fn test_toggle_off_removes_single_value() {
        let criteria = FilterCriteria::default()
            .toggle(FilterDimension::Category, "Singer", true)
            .toggle(FilterDimension::Category, "DJ", true)
            .toggle(FilterDimension::Category, "Singer", false);
        assert_eq!(criteria.categories.len(), 1);
        assert!(criteria.categories.contains("DJ"));
        assert!(criteria.has_active_filters());
    }

    #[test]
    fn test_toggle_leaves_previous_value_untouched() {
        let before = FilterCriteria::default();
        let after = before.toggle(FilterDimension::PriceRange, "$2000+", true);
        assert!(before.price_ranges.is_empty());
        assert_eq!(after.price_ranges.len(), 1);
    }

    #[test]
    fn test_search_alone_is_not_an_active_filter() {
        let criteria = FilterCriteria::default().with_search("jazz");
        assert!(!criteria.has_active_filters());
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_seeded_criteria() {
        assert!(FilterCriteria::seeded(None).is_empty());
        assert!(FilterCriteria::seeded(Some("")).is_empty());
        let seeded = FilterCriteria::seeded(Some("DJ"));
        assert_eq!(seeded.categories.iter().collect::<Vec<_>>(), vec!["DJ"]);
    }

    #[test]
    fn test_empty_value_is_never_selected() {
        let criteria = FilterCriteria::default()
            .toggle(FilterDimension::Category, "", true)
            .toggle(FilterDimension::Location, "", true)
            .toggle(FilterDimension::PriceRange, "", true);
        assert!(criteria.is_empty());
        assert!(!criteria.has_active_filters());
    }

    #[test]
    fn test_options_are_distinct_in_first_seen_order() {
        let artists = vec![
            artist(1, "A", &["Singer", "DJ"], "NYC", "$100-300"),
            artist(2, "B", &["DJ", "Dancer"], "LA", "$100-300"),
            artist(3, "C", &["Singer"], "NYC", "$300-500"),
        ];
        let options = FilterOptions::from_artists(&artists);
        assert_eq!(options.categories, vec!["Singer", "DJ", "Dancer"]);
        assert_eq!(options.locations, vec!["NYC", "LA"]);
        assert_eq!(options.price_ranges, vec!["$100-300", "$300-500"]);
    }

    // ------------------------------------------------------------------
    // Filter laws
    // ------------------------------------------------------------------

    const CATEGORIES: &[&str] = &["Singer", "DJ", "Dancer", "Speaker"];
    const LOCATIONS: &[&str] = &["NYC", "LA", "Chicago"];
    const PRICES: &[&str] = &["$100-300", "$300-500", "$2000+"];
    const WORDS: &[&str] = &["jazz", "House", "ballet", "keynote", "Soul"];

    fn pick(options: &'static [&'static str]) -> impl Strategy<Value = String> {
        prop::sample::select(options).prop_map(str::to_string)
    }

    fn artist_strategy() -> impl Strategy<Value = Artist> {
        (
            0u32..1000,
            pick(WORDS),
            prop::collection::vec(pick(CATEGORIES), 1..3),
            pick(WORDS),
            pick(LOCATIONS),
            pick(PRICES),
        )
            .prop_map(|(id, name, category, bio_word, location, price_range)| Artist {
                id,
                name,
                category,
                bio: format!("Known for {} nights", bio_word),
                price_range,
                location,
                languages: vec!["English".to_string()],
                image: String::new(),
                rating: 4.0,
                review_count: 1,
                featured: false,
            })
    }

    fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
        (
            prop::collection::btree_set(pick(CATEGORIES), 0..3),
            prop::collection::btree_set(pick(LOCATIONS), 0..2),
            prop::collection::btree_set(pick(PRICES), 0..2),
            prop_oneof![Just(String::new()), pick(WORDS), Just("dj".to_string())],
        )
            .prop_map(|(categories, locations, price_ranges, search)| FilterCriteria {
                categories,
                locations,
                price_ranges,
                search,
            })
    }

    proptest! {
        #[test]
        fn prop_empty_criteria_is_identity(
            artists in prop::collection::vec(artist_strategy(), 0..20),
        ) {
            let visible = filter_artists(&artists, &FilterCriteria::default());
            let expected: Vec<&Artist> = artists.iter().collect();
            prop_assert_eq!(visible, expected);
        }

        #[test]
        fn prop_filter_is_idempotent(
            artists in prop::collection::vec(artist_strategy(), 0..20),
            criteria in criteria_strategy(),
        ) {
            let once: Vec<Artist> = filter_artists(&artists, &criteria).into_iter().cloned().collect();
            let twice: Vec<Artist> = filter_artists(&once, &criteria).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_every_result_satisfies_each_constraint(
            artists in prop::collection::vec(artist_strategy(), 0..20),
            criteria in criteria_strategy(),
        ) {
            for a in filter_artists(&artists, &criteria) {
                prop_assert!(criteria.matches_search(a));
                prop_assert!(criteria.matches_category(a));
                prop_assert!(criteria.matches_location(a));
                prop_assert!(criteria.matches_price_range(a));
            }
        }

        #[test]
        fn prop_every_excluded_artist_violates_a_constraint(
            artists in prop::collection::vec(artist_strategy(), 0..20),
            criteria in criteria_strategy(),
        ) {
            let visible = filter_artists(&artists, &criteria);
            for a in artists.iter().filter(|a| !visible.iter().any(|v| std::ptr::eq(*v, *a))) {
                let violated = !criteria.matches_search(a)
                    || !criteria.matches_category(a)
                    || !criteria.matches_location(a)
                    || !criteria.matches_price_range(a);
                prop_assert!(violated);
            }
        }

        #[test]
        fn prop_result_preserves_relative_order(
            artists in prop::collection::vec(artist_strategy(), 0..20),
            criteria in criteria_strategy(),
        ) {
            let positions: Vec<usize> = filter_artists(&artists, &criteria)
                .into_iter()
                .map(|v| artists.iter().position(|a| std::ptr::eq(a, v)).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
