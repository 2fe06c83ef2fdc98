//! # Artistly Common Library
//!
//! Domain code shared by the Artistly service:
//! - Artist and category records, loaded once from static data
//! - Artist filter engine for the browse page
//! - Four-step onboarding form controller and its validation rules
//! - Quote and application hand-off traits
//! - Manager dashboard mock data
//! - Bootstrap configuration

pub mod booking;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod models;
pub mod onboarding;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use filter::{filter_artists, FilterCriteria, FilterDimension, FilterOptions};
pub use models::{Artist, Category};
