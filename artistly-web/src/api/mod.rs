//! HTTP API handlers for artistly-web

pub mod artists;
pub mod dashboard;
pub mod health;
pub mod home;
pub mod onboarding;

pub use artists::artist_routes;
pub use dashboard::dashboard_routes;
pub use health::health_routes;
pub use home::home_routes;
pub use onboarding::onboarding_routes;
