//! artistly-web library interface
//!
//! HTTP/JSON front for the Artistly catalog: home page data, artist browse
//! with filters, quote requests, onboarding form sessions and the manager
//! dashboard.

pub mod api;
pub mod error;
pub mod sessions;

pub use crate::error::{ApiError, ApiResult};

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::trace::TraceLayer;

use artistly_common::booking::{AcknowledgingQuoteDesk, QuoteDesk};
use artistly_common::onboarding::{ApplicationSink, SimulatedApplicationSink};
use artistly_common::Catalog;

use crate::sessions::FormSessions;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable artist and category data
    pub catalog: Arc<Catalog>,
    /// Open onboarding forms
    pub sessions: FormSessions,
    /// Receives "Ask for Quote" requests
    pub quote_desk: Arc<dyn QuoteDesk>,
    /// Receives validated onboarding applications
    pub application_sink: Arc<dyn ApplicationSink>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// State with the acknowledging quote desk and simulated submission
    pub fn new(catalog: Catalog, submission_delay: Duration) -> Self {
        Self::with_collaborators(
            catalog,
            Arc::new(AcknowledgingQuoteDesk),
            Arc::new(SimulatedApplicationSink::new(submission_delay)),
        )
    }

    pub fn with_collaborators(
        catalog: Catalog,
        quote_desk: Arc<dyn QuoteDesk>,
        application_sink: Arc<dyn ApplicationSink>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: FormSessions::new(),
            quote_desk,
            application_sink,
            startup_time: Utc::now(),
        }
    }

    /// Replace the session store with one using `idle_timeout`
    pub fn with_session_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.sessions = FormSessions::with_idle_timeout(idle_timeout);
        self
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::home_routes())
        .merge(api::artist_routes())
        .merge(api::onboarding_routes())
        .merge(api::dashboard_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
