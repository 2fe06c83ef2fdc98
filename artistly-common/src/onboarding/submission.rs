//! Hand-off point for submitted applications
//!
//! A real deployment supplies an [`ApplicationSink`] that forwards the
//! record to a review or notification service. The bundled
//! [`SimulatedApplicationSink`] only waits and logs.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::application::ArtistApplication;
use crate::Result;

pub const CONFIRMATION_MESSAGE: &str = "Thank you for joining Artistly! We'll review your \
     application and get back to you within 2-3 business days.";

/// Acknowledgement returned once an application has been accepted
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
            message: CONFIRMATION_MESSAGE.to_string(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Receives validated onboarding applications
#[async_trait]
pub trait ApplicationSink: Send + Sync {
    async fn submit(&self, application: &ArtistApplication) -> Result<SubmissionReceipt>;
}

/// Stand-in for a backend call: waits a fixed delay, then accepts
#[derive(Debug, Clone)]
pub struct SimulatedApplicationSink {
    delay: Duration,
}

impl SimulatedApplicationSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ApplicationSink for SimulatedApplicationSink {
    async fn submit(&self, application: &ArtistApplication) -> Result<SubmissionReceipt> {
        tokio::time::sleep(self.delay).await;

        let receipt = SubmissionReceipt::new();
        info!(
            reference = %receipt.reference,
            name = %application.name,
            email = %application.email,
            categories = ?application.categories,
            "Artist onboarding application received"
        );
        Ok(receipt)
    }
}
