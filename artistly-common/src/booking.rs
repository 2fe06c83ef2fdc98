//! Quote requests
//!
//! "Ask for Quote" ends at a [`QuoteDesk`]. The default desk acknowledges
//! the request and logs it; no booking is created.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::models::Artist;
use crate::Result;

/// Optional event details supplied with a quote request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteAcknowledgement {
    pub artist_id: u32,
    pub reference: Uuid,
    pub requested_at: DateTime<Utc>,
    pub message: String,
}

/// Receives quote requests for a specific artist
#[async_trait]
pub trait QuoteDesk: Send + Sync {
    async fn request_quote(
        &self,
        artist: &Artist,
        request: &QuoteRequest,
    ) -> Result<QuoteAcknowledgement>;
}

/// Acknowledges every request without contacting anyone
#[derive(Debug, Clone, Default)]
pub struct AcknowledgingQuoteDesk;

#[async_trait]
impl QuoteDesk for AcknowledgingQuoteDesk {
    async fn request_quote(
        &self,
        artist: &Artist,
        request: &QuoteRequest,
    ) -> Result<QuoteAcknowledgement> {
        let ack = QuoteAcknowledgement {
            artist_id: artist.id,
            reference: Uuid::new_v4(),
            requested_at: Utc::now(),
            message: format!("Quote request sent for artist ID: {}", artist.id),
        };
        info!(
            artist_id = artist.id,
            artist = %artist.name,
            reference = %ack.reference,
            event_type = ?request.event_type,
            event_date = ?request.event_date,
            "Quote request acknowledged"
        );
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[tokio::test]
    async fn test_acknowledgement_names_artist() {
        let catalog = Catalog::bundled().unwrap();
        let artist = catalog.artist(2).unwrap();
        let ack = AcknowledgingQuoteDesk
            .request_quote(artist, &QuoteRequest::default())
            .await
            .unwrap();
        assert_eq!(ack.artist_id, 2);
        assert_eq!(ack.message, "Quote request sent for artist ID: 2");
    }

    #[test]
    fn test_quote_request_fields_are_optional() {
        let request: QuoteRequest = serde_json::from_str("{}").unwrap();
        assert!(request.event_type.is_none());

        let request: QuoteRequest =
            serde_json::from_str(r#"{"event_type": "Wedding", "event_date": "2024-02-14"}"#).unwrap();
        assert_eq!(request.event_date, NaiveDate::from_ymd_opt(2024, 2, 14));
    }
}
