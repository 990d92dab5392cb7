//! Outbound webhook fired after a proposal is generated. Delivery is best
//! effort: a slow or failing endpoint must never fail the request that
//! produced the document.

use crate::document::{ClientInfo, ProjectInfo};
use crate::quote::Quote;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Webhook request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Webhook rejected with status {0}")]
    RejectedError(u16),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub offer_number: String,
    pub client_info: ClientInfo,
    pub project_info: ProjectInfo,
    pub pricing: Quote,
    pub signature: String,
    pub filename: String,
    pub file_url: String,
    pub images_included: usize,
}

pub struct WebhookNotifier {
    client: reqwest::Client,
    url: Option<String>,
}

impl WebhookNotifier {
    /// `url: None` disables notification entirely.
    pub fn new(url: Option<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();
        Self { client, url }
    }

    /// Fires the webhook and swallows any failure after logging it.
    pub async fn notify(&self, payload: &WebhookPayload) {
        let Some(url) = &self.url else {
            return;
        };
        match self.send(url, payload).await {
            Ok(()) => {
                info!(offer_number = %payload.offer_number, "webhook delivered");
            }
            Err(e) => {
                error!(offer_number = %payload.offer_number, error = %e, "webhook delivery failed");
            }
        }
    }

    async fn send(&self, url: &str, payload: &WebhookPayload) -> Result<(), NotificationError> {
        let response = self.client.post(url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(NotificationError::RejectedError(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> WebhookPayload {
        WebhookPayload {
            offer_number: "2026-03-14-8".to_string(),
            client_info: ClientInfo {
                client_number: Some("10234".to_string()),
                company_name: "Musterbau GmbH".to_string(),
                street: "Hauptstraße 1".to_string(),
                postal_code: "78467".to_string(),
                city: "Konstanz".to_string(),
                country: "Deutschland".to_string(),
            },
            project_info: ProjectInfo {
                project_number: Some("P-100".to_string()),
                project_name: Some("Quartier Nord".to_string()),
                project_type: Some("MFH".to_string()),
                date: Some("14.03.2026".to_string()),
                mm: Some("03".to_string()),
                dd: Some("14".to_string()),
                delivery_days: Some("7 - 10".to_string()),
                offer_valid_until: Some("21.03.2026".to_string()),
            },
            pricing: Quote {
                subtotal_net: 499.0,
                discount_amount: 0.0,
                total_net: 499.0,
                total_vat: 94.81,
                total_gross: 593.81,
            },
            signature: "Christopher Helm".to_string(),
            filename: "260314_Angebot_Musterbau_GmbH ExposéProfi.pdf".to_string(),
            file_url: "/output/Musterbau_GmbH/260314_Angebot_Musterbau_GmbH ExposéProfi.pdf"
                .to_string(),
            images_included: 0,
        }
    }

    #[tokio::test]
    async fn successful_delivery_posts_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hooks/proposal")
            .match_header("content-type", "application/json")
            .with_status(200)
            .create_async()
            .await;

        let notifier = WebhookNotifier::new(Some(format!("{}/hooks/proposal", server.url())), 5);
        notifier.notify(&payload()).await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_delivery_is_swallowed() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hooks/proposal")
            .with_status(500)
            .create_async()
            .await;

        let notifier = WebhookNotifier::new(Some(format!("{}/hooks/proposal", server.url())), 5);
        // Must not panic or propagate.
        notifier.notify(&payload()).await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_url_sends_nothing() {
        let notifier = WebhookNotifier::new(None, 5);
        notifier.notify(&payload()).await;
    }
}
