use crate::offer::OfferStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use postgrest::Postgrest;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Company directory entry, looked up by the textual client number.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClientRecord {
    pub company_id: Option<String>,
    pub client_id: Option<String>,
    pub company_name: Option<String>,
    pub company_primary_domain: Option<String>,
}

/// Denormalized snapshot of an issued offer. Created once at successful
/// document generation, never mutated afterwards.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProposalRecord {
    pub id: Uuid,
    pub client_id: Option<String>,
    pub company_name: String,
    pub street_no: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub project_number: Option<String>,
    pub project_name: Option<String>,
    pub project_type: Option<String>,
    pub offer_number: String,
    pub delivery_time_min: Option<u32>,
    pub delivery_time_max: Option<u32>,
    pub services: serde_json::Value,
    pub pricing: serde_json::Value,
    pub discount_type: Option<String>,
    pub discount_value: Option<f64>,
    pub currency: String,
    pub total_price: f64,
    pub image_urls: serde_json::Value,
    pub document_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct DatabaseService {
    client: Postgrest,
}

impl DatabaseService {
    pub fn new() -> Result<Self, DatabaseError> {
        let url = env::var("SUPABASE_URL")
            .map_err(|_| DatabaseError::ConnectionError("SUPABASE_URL not found".to_string()))?;
        let service_key = env::var("SUPABASE_KEY")
            .map_err(|_| DatabaseError::ConnectionError("SUPABASE_KEY not found".to_string()))?;

        let rest_url = format!("{}/rest/v1", url);
        let client = Postgrest::new(&rest_url)
            .insert_header("apikey", &service_key)
            .insert_header("Authorization", &format!("Bearer {}", service_key));

        Ok(Self { client })
    }

    /// First company matching the given client number, if any. Callers
    /// treat lookup failure as non-fatal and fall back to user input.
    pub async fn find_client_by_number(
        &self,
        client_number: &str,
    ) -> Result<Option<ClientRecord>, DatabaseError> {
        let response = self
            .client
            .from("companies")
            .select("company_id,client_id,company_name,company_primary_domain")
            .eq("client_id", client_number)
            .limit(1)
            .execute()
            .await
            .map_err(|e| DatabaseError::QueryError(e.to_string()))?;

        let mut records: Vec<ClientRecord> = response
            .json()
            .await
            .map_err(|e| DatabaseError::QueryError(e.to_string()))?;

        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(records.remove(0)))
    }

    /// All offer numbers issued under a day prefix, case-insensitive.
    pub async fn query_offers_by_prefix(&self, prefix: &str) -> Result<Vec<String>, DatabaseError> {
        let response = self
            .client
            .from("proposals")
            .select("offer_number")
            .ilike("offer_number", format!("{}%", prefix))
            .execute()
            .await
            .map_err(|e| DatabaseError::QueryError(e.to_string()))?;

        let rows: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| DatabaseError::QueryError(e.to_string()))?;

        Ok(rows
            .iter()
            .filter_map(|row| row["offer_number"].as_str().map(str::to_string))
            .collect())
    }

    pub async fn insert_proposal(&self, record: &ProposalRecord) -> Result<(), DatabaseError> {
        let body = serde_json::to_string(record)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        let response = self
            .client
            .from("proposals")
            .insert(body)
            .execute()
            .await
            .map_err(|e| DatabaseError::QueryError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            error!(%status, detail, offer_number = %record.offer_number, "proposal insert rejected");
            return Err(DatabaseError::QueryError(format!(
                "Insert failed with status {}: {}",
                status, detail
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl OfferStore for DatabaseService {
    async fn offers_with_prefix(&self, prefix: &str) -> Result<Vec<String>, DatabaseError> {
        self.query_offers_by_prefix(prefix).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotenvy::dotenv;

    // Exercises the live backend; only meaningful with SUPABASE_* set.
    #[tokio::test]
    #[ignore]
    async fn lookup_of_unknown_client_returns_none() {
        dotenv().ok();
        let db = DatabaseService::new().expect("database service");
        let result = db.find_client_by_number("00000").await;
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }
}
