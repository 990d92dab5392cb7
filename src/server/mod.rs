//! HTTP surface of the proposal service: proposal generation, client
//! lookup and serving of generated documents.

use crate::configuration::Context;
use crate::core::{Error, Service};
use crate::database::ProposalRecord;
use crate::document::{self, ClientInfo, ProjectInfo, ProposalImage, ProposalInput};
use crate::notification::{WebhookNotifier, WebhookPayload};
use crate::offer::next_offer_number;
use crate::pdf;
use crate::pricing::ServiceSelection;
use crate::quote::{
    compute_quote, delivery_window, format_delivery_window, Discount, OFFER_VALIDITY_DAYS,
};
use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Local};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

mod file_serve;

#[derive(Clone)]
pub struct AppState {
    pub context: Context,
    pub notifier: Arc<WebhookNotifier>,
}

pub struct ProposalService {
    context: Context,
}

#[async_trait]
impl Service for ProposalService {
    type Context = Context;

    async fn new(context: Context) -> Self {
        Self { context }
    }

    async fn run(self) -> Result<(), Error> {
        let port = self.context.config.server.port;
        let notifier = Arc::new(WebhookNotifier::new(
            self.context.config.webhook.url.clone(),
            self.context.config.webhook.timeout_secs,
        ));
        let state = AppState {
            context: self.context,
            notifier,
        };

        let app = Router::new()
            .route("/health", get(health_check))
            .route("/api/generate-proposal", post(generate_proposal))
            .route("/api/client-lookup/{client_number}", get(client_lookup))
            .route("/output/{*path}", get(file_serve::serve_output_file))
            .layer(CorsLayer::permissive())
            .with_state(state);

        let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
            .await
            .map_err(Error::from)?;
        info!(port, "proposal server listening");

        axum::serve(listener, app).await.map_err(Error::from)
    }
}

async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub client_info: ClientInfo,
    #[serde(default)]
    pub project_info: Option<ProjectInfo>,
    #[serde(default)]
    pub services: Vec<ServiceSelection>,
    /// Client-side totals; accepted but recomputed server-side, never
    /// trusted.
    #[serde(default)]
    #[allow(dead_code)]
    pub pricing: Option<Value>,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub images: Vec<ProposalImage>,
}

type ApiError = (StatusCode, Json<Value>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": message })),
    )
}

fn internal_error(message: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": message })),
    )
}

async fn client_lookup(
    State(state): State<AppState>,
    Path(client_number): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if client_number.trim().is_empty() {
        return Err(bad_request("Client number is required"));
    }

    let client = state
        .context
        .database
        .find_client_by_number(client_number.trim())
        .await
        .map_err(|e| {
            error!(%client_number, error = %e, "client lookup failed");
            internal_error("Client lookup failed")
        })?;

    Ok(Json(json!({
        "success": true,
        "found": client.is_some(),
        "client": client,
    })))
}

async fn generate_proposal(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.client_info.company_name.trim().is_empty() {
        return Err(bad_request("Company name is required"));
    }

    let catalog = &state.context.catalog;
    let database = &state.context.database;
    let today = Local::now().date_naive();
    let project = request.project_info.clone().unwrap_or_default();

    // Enrich client data from the directory when a client number is given;
    // a failed lookup falls back to the submitted form data.
    let mut client = request.client_info.clone();
    let mut client_data_from_db = false;
    let mut folder_client_id = client
        .client_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);
    if let Some(number) = folder_client_id.clone() {
        match database.find_client_by_number(&number).await {
            Ok(Some(record)) => {
                if let Some(name) = record.company_name.filter(|n| !n.is_empty()) {
                    client.company_name = name;
                }
                if let Some(id) = record.client_id.filter(|id| !id.is_empty()) {
                    folder_client_id = Some(id);
                }
                client_data_from_db = true;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(client_number = %number, error = %e, "client lookup degraded, using submitted data");
            }
        }
    }

    // Totals always come from the server-side fold over the catalog.
    let quote = compute_quote(catalog, &request.services, request.discount.as_ref());
    let window = delivery_window(catalog, &request.services);
    let delivery_days = project
        .delivery_days
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format_delivery_window(window));

    let date = project
        .date
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| today.format("%d.%m.%Y").to_string());
    let offer_valid_until = project
        .offer_valid_until
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| {
            (today + Duration::days(OFFER_VALIDITY_DAYS))
                .format("%d.%m.%Y")
                .to_string()
        });

    // The offer number carries the proposal's date: a form-dated request
    // allocates under that date, not under today's.
    let offer_date = allocation_date(&project, today);
    let offer_number = next_offer_number(database.as_ref(), offer_date).await;

    let signature_name = request
        .signature
        .clone()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| state.context.config.proposal.signature_name.clone());

    let input = ProposalInput {
        offer_number: offer_number.clone(),
        client: client.clone(),
        date,
        offer_valid_until,
        delivery_days: delivery_days.clone(),
        services: request.services.clone(),
        discount: request.discount.clone(),
        quote: quote.clone(),
        signature_name: signature_name.clone(),
        images: request.images.clone(),
    };

    let structured = document::render(catalog, &input);
    let bytes = pdf::encode(&structured).map_err(|e| {
        error!(%offer_number, error = %e, "document rendering failed");
        internal_error("Document rendering failed")
    })?;

    let client_folder = client_folder_name(folder_client_id.as_deref(), &client.company_name);
    let filename = document_filename(&client.company_name, offer_date);
    let directory = format!(
        "{}/{}",
        state.context.config.proposal.output_dir, client_folder
    );
    tokio::fs::create_dir_all(&directory).await.map_err(|e| {
        error!(%directory, error = %e, "output directory creation failed");
        internal_error("Document storage failed")
    })?;
    let file_path = format!("{}/{}", directory, filename);
    tokio::fs::write(&file_path, &bytes).await.map_err(|e| {
        error!(%file_path, error = %e, "document write failed");
        internal_error("Document storage failed")
    })?;
    let file_url = format!("/output/{}/{}", client_folder, filename);
    info!(%offer_number, %file_path, size = bytes.len(), "proposal document generated");

    // Persistence is an audit trail; its failure must not retract a
    // document that already exists on disk.
    let record = proposal_record(&request, &client, &project, &quote, window, &offer_number, &file_url);
    if let Err(e) = database.insert_proposal(&record).await {
        error!(%offer_number, error = %e, "proposal record insert failed, continuing");
    }

    let payload = WebhookPayload {
        offer_number: offer_number.clone(),
        client_info: client.clone(),
        project_info: project,
        pricing: quote.clone(),
        signature: signature_name,
        filename: filename.clone(),
        file_url: file_url.clone(),
        images_included: request.images.len(),
    };
    state.notifier.notify(&payload).await;

    Ok(Json(json!({
        "success": true,
        "filename": filename,
        "fileUrl": file_url,
        "offerNumber": offer_number,
        "clientName": client.company_name,
        "totalAmount": quote.total_gross,
        "imagesIncluded": request.images.len(),
        "clientDataFromDb": client_data_from_db,
    })))
}

fn proposal_record(
    request: &GenerateRequest,
    client: &ClientInfo,
    project: &ProjectInfo,
    quote: &crate::quote::Quote,
    window: (u32, u32),
    offer_number: &str,
    file_url: &str,
) -> ProposalRecord {
    ProposalRecord {
        id: Uuid::new_v4(),
        client_id: client.client_number.clone(),
        company_name: client.company_name.clone(),
        street_no: client.street.clone(),
        postal_code: client.postal_code.clone(),
        city: client.city.clone(),
        country: client.country.clone(),
        project_number: project.project_number.clone(),
        project_name: project.project_name.clone(),
        project_type: project.project_type.clone(),
        offer_number: offer_number.to_string(),
        delivery_time_min: Some(window.0),
        delivery_time_max: Some(window.1),
        services: serde_json::to_value(&request.services).unwrap_or(Value::Null),
        pricing: serde_json::to_value(quote).unwrap_or(Value::Null),
        discount_type: request
            .discount
            .as_ref()
            .map(|d| match d.kind {
                crate::quote::DiscountKind::Percentage => "percentage".to_string(),
                crate::quote::DiscountKind::Fixed => "fixed".to_string(),
            }),
        discount_value: request.discount.as_ref().map(|d| d.value),
        currency: "EUR".to_string(),
        total_price: quote.total_gross,
        image_urls: Value::Array(
            request
                .images
                .iter()
                .map(|img| json!({ "title": img.title, "description": img.description }))
                .collect(),
        ),
        document_url: Some(file_url.to_string()),
        created_at: chrono::Utc::now(),
    }
}

/// Date the offer number is allocated under: the form-supplied project
/// date fields when present, each falling back to today independently.
fn allocation_date(project: &ProjectInfo, today: chrono::NaiveDate) -> chrono::NaiveDate {
    use chrono::Datelike;

    let year = project
        .date
        .as_deref()
        .and_then(|d| d.rsplit('.').next())
        .and_then(|y| y.parse::<i32>().ok())
        .unwrap_or_else(|| today.year());
    let month = project
        .mm
        .as_deref()
        .and_then(|m| m.parse::<u32>().ok())
        .unwrap_or_else(|| today.month());
    let day = project
        .dd
        .as_deref()
        .and_then(|d| d.parse::<u32>().ok())
        .unwrap_or_else(|| today.day());

    chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap_or(today)
}

/// `[^a-zA-Z0-9]` to `_`, capped at 50 characters; empty input becomes
/// "unknown".
fn sanitize_segment(value: &str) -> String {
    if value.is_empty() {
        return "unknown".to_string();
    }
    value
        .chars()
        .take(50)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Directory name under the output root. With a client number the folder is
/// stable (`{client_id}_{company}`); without one it is timestamped so
/// anonymous requests never share a folder.
fn client_folder_name(client_id: Option<&str>, company_name: &str) -> String {
    match client_id {
        Some(id) => format!("{}_{}", sanitize_segment(id), sanitize_segment(company_name)),
        None => format!(
            "{}_{}",
            sanitize_segment(company_name),
            Local::now().timestamp_millis()
        ),
    }
}

/// The filename keeps umlauts, whitespace and '&'; everything else outside
/// `[a-zA-Z0-9]` is dropped.
fn document_filename(company_name: &str, date: chrono::NaiveDate) -> String {
    let safe: String = company_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || "äöüÄÖÜß&".contains(*c) || c.is_whitespace())
        .take(50)
        .collect();
    format!(
        "{}_Angebot_{} ExposéProfi.pdf",
        date.format("%y%m%d"),
        safe
    )
}
