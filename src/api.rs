//! HTTP client for the invoice backend API (invoices, projections, upload).

use crate::error::ApiError;
use crate::models::{Client, FilterCriteria, Invoice, UploadReceipt};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

static HTTP: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("reqwest client")
});

/// The fetch capability the fallback controller depends on. `ApiClient`
/// implements it over HTTP; tests drive the controller with scripted stubs.
#[async_trait]
pub trait InvoiceFetcher {
    async fn fetch_invoices(&self, criteria: &FilterCriteria) -> Result<Vec<Invoice>, ApiError>;
}

/// Thin client over the invoice REST API. Cheap to clone; all requests go
/// through the shared connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /invoices with the optional clientNumber/startMonth/endMonth
    /// query parameters. The server applies the same selection as
    /// `filter::apply` does locally.
    pub async fn fetch_invoices(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Invoice>, ApiError> {
        let query = criteria_query(criteria);
        log::debug!(
            "[lumen_core] fetch_invoices base={} query={:?}",
            self.base_url,
            query
        );
        self.get_json("/invoices", &query).await
    }

    /// GET /invoices/{id}
    pub async fn fetch_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        let path = format!("/invoices/{}", urlencoding::encode(id));
        self.get_json(&path, &[]).await
    }

    /// GET /invoices/clients/list
    pub async fn fetch_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.get_json("/invoices/clients/list", &[]).await
    }

    /// GET /invoices/reference-months/list
    pub async fn fetch_reference_months(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/invoices/reference-months/list", &[]).await
    }

    /// Multipart POST /invoices/upload. Rejects non-PDF bytes before any
    /// request is sent (the dialog in front of this only accepts PDFs, but
    /// the bytes are re-checked here). A 409 means the server already has
    /// this invoice. Callers should refresh the dashboard after success.
    pub async fn upload_invoice(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadReceipt, ApiError> {
        if !bytes.starts_with(b"%PDF") {
            return Err(ApiError::InvalidUpload);
        }
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let url = format!("{}/invoices/upload", self.base_url);
        log::debug!("[lumen_core] upload_invoice file={}", file_name);
        let resp = HTTP.post(&url).multipart(form).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if status == reqwest::StatusCode::CONFLICT {
            return Err(ApiError::Duplicate);
        }
        if !status.is_success() {
            log::warn!("[lumen_core] upload_invoice failed: {} {}", status, text);
            return Err(ApiError::Status { status, body: text });
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = HTTP.get(&url).query(query).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            log::warn!("[lumen_core] GET {} failed: {} {}", path, status, text);
            return Err(ApiError::Status { status, body: text });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl InvoiceFetcher for ApiClient {
    async fn fetch_invoices(&self, criteria: &FilterCriteria) -> Result<Vec<Invoice>, ApiError> {
        ApiClient::fetch_invoices(self, criteria).await
    }
}

/// Build the query-string pairs for a criteria object; absent fields are
/// simply omitted.
fn criteria_query(criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(ref client) = criteria.client_number {
        query.push(("clientNumber", client.clone()));
    }
    if let Some(ref start) = criteria.start_month {
        query.push(("startMonth", start.clone()));
    }
    if let Some(ref end) = criteria.end_month {
        query.push(("endMonth", end.clone()));
    }
    query
}
