//! Error taxonomy for the invoice API. Every failure here is caught at the
//! fetch call site and converted into a fallback-state transition; nothing
//! is fatal to the application.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network unreachable, connection refused, timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the server.
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Upload rejected with HTTP 409: the invoice is already on the server.
    #[error("this invoice already exists on the server")]
    Duplicate,

    /// Response body was not the JSON we expected.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client-side rejection: upload bytes are not a PDF.
    #[error("only PDF files can be uploaded")]
    InvalidUpload,
}

impl ApiError {
    /// The message shown in the dashboard banner when a fetch fails and the
    /// view falls back to sample data.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Duplicate => "This invoice already exists in the system.".to_string(),
            ApiError::InvalidUpload => "Please select a PDF file.".to_string(),
            _ => "Failed to load invoice data. Showing sample data.".to_string(),
        }
    }
}
