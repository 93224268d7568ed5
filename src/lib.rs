//! Client core for the Lumen energy-invoice dashboard.
//!
//! The pipeline: a caller requests data with optional [`FilterCriteria`] ->
//! [`Dashboard::refresh`] runs the live fetch through an [`InvoiceFetcher`]
//! -> on a non-empty result the server's filtering is trusted verbatim; on
//! an empty result or a fetch failure the same criteria are re-applied
//! locally to the bundled sample dataset -> [`aggregate::totals`] computes
//! the card figures -> the resulting [`DashboardState`] is what the
//! presentation layer renders.
//!
//! Rendering, routing and charts live elsewhere; this crate only owns the
//! data model, the filter/aggregate pipeline and the fallback decision.

pub mod aggregate;
pub mod api;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod models;
pub mod sample;

pub use api::{ApiClient, InvoiceFetcher};
pub use dashboard::{settle, Dashboard, DashboardState};
pub use error::ApiError;
pub use models::{clients_from_invoices, Client, FilterCriteria, Invoice, Totals, UploadReceipt};
