//! Local filter evaluator, applied to the sample dataset when the server
//! cannot (empty result or fetch failure). Mirrors the server-side query
//! parameters so both paths select the same records.

use crate::models::{FilterCriteria, Invoice};

/// Pure, order-preserving filter.
///
/// `client_number` matches by exact string equality. `start_month` also
/// matches by exact equality against `reference_month` — a single-month
/// filter despite the range-style name, and `end_month` is ignored
/// entirely. That reproduces the upstream behavior on purpose; see the
/// open-questions section of DESIGN.md before changing it.
pub fn apply(records: &[Invoice], criteria: &FilterCriteria) -> Vec<Invoice> {
    records
        .iter()
        .filter(|inv| matches(inv, criteria))
        .cloned()
        .collect()
}

fn matches(invoice: &Invoice, criteria: &FilterCriteria) -> bool {
    if let Some(ref client) = criteria.client_number {
        if &invoice.client_number != client {
            return false;
        }
    }
    if let Some(ref month) = criteria.start_month {
        if &invoice.reference_month != month {
            return false;
        }
    }
    true
}
