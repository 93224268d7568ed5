//! Filter + aggregate pipeline over the sample dataset, including the
//! documented single-month equality behavior of the month filter.

use lumen_client_core::{aggregate, filter, sample, clients_from_invoices, FilterCriteria, Invoice};
use pretty_assertions::assert_eq;

#[test]
fn client_filter_keeps_all_matching_sample_records_and_totals_add_up() {
    let records = filter::apply(
        &sample::invoices(),
        &FilterCriteria::for_client("7202210726"),
    );
    assert_eq!(records.len(), 3);

    let totals = aggregate::totals(&records);
    assert_eq!(totals.total_energy_consumption, 2320.0 + 2560.0 + 2190.0);
    assert_eq!(totals.total_compensated_energy, 2220.0 + 2450.0 + 2100.0);
}

#[test]
fn month_filter_selects_exactly_one_sample_record() {
    // "startMonth" is equality against a single month token, not a range
    // start; JAN and MAR are excluded even though MAR is "after" FEV.
    let records = filter::apply(&sample::invoices(), &FilterCriteria::for_month("FEV/2025"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reference_month, "FEV/2025");
    assert_eq!(records[0].total_amount, 115.67);
}

#[test]
fn no_criteria_returns_the_collection_unchanged() {
    let records = sample::invoices();
    let filtered = filter::apply(&records, &FilterCriteria::default());
    assert_eq!(filtered, records);
}

#[test]
fn aggregation_coerces_missing_fields_from_wire_data() {
    // A record missing gdSavings entirely still aggregates; the absent
    // field contributes zero.
    let json = r#"[
        {"id": "a", "clientNumber": "1", "installationNumber": "1",
         "referenceMonth": "JAN/2025", "energyConsumption": 100},
        {"id": "b", "clientNumber": "1", "installationNumber": "1",
         "referenceMonth": "FEV/2025", "energyConsumption": 50, "gdSavings": 10.5}
    ]"#;
    let records: Vec<Invoice> = serde_json::from_str(json).expect("parse records");
    let totals = aggregate::totals(&records);
    assert_eq!(totals.total_energy_consumption, 150.0);
    assert_eq!(totals.total_gd_savings, 10.5);
    assert_eq!(totals.total_value_without_gd, 0.0);
}

#[test]
fn client_dropdown_projection_from_sample_data() {
    let clients = clients_from_invoices(&sample::invoices());
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].client_number, "7202210726");
    assert_eq!(clients[0].installation_number, "3001422762");
}
