//! Summary totals for the dashboard stat cards.

use crate::models::{safe_number, Invoice, Totals};

/// Sum the four derived per-invoice figures across the collection, left to
/// right in input order. Non-finite values contribute zero, matching the
/// lenient ingestion in `models`.
pub fn totals(records: &[Invoice]) -> Totals {
    let mut acc = Totals::default();
    for inv in records {
        acc.total_energy_consumption += safe_number(inv.energy_consumption);
        acc.total_compensated_energy += safe_number(inv.compensated_energy);
        acc.total_value_without_gd += safe_number(inv.total_value_without_gd);
        acc.total_gd_savings += safe_number(inv.gd_savings);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_collection_totals_to_zero() {
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn sample_dataset_totals() {
        let t = totals(&sample::invoices());
        assert_eq!(t.total_energy_consumption, 2320.0 + 2560.0 + 2190.0);
        assert_eq!(t.total_compensated_energy, 2220.0 + 2450.0 + 2100.0);
        assert!((t.total_value_without_gd - (1271.88 + 1396.22 + 1200.51)).abs() < EPS);
        assert!((t.total_gd_savings - (1081.87 + 1190.55 + 1021.75)).abs() < EPS);
    }

    #[test]
    fn permuting_input_changes_totals_by_rounding_error_at_most() {
        let records = sample::invoices();
        let mut reversed = records.clone();
        reversed.reverse();
        let a = totals(&records);
        let b = totals(&reversed);
        assert!((a.total_energy_consumption - b.total_energy_consumption).abs() < EPS);
        assert!((a.total_compensated_energy - b.total_compensated_energy).abs() < EPS);
        assert!((a.total_value_without_gd - b.total_value_without_gd).abs() < EPS);
        assert!((a.total_gd_savings - b.total_gd_savings).abs() < EPS);
    }

    #[test]
    fn non_finite_fields_contribute_zero() {
        let mut records = sample::invoices();
        records[0].gd_savings = f64::NAN;
        records[1].energy_consumption = f64::INFINITY;
        let t = totals(&records);
        assert!((t.total_gd_savings - (1190.55 + 1021.75)).abs() < EPS);
        assert_eq!(t.total_energy_consumption, 2320.0 + 2190.0);
    }
}
