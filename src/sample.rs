//! Bundled fallback dataset: three fully-populated invoices for client
//! 7202210726, shown whenever the live fetch fails or comes back empty.

use crate::models::Invoice;

/// Returns a fresh copy of the sample invoices on every call, so callers
/// can filter or sort without aliasing the shared originals.
pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "1".to_string(),
            client_number: "7202210726".to_string(),
            installation_number: "3001422762".to_string(),
            reference_month: "JAN/2025".to_string(),
            total_amount: 107.38,
            electricity_consumption: 100.0,
            electricity_value: 95.86,
            scee_consumption: 2220.0,
            scee_value: 1135.57,
            compensated_energy_consumption: 2220.0,
            compensated_energy_value: -1081.87,
            public_lighting_contribution: 40.45,
            total_energy_consumption: 2320.0,
            total_value_without_gd: 1271.88,
            gd_savings: 1081.87,
            energy_consumption: 2320.0,
            compensated_energy: 2220.0,
        },
        Invoice {
            id: "2".to_string(),
            client_number: "7202210726".to_string(),
            installation_number: "3001422762".to_string(),
            reference_month: "FEV/2025".to_string(),
            total_amount: 115.67,
            electricity_consumption: 110.0,
            electricity_value: 105.45,
            scee_consumption: 2450.0,
            scee_value: 1250.32,
            compensated_energy_consumption: 2450.0,
            compensated_energy_value: -1190.55,
            public_lighting_contribution: 40.45,
            total_energy_consumption: 2560.0,
            total_value_without_gd: 1396.22,
            gd_savings: 1190.55,
            energy_consumption: 2560.0,
            compensated_energy: 2450.0,
        },
        Invoice {
            id: "3".to_string(),
            client_number: "7202210726".to_string(),
            installation_number: "3001422762".to_string(),
            reference_month: "MAR/2025".to_string(),
            total_amount: 98.76,
            electricity_consumption: 90.0,
            electricity_value: 86.27,
            scee_consumption: 2100.0,
            scee_value: 1073.79,
            compensated_energy_consumption: 2100.0,
            compensated_energy_value: -1021.75,
            public_lighting_contribution: 40.45,
            total_energy_consumption: 2190.0,
            total_value_without_gd: 1200.51,
            gd_savings: 1021.75,
            energy_consumption: 2190.0,
            compensated_energy: 2100.0,
        },
    ]
}
