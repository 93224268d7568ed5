//! Data models for invoices, clients, filter criteria and dashboard totals.
//! Wire format is the server's camelCase JSON; numeric fields deserialize
//! leniently because upstream data is not schema-validated before use.

use serde::{Deserialize, Deserializer, Serialize};

/// One electric-utility invoice: a single billing period for one client
/// installation. Line-item values come from the bill; the
/// `total_energy_consumption`..`compensated_energy` block is computed
/// upstream (server or sample data) and is only ever summed here, never
/// recomputed from the raw line items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub client_number: String,
    pub installation_number: String,
    /// Billing period label like "JAN/2025". Compared by string equality
    /// only; no calendar ordering is defined.
    pub reference_month: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub electricity_consumption: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub electricity_value: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub scee_consumption: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub scee_value: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub compensated_energy_consumption: f64,
    /// Typically negative: the GD credit on the bill.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub compensated_energy_value: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub public_lighting_contribution: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_energy_consumption: f64,
    // serde's camelCase would emit "totalValueWithoutGd"; the wire uses GD.
    #[serde(rename = "totalValueWithoutGD", default, deserialize_with = "lenient_f64")]
    pub total_value_without_gd: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gd_savings: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub energy_consumption: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub compensated_energy: f64,
}

/// A billing account as shown in filter dropdowns: the distinct
/// (clientNumber, installationNumber) pair. Always regenerated from source
/// data, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_number: String,
    pub installation_number: String,
}

/// Project the distinct clients out of an invoice collection, preserving
/// first-seen order.
pub fn clients_from_invoices(invoices: &[Invoice]) -> Vec<Client> {
    let mut out: Vec<Client> = Vec::new();
    for inv in invoices {
        let client = Client {
            client_number: inv.client_number.clone(),
            installation_number: inv.installation_number.clone(),
        };
        if !out.contains(&client) {
            out.push(client);
        }
    }
    out
}

/// Optional filter dimensions for an invoice query. An absent field means
/// "no constraint". Constructed per filter action and discarded afterwards.
///
/// `start_month` is matched by exact equality against `reference_month`
/// (see `filter::apply`); `end_month` is carried on the wire but has no
/// effect on local filtering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub client_number: Option<String>,
    pub start_month: Option<String>,
    pub end_month: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.client_number.is_none() && self.start_month.is_none() && self.end_month.is_none()
    }

    pub fn for_client(client_number: impl Into<String>) -> Self {
        Self {
            client_number: Some(client_number.into()),
            ..Self::default()
        }
    }

    pub fn for_month(start_month: impl Into<String>) -> Self {
        Self {
            start_month: Some(start_month.into()),
            ..Self::default()
        }
    }
}

/// Summary totals for the dashboard cards. Recomputed from the current
/// collection on every render; never cached or updated incrementally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_energy_consumption: f64,
    pub total_compensated_energy: f64,
    #[serde(rename = "totalValueWithoutGD")]
    pub total_value_without_gd: f64,
    #[serde(rename = "totalGDSavings")]
    pub total_gd_savings: f64,
}

/// Server response to a successful invoice upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub id: String,
    #[serde(default)]
    pub message: String,
}

/// Clamp NaN/infinity to zero. Every numeric value entering a running total
/// goes through this.
pub(crate) fn safe_number(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Accept numbers, numeric strings, null, or garbage for any invoice amount;
/// anything that is not a finite number becomes 0.0. Keeps one bad field
/// from failing the whole collection.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => safe_number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => s.trim().parse::<f64>().map(safe_number).unwrap_or(0.0),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invoice_deserializes_from_camel_case() {
        let json = r#"{
            "id": "42",
            "clientNumber": "7202210726",
            "installationNumber": "3001422762",
            "referenceMonth": "JAN/2025",
            "totalAmount": 107.38,
            "electricityConsumption": 100,
            "electricityValue": 95.86,
            "sceeConsumption": 2220,
            "sceeValue": 1135.57,
            "compensatedEnergyConsumption": 2220,
            "compensatedEnergyValue": -1081.87,
            "publicLightingContribution": 40.45,
            "totalEnergyConsumption": 2320,
            "totalValueWithoutGD": 1271.88,
            "gdSavings": 1081.87,
            "energyConsumption": 2320,
            "compensatedEnergy": 2220
        }"#;
        let inv: Invoice = serde_json::from_str(json).expect("parse invoice");
        assert_eq!(inv.client_number, "7202210726");
        assert_eq!(inv.reference_month, "JAN/2025");
        assert_eq!(inv.energy_consumption, 2320.0);
        assert_eq!(inv.compensated_energy_value, -1081.87);
    }

    #[test]
    fn missing_null_and_bogus_numerics_coerce_to_zero() {
        let json = r#"{
            "id": "x",
            "clientNumber": "1",
            "installationNumber": "2",
            "referenceMonth": "JAN/2025",
            "gdSavings": null,
            "energyConsumption": "not a number",
            "totalValueWithoutGD": "123.5"
        }"#;
        let inv: Invoice = serde_json::from_str(json).expect("parse invoice");
        assert_eq!(inv.gd_savings, 0.0);
        assert_eq!(inv.energy_consumption, 0.0);
        assert_eq!(inv.total_value_without_gd, 123.5);
        assert_eq!(inv.compensated_energy, 0.0, "absent field defaults to 0");
    }

    #[test]
    fn clients_projection_deduplicates_in_first_seen_order() {
        let invoices = crate::sample::invoices();
        let clients = clients_from_invoices(&invoices);
        assert_eq!(
            clients,
            vec![Client {
                client_number: "7202210726".to_string(),
                installation_number: "3001422762".to_string(),
            }]
        );
    }

    #[test]
    fn empty_criteria_reports_empty() {
        assert!(FilterCriteria::default().is_empty());
        assert!(!FilterCriteria::for_client("7202210726").is_empty());
    }
}
