use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stage::BorrowerStage;

/// Output column headers for the fixed schema, in export order.
///
/// Export column order follows this declaration order, not the order of the
/// input sheet. Serde names below must stay in sync with this list.
pub const FIELD_HEADERS: [&str; 13] = [
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Address",
    "City",
    "Province",
    "Postal Code",
    "Date of Birth",
    "Borrower Stage",
    "Partner Type",
    "Lead Source",
    "Campaign",
];

/// One normalized contact.
///
/// Every source row produces exactly one record. Fields the mapper could
/// not resolve stay empty; source columns the mapper did not recognize are
/// carried verbatim in `extras`, keyed by their original header, so no
/// column is silently dropped.
///
/// The serialized shape uses the human column headers and flattens
/// `extras`, so the JSON handed to the enhancement service matches the
/// exported grid one-to-one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "First Name", default)]
    pub first_name: String,
    #[serde(rename = "Last Name", default)]
    pub last_name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Phone", default)]
    pub phone: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "City", default)]
    pub city: String,
    #[serde(rename = "Province", default)]
    pub province: String,
    #[serde(rename = "Postal Code", default)]
    pub postal_code: String,
    /// ISO `YYYY-MM-DD` when the source value parsed as a date, otherwise
    /// the raw source text unchanged.
    #[serde(rename = "Date of Birth", default)]
    pub date_of_birth: String,
    #[serde(rename = "Borrower Stage", default)]
    pub borrower_stage: BorrowerStage,
    #[serde(rename = "Partner Type", default)]
    pub partner_type: String,
    #[serde(rename = "Lead Source", default)]
    pub lead_source: String,
    #[serde(rename = "Campaign", default)]
    pub campaign: String,
    /// Extension area: unmapped source columns, keyed by original header.
    #[serde(flatten)]
    pub extras: BTreeMap<String, String>,
}

impl ContactRecord {
    /// Fixed-schema values in [`FIELD_HEADERS`] order.
    pub fn field_values(&self) -> [&str; 13] {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.address,
            &self.city,
            &self.province,
            &self.postal_code,
            &self.date_of_birth,
            self.borrower_stage.as_str(),
            &self.partner_type,
            &self.lead_source,
            &self.campaign,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_values_follow_header_order() {
        let record = ContactRecord {
            first_name: "Ada".to_string(),
            postal_code: "A1B2C3".to_string(),
            ..ContactRecord::default()
        };
        let values = record.field_values();
        assert_eq!(values.len(), FIELD_HEADERS.len());
        assert_eq!(values[0], "Ada");
        assert_eq!(values[7], "A1B2C3");
        assert_eq!(values[9], "Prospect");
    }

    #[test]
    fn unknown_json_keys_land_in_extras() {
        let json = r#"{"First Name":"Ada","Office":"North"}"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.extras.get("Office").map(String::as_str), Some("North"));
    }
}
