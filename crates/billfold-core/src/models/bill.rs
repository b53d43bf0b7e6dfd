use serde::{Deserialize, Serialize};

/// Expense categories offered by the submission form.
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Canonical bill statuses as persisted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

/// One expense-report record.
///
/// `status` stays a raw string: stored records may predate the canonical set
/// and display formatting passes unknown values through. `vat` is kept as
/// entered while `pct` is numeric; the backend payload shape depends on that
/// asymmetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Store-assigned identifier, absent until the create phase succeeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    /// `YYYY-MM-DD` as stored; corrupted records may hold anything.
    pub date: String,
    pub vat: String,
    pub pct: u32,
    #[serde(default)]
    pub commentary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub status: String,
}

/// Raw values extracted from the new-bill form, before coercion.
///
/// The presentation adapter is a plain field-to-value mapping; the submission
/// pipeline owns parsing `amount` and `pct` and deliberately leaves `vat`
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct BillForm {
    pub bill_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_serializes_with_wire_names() {
        let bill = Bill {
            id: None,
            email: "employee@test.tld".to_string(),
            bill_type: "Transports".to_string(),
            name: "Vol Paris Londres".to_string(),
            amount: 348.0,
            date: "2022-12-31".to_string(),
            vat: "70".to_string(),
            pct: 20,
            commentary: String::new(),
            file_url: Some("https://test.storage.tld/vol.jpg".to_string()),
            file_name: Some("vol.jpg".to_string()),
            status: BillStatus::Pending.as_str().to_string(),
        };

        let value = serde_json::to_value(&bill).unwrap();
        assert_eq!(value["type"], "Transports");
        assert_eq!(value["fileUrl"], "https://test.storage.tld/vol.jpg");
        assert_eq!(value["fileName"], "vol.jpg");
        assert_eq!(value["vat"], "70");
        assert_eq!(value["pct"], 20);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_bill_deserializes_record_without_optional_fields() {
        let raw = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "email": "employee@test.tld",
            "type": "Services en ligne",
            "name": "Abonnement",
            "amount": 30,
            "date": "2022-11-30",
            "vat": "10",
            "pct": 20,
            "status": "accepted"
        }"#;

        let bill: Bill = serde_json::from_str(raw).unwrap();
        assert_eq!(bill.id.as_deref(), Some("47qAXb6fIm2zOKkLzMro"));
        assert_eq!(bill.bill_type, "Services en ligne");
        assert_eq!(bill.commentary, "");
        assert!(bill.file_url.is_none());
    }
}
