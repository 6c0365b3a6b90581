use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /api/bills/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CreateBillRequest {
    pub customer_email: String,
    pub items: Vec<LineItem>,
    /// value -> count
    pub denominations: BTreeMap<u32, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct LineItem {
    pub product_id: String,
    pub quantity: u32,
}

/// A bill as computed and returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Bill {
    #[serde(default)]
    pub id: Option<i64>,
    pub customer_email: String,
    pub created_at: String,
    #[serde(default)]
    pub items: Vec<BillItem>,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub final_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BillItem {
    pub product_id: ProductKey,
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    pub tax_amount: f64,
    #[serde(alias = "total")]
    pub total_price: f64,
}

/// Backends reference products either by code or by numeric row id.
#[derive(Debug, Clone, PartialEq, Display, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProductKey {
    Id(i64),
    Code(String),
}

/// Error body of a rejected request.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Only a plain string detail is meant for the cashier.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_backend_bill() {
        let bill: Bill = serde_json::from_str(
            r#"{
                "id": 3,
                "customer_email": "ann@example.com",
                "created_at": "2024-03-05T10:15:30.123456",
                "total_amount": 46000.0,
                "tax_amount": 8220.0,
                "final_amount": 54220.0,
                "items": [
                    {"id": 1, "product_id": 1, "quantity": 1, "unit_price": 45000.0, "total_price": 45000.0, "tax_amount": 8100.0},
                    {"id": 2, "product_id": "KB001", "name": "Keyboard", "quantity": 1, "unit_price": 1000.0, "total": 1000.0, "tax_amount": 120.0}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(bill.id, Some(3));
        assert_eq!(bill.items.len(), 2);
        assert_eq!(bill.items[0].product_id, ProductKey::Id(1));
        assert_eq!(bill.items[0].name, None);
        assert_eq!(bill.items[1].product_id.to_string(), "KB001");
        assert_eq!(bill.items[1].total_price, 1000.0);
    }

    #[test]
    fn request_body_shape() {
        let request = CreateBillRequest {
            customer_email: "ann@example.com".to_string(),
            items: vec![LineItem {
                product_id: "LP001".to_string(),
                quantity: 2,
            }],
            denominations: BTreeMap::from([(2000, 45), (500, 1)]),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "customer_email": "ann@example.com",
                "items": [{"product_id": "LP001", "quantity": 2}],
                "denominations": {"500": 1, "2000": 45}
            })
        );
    }

    #[test]
    fn error_detail() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"detail":"Insufficient stock for product Laptop"}"#).unwrap();
        assert_eq!(err.message().as_deref(), Some("Insufficient stock for product Laptop"));
        let err: ErrorResponse = serde_json::from_str(r#"{"detail":[{"loc":["body"]}]}"#).unwrap();
        assert_eq!(err.message(), None);
    }
}
