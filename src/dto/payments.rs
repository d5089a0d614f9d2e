use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Confirmation request as submitted by the storefront. Every field is
/// optional at the serde level so that a missing field surfaces as a 400
/// from the handler instead of a deserialization error.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmBody {
    pub phone: Option<String>,
    pub total: Option<f64>,
    pub amount: Option<f64>,
    pub items: Option<Vec<LineItem>>,
    pub reference_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LineItem {
    pub id: Value,
    pub title: String,
    pub qty: u32,
    pub price: f64,
}

impl ConfirmBody {
    /// Storefront builds have sent the charge under both spellings;
    /// `total` wins when both are present.
    pub fn charge_amount(&self) -> Option<f64> {
        self.total.or(self.amount)
    }
}
