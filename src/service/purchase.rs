use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::dto::payments::LineItem;
use crate::utils::config::EnvConfig;

pub const SCHEMA_VERSION: &str = "1.0";
pub const CHANNEL_NAME: &str = "WEB";
pub const SERVICE_NAME: &str = "API_PURCHASE";
pub const PAYMENT_METHOD: &str = "MWALLET_ACCOUNT";

/// The only code WaafiPay uses to signal an approved purchase.
pub const APPROVED_RESPONSE_CODE: &str = "2001";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GatewayPayload {
    pub schema_version: String,
    pub request_id: String,
    pub timestamp: String,
    pub channel_name: String,
    pub service_name: String,
    pub service_params: ServiceParams,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServiceParams {
    pub merchant_uid: String,
    pub api_user_id: String,
    pub api_key: String,
    pub payment_method: String,
    pub payer_info: PayerInfo,
    pub transaction_info: TransactionInfo,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PayerInfo {
    pub account_no: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    pub reference_id: String,
    pub invoice_id: String,
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub items: Vec<LineItem>,
}

/// Builds the `API_PURCHASE` envelope for one confirmation request.
///
/// `captured_at` is taken once per request so that `requestId`,
/// `referenceId` and `invoiceId` all carry the same millisecond stamp.
/// Merchant credentials and currency come from configuration only.
pub fn build_purchase_payload(
    phone: &str,
    amount: f64,
    items: Vec<LineItem>,
    reference_id: Option<String>,
    env: &EnvConfig,
    captured_at: DateTime<Utc>,
) -> GatewayPayload {
    let millis = captured_at.timestamp_millis();

    GatewayPayload {
        schema_version: String::from(SCHEMA_VERSION),
        request_id: millis.to_string(),
        timestamp: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        channel_name: String::from(CHANNEL_NAME),
        service_name: String::from(SERVICE_NAME),
        service_params: ServiceParams {
            merchant_uid: env.merchant_uid.clone(),
            api_user_id: env.api_user_id.clone(),
            api_key: env.api_key.clone(),
            payment_method: String::from(PAYMENT_METHOD),
            payer_info: PayerInfo {
                account_no: phone.to_string(),
            },
            transaction_info: TransactionInfo {
                reference_id: reference_id.unwrap_or(format!("REF-{}", millis)),
                invoice_id: format!("INV-{}", millis),
                amount,
                currency: env.currency.clone(),
                description: format!("Web order of {} item(s)", items.len()),
                items,
            },
        },
    }
}

#[derive(Debug)]
pub enum PurchaseOutcome {
    Approved(Value),
    Declined { message: String, reply: Value },
    EmptyReply,
    MalformedReply { raw: String },
}

/// Classifies the raw reply text from WaafiPay. The body is inspected as
/// text first since the gateway has been observed returning empty bodies
/// and non-JSON error pages.
pub fn classify_reply(raw: &str) -> PurchaseOutcome {
    if raw.trim().is_empty() {
        return PurchaseOutcome::EmptyReply;
    }

    let reply: Value = match serde_json::from_str(raw) {
        Ok(reply) => reply,
        Err(_) => {
            return PurchaseOutcome::MalformedReply {
                raw: raw.to_string(),
            };
        }
    };

    let response_code = match &reply["responseCode"] {
        Value::String(code) => code.clone(),
        Value::Number(code) => code.to_string(),
        _ => String::new(),
    };

    if response_code == APPROVED_RESPONSE_CODE {
        return PurchaseOutcome::Approved(reply);
    }

    let message = reply["responseMsg"]
        .as_str()
        .unwrap_or("Payment was rejected by WaafiPay")
        .to_string();

    PurchaseOutcome::Declined { message, reply }
}
