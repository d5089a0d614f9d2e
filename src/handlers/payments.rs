use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info, instrument};

use crate::dto::payments::ConfirmBody;
use crate::service::purchase::{build_purchase_payload, classify_reply, PurchaseOutcome};
use crate::utils::helpers::is_valid_msisdn;
use crate::AppState;

#[instrument(skip(body, app_state), fields(phone = ?body.phone, reference_id = ?body.reference_id))]
pub async fn waafipay_confirm(
    body: web::Json<ConfirmBody>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let request_payload = body.into_inner();
    info!("Incoming confirmation request: {:?}", request_payload);

    let phone = match &request_payload.phone {
        Some(phone) if !phone.trim().is_empty() => phone.trim().to_string(),
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({ "status": "ERROR", "message": "Missing required fields" }));
        }
    };

    let amount = match request_payload.charge_amount() {
        Some(amount) if amount > 0.0 => amount,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({ "status": "ERROR", "message": "Missing required fields" }));
        }
    };

    if !is_valid_msisdn(&phone) {
        return HttpResponse::BadRequest().json(
            json!({ "status": "ERROR", "message": "Invalid phone format. Use 252XXXXXXXXX" }),
        );
    }

    let items = match &request_payload.items {
        Some(items) if !items.is_empty() => items.clone(),
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({ "status": "ERROR", "message": "Missing required fields" }));
        }
    };

    let payload = build_purchase_payload(
        &phone,
        amount,
        items,
        request_payload.reference_id.clone(),
        &app_state.env,
        Utc::now(),
    );

    let reply_text = match app_state.gateway.purchase(&payload).await {
        Ok(reply_text) => reply_text,
        Err(err) => {
            error!("Error dispatching purchase to WaafiPay ===> {}", err);
            return HttpResponse::InternalServerError().json(json!({
                "status": "ERROR",
                "message": "WaafiPay request failed. Please try again later"
            }));
        }
    };

    info!("WaafiPay raw response: {}", reply_text);

    match classify_reply(&reply_text) {
        PurchaseOutcome::Approved(reply) => {
            HttpResponse::Ok().json(json!({ "status": "SUCCESS", "waafipay": reply }))
        }
        PurchaseOutcome::Declined { message, reply } => HttpResponse::BadRequest()
            .json(json!({ "status": "ERROR", "message": message, "waafipay": reply })),
        PurchaseOutcome::EmptyReply => HttpResponse::BadGateway()
            .json(json!({ "status": "ERROR", "message": "Empty response from WaafiPay" })),
        PurchaseOutcome::MalformedReply { raw } => HttpResponse::BadGateway().json(
            json!({ "status": "ERROR", "message": "Invalid response from WaafiPay", "raw": raw }),
        ),
    }
}
