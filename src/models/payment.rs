//! Payment records and the gateway payment flow
//!
//! A reservation is created from a [`PaymentPrepareRequest`]. The console then
//! builds an [`IAmPortPaymentRequest`] for the payment gateway, and the
//! gateway's [`IAmPortPaymentResponse`] is reported back to the backend as a
//! [`PaymentResultRequest`].

use serde::{Deserialize, Serialize};

use crate::utils::get_uuid;

/// Settled payment attached to a reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayment {
    pub id: i64,
    pub apply_num: Option<String>,
    pub imp_uid: String,
    pub merchant_uid: String,
    pub name: String,
    pub paid_amount: String,
    pub paid_at: Option<String>,
    pub cancelled_amount: Option<String>,
    pub cancelled_at: Option<String>,
    pub cancelled_reason: Option<String>,
    pub pay_method: String,
    pub pg_provider: String,
    pub pg_tid: Option<String>,
    pub receipt_url: Option<String>,
    pub bank_name: Option<String>,
    pub buyer_addr: Option<String>,
    pub buyer_email: Option<String>,
    pub buyer_name: Option<String>,
    pub buyer_postcode: Option<String>,
    pub buyer_tel: Option<String>,
    pub card_name: Option<String>,
    pub card_number: Option<String>,
    #[serde(default)]
    pub card_quota: i32,
    pub currency: Option<String>,
    pub custom_data: Option<String>,
    pub status: String,
    pub error_msg: Option<String>,
}

/// Body that creates a reservation and reserves its payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPrepareRequest {
    pub product_id: i64,
    pub product_name: String,
    pub phone_number: String,
    pub address: String,
    pub footage: i64,
    pub description: String,
    pub amount: i64,
    pub is_agree_policy: bool,
}

/// Request handed to the payment gateway widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IAmPortPaymentRequest {
    pub pg: String,
    pub pay_method: Option<String>,
    pub merchant_uid: String,
    pub name: String,
    pub amount: i64,
    pub buyer_email: Option<String>,
    pub buyer_name: Option<String>,
    pub buyer_tel: Option<String>,
    pub buyer_addr: Option<String>,
    pub buyer_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_url: Option<String>,
}

impl IAmPortPaymentRequest {
    /// Gateway request for a prepared reservation, with a fresh merchant uid
    pub fn for_prepared(prepare: &PaymentPrepareRequest, pg: &str, pay_method: Option<&str>) -> Self {
        Self {
            pg: pg.to_string(),
            pay_method: pay_method.map(str::to_string),
            merchant_uid: get_uuid(),
            name: prepare.product_name.clone(),
            amount: prepare.amount,
            buyer_email: None,
            buyer_name: None,
            buyer_tel: Some(prepare.phone_number.clone()),
            buyer_addr: Some(prepare.address.clone()),
            buyer_postcode: None,
            bypass: None,
            notice_url: None,
        }
    }
}

/// Callback payload from the payment gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IAmPortPaymentResponse {
    pub apply_num: Option<String>,
    pub bank_name: Option<String>,
    pub buyer_addr: Option<String>,
    pub buyer_email: Option<String>,
    pub buyer_name: Option<String>,
    pub buyer_postcode: Option<String>,
    pub buyer_tel: Option<String>,
    pub card_name: Option<String>,
    pub card_number: Option<String>,
    #[serde(default)]
    pub card_quota: i32,
    pub currency: Option<String>,
    pub custom_data: Option<String>,
    pub imp_uid: String,
    pub merchant_uid: String,
    pub name: String,
    pub paid_amount: i64,
    pub paid_at: i64,
    pub pay_method: String,
    pub pg_provider: String,
    pub pg_tid: Option<String>,
    pub pg_type: Option<String>,
    pub receipt_url: String,
    pub status: String,
    pub success: bool,
    #[serde(default)]
    pub error_msg: Option<String>,
}

/// Gateway outcome as reported to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResultRequest {
    pub apply_num: Option<String>,
    pub bank_name: Option<String>,
    pub buyer_addr: Option<String>,
    pub buyer_email: Option<String>,
    pub buyer_name: Option<String>,
    pub buyer_postcode: Option<String>,
    pub buyer_tel: Option<String>,
    pub card_name: Option<String>,
    pub card_number: Option<String>,
    pub card_quota: i32,
    pub currency: Option<String>,
    pub custom_data: Option<String>,
    pub imp_uid: String,
    pub merchant_uid: String,
    pub name: String,
    pub paid_amount: i64,
    pub paid_at: i64,
    pub pay_method: String,
    pub pg_provider: String,
    pub pg_tid: Option<String>,
    pub pg_type: Option<String>,
    pub receipt_url: String,
    pub status: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl From<IAmPortPaymentResponse> for PaymentResultRequest {
    fn from(res: IAmPortPaymentResponse) -> Self {
        Self {
            apply_num: res.apply_num,
            bank_name: res.bank_name,
            buyer_addr: res.buyer_addr,
            buyer_email: res.buyer_email,
            buyer_name: res.buyer_name,
            buyer_postcode: res.buyer_postcode,
            buyer_tel: res.buyer_tel,
            card_name: res.card_name,
            card_number: res.card_number,
            card_quota: res.card_quota,
            currency: res.currency,
            custom_data: res.custom_data,
            imp_uid: res.imp_uid,
            merchant_uid: res.merchant_uid,
            name: res.name,
            paid_amount: res.paid_amount,
            paid_at: res.paid_at,
            pay_method: res.pay_method,
            pg_provider: res.pg_provider,
            pg_tid: res.pg_tid,
            pg_type: res.pg_type,
            receipt_url: res.receipt_url,
            status: res.status,
            success: res.success,
            error_msg: res.error_msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATEWAY_CALLBACK: &str = r#"{
        "apply_num": "30012345",
        "bank_name": null,
        "buyer_addr": "Seoul",
        "buyer_email": null,
        "buyer_name": "Kim",
        "buyer_postcode": null,
        "buyer_tel": "010-0000-0000",
        "card_name": "Shinhan",
        "card_number": "4321********1234",
        "card_quota": 0,
        "currency": "KRW",
        "custom_data": null,
        "imp_uid": "imp_001",
        "merchant_uid": "m-123",
        "name": "Deep cleaning",
        "paid_amount": 150000,
        "paid_at": 1709251200,
        "pay_method": "card",
        "pg_provider": "html5_inicis",
        "pg_tid": "tid-9",
        "pg_type": "payment",
        "receipt_url": "https://receipt.example/1",
        "status": "paid",
        "success": true
    }"#;

    #[test]
    fn test_gateway_callback_becomes_camel_case_result() {
        let callback: IAmPortPaymentResponse = serde_json::from_str(GATEWAY_CALLBACK).unwrap();
        let result = PaymentResultRequest::from(callback);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["impUid"], "imp_001");
        assert_eq!(json["merchantUid"], "m-123");
        assert_eq!(json["paidAmount"], 150000);
        assert_eq!(json["pgProvider"], "html5_inicis");
        assert_eq!(json["success"], true);
        assert!(json.get("errorMsg").is_none());
        assert!(json.get("imp_uid").is_none());
    }

    #[test]
    fn test_gateway_request_for_prepared_reservation() {
        let prepare = PaymentPrepareRequest {
            product_id: 7,
            product_name: "Move-in cleaning".to_string(),
            phone_number: "010-1111-2222".to_string(),
            address: "Busan".to_string(),
            footage: 24,
            description: "two rooms".to_string(),
            amount: 210000,
            is_agree_policy: true,
        };

        let first = IAmPortPaymentRequest::for_prepared(&prepare, "html5_inicis", Some("card"));
        let second = IAmPortPaymentRequest::for_prepared(&prepare, "html5_inicis", None);

        assert_eq!(first.amount, 210000);
        assert_eq!(first.name, "Move-in cleaning");
        assert_eq!(first.pay_method.as_deref(), Some("card"));
        assert_eq!(first.buyer_tel.as_deref(), Some("010-1111-2222"));
        assert_ne!(first.merchant_uid, second.merchant_uid);

        let body = serde_json::to_value(&prepare).unwrap();
        assert_eq!(body["productId"], 7);
        assert_eq!(body["isAgreePolicy"], true);
    }
}
