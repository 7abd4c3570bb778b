//! Reservation list and detail types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settlement state of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationState {
    Paid,
    Cancelled,
    Failed,
}

impl fmt::Display for ReservationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReservationState::Paid => "PAID",
            ReservationState::Cancelled => "CANCELLED",
            ReservationState::Failed => "FAILED",
        };
        f.write_str(label)
    }
}

/// Row of the reservation list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSummary {
    pub reservation_id: String,
    pub reservation_payment_id: i64,
    pub username: String,
    pub created: NaiveDateTime,
    pub target_date: NaiveDateTime,
    /// Free-form on the backend; usually one of [`ReservationState`]
    pub status: String,
    pub balance_amount: String,
    pub reservation_admin_memo: Option<String>,
    pub payment_admin_memo: Option<String>,
    pub service_admin_memo: Option<String>,
}

impl ReservationSummary {
    /// Parsed status, if the backend sent one of the known states
    pub fn state(&self) -> Option<ReservationState> {
        serde_json::from_value(serde_json::Value::String(self.status.clone())).ok()
    }
}

/// Row of the reservation amount list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationAmountSummary {
    pub reservation_id: String,
    pub username: String,
    pub service_id: i64,
    pub service_name: Option<String>,
    pub created: NaiveDateTime,
    pub target_date: NaiveDateTime,
    pub balance_amount: String,
    pub paid_amount: String,
    pub cancelled_amount: String,
    pub payment_created: NaiveDateTime,
}
