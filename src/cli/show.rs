use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::app::App;
use crate::models::{ReservationPayment, ReservationSummary, ReviewSummary};
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowKind {
    Reservation,
    Review,
    Payment,
}

/// Show a single record
#[derive(Debug, Args)]
pub struct ShowCommand {
    #[arg(value_enum)]
    pub kind: ShowKind,

    /// Record identifier
    pub id: String,
}

impl ShowCommand {
    pub async fn execute(&self, app: &App) -> Result<()> {
        let endpoints = &app.config().endpoints;
        match self.kind {
            ShowKind::Reservation => {
                let route = Route::ReservationDetail(self.id.clone());
                let reservation: ReservationSummary =
                    self.fetch(app, route, &endpoints.reservations).await?;
                print_json(&reservation)
            }
            ShowKind::Review => {
                let route = Route::ReviewDetail(self.id.clone());
                let review: ReviewSummary = self.fetch(app, route, &endpoints.reviews).await?;
                print_json(&review)
            }
            ShowKind::Payment => {
                let route = Route::PaymentDetail(self.id.clone());
                let payment: ReservationPayment =
                    self.fetch(app, route, &endpoints.payments).await?;
                print_json(&payment)?;
                println!("{}", payment_amounts(&payment));
                Ok(())
            }
        }
    }

    async fn fetch<T>(&self, app: &App, route: Route, endpoint: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let route = app.enter(route)?;
        info!("Opening {}", route);

        let path = format!("{}/{}", endpoint.trim_end_matches('/'), self.id);
        app.client()
            .get::<T>(&path)
            .await?
            .into_data()
            .with_context(|| format!("Failed to load {} {}", route.name(), self.id))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line paid/cancelled summary for a payment
fn payment_amounts(payment: &ReservationPayment) -> String {
    let mut line = format!(
        "{} via {} ({}): paid {}",
        payment.merchant_uid, payment.pg_provider, payment.pay_method, payment.paid_amount
    );
    if let Some(cancelled) = payment.cancelled_amount.as_deref().filter(|a| !a.is_empty() && *a != "0") {
        line.push_str(&format!(", cancelled {}", cancelled));
        if let Some(reason) = payment.cancelled_reason.as_deref() {
            line.push_str(&format!(" ({})", reason));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(cancelled_amount: Option<&str>) -> ReservationPayment {
        let json = serde_json::json!({
            "id": 42,
            "applyNum": null,
            "impUid": "imp_1",
            "merchantUid": "m-1",
            "name": "Cleaning",
            "paidAmount": "150000",
            "paidAt": "1709251200",
            "cancelledAmount": cancelled_amount,
            "cancelledAt": null,
            "cancelledReason": "customer request",
            "payMethod": "card",
            "pgProvider": "html5_inicis",
            "pgTid": null,
            "receiptUrl": null,
            "bankName": null,
            "buyerAddr": null,
            "buyerEmail": null,
            "buyerName": "Kim",
            "buyerPostcode": null,
            "buyerTel": null,
            "cardName": null,
            "cardNumber": null,
            "cardQuota": 0,
            "currency": "KRW",
            "customData": null,
            "status": "paid",
            "errorMsg": null
        });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_payment_amounts() {
        assert_eq!(
            payment_amounts(&payment(None)),
            "m-1 via html5_inicis (card): paid 150000"
        );
        assert_eq!(
            payment_amounts(&payment(Some("0"))),
            "m-1 via html5_inicis (card): paid 150000"
        );
        assert_eq!(
            payment_amounts(&payment(Some("50000"))),
            "m-1 via html5_inicis (card): paid 150000, cancelled 50000 (customer request)"
        );
    }
}
