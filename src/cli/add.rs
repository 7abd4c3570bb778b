use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::App;
use crate::models::{
    IAmPortPaymentRequest, IAmPortPaymentResponse, PaymentPrepareRequest, PaymentResultRequest,
    ReviewCreateRequest,
};
use crate::routes::Route;
use crate::utils::fs::read_file_safe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AddKind {
    /// Create a reservation and print the matching gateway request
    Reservation,
    /// Create a review
    Review,
    /// Report a payment gateway callback to the backend
    PaymentResult,
}

/// Create a record from a JSON file
#[derive(Debug, Args)]
pub struct AddCommand {
    #[arg(value_enum)]
    pub kind: AddKind,

    /// JSON body to send
    #[arg(short, long)]
    pub file: PathBuf,

    /// Payment gateway provider for new reservations
    #[arg(long, default_value = "html5_inicis")]
    pub pg: String,

    /// Payment method for new reservations
    #[arg(long)]
    pub pay_method: Option<String>,
}

impl AddCommand {
    pub async fn execute(&self, app: &App) -> Result<()> {
        let endpoints = &app.config().endpoints;
        match self.kind {
            AddKind::Reservation => {
                app.enter(Route::AddReservation)?;
                let prepare: PaymentPrepareRequest = read_body(&self.file)?;
                if !prepare.is_agree_policy {
                    bail!("The reservation policy must be agreed to (isAgreePolicy)");
                }

                submit(app, &endpoints.reservations, &prepare).await?;
                info!("Reservation prepared for product {}", prepare.product_id);

                let gateway =
                    IAmPortPaymentRequest::for_prepared(&prepare, &self.pg, self.pay_method.as_deref());
                println!("{}", serde_json::to_string_pretty(&gateway)?);
            }
            AddKind::Review => {
                app.enter(Route::AddReview)?;
                let review: ReviewCreateRequest = read_body(&self.file)?;
                if review.content.trim().is_empty() {
                    bail!("Review content must not be empty");
                }

                submit(app, &endpoints.reviews, &review).await?;
                println!("Review by {} created.", review.username);
            }
            AddKind::PaymentResult => {
                let callback: IAmPortPaymentResponse = read_body(&self.file)?;
                app.enter(Route::PaymentDetail(callback.merchant_uid.clone()))?;
                let result = PaymentResultRequest::from(callback);

                let path = format!("{}/result", endpoints.payments.trim_end_matches('/'));
                submit(app, &path, &result).await?;
                println!("Payment {} reported ({}).", result.merchant_uid, result.status);
            }
        }
        Ok(())
    }
}

fn read_body<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_file_safe(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid request body in {}", path.display()))
}

async fn submit<B: Serialize>(app: &App, path: &str, body: &B) -> Result<()> {
    app.client()
        .post::<B, serde_json::Value>(path, body)
        .await?
        .into_result()
        .with_context(|| format!("Backend refused POST {}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_body() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("review.json");
        std::fs::write(&path, r#"{"username":"kim","content":"Great","rating":5}"#).unwrap();

        let review: ReviewCreateRequest = read_body(&path).unwrap();
        assert_eq!(review.username, "kim");
        assert_eq!(review.rating, Some(5));
    }

    #[test]
    fn test_read_body_reports_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("review.json");
        std::fs::write(&path, r#"{"username":"kim"}"#).unwrap();

        let err = read_body::<ReviewCreateRequest>(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid request body"));
    }
}
