use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::debug;

use super::{
    list::{ListCommand, ListKind},
    show::{ShowCommand, ShowKind},
};
use crate::app::App;
use crate::routes::Route;

/// Open a console path such as `/review`, `/amount` or `/payment/42`
#[derive(Debug, Args)]
pub struct OpenCommand {
    /// Console path
    pub path: String,

    /// Page to show when the path is a list
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,
}

impl OpenCommand {
    pub async fn execute(&self, app: &App) -> Result<()> {
        let route = self.resolve()?;
        debug!("Path {} resolved to {}", self.path, route.name());

        match &route {
            Route::Home => {
                let state = if app.session().has_token() {
                    "logged in"
                } else {
                    "not logged in"
                };
                println!("{} ({})", app.client().base_url(), state);
                Ok(())
            }
            Route::Reservation => self.list(app, ListKind::Reservations).await,
            Route::ReservationAmount => self.list(app, ListKind::Amounts).await,
            Route::Review => self.list(app, ListKind::Reviews).await,
            Route::ReservationDetail(id) => show(app, ShowKind::Reservation, id).await,
            Route::ReviewDetail(id) => show(app, ShowKind::Review, id).await,
            Route::PaymentDetail(id) => show(app, ShowKind::Payment, id).await,
            Route::AddReservation | Route::AddReview => {
                bail!("{} needs a request body, use `booking-admin add` with --file", route)
            }
        }
    }

    fn resolve(&self) -> Result<Route> {
        let path = self.path.trim();
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Route::parse(&path).with_context(|| format!("Unknown console path: {}", self.path))
    }

    async fn list(&self, app: &App, kind: ListKind) -> Result<()> {
        ListCommand {
            kind,
            pages: vec![self.page],
            rows: None,
            query: None,
            json: false,
        }
        .execute(app)
        .await
    }
}

async fn show(app: &App, kind: ShowKind, id: &str) -> Result<()> {
    ShowCommand {
        kind,
        id: id.to_string(),
    }
    .execute(app)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    fn open(path: &str) -> OpenCommand {
        OpenCommand {
            path: path.to_string(),
            page: 1,
        }
    }

    #[test]
    fn test_resolve_console_paths() {
        assert_eq!(open("/").resolve().unwrap(), Route::Home);
        assert_eq!(open("amount").resolve().unwrap(), Route::ReservationAmount);
        assert_eq!(
            open(" /payment/42 ").resolve().unwrap(),
            Route::PaymentDetail("42".to_string())
        );

        let err = open("/settings").resolve().unwrap_err();
        assert!(err.to_string().contains("/settings"));
    }

    #[tokio::test]
    async fn test_add_paths_need_a_body() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: dir.path().join("data"),
            ..Config::default()
        };
        let app = App::new(config).unwrap();

        let err = open("/add/review").execute(&app).await.unwrap_err();
        assert!(err.to_string().contains("--file"));
    }
}
