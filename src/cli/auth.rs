use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::app::App;
use crate::routes::Route;
use crate::session::TOKEN_KEY;

/// Store the bearer token used for every backend request
#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Session token issued by the backend
    #[arg(short, long)]
    pub token: String,
}

impl LoginCommand {
    pub fn execute(&self, app: &App) -> Result<()> {
        app.enter(Route::Home)?;

        let token = self.token.trim();
        if token.is_empty() {
            anyhow::bail!("Token must not be empty");
        }

        app.session()
            .save(TOKEN_KEY, token)
            .context("Failed to store session token")?;
        info!("Session stored in {}", app.session().path().display());
        println!("Logged in.");
        Ok(())
    }
}

/// Clear everything kept in the session store
#[derive(Debug, Args)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub fn execute(&self, app: &App) -> Result<()> {
        app.session().clear().context("Failed to clear session")?;
        println!("Logged out.");
        Ok(())
    }
}
