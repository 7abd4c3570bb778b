//! Application context shared by every command
//!
//! Ties the configuration, the persisted session and the API client together
//! and runs route checks before a command touches the backend.

use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use tracing::debug;

use crate::{
    api::ApiClient,
    config::Config,
    routes::{Route, RouteGuard},
    session::SessionStore,
    utils::fs::ensure_dir,
};

/// Main application structure
pub struct App {
    config: Config,
    session: Arc<SessionStore>,
    client: ApiClient,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        debug!("Creating new App instance");

        config.validate()?;
        ensure_dir(&config.data_dir)?;

        let session = Arc::new(
            SessionStore::open(&config.data_dir).context("Failed to open session storage")?,
        );
        let client = ApiClient::new(&config, Arc::clone(&session))
            .context("Failed to create API client")?;

        Ok(Self {
            config,
            session,
            client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Check that `route` may be opened with the current session
    pub fn enter(&self, route: Route) -> Result<Route> {
        RouteGuard::new(&self.session).resolve(route).map_err(|redirect| {
            anyhow!(
                "Not logged in, redirected to {}. Run `booking-admin login --token <TOKEN>` first",
                redirect
            )
        })
    }
}
