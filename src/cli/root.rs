use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use super::{
    add::AddCommand,
    auth::{LoginCommand, LogoutCommand},
    list::ListCommand,
    open::OpenCommand,
    show::ShowCommand,
};
use crate::app::App;
use crate::config::Config;

/// Administrative console for reservations, payments and reviews
#[derive(Parser)]
#[command(
    name = "booking-admin",
    version,
    about = "Administrative console for reservations, payments and reviews",
    long_about = r#"Browse and manage the booking backend from the terminal.

Examples:
  booking-admin login --token <TOKEN>
  booking-admin list reservations --page 12
  booking-admin list amounts --page 23,5
  booking-admin list reviews --query "username=kim"
  booking-admin show payment 42
  booking-admin open /review/9
  booking-admin add reservation --file reservation.json"#
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Override the backend base URL
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a session token
    Login(LoginCommand),
    /// Forget the stored session
    Logout(LogoutCommand),
    /// Browse a paginated list
    List(ListCommand),
    /// Show a single record
    Show(ShowCommand),
    /// Create a record
    Add(AddCommand),
    /// Open a console path
    Open(OpenCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let mut config = Config::init().await?;
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }
        debug!("Configuration initialized for {}", config.api_url);

        let app = App::new(config)?;

        match self.command {
            Commands::Login(cmd) => cmd.execute(&app),
            Commands::Logout(cmd) => cmd.execute(&app),
            Commands::List(cmd) => cmd.execute(&app).await,
            Commands::Show(cmd) => cmd.execute(&app).await,
            Commands::Add(cmd) => cmd.execute(&app).await,
            Commands::Open(cmd) => cmd.execute(&app).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_global_flags() {
        let cli = Cli::try_parse_from([
            "booking-admin",
            "list",
            "reviews",
            "--page",
            "13,4",
            "--debug",
            "--api-url",
            "https://api.example.com",
        ])
        .unwrap();

        assert!(cli.debug);
        assert_eq!(cli.api_url.as_deref(), Some("https://api.example.com"));
        match cli.command {
            Commands::List(cmd) => assert_eq!(cmd.pages, vec![13, 4]),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_open_defaults_to_first_page() {
        let cli = Cli::try_parse_from(["booking-admin", "open", "/review"]).unwrap();
        match cli.command {
            Commands::Open(cmd) => {
                assert_eq!(cmd.path, "/review");
                assert_eq!(cmd.page, 1);
            }
            _ => panic!("expected open command"),
        }
    }
}
