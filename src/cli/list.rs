use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use super::render::{page_links, page_summary, render_table, ListRow};
use crate::app::App;
use crate::models::{ReservationAmountSummary, ReservationSummary, ReviewSummary};
use crate::pager::{Navigation, PageFetcher, PageManager, PagerSlot, CHAPTER_SIZE};
use crate::routes::Route;

/// Lists that can be browsed page by page
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Reservations,
    Amounts,
    Reviews,
}

/// Browse a paginated list
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Which list to show
    #[arg(value_enum)]
    pub kind: ListKind,

    /// Pages to show in order, starting at 1, e.g. "23,5"
    #[arg(short = 'p', long = "page", value_delimiter = ',', default_value = "1")]
    pub pages: Vec<u32>,

    /// Rows per page, defaults to the configured row count
    #[arg(short, long)]
    pub rows: Option<u32>,

    /// Extra query parameters, e.g. "status=PAID&username=kim"
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print the pages as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub async fn execute(&self, app: &App) -> Result<()> {
        let endpoints = &app.config().endpoints;
        match self.kind {
            ListKind::Reservations => {
                self.browse::<ReservationSummary>(app, Route::Reservation, &endpoints.reservations)
                    .await
            }
            ListKind::Amounts => {
                self.browse::<ReservationAmountSummary>(app, Route::ReservationAmount, &endpoints.amounts)
                    .await
            }
            ListKind::Reviews => {
                self.browse::<ReviewSummary>(app, Route::Review, &endpoints.reviews)
                    .await
            }
        }
    }

    async fn browse<T>(&self, app: &App, route: Route, endpoint: &str) -> Result<()>
    where
        T: ListRow + DeserializeOwned + Serialize + Send + 'static,
    {
        let route = app.enter(route)?;
        info!("Opening {} list", route.name());

        let rows = self.rows.unwrap_or(app.config().row_count);
        let query = self.query_suffix();

        let mut slot = PagerSlot::<T, _>::new();
        let manager = slot.get_or_create_with(|| app.client().clone());
        if !manager.is_ready() {
            manager.init(endpoint, Some(rows))?;
        }
        debug!("Loading {} with {} rows per page", manager.url(), manager.row_count());
        manager
            .load_data(query.as_deref())
            .await
            .with_context(|| format!("Failed to load {}", route.name()))?;
        debug!(
            "{} has {} item(s) over {} page(s)",
            route.name(),
            manager.total_elements(),
            manager.total_pages()
        );

        let mut pages = Vec::with_capacity(self.pages.len());
        for (i, &page) in self.pages.iter().enumerate() {
            let manager = slot.get()?;
            navigate_to(manager, page, query.as_deref()).await?;

            if self.json {
                pages.push(serde_json::json!({
                    "page": manager.snapshot(),
                    "contents": manager.contents(),
                }));
                continue;
            }

            if i > 0 {
                println!();
            }
            let snapshot = manager.snapshot();
            print!("{}", render_table(manager.contents()));
            println!();
            println!("{}", page_links(&snapshot));
            println!("{}", page_summary(&snapshot));
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&pages)?);
        }

        slot.remove();
        Ok(())
    }

    /// Query parameters as the `&`-prefixed suffix appended to page requests
    fn query_suffix(&self) -> Option<String> {
        let query = self.query.as_deref()?.trim().trim_start_matches('?');
        if query.is_empty() {
            None
        } else if query.starts_with('&') {
            Some(query.to_string())
        } else {
            Some(format!("&{}", query))
        }
    }
}

/// Walk chapters backward or forward until `page` is linked, then show it
pub(crate) async fn navigate_to<T, F>(
    manager: &mut PageManager<T, F>,
    page: u32,
    query: Option<&str>,
) -> Result<()>
where
    T: Send + 'static,
    F: PageFetcher<T>,
{
    if page == 0 {
        bail!("Pages start at 1");
    }

    let target_chapter = (page - 1) / CHAPTER_SIZE + 1;
    while manager.chapter_number() > target_chapter && manager.has_prev() {
        debug!(
            "Stepping back from chapter {} towards {}",
            manager.chapter_number(),
            target_chapter
        );
        manager.go_prev_chapter(query).await?;
    }
    while manager.chapter_number() < target_chapter && manager.has_next() {
        debug!(
            "Advancing from chapter {} towards {}",
            manager.chapter_number(),
            target_chapter
        );
        manager.go_next_chapter(query).await?;
    }

    if !manager.page_list().contains(&page) {
        bail!(
            "Page {} does not exist, the list has {} page(s)",
            page,
            manager.total_pages().max(1)
        );
    }

    if manager.move_page(page, query).await? == Navigation::Skipped {
        debug!("Already on page {}", manager.current_page());
    }
    Ok(())
}
