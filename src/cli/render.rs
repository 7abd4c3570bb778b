//! Terminal rendering for list pages

use crate::models::{ReservationAmountSummary, ReservationSummary, ReviewSummary};
use crate::pager::PageSnapshot;
use crate::utils::{
    period_at_date,
    text::{format_table, truncate},
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const MEMO_WIDTH: usize = 24;
const CONTENT_WIDTH: usize = 40;

/// A list item that renders as one table row
pub trait ListRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl ListRow for ReservationSummary {
    const HEADERS: &'static [&'static str] = &[
        "Reservation",
        "User",
        "Created",
        "Target",
        "Lead days",
        "Status",
        "Balance",
        "Memo",
    ];

    fn cells(&self) -> Vec<String> {
        let memo = self
            .reservation_admin_memo
            .as_deref()
            .or(self.payment_admin_memo.as_deref())
            .or(self.service_admin_memo.as_deref())
            .unwrap_or("");

        vec![
            self.reservation_id.clone(),
            self.username.clone(),
            self.created.format(DATE_FORMAT).to_string(),
            self.target_date.format(DATE_FORMAT).to_string(),
            period_at_date(self.created, self.target_date).to_string(),
            self.state()
                .map(|state| state.to_string())
                .unwrap_or_else(|| self.status.clone()),
            self.balance_amount.clone(),
            truncate(memo, MEMO_WIDTH),
        ]
    }
}

impl ListRow for ReservationAmountSummary {
    const HEADERS: &'static [&'static str] = &[
        "Reservation",
        "User",
        "Service",
        "Target",
        "Balance",
        "Paid",
        "Cancelled",
        "Paid on",
    ];

    fn cells(&self) -> Vec<String> {
        let service = match &self.service_name {
            Some(name) => format!("{} ({})", name, self.service_id),
            None => self.service_id.to_string(),
        };

        vec![
            self.reservation_id.clone(),
            self.username.clone(),
            service,
            self.target_date.format(DATE_FORMAT).to_string(),
            self.balance_amount.clone(),
            self.paid_amount.clone(),
            self.cancelled_amount.clone(),
            self.payment_created.format(DATE_FORMAT).to_string(),
        ]
    }
}

impl ListRow for ReviewSummary {
    const HEADERS: &'static [&'static str] = &["ID", "User", "Rating", "Created", "Content"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.rating.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
            self.created.format(DATE_FORMAT).to_string(),
            truncate(&self.content.replace('\n', " "), CONTENT_WIDTH),
        ]
    }
}

pub fn render_table<T: ListRow>(items: &[T]) -> String {
    let rows: Vec<Vec<String>> = items.iter().map(T::cells).collect();
    format_table(T::HEADERS, &rows)
}

/// Chapter links such as `< 11 12 [13] 14 15 >`
pub fn page_links(snapshot: &PageSnapshot) -> String {
    let mut parts = Vec::with_capacity(snapshot.view_list.len() + 2);
    if snapshot.has_prev {
        parts.push("<".to_string());
    }
    for &page in &snapshot.view_list {
        if page == snapshot.current_page {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if snapshot.has_next {
        parts.push(">".to_string());
    }
    parts.join(" ")
}

pub fn page_summary(snapshot: &PageSnapshot) -> String {
    format!(
        "Page {} of {} ({} items)",
        snapshot.current_page,
        snapshot.total_page.max(1),
        snapshot.total_element
    )
}
