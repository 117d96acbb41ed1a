pub mod add;
pub mod config;
pub mod day;
pub mod delete;
pub mod list;
pub mod month;
pub mod show;
pub mod week;

use std::future::Future;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use marquee_core::ReleaseEvent;
use owo_colors::OwoColorize;

use crate::source::EventSource;
use crate::utils::tui;

/// Resolve a view's reference date: `--date` if given, today otherwise.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => parse_view_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse `YYYY-MM-DD`, or `YYYY-MM` as the first of that month.
fn parse_view_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"))
        .map_err(|_| {
            anyhow::anyhow!("Could not parse date \"{}\" (expected YYYY-MM-DD or YYYY-MM)", s)
        })
}

/// Run a source call behind a spinner when it goes over the network.
pub async fn with_spinner<T>(
    source: &EventSource,
    message: &str,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    if source.is_remote() {
        let spinner = tui::create_spinner(message);
        let result = fut.await;
        spinner.finish_and_clear();
        result
    } else {
        fut.await
    }
}

/// Fetch all events for a read-only view.
///
/// A failure is reported on stderr and the view renders empty instead
/// of aborting.
pub async fn load_events_lossy(source: &EventSource) -> Vec<ReleaseEvent> {
    match with_spinner(source, "Fetching releases", source.events()).await {
        Ok(events) => events,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Could not load releases from {}: {}", source.describe(), e).red()
            );
            Vec::new()
        }
    }
}
