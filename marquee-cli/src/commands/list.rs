use anyhow::Result;
use chrono::{Local, Utc};
use marquee_core::event::filter_by_genre;
use owo_colors::OwoColorize;

use crate::source::EventSource;

pub async fn run(source: &EventSource, genre: Option<&str>, upcoming: bool) -> Result<()> {
    let mut events = super::load_events_lossy(source).await;

    if let Some(genre) = genre {
        events = filter_by_genre(events, genre);
    }

    if upcoming {
        let now = Utc::now();
        events.retain(|e| e.datetime >= now);
    }

    events.sort_by_key(|e| e.datetime);

    if events.is_empty() {
        println!("{}", "No releases found".dimmed());
        return Ok(());
    }

    let title_width = events
        .iter()
        .map(|e| e.title.len())
        .max()
        .unwrap_or(0)
        .max("TITLE".len());

    let header = format!("{:>4}  {:<16}  {:<title_width$}  GENRE", "ID", "WHEN", "TITLE");
    println!("{}", header.dimmed());

    for event in &events {
        let id = event
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let when = event
            .datetime
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        let genre = event.genre.as_deref().unwrap_or("");

        println!("{:>4}  {:<16}  {:<title_width$}  {}", id, when, event.title, genre);
    }

    Ok(())
}
