use anyhow::Result;
use chrono::Local;
use marquee_core::grid;

use crate::render;
use crate::source::EventSource;

pub async fn run(source: &EventSource, date: Option<&str>, offset: i32) -> Result<()> {
    let reference = super::resolve_date(date)?;
    let reference =
        grid::shift_days(reference, offset).ok_or_else(|| anyhow::anyhow!("Date out of range"))?;

    let events = super::load_events_lossy(source).await;
    let cell = grid::day_cell(&events, reference, &Local);

    println!("{}", render::day_agenda(&cell));

    Ok(())
}
