use anyhow::Result;
use chrono::Local;
use marquee_core::grid;
use marquee_core::marquee::Marquee;
use owo_colors::OwoColorize;

use crate::render;
use crate::source::EventSource;

pub async fn run(
    marquee: &Marquee,
    source: &EventSource,
    date: Option<&str>,
    offset: i32,
) -> Result<()> {
    let reference = super::resolve_date(date)?;
    let reference =
        grid::shift_weeks(reference, offset).ok_or_else(|| anyhow::anyhow!("Date out of range"))?;

    let events = super::load_events_lossy(source).await;
    let cells = grid::week_cells(&events, reference, marquee.week_start()?, &Local);

    let heading = format!(
        "Week of {} to {}",
        cells[0].date.format("%b %-d"),
        cells[6].date.format("%b %-d")
    );
    println!("{}", heading.bold());
    println!();

    for cell in &cells {
        if cell.events.is_empty() {
            println!("{}", render::date_label(cell.date).dimmed());
        } else {
            println!("{}", render::date_label(cell.date).bold());
            for event in &cell.events {
                println!("{}", render::agenda_line(event));
            }
        }
    }

    Ok(())
}
