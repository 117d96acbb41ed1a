use anyhow::Result;
use chrono::Local;
use marquee_core::grid::{self, MonthGrid};
use marquee_core::marquee::Marquee;

use crate::render::{self, MonthRender};
use crate::source::EventSource;

pub async fn run(
    marquee: &Marquee,
    source: &EventSource,
    date: Option<&str>,
    offset: i32,
) -> Result<()> {
    let reference = super::resolve_date(date)?;
    let reference =
        grid::shift_months(reference, offset).ok_or_else(|| anyhow::anyhow!("Date out of range"))?;

    let events = super::load_events_lossy(source).await;
    let grid = MonthGrid::build(&events, reference, marquee.week_start()?, &Local);

    println!("{}", grid.render(Local::now().date_naive()));

    // The reference day's releases under the grid.
    println!();
    println!("{}", render::day_agenda(&grid::day_cell(&events, reference, &Local)));

    Ok(())
}
