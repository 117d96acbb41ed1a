//! Terminal rendering for marquee types.
//!
//! Turns the core calendar types into colored terminal output using
//! owo_colors. Month grids mark days that have releases; agenda lines are
//! shared by the day, week and list views.

use chrono::{Datelike, Local, NaiveDate};
use marquee_core::ReleaseEvent;
use marquee_core::grid::{self, DayCell, MonthGrid};
use owo_colors::OwoColorize;

/// Grid cells are four columns of day number plus one marker column.
const CELL_WIDTH: usize = 5;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ReleaseEvent {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(self.title.bold().to_string());
        lines.push(detail_line("When:", &self.long_format(&Local)));

        if let Some(genre) = &self.genre {
            lines.push(detail_line("Genre:", genre));
        }
        if let Some(id) = self.id {
            lines.push(detail_line("Id:", &id.to_string()));
        }
        if let Some(description) = &self.description {
            lines.push(String::new());
            lines.push(format!("  {}", description));
        }

        lines.join("\n")
    }
}

fn detail_line(label: &str, value: &str) -> String {
    format!("  {} {}", format!("{:<6}", label).dimmed(), value)
}

/// Month rendering needs to know the current day to highlight it.
pub trait MonthRender {
    fn render(&self, today: NaiveDate) -> String;
}

impl MonthRender for MonthGrid {
    fn render(&self, today: NaiveDate) -> String {
        let width = CELL_WIDTH * 7;
        let mut lines = Vec::new();

        let title = self.first_of_month.format("%B %Y").to_string();
        lines.push(format!("{:^width$}", title).bold().to_string());

        let header: String = grid::weekday_labels(self.week_start)
            .iter()
            .map(|label| format!("{:>4} ", label))
            .collect();
        lines.push(header.trim_end().dimmed().to_string());

        for week in &self.weeks {
            let mut row = String::new();

            for cell in week {
                // Pad before coloring; escape codes would break the width.
                let number = format!("{:>4}", cell.date.day());

                let number = if cell.date == today {
                    number.bold().to_string()
                } else if self.in_month(cell.date) {
                    number
                } else {
                    number.dimmed().to_string()
                };

                row.push_str(&number);
                if cell.events.is_empty() {
                    row.push(' ');
                } else {
                    row.push_str(&"*".green().to_string());
                }
            }

            lines.push(row.trim_end().to_string());
        }

        lines.join("\n")
    }
}

/// Agenda block for one day: bold label, then its releases.
pub fn day_agenda(cell: &DayCell) -> String {
    let mut lines = vec![date_label(cell.date).bold().to_string()];

    if cell.events.is_empty() {
        lines.push("  No releases".dimmed().to_string());
    } else {
        for event in &cell.events {
            lines.push(agenda_line(event));
        }
    }

    lines.join("\n")
}

/// Human date label: "Today", "Tomorrow", or "Wed Aug 5".
pub fn date_label(date: NaiveDate) -> String {
    let today = Local::now().date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// One agenda line: time, title, then dimmed genre and id tags.
pub fn agenda_line(event: &ReleaseEvent) -> String {
    let time = event.datetime.with_timezone(&Local).format("%H:%M").to_string();
    let mut line = format!("  {}  {}", time, event.title);

    if let Some(genre) = &event.genre {
        line.push_str(&format!(" {}", format!("[{}]", genre).dimmed()));
    }
    if let Some(id) = event.id {
        line.push_str(&format!(" {}", format!("#{}", id).dimmed()));
    }

    line
}
