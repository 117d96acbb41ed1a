//! Calendar grid construction.
//!
//! Builds the day cells behind the month, week and day layouts. A month is
//! laid out as full weeks: from the week containing the 1st through the week
//! containing the last day of the month, so a grid is 4 to 6 rows and its
//! corners can belong to the adjacent months. Every cell holds the events
//! falling on that calendar day in the viewer's timezone, ordered by time.

use chrono::{Datelike, Duration, Months, NaiveDate, TimeZone, Weekday};

use crate::event::ReleaseEvent;

/// One cell of a calendar layout: a date and the events falling on it.
#[derive(Debug, Clone)]
pub struct DayCell {
    pub date: NaiveDate,
    pub events: Vec<ReleaseEvent>,
}

/// A month laid out as week rows of seven cells.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub first_of_month: NaiveDate,
    pub week_start: Weekday,
    pub weeks: Vec<[DayCell; 7]>,
}

impl MonthGrid {
    /// Build the grid for the month containing `reference`.
    pub fn build<Tz: TimeZone>(
        events: &[ReleaseEvent],
        reference: NaiveDate,
        week_start: Weekday,
        tz: &Tz,
    ) -> MonthGrid {
        let first = first_of_month(reference);
        let last = last_of_month(reference);

        let mut day = start_of_week(first, week_start);
        let mut weeks = Vec::new();

        while day <= last {
            let week = std::array::from_fn(|_| {
                let cell = day_cell(events, day, tz);
                day += Duration::days(1);
                cell
            });
            weeks.push(week);
        }

        MonthGrid {
            first_of_month: first,
            week_start,
            weeks,
        }
    }

    /// Whether `date` belongs to the displayed month, as opposed to being a
    /// leading or trailing cell from an adjacent month.
    pub fn in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.first_of_month.year() && date.month() == self.first_of_month.month()
    }
}

/// The 7 cells of the week containing `reference`.
pub fn week_cells<Tz: TimeZone>(
    events: &[ReleaseEvent],
    reference: NaiveDate,
    week_start: Weekday,
    tz: &Tz,
) -> [DayCell; 7] {
    let start = start_of_week(reference, week_start);
    std::array::from_fn(|i| day_cell(events, start + Duration::days(i as i64), tz))
}

/// A single day's cell.
pub fn day_cell<Tz: TimeZone>(events: &[ReleaseEvent], date: NaiveDate, tz: &Tz) -> DayCell {
    DayCell {
        date,
        events: events_on_day(events, date, tz),
    }
}

/// Events falling on `date` in `tz`, ordered by timestamp.
pub fn events_on_day<Tz: TimeZone>(
    events: &[ReleaseEvent],
    date: NaiveDate,
    tz: &Tz,
) -> Vec<ReleaseEvent> {
    let mut on_day: Vec<ReleaseEvent> = events
        .iter()
        .filter(|e| e.local_date(tz) == date)
        .cloned()
        .collect();

    on_day.sort_by_key(|e| e.datetime);
    on_day
}

/// Walk back to the most recent `week_start` (no-op if `date` is one).
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let days_back = (date.weekday().num_days_from_sunday() as i64
        - week_start.num_days_from_sunday() as i64
        + 7)
        % 7;

    date - Duration::days(days_back)
}

/// First day of `date`'s month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// Last day of `date`'s month (first of the next month, minus one day).
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1).unwrap() - Duration::days(1)
}

/// Shift by whole months, clamping to the end of shorter months
/// (Jan 31 + 1 month = Feb 28). `None` only outside chrono's date range.
pub fn shift_months(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    if offset >= 0 {
        date.checked_add_months(Months::new(offset as u32))
    } else {
        date.checked_sub_months(Months::new(offset.unsigned_abs()))
    }
}

pub fn shift_weeks(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::weeks(offset as i64))
}

pub fn shift_days(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(offset as i64))
}

/// Short weekday names for a header row, starting from `week_start`.
pub fn weekday_labels(week_start: Weekday) -> [&'static str; 7] {
    const NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let offset = week_start.num_days_from_sunday() as usize;

    std::array::from_fn(|i| NAMES[(offset + i) % 7])
}
