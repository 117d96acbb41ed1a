//! The release event type.
//!
//! `ReleaseEvent` is the shape the rest of the crate works with: the backend
//! wire format maps into it, the local store serializes it, and the grid
//! buckets it. The instant is kept in UTC; anything calendar-day-shaped
//! (bucketing, display) happens in a caller-supplied timezone.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled release event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseEvent {
    /// Identifier assigned on first save (by the backend or the local store).
    pub id: Option<i64>,
    pub title: String,
    /// The release instant, in UTC.
    pub datetime: DateTime<Utc>,
    pub description: Option<String>,
    /// Genre/category label, e.g. "horror".
    pub genre: Option<String>,
}

impl ReleaseEvent {
    pub fn new(title: impl Into<String>, datetime: DateTime<Utc>) -> Self {
        ReleaseEvent {
            id: None,
            title: title.into(),
            datetime,
            description: None,
            genre: None,
        }
    }

    /// The calendar day this event falls on in the given timezone.
    pub fn local_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.datetime.with_timezone(tz).date_naive()
    }

    /// Long details format, e.g. "March 20 2026, 7:30 pm".
    pub fn long_format<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.datetime
            .with_timezone(tz)
            .format("%B %d %Y, %-I:%M %P")
            .to_string()
    }
}

/// Keep only events whose genre matches (case-insensitive).
/// Events without a genre never match a filter.
pub fn filter_by_genre(events: Vec<ReleaseEvent>, genre: &str) -> Vec<ReleaseEvent> {
    events
        .into_iter()
        .filter(|e| {
            e.genre
                .as_deref()
                .is_some_and(|g| g.eq_ignore_ascii_case(genre))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    fn event_at(title: &str, datetime: DateTime<Utc>) -> ReleaseEvent {
        ReleaseEvent::new(title, datetime)
    }

    #[test]
    fn local_date_follows_timezone() {
        // 23:30 UTC on March 20 is already March 21 in Stockholm (UTC+1).
        let event = event_at("Late premiere", Utc.with_ymd_and_hms(2026, 3, 20, 23, 30, 0).unwrap());

        let stockholm: Tz = "Europe/Stockholm".parse().unwrap();
        assert_eq!(
            event.local_date(&stockholm),
            NaiveDate::from_ymd_opt(2026, 3, 21).unwrap()
        );
        assert_eq!(
            event.local_date(&chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()
        );
    }

    #[test]
    fn long_format_matches_details_style() {
        let event = event_at("Matinee", Utc.with_ymd_and_hms(2026, 3, 5, 19, 5, 0).unwrap());
        assert_eq!(event.long_format(&chrono_tz::UTC), "March 05 2026, 7:05 pm");

        let morning = event_at("Early", Utc.with_ymd_and_hms(2026, 11, 12, 9, 30, 0).unwrap());
        assert_eq!(morning.long_format(&chrono_tz::UTC), "November 12 2026, 9:30 am");
    }

    #[test]
    fn genre_filter_is_case_insensitive() {
        let mut horror = event_at("A", Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap());
        horror.genre = Some("Horror".to_string());
        let mut scifi = event_at("B", Utc.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).unwrap());
        scifi.genre = Some("sci-fi".to_string());
        let untagged = event_at("C", Utc.with_ymd_and_hms(2026, 1, 3, 12, 0, 0).unwrap());

        let filtered = filter_by_genre(vec![horror, scifi, untagged], "horror");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "A");
    }

    #[test]
    fn genre_filter_never_matches_untagged_events() {
        let untagged = event_at("C", Utc.with_ymd_and_hms(2026, 1, 3, 12, 0, 0).unwrap());
        assert!(filter_by_genre(vec![untagged], "").is_empty());
    }
}
