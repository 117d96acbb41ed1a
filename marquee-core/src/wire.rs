//! Backend wire types.
//!
//! The REST backend exposes events as `{id, event_name, genre_name,
//! event_datetime, description?}` with ISO 8601 timestamps. That shape is
//! owned by the backend and mapped here into [`ReleaseEvent`], so the rest
//! of the crate never sees backend field names.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MarqueeError, MarqueeResult};
use crate::event::ReleaseEvent;

/// An event as the backend returns it (list, get, create responses).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendEvent {
    pub id: i64,
    pub event_name: String,
    #[serde(default)]
    pub genre_name: Option<String>,
    /// ISO 8601 timestamp string.
    pub event_datetime: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl BackendEvent {
    /// Map the wire shape into the local event model.
    pub fn into_event(self) -> MarqueeResult<ReleaseEvent> {
        let datetime = parse_event_datetime(&self.event_datetime)?;

        Ok(ReleaseEvent {
            id: Some(self.id),
            title: self.event_name,
            datetime,
            description: self.description,
            genre: self.genre_name,
        })
    }
}

/// Body for `POST /events/`.
///
/// The create payload carries only name, timestamp and genre; the backend
/// does not accept a description on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub event_name: String,
    /// UTC instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub event_datetime: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_name: Option<String>,
}

impl CreateEventRequest {
    pub fn from_event(event: &ReleaseEvent) -> Self {
        CreateEventRequest {
            event_name: event.title.clone(),
            event_datetime: format_event_datetime(&event.datetime),
            genre_name: event.genre.clone(),
        }
    }
}

/// Parse a backend timestamp.
///
/// RFC 3339 first; falls back to a bare `YYYY-MM-DDTHH:MM:SS[.fff]`
/// interpreted as UTC, since some backends emit UTC datetimes without an
/// offset suffix.
pub fn parse_event_datetime(s: &str) -> MarqueeResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }

    Err(MarqueeError::InvalidTimestamp(s.to_string()))
}

/// Format a UTC instant the way the backend expects it on create.
pub fn format_event_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}
