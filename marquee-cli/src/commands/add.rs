use anyhow::Result;
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use dialoguer::Input;
use marquee_core::ReleaseEvent;
use owo_colors::OwoColorize;

use crate::source::EventSource;

pub async fn run(
    source: &EventSource,
    title: Option<String>,
    date: Option<String>,
    time: Option<String>,
    genre: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || date.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };
    let title = title.trim().to_string();
    if title.is_empty() {
        anyhow::bail!("A release needs a title");
    }

    // --- Date ---
    let date = if let Some(d) = date {
        parse_release_date(&d)?
    } else {
        prompt_with_retry(
            "  Date",
            Local::now().date_naive().format("%Y-%m-%d").to_string(),
            parse_release_date,
        )?
    };

    // --- Time ---
    let time = if let Some(t) = time {
        parse_release_time(&t)?
    } else if interactive {
        prompt_with_retry(
            "  Time",
            Local::now().format("%H:%M").to_string(),
            parse_release_time,
        )?
    } else {
        NaiveTime::MIN
    };

    // --- Genre ---
    let genre = if let Some(g) = genre {
        if g.is_empty() { None } else { Some(g) }
    } else if interactive {
        let g: String = Input::new()
            .with_prompt("  Genre (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if g.is_empty() { None } else { Some(g) }
    } else {
        None
    };

    let instant = resolve_instant(date, time, &Local)?;

    // Two releases never share an exact instant; check before submitting.
    let existing = super::with_spinner(source, "Checking the calendar", source.events()).await?;
    if let Some(clash) = scheduled_at(&existing, instant) {
        anyhow::bail!("\"{}\" is already scheduled at that exact time", clash.title);
    }

    let mut event = ReleaseEvent::new(title, instant);
    event.genre = genre;

    let stored = super::with_spinner(source, "Adding release", source.add(event)).await?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Added: {}", stored.title).green());

    let mut info = stored.long_format(&Local);
    if let Some(id) = stored.id {
        info.push_str(&format!("  #{}", id));
    }
    println!("  {}", info.dimmed());

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, default: String, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.clone())
            .interact_text()?;

        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn parse_release_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Could not parse date \"{}\" (expected YYYY-MM-DD)", s))
}

/// Accepts HH:MM, with seconds tolerated.
fn parse_release_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();

    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| anyhow::anyhow!("Could not parse time \"{}\" (expected HH:MM)", s))
}

/// The event already occupying `instant`, if any.
fn scheduled_at(events: &[ReleaseEvent], instant: DateTime<Utc>) -> Option<&ReleaseEvent> {
    events.iter().find(|e| e.datetime == instant)
}

/// Resolve a wall-clock date and time to a UTC instant.
///
/// A time that happens twice (daylight saving overlap) resolves to the
/// earlier instant; a time that never happens (the spring-forward gap)
/// is an error.
fn resolve_instant<Tz: TimeZone>(
    date: NaiveDate,
    time: NaiveTime,
    tz: &Tz,
) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            anyhow::bail!("{} {} does not exist locally (daylight saving gap)", date, time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    fn stockholm() -> Tz {
        "Europe/Stockholm".parse().unwrap()
    }

    // --- parse_release_date ---

    #[test]
    fn parse_date_valid() {
        assert_eq!(
            parse_release_date("2026-11-20").unwrap(),
            NaiveDate::from_ymd_opt(2026, 11, 20).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_other_shapes() {
        assert!(parse_release_date("20/11/2026").is_err());
        assert!(parse_release_date("tomorrow").is_err());
        assert!(parse_release_date("2026-02-30").is_err());
    }

    // --- parse_release_time ---

    #[test]
    fn parse_time_valid() {
        assert_eq!(
            parse_release_time("19:05").unwrap(),
            NaiveTime::from_hms_opt(19, 5, 0).unwrap()
        );
        assert_eq!(
            parse_release_time("19:05:30").unwrap(),
            NaiveTime::from_hms_opt(19, 5, 30).unwrap()
        );
    }

    #[test]
    fn parse_time_rejects_other_shapes() {
        assert!(parse_release_time("7pm").is_err());
        assert!(parse_release_time("25:00").is_err());
    }

    // --- resolve_instant ---

    #[test]
    fn plain_time_resolves_to_utc() {
        // Stockholm is UTC+1 in winter.
        let instant = resolve_instant(
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            &stockholm(),
        )
        .unwrap();

        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 1, 10, 19, 0, 0).unwrap());
    }

    #[test]
    fn ambiguous_time_takes_the_earlier_instant() {
        // Clocks fall back 03:00 CEST to 02:00 CET on Oct 25 2026, so
        // 02:30 happens twice; the earlier pass is still UTC+2.
        let instant = resolve_instant(
            NaiveDate::from_ymd_opt(2026, 10, 25).unwrap(),
            NaiveTime::from_hms_opt(2, 30, 0).unwrap(),
            &stockholm(),
        )
        .unwrap();

        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 10, 25, 0, 30, 0).unwrap());
    }

    #[test]
    fn gap_time_is_an_error() {
        // Clocks spring forward 02:00 to 03:00 on Mar 29 2026; 02:30
        // never happens.
        let result = resolve_instant(
            NaiveDate::from_ymd_opt(2026, 3, 29).unwrap(),
            NaiveTime::from_hms_opt(2, 30, 0).unwrap(),
            &stockholm(),
        );

        assert!(result.is_err());
    }

    // --- scheduled_at ---

    #[test]
    fn exact_instant_clashes_regardless_of_title() {
        let instant = Utc.with_ymd_and_hms(2026, 11, 20, 19, 0, 0).unwrap();
        let events = vec![ReleaseEvent::new("Taken", instant)];

        assert_eq!(scheduled_at(&events, instant).unwrap().title, "Taken");
    }

    #[test]
    fn a_different_instant_is_free() {
        let events = vec![ReleaseEvent::new(
            "Taken",
            Utc.with_ymd_and_hms(2026, 11, 20, 19, 0, 0).unwrap(),
        )];

        let minute_later = Utc.with_ymd_and_hms(2026, 11, 20, 19, 1, 0).unwrap();
        assert!(scheduled_at(&events, minute_later).is_none());
    }
}
