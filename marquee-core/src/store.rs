//! Local event storage.
//!
//! Without a backend configured, the event library lives in a single JSON
//! file: one array, read whole and written whole. Writes go through a temp
//! file and rename so a crash never leaves a half-written library behind.

use std::path::{Path, PathBuf};

use crate::error::{MarqueeError, MarqueeResult};
use crate::event::ReleaseEvent;

pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn open(path: impl Into<PathBuf>) -> EventStore {
        EventStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored event. A missing file is an empty library.
    pub fn load(&self) -> MarqueeResult<Vec<ReleaseEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| MarqueeError::Serialization(e.to_string()))
    }

    /// Write the full event list back to disk.
    pub fn save(&self, events: &[ReleaseEvent]) -> MarqueeResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| MarqueeError::Serialization(e.to_string()))?;

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    /// Store a new event, assigning it the next id above the largest on
    /// file (1 for an empty library). The file stays ordered by release
    /// time. Returns the event as stored.
    pub fn add(&self, mut event: ReleaseEvent) -> MarqueeResult<ReleaseEvent> {
        let mut events = self.load()?;

        let next_id = events.iter().filter_map(|e| e.id).max().unwrap_or(0) + 1;
        event.id = Some(next_id);

        events.push(event.clone());
        events.sort_by_key(|e| e.datetime);
        self.save(&events)?;

        Ok(event)
    }

    /// Look up a single event by id.
    pub fn get(&self, id: i64) -> MarqueeResult<ReleaseEvent> {
        self.load()?
            .into_iter()
            .find(|e| e.id == Some(id))
            .ok_or(MarqueeError::EventNotFound(id))
    }

    /// Remove an event by id.
    pub fn delete(&self, id: i64) -> MarqueeResult<()> {
        let mut events = self.load()?;

        let idx = events
            .iter()
            .position(|e| e.id == Some(id))
            .ok_or(MarqueeError::EventNotFound(id))?;

        events.remove(idx);
        self.save(&events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> EventStore {
        EventStore::open(dir.path().join("events.json"))
    }

    fn make_test_event(title: &str, day: u32, hour: u32) -> ReleaseEvent {
        ReleaseEvent::new(title, Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap())
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn add_assigns_incrementing_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let first = store.add(make_test_event("First", 20, 15)).unwrap();
        let second = store.add(make_test_event("Second", 21, 15)).unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[test]
    fn ids_continue_from_the_largest_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(make_test_event("First", 20, 15)).unwrap();
        store.add(make_test_event("Second", 21, 15)).unwrap();
        store.delete(2).unwrap();

        // The largest surviving id is 1, so the next event gets 2 again.
        let third = store.add(make_test_event("Third", 22, 15)).unwrap();
        assert_eq!(third.id, Some(2));
    }

    #[test]
    fn file_stays_ordered_by_release_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add(make_test_event("Later", 25, 20)).unwrap();
        store.add(make_test_event("Earlier", 10, 9)).unwrap();

        let events = store.load().unwrap();
        assert_eq!(events[0].title, "Earlier");
        assert_eq!(events[1].title, "Later");
    }

    #[test]
    fn get_finds_stored_events() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let stored = store.add(make_test_event("Premiere", 20, 15)).unwrap();
        let found = store.get(stored.id.unwrap()).unwrap();

        assert_eq!(found.title, "Premiere");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.get(42),
            Err(MarqueeError::EventNotFound(42))
        ));
    }

    #[test]
    fn delete_removes_only_the_target() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let first = store.add(make_test_event("Keep", 20, 15)).unwrap();
        let second = store.add(make_test_event("Drop", 21, 15)).unwrap();

        store.delete(second.id.unwrap()).unwrap();

        let events = store.load().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, first.id);

        assert!(matches!(
            store.delete(second.id.unwrap()),
            Err(MarqueeError::EventNotFound(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(MarqueeError::Serialization(_))
        ));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path().join("nested/dir/events.json"));

        store.add(make_test_event("Premiere", 20, 15)).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
