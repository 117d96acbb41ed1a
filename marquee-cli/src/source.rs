//! Where events come from.
//!
//! Every command reads and writes through one source: the local events
//! file, or a backend when one is configured. The two are never merged;
//! configuring a backend switches everything over to it.

use anyhow::Result;

use marquee_core::ReleaseEvent;
use marquee_core::marquee::Marquee;
use marquee_core::store::EventStore;
use marquee_core::wire::CreateEventRequest;

use crate::client::Client;

pub enum EventSource {
    Local(EventStore),
    Remote(Client),
}

impl EventSource {
    pub fn from_marquee(marquee: &Marquee) -> EventSource {
        match marquee.backend_url() {
            Some(url) => EventSource::Remote(Client::new(url)),
            None => EventSource::Local(EventStore::open(marquee.events_path())),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, EventSource::Remote(_))
    }

    /// Where events live, for headers and messages.
    pub fn describe(&self) -> String {
        match self {
            EventSource::Local(store) => store.path().display().to_string(),
            EventSource::Remote(client) => client.base_url().to_string(),
        }
    }

    pub async fn events(&self) -> Result<Vec<ReleaseEvent>> {
        match self {
            EventSource::Local(store) => Ok(store.load()?),
            EventSource::Remote(client) => client.list_events().await,
        }
    }

    pub async fn event(&self, id: i64) -> Result<ReleaseEvent> {
        match self {
            EventSource::Local(store) => Ok(store.get(id)?),
            EventSource::Remote(client) => client.get_event(id).await,
        }
    }

    /// Persist a new event, returning it with its assigned id.
    pub async fn add(&self, event: ReleaseEvent) -> Result<ReleaseEvent> {
        match self {
            EventSource::Local(store) => Ok(store.add(event)?),
            EventSource::Remote(client) => {
                client
                    .create_event(CreateEventRequest::from_event(&event))
                    .await
            }
        }
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        match self {
            EventSource::Local(store) => Ok(store.delete(id)?),
            EventSource::Remote(client) => client.delete_event(id).await,
        }
    }
}
