//! HTTP client for a release-calendar backend.

use anyhow::{Context, Result};
use serde::Deserialize;

use marquee_core::ReleaseEvent;
use marquee_core::wire::{BackendEvent, CreateEventRequest};

/// HTTP client for the events API.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    detail: String,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /events
    pub async fn list_events(&self) -> Result<Vec<ReleaseEvent>> {
        let resp = self
            .http
            .get(format!("{}/events", self.base_url))
            .send()
            .await
            .context("Failed to connect to backend")?;

        if !resp.status().is_success() {
            anyhow::bail!(error_detail(resp).await);
        }

        let events: Vec<BackendEvent> = resp.json().await?;
        let events = events
            .into_iter()
            .map(BackendEvent::into_event)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(events)
    }

    /// GET /events/:id
    pub async fn get_event(&self, id: i64) -> Result<ReleaseEvent> {
        let resp = self
            .http
            .get(format!("{}/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to connect to backend")?;

        if !resp.status().is_success() {
            anyhow::bail!(error_detail(resp).await);
        }

        let event: BackendEvent = resp.json().await?;
        Ok(event.into_event()?)
    }

    /// POST /events/
    ///
    /// The collection URL keeps its trailing slash; the backend routes
    /// creation there.
    pub async fn create_event(&self, req: CreateEventRequest) -> Result<ReleaseEvent> {
        let resp = self
            .http
            .post(format!("{}/events/", self.base_url))
            .json(&req)
            .send()
            .await
            .context("Failed to connect to backend")?;

        if !resp.status().is_success() {
            anyhow::bail!(error_detail(resp).await);
        }

        let event: BackendEvent = resp.json().await?;
        Ok(event.into_event()?)
    }

    /// DELETE /events/:id
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to connect to backend")?;

        if !resp.status().is_success() {
            anyhow::bail!(error_detail(resp).await);
        }

        Ok(())
    }
}

/// Pull the error detail out of a failed response, falling back to the
/// HTTP status when the body isn't the backend's error shape.
async fn error_detail(resp: reqwest::Response) -> String {
    let status = resp.status();

    match resp.json::<ErrorResponse>().await {
        Ok(err) => err.detail,
        Err(_) => format!("Backend returned {}", status),
    }
}
