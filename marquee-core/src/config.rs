//! Global marquee configuration.

use std::path::PathBuf;

use chrono::Weekday;
use serde::Deserialize;

use crate::error::{MarqueeError, MarqueeResult};

static DEFAULT_EVENTS_FILE: &str = "~/.local/share/marquee/events.json";
static DEFAULT_WEEK_START: &str = "sunday";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn default_week_start() -> String {
    DEFAULT_WEEK_START.to_string()
}

/// Global configuration at ~/.config/marquee/config.toml
#[derive(Deserialize, Clone)]
pub struct MarqueeConfig {
    /// Base URL of a release-calendar backend. When unset, events are
    /// kept in the local events file instead.
    pub backend_url: Option<String>,

    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    /// First day of the calendar week, as a weekday name.
    #[serde(default = "default_week_start")]
    pub week_start: String,
}

impl MarqueeConfig {
    pub fn config_path() -> MarqueeResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MarqueeError::Config("Could not determine config directory".into()))?
            .join("marquee");

        Ok(config_dir.join("config.toml"))
    }

    pub fn week_start(&self) -> MarqueeResult<Weekday> {
        self.week_start.parse().map_err(|_| {
            MarqueeError::Config(format!(
                "Invalid week_start '{}' (expected a weekday name like \"sunday\")",
                self.week_start
            ))
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> MarqueeResult<()> {
        let contents = format!(
            "\
# marquee configuration

# Release-calendar backend to sync with:
# backend_url = \"http://localhost:8000\"

# Where events are kept when no backend is configured:
# events_file = \"{}\"

# First day of the calendar week (\"sunday\" or \"monday\"):
# week_start = \"{}\"
",
            DEFAULT_EVENTS_FILE, DEFAULT_WEEK_START
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MarqueeError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| MarqueeError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
