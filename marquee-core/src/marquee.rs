//! Marquee environment loading.

use std::path::PathBuf;

use chrono::Weekday;
use config::{Config, File};

use crate::config::MarqueeConfig;
use crate::error::{MarqueeError, MarqueeResult};

#[derive(Clone)]
pub struct Marquee {
    config: MarqueeConfig,
}

impl Marquee {
    pub fn load() -> MarqueeResult<Self> {
        let config_path = MarqueeConfig::config_path()?;

        if !config_path.exists() {
            MarqueeConfig::create_default_config(&config_path)?;
        }

        let config: MarqueeConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| MarqueeError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| MarqueeError::Config(e.to_string()))?;

        Ok(Marquee { config })
    }

    /// Base URL of the configured backend, if any.
    pub fn backend_url(&self) -> Option<&str> {
        self.config.backend_url.as_deref()
    }

    /// Events file path with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.events_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the events file path in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_events_path(&self) -> PathBuf {
        self.config.events_file.clone()
    }

    pub fn week_start(&self) -> MarqueeResult<Weekday> {
        self.config.week_start()
    }
}
