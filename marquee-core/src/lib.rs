//! Core types for the marquee release calendar.
//!
//! This crate provides the pieces shared by the marquee CLI:
//! - `ReleaseEvent` and the calendar grid math behind the views
//! - `wire` types for talking to a release-calendar backend
//! - local JSON storage and global configuration

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod marquee;
pub mod store;
pub mod wire;

// Re-export the event types at crate root for convenience
pub use event::*;
