//! Preferences window and persisted settings

pub mod prefs;
pub mod prefs_events;

pub use prefs::{AppSettings, CertView, render_settings_window};
