//! Dialog windows

pub mod contact;
pub mod prefs;
