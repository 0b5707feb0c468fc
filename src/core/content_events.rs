//! Content file events.

use std::path::PathBuf;

/// Replace the shown portfolio with a JSON file
#[derive(Clone, Debug)]
pub struct LoadContentEvent(pub PathBuf);

/// Write the shown portfolio as JSON
#[derive(Clone, Debug)]
pub struct SaveContentEvent(pub PathBuf);

/// Re-read the current content file (or the bundled sample)
#[derive(Clone, Debug)]
pub struct ReloadContentEvent;
