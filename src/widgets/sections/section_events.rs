//! Page-level UI events.

use super::nav::Section;

#[derive(Clone, Debug)]
pub struct ScrollToSectionEvent(pub Section);
