//! Gallery selection state.
//!
//! A single optional selected index; `None` means the modal is closed.
//! Opening and closing are immediate, there is no transition lock.

use log::trace;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    selected: Option<usize>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Select item `index` of a `len` item list. Out of range is ignored.
    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            trace!("Gallery open {}", index);
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Drop a selection that no longer points into the list (content reload).
    pub fn clamp(&mut self, len: usize) {
        if self.selected.is_some_and(|i| i >= len) {
            self.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut g = GalleryState::new();
        assert!(!g.is_open());
        g.open(2, 6);
        assert_eq!(g.selected(), Some(2));
        g.open(4, 6);
        assert_eq!(g.selected(), Some(4));
        g.close();
        assert_eq!(g.selected(), None);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut g = GalleryState::new();
        g.open(6, 6);
        assert!(!g.is_open());
        g.open(0, 0);
        assert!(!g.is_open());
    }

    #[test]
    fn test_clamp_after_reload() {
        let mut g = GalleryState::new();
        g.open(3, 6);
        g.clamp(5);
        assert!(g.is_open());
        g.clamp(3);
        assert!(!g.is_open());
    }
}
