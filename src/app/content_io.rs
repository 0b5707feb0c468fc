//! Portfolio content I/O for FolioApp.
//!
//! - Loading a JSON file (load_content), falling back to what is shown
//! - Save As (save_content)
//! - Reload (reload_content)
//! - File dialogs (show_open_dialog, show_save_dialog)

use super::FolioApp;
use crate::entities::Portfolio;

use log::{error, info, warn};
use std::path::PathBuf;
use std::time::Instant;

impl FolioApp {
    /// Load a portfolio file and show it.
    ///
    /// On failure the current content stays and the error goes to the
    /// status bar.
    pub fn load_content(&mut self, path: PathBuf, now: Instant) -> bool {
        match Portfolio::from_json(&path) {
            Ok(portfolio) => {
                let problems = portfolio.validate();
                if !problems.is_empty() {
                    warn!("{} has {} content problem(s)", path.display(), problems.len());
                }
                self.content_path = Some(path.clone());
                self.set_portfolio(portfolio, now);
                self.status_bar.set_message(format!("Loaded {}", path.display()), now);
                true
            }
            Err(e) => {
                error!("Failed to load {}: {:#}", path.display(), e);
                self.status_bar.set_error(format!("Load failed: {:#}", e), now);
                false
            }
        }
    }

    /// Write the shown portfolio. `.json` is appended when missing.
    pub fn save_content(&mut self, path: PathBuf, now: Instant) -> bool {
        match self.portfolio.to_json(&path) {
            Ok(written) => {
                info!("Portfolio saved to {}", written.display());
                self.status_bar.set_message(format!("Saved {}", written.display()), now);
                true
            }
            Err(e) => {
                error!("Failed to save {}: {:#}", path.display(), e);
                self.status_bar.set_error(format!("Save failed: {:#}", e), now);
                false
            }
        }
    }

    /// Re-read the current file, or restore the bundled sample.
    pub fn reload_content(&mut self, now: Instant) {
        match self.content_path.clone() {
            Some(path) => {
                self.load_content(path, now);
            }
            None => match Portfolio::bundled() {
                Ok(portfolio) => {
                    self.set_portfolio(portfolio, now);
                    self.status_bar.set_message("Reloaded sample content", now);
                }
                Err(e) => self.status_bar.set_error(format!("{:#}", e), now),
            },
        }
    }

    /// Swap content: carousels restart at 0, images and gallery reset.
    fn set_portfolio(&mut self, portfolio: Portfolio, now: Instant) {
        self.portfolio = portfolio;
        self.images.clear();
        self.gallery.clamp(self.portfolio.certifications.len());

        let lens = [
            (&mut self.carousels.about, self.portfolio.about.len()),
            (&mut self.carousels.certifications, self.portfolio.certifications.len()),
            (&mut self.carousels.projects, self.portfolio.projects.len()),
        ];
        for (slideshow, len) in lens {
            let was_mounted = slideshow.is_mounted();
            slideshow.remount(len, now);
            // Certifications in gallery view stay unmounted
            if !was_mounted {
                slideshow.unmount();
            }
        }
    }

    /// Native open dialog; None when cancelled.
    pub fn show_open_dialog(&self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().add_filter("Portfolio", &["json"]).add_filter("All Files", &["*"]);
        if let Some(dir) = self.content_path.as_ref().and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file()
    }

    pub fn show_save_dialog(&self) -> Option<PathBuf> {
        let name = self
            .content_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "portfolio.json".to_string());
        rfd::FileDialog::new()
            .add_filter("Portfolio", &["json"])
            .set_file_name(name)
            .save_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CarouselId;
    use crate::dialogs::prefs::CertView;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("folio_io_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_resets_carousels() {
        let now = Instant::now();
        let mut app = FolioApp::default();
        app.start(None, now);
        app.carousels.projects.go_to(2, now);

        let mut trimmed = app.portfolio.clone();
        trimmed.projects.truncate(1);
        let path = temp_path("trimmed.json");
        trimmed.to_json(&path).unwrap();

        assert!(app.load_content(path.clone(), now));
        assert_eq!(app.carousels.get(CarouselId::Projects).len(), 1);
        assert_eq!(app.carousels.projects.position(), 0);
        assert!(app.carousels.projects.is_mounted());
        assert_eq!(app.content_path, Some(path.clone()));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_bad_file_keeps_current_content() {
        let now = Instant::now();
        let mut app = FolioApp::default();
        app.start(None, now);
        let before = app.portfolio.projects.len();

        let path = temp_path("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(!app.load_content(path.clone(), now));
        assert_eq!(app.portfolio.projects.len(), before);
        assert!(app.content_path.is_none());
        assert!(app.status_bar.message().starts_with("Load failed"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_gallery_view_survives_reload() {
        let now = Instant::now();
        let mut app = FolioApp::default();
        app.settings.cert_view = CertView::Gallery;
        app.start(None, now);
        app.reload_content(now);
        assert!(!app.carousels.certifications.is_mounted());
        assert!(app.carousels.about.is_mounted());
    }
}
