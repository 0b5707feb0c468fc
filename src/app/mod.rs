//! Application module - FolioApp and related functionality.
//!
//! Submodules:
//! - `events` - Event bus dispatch and keyboard input
//! - `content_io` - Loading and saving portfolio content
//! - `run` - eframe::App impl (frame loop, page layout)

mod content_io;
mod events;
mod run;

use crate::core::event_bus::{EventBus, SlideshowEmitter};
use crate::core::{CarouselId, Slideshow, Workers};
use crate::dialogs::contact::ContactDialog;
use crate::dialogs::prefs::{AppSettings, CertView};
use crate::entities::Portfolio;
use crate::widgets::gallery::GalleryState;
use crate::widgets::sections::{Section, SectionTracker};
use crate::widgets::status::{CarouselStatus, StatusBar};
use crate::widgets::thumbs::ImageCache;

use log::{error, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Threads for image decoding and form submission
const WORKER_THREADS: usize = 2;

/// The three slideshows on the page
pub struct Carousels {
    pub about: Slideshow,
    pub certifications: Slideshow,
    pub projects: Slideshow,
}

impl Carousels {
    fn new(portfolio: &Portfolio, settings: &AppSettings, bus: &EventBus) -> Self {
        let build = |id: CarouselId, len: usize| {
            Slideshow::new(id, len, settings.slideshow_config(id))
                .with_emitter(SlideshowEmitter::attached(bus.emitter()))
        };
        Self {
            about: build(CarouselId::About, portfolio.about.len()),
            certifications: build(CarouselId::Certifications, portfolio.certifications.len()),
            projects: build(CarouselId::Projects, portfolio.projects.len()),
        }
    }

    pub fn get(&self, id: CarouselId) -> &Slideshow {
        match id {
            CarouselId::About => &self.about,
            CarouselId::Certifications => &self.certifications,
            CarouselId::Projects => &self.projects,
        }
    }

    pub fn get_mut(&mut self, id: CarouselId) -> &mut Slideshow {
        match id {
            CarouselId::About => &mut self.about,
            CarouselId::Certifications => &mut self.certifications,
            CarouselId::Projects => &mut self.projects,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slideshow> {
        [&self.about, &self.certifications, &self.projects].into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Slideshow> {
        [&mut self.about, &mut self.certifications, &mut self.projects].into_iter()
    }

    /// Earliest wakeup of any mounted slideshow
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.iter().filter_map(|s| s.next_wakeup(now)).min()
    }
}

/// Main application state.
///
/// Only `settings` and `content_path` persist; the rest is rebuilt on start.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FolioApp {
    pub settings: AppSettings,
    /// Last opened content file; None shows the bundled sample
    pub content_path: Option<PathBuf>,

    #[serde(skip)]
    pub portfolio: Portfolio,
    #[serde(skip)]
    pub carousels: Carousels,
    #[serde(skip)]
    pub gallery: GalleryState,
    #[serde(skip)]
    pub contact: ContactDialog,
    #[serde(skip)]
    pub images: ImageCache,
    #[serde(skip)]
    pub sections: SectionTracker,
    /// Scroll request applied once the target's position is known
    #[serde(skip)]
    pub scroll_target: Option<Section>,
    /// Carousel that receives arrow and digit keys
    #[serde(skip)]
    pub focused: Option<CarouselId>,
    #[serde(skip)]
    pub status_bar: StatusBar,
    #[serde(skip)]
    pub event_bus: EventBus,
    #[serde(skip)]
    pub workers: Arc<Workers>,
    #[serde(skip)]
    pub show_settings: bool,
    #[serde(skip)]
    pub is_fullscreen: bool,
    #[serde(skip)]
    pub fullscreen_dirty: bool,
    #[serde(skip)]
    pub reset_settings_pending: bool,
    #[serde(skip)]
    applied_font_size: Option<f32>,
}

impl Default for FolioApp {
    fn default() -> Self {
        let settings = AppSettings::default();
        let portfolio = Portfolio::bundled().unwrap_or_else(|e| {
            error!("Bundled portfolio is unreadable: {:#}", e);
            Portfolio::default()
        });
        let event_bus = EventBus::new();
        let workers = Arc::new(Workers::new(WORKER_THREADS));
        let carousels = Carousels::new(&portfolio, &settings, &event_bus);

        Self {
            settings,
            content_path: None,
            portfolio,
            carousels,
            gallery: GalleryState::new(),
            contact: ContactDialog::new(),
            images: ImageCache::new(Arc::clone(&workers)),
            sections: SectionTracker::new(),
            scroll_target: None,
            focused: None,
            status_bar: StatusBar::new(),
            event_bus,
            workers,
            show_settings: false,
            is_fullscreen: false,
            fullscreen_dirty: false,
            reset_settings_pending: false,
            applied_font_size: None,
        }
    }
}

impl FolioApp {
    /// Rebuild runtime state after deserializing from storage, then mount.
    ///
    /// `content` (from the command line) wins over the remembered file.
    pub fn start(&mut self, content: Option<PathBuf>, now: Instant) {
        self.carousels = Carousels::new(&self.portfolio, &self.settings, &self.event_bus);
        if let Some(path) = content.or_else(|| self.content_path.clone()) {
            self.load_content(path, now);
        }
        self.mount_all(now);
    }

    /// Mount slideshows; certifications only when shown as a carousel.
    pub fn mount_all(&mut self, now: Instant) {
        self.carousels.about.mount(now);
        self.carousels.projects.mount(now);
        if self.settings.cert_view == CertView::Carousel {
            self.carousels.certifications.mount(now);
        }
    }

    pub fn unmount_all(&mut self) {
        for slideshow in self.carousels.iter_mut() {
            slideshow.unmount();
        }
    }

    /// Push current settings into every slideshow (no-op when unchanged).
    pub fn sync_settings(&mut self, now: Instant) {
        for id in CarouselId::ALL {
            let config = self.settings.slideshow_config(id);
            self.carousels.get_mut(id).apply_config(config, now);
        }
    }

    /// Carousel for keyboard navigation: the hovered one, else the one in view.
    pub fn keyboard_target(&self) -> Option<CarouselId> {
        if let Some(id) = self.focused
            && self.carousels.get(id).is_mounted()
        {
            return Some(id);
        }
        let id = match self.sections.active() {
            Section::About => CarouselId::About,
            Section::Certifications => CarouselId::Certifications,
            Section::Projects => CarouselId::Projects,
            _ => return None,
        };
        self.carousels.get(id).is_mounted().then_some(id)
    }

    /// Status bar summary of mounted carousels
    pub fn carousel_status(&self) -> Vec<CarouselStatus> {
        self.carousels
            .iter()
            .filter(|s| s.is_mounted())
            .map(|s| CarouselStatus {
                id: s.id(),
                position: s.position(),
                len: s.len(),
                autoplay: s.auto_advance().is_some(),
            })
            .collect()
    }

    /// Label for the loaded content in the status bar
    pub fn content_label(&self) -> String {
        match &self.content_path {
            Some(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => "sample".to_string(),
        }
    }
}

/// JSON for eframe storage. A failure is logged and the previous save kept.
fn storage_json<T: serde::Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("Failed to serialize settings: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_start_mounts_visible_carousels() {
        let now = Instant::now();
        let mut app = FolioApp::default();
        app.start(None, now);
        assert!(app.carousels.about.is_mounted());
        assert!(app.carousels.projects.is_mounted());
        assert!(app.carousels.certifications.is_mounted());
        assert_eq!(app.carousels.projects.len(), app.portfolio.projects.len());

        app.unmount_all();
        assert!(app.carousels.iter().all(|s| !s.is_mounted()));
    }

    #[test]
    fn test_gallery_view_keeps_certifications_unmounted() {
        let now = Instant::now();
        let mut app = FolioApp::default();
        app.settings.cert_view = CertView::Gallery;
        app.start(None, now);
        assert!(!app.carousels.certifications.is_mounted());
        assert_eq!(app.carousel_status().len(), 2);
    }

    #[test]
    fn test_keyboard_target_prefers_hovered() {
        let now = Instant::now();
        let mut app = FolioApp::default();
        app.start(None, now);
        assert_eq!(app.keyboard_target(), None);
        app.focused = Some(CarouselId::Projects);
        assert_eq!(app.keyboard_target(), Some(CarouselId::Projects));
    }

    #[test]
    fn test_settings_roundtrip_through_storage_json() {
        let mut app = FolioApp::default();
        app.settings.projects_interval_ms = 7000;
        app.content_path = Some(PathBuf::from("/tmp/me.json"));
        let json = serde_json::to_string(&app).unwrap();
        let restored: FolioApp = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.settings.projects_interval_ms, 7000);
        assert_eq!(restored.content_path, Some(PathBuf::from("/tmp/me.json")));
        assert_eq!(app.content_label(), "me.json");
    }

    #[test]
    fn test_storage_json_reports_failure() {
        let app = FolioApp::default();
        let json = storage_json(&app).unwrap();
        assert!(json.contains("settings"));

        // Non-string map keys are rejected by serde_json
        let mut bad: HashMap<(u8, u8), u8> = HashMap::new();
        bad.insert((1, 2), 3);
        assert_eq!(storage_json(&bad), None);
    }
}
