//! Event handling for FolioApp.
//!
//! - Event bus dispatch (handle_events)
//! - Keyboard input (handle_keyboard_input)

use super::FolioApp;
use crate::core::carousel_events::*;
use crate::core::content_events::{LoadContentEvent, ReloadContentEvent, SaveContentEvent};
use crate::core::event_bus::downcast_event;
use crate::dialogs::contact::contact_events::{FormSubmittedEvent, OpenFormEvent};
use crate::dialogs::prefs::CertView;
use crate::dialogs::prefs::prefs_events::*;
use crate::widgets::sections::section_events::ScrollToSectionEvent;

use eframe::egui;
use log::{debug, info, trace};
use std::path::PathBuf;
use std::time::Instant;

impl FolioApp {
    /// Handle events from the event bus. Returns true if anything was handled.
    pub fn handle_events(&mut self, now: Instant) -> bool {
        // File operations run after the loop: they remount carousels
        let mut deferred_load: Option<PathBuf> = None;
        let mut deferred_save: Option<PathBuf> = None;
        let mut deferred_reload = false;

        let events = self.event_bus.poll();
        let handled = !events.is_empty();
        for event in events {
            // === Carousel navigation ===
            if let Some(e) = downcast_event::<NextSlideEvent>(&event) {
                if !self.carousels.get_mut(e.0).next(now) {
                    trace!("{} next ignored", e.0.as_str());
                }
                continue;
            }
            if let Some(e) = downcast_event::<PrevSlideEvent>(&event) {
                if !self.carousels.get_mut(e.0).prev(now) {
                    trace!("{} prev ignored", e.0.as_str());
                }
                continue;
            }
            if let Some(e) = downcast_event::<GoToSlideEvent>(&event) {
                if !self.carousels.get_mut(e.carousel).go_to(e.index, now) {
                    trace!("{} go to {} ignored", e.carousel.as_str(), e.index);
                }
                continue;
            }

            // === Gestures ===
            if let Some(e) = downcast_event::<SwipeStartEvent>(&event) {
                self.carousels.get_mut(e.carousel).touch_start(e.x);
                self.focused = Some(e.carousel);
                continue;
            }
            if let Some(e) = downcast_event::<SwipeMoveEvent>(&event) {
                self.carousels.get_mut(e.carousel).touch_move(e.x);
                continue;
            }
            if let Some(e) = downcast_event::<SwipeEndEvent>(&event) {
                self.carousels.get_mut(e.0).touch_end(now);
                continue;
            }
            if let Some(e) = downcast_event::<CarouselHoverEvent>(&event) {
                self.carousels.get_mut(e.carousel).set_hovered(e.hovered, now);
                if e.hovered {
                    self.focused = Some(e.carousel);
                } else if self.focused == Some(e.carousel) {
                    self.focused = None;
                }
                continue;
            }
            if let Some(e) = downcast_event::<SlideChangedEvent>(&event) {
                trace!("{} slide {} -> {} ({:?})", e.carousel.as_str(), e.from, e.to, e.direction);
                continue;
            }

            // === Page ===
            if let Some(e) = downcast_event::<ScrollToSectionEvent>(&event) {
                debug!("Scroll to {:?}", e.0);
                self.scroll_target = Some(e.0);
                continue;
            }
            if let Some(e) = downcast_event::<OpenFormEvent>(&event) {
                self.contact.open(e.0);
                continue;
            }
            if let Some(e) = downcast_event::<FormSubmittedEvent>(&event) {
                match &e.error {
                    None => self.status_bar.set_message(format!("{} sent", e.kind.title()), now),
                    Some(err) => self.status_bar.set_error(format!("Message not sent: {}", err), now),
                }
                continue;
            }

            // === Settings ===
            if let Some(e) = downcast_event::<SetCertViewEvent>(&event) {
                self.set_cert_view(e.0, now);
                continue;
            }
            if let Some(e) = downcast_event::<SetAutoplayEvent>(&event) {
                self.settings.autoplay = e.0;
                self.status_bar
                    .set_message(if e.0 { "Auto-advance on" } else { "Auto-advance off" }, now);
                continue;
            }
            if downcast_event::<ResetSettingsEvent>(&event).is_some() {
                self.reset_settings_pending = true;
                continue;
            }
            if downcast_event::<ToggleHelpEvent>(&event).is_some() {
                self.settings.show_help = !self.settings.show_help;
                continue;
            }
            if downcast_event::<ToggleSettingsEvent>(&event).is_some() {
                self.show_settings = !self.show_settings;
                continue;
            }
            if downcast_event::<ToggleFullscreenEvent>(&event).is_some() {
                self.is_fullscreen = !self.is_fullscreen;
                self.fullscreen_dirty = true;
                continue;
            }
            if downcast_event::<ToggleDarkModeEvent>(&event).is_some() {
                self.settings.dark_mode = !self.settings.dark_mode;
                continue;
            }

            // === Content ===
            if let Some(e) = downcast_event::<LoadContentEvent>(&event) {
                deferred_load = Some(e.0.clone());
                continue;
            }
            if let Some(e) = downcast_event::<SaveContentEvent>(&event) {
                deferred_save = Some(e.0.clone());
                continue;
            }
            if downcast_event::<ReloadContentEvent>(&event).is_some() {
                deferred_reload = true;
                continue;
            }
        }

        if let Some(path) = deferred_save {
            self.save_content(path, now);
        }
        if let Some(path) = deferred_load {
            self.load_content(path, now);
        } else if deferred_reload {
            self.reload_content(now);
        }
        handled
    }

    /// Switch certifications layout. The slideshow only runs as a carousel.
    pub fn set_cert_view(&mut self, view: CertView, now: Instant) {
        if self.settings.cert_view == view {
            return;
        }
        info!("Certifications view: {:?}", view);
        self.settings.cert_view = view;
        match view {
            CertView::Carousel => {
                self.gallery.close();
                self.carousels.certifications.mount(now);
            }
            CertView::Gallery => {
                self.carousels.certifications.unmount();
                if self.focused == Some(CarouselId::Certifications) {
                    self.focused = None;
                }
            }
        }
    }

    /// Global hotkeys, then navigation keys for the target carousel.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        // Don't process hotkeys when text input is active (typing in fields)
        if ctx.wants_keyboard_input() {
            return;
        }

        let (pressed, command) = ctx.input(|i| {
            let keys: Vec<egui::Key> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => Some(*key),
                    _ => None,
                })
                .collect();
            (keys, i.modifiers.command)
        });

        for key in pressed {
            match key {
                egui::Key::F1 => self.event_bus.emit(ToggleHelpEvent),
                egui::Key::F11 => self.event_bus.emit(ToggleFullscreenEvent),
                egui::Key::F12 => self.event_bus.emit(ToggleSettingsEvent),
                egui::Key::Escape => self.close_topmost(),
                egui::Key::O if command => {
                    if let Some(path) = self.show_open_dialog() {
                        self.event_bus.emit(LoadContentEvent(path));
                    }
                }
                egui::Key::S if command => {
                    if let Some(path) = self.show_save_dialog() {
                        self.event_bus.emit(SaveContentEvent(path));
                    }
                }
                egui::Key::R if command => self.event_bus.emit(ReloadContentEvent),
                egui::Key::Space => self.event_bus.emit(SetAutoplayEvent(!self.settings.autoplay)),
                egui::Key::G => self.event_bus.emit(SetCertViewEvent(self.settings.cert_view.toggled())),
                _ => self.carousel_key(key),
            }
        }
    }

    fn carousel_key(&mut self, key: egui::Key) {
        let Some(id) = self.keyboard_target() else {
            return;
        };
        match key {
            egui::Key::ArrowLeft => self.event_bus.emit(PrevSlideEvent(id)),
            egui::Key::ArrowRight => self.event_bus.emit(NextSlideEvent(id)),
            _ => {
                if let Some(index) = digit_index(key) {
                    self.event_bus.emit(GoToSlideEvent { carousel: id, index });
                }
            }
        }
    }

    /// Escape: gallery modal, then contact form, then settings, then fullscreen.
    fn close_topmost(&mut self) {
        if self.gallery.is_open() {
            self.gallery.close();
        } else if self.contact.is_open() {
            self.contact.close();
        } else if self.show_settings {
            self.show_settings = false;
        } else if self.is_fullscreen {
            self.event_bus.emit(ToggleFullscreenEvent);
        }
    }
}

/// Keys 1..9 select items 0..8
fn digit_index(key: egui::Key) -> Option<usize> {
    use egui::Key::*;
    [Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9]
        .iter()
        .position(|k| *k == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::contact::FormKind;
    use crate::widgets::sections::Section;

    fn started() -> (FolioApp, Instant) {
        let now = Instant::now();
        let mut app = FolioApp::default();
        app.start(None, now);
        // Drain mount-time notifications
        app.handle_events(now);
        (app, now)
    }

    #[test]
    fn test_navigation_events_reach_slideshow() {
        let (mut app, now) = started();
        app.event_bus.emit(GoToSlideEvent {
            carousel: CarouselId::Projects,
            index: 3,
        });
        assert!(app.handle_events(now));
        assert_eq!(app.carousels.projects.position(), 3);
        assert!(app.carousels.projects.is_locked());

        // Locked: a second request is dropped
        app.event_bus.emit(NextSlideEvent(CarouselId::Projects));
        app.handle_events(now);
        assert_eq!(app.carousels.projects.position(), 3);
    }

    #[test]
    fn test_hover_sets_focus() {
        let (mut app, now) = started();
        app.event_bus.emit(CarouselHoverEvent {
            carousel: CarouselId::About,
            hovered: true,
        });
        app.handle_events(now);
        assert_eq!(app.focused, Some(CarouselId::About));
        assert!(app.carousels.about.is_hovered());

        app.event_bus.emit(CarouselHoverEvent {
            carousel: CarouselId::About,
            hovered: false,
        });
        app.handle_events(now);
        assert_eq!(app.focused, None);
    }

    #[test]
    fn test_cert_view_mounts_and_unmounts() {
        let (mut app, now) = started();
        app.event_bus.emit(SetCertViewEvent(CertView::Gallery));
        app.handle_events(now);
        assert!(!app.carousels.certifications.is_mounted());

        app.gallery.open(1, app.portfolio.certifications.len());
        app.event_bus.emit(SetCertViewEvent(CertView::Carousel));
        app.handle_events(now);
        assert!(app.carousels.certifications.is_mounted());
        assert!(!app.gallery.is_open());
    }

    #[test]
    fn test_page_events() {
        let (mut app, now) = started();
        app.event_bus.emit(ScrollToSectionEvent(Section::Contact));
        app.event_bus.emit(OpenFormEvent(FormKind::HireMe));
        app.event_bus.emit(SetAutoplayEvent(false));
        app.event_bus.emit(ToggleSettingsEvent);
        app.handle_events(now);
        assert_eq!(app.scroll_target, Some(Section::Contact));
        assert_eq!(app.contact.kind(), Some(FormKind::HireMe));
        assert!(!app.settings.autoplay);
        assert!(app.show_settings);

        app.close_topmost();
        assert!(!app.contact.is_open());
        app.close_topmost();
        assert!(!app.show_settings);
    }

    #[test]
    fn test_form_result_in_status_bar() {
        let (mut app, now) = started();
        app.event_bus.emit(FormSubmittedEvent {
            kind: FormKind::Contact,
            error: Some("form relay answered HTTP 500".into()),
        });
        app.handle_events(now);
        assert!(app.status_bar.message().contains("HTTP 500"));
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(digit_index(egui::Key::Num1), Some(0));
        assert_eq!(digit_index(egui::Key::Num9), Some(8));
        assert_eq!(digit_index(egui::Key::Num0), None);
        assert_eq!(digit_index(egui::Key::A), None);
    }
}
