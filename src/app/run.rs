//! Main application loop - eframe::App implementation.
//!
//! Contains the update() method that runs each frame:
//! - Settings, slideshow timers and background results
//! - UI rendering (nav bar, page sections, dialogs)
//! - Event and keyboard handling
//! - Repaint scheduling and persistence

use eframe::egui;
use eframe::glow;
use log::{info, trace};
use std::time::{Duration, Instant};

use crate::app::FolioApp;
use crate::core::content_events::{LoadContentEvent, ReloadContentEvent, SaveContentEvent};
use crate::dialogs::prefs::prefs_events::{SetCertViewEvent, ToggleHelpEvent, ToggleSettingsEvent};
use crate::dialogs::prefs::{AppSettings, CertView, render_settings_window};
use crate::help::{HelpProvider, render_help_overlay};
use crate::widgets::actions::ActionQueue;
use crate::widgets::sections::{Section, contact_info, hero, render_nav_bar, resume, section_heading, skills};
use crate::widgets::{carousel, gallery, rotating};

/// Page content width cap
const MAX_PAGE_WIDTH: f32 = 1100.0;

impl eframe::App for FolioApp {
    /// Main frame update - called every frame by eframe.
    ///
    /// Flow:
    /// 1. Apply theme, font, fullscreen and reset requests
    /// 2. Push settings into slideshows, advance timers and animations
    /// 3. Collect decoded images and form results
    /// 4. Render UI (nav bar, status bar, page, dialogs)
    /// 5. Dispatch widget events, handle keyboard input
    /// 6. Schedule the next repaint
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Apply theme based on settings
        if self.settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Apply font size from settings
        if self.applied_font_size != Some(self.settings.font_size) {
            let mut style = (*ctx.style()).clone();
            for (text_style, font_id) in style.text_styles.iter_mut() {
                font_id.size = match text_style {
                    egui::TextStyle::Heading => self.settings.font_size * 1.4,
                    egui::TextStyle::Small => self.settings.font_size * 0.8,
                    _ => self.settings.font_size,
                };
            }
            ctx.set_style(style);
            self.applied_font_size = Some(self.settings.font_size);
        }

        // Apply pending fullscreen changes requested via events
        if self.fullscreen_dirty {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.is_fullscreen));
            self.fullscreen_dirty = false;
        }

        // Apply pending settings reset requested via events
        if self.reset_settings_pending {
            self.reset_settings(ctx, now);
            self.reset_settings_pending = false;
        }

        // Slideshows: settings first so a changed interval takes effect this frame
        self.sync_settings(now);
        for slideshow in self.carousels.iter_mut() {
            slideshow.update(now);
        }

        // Background results
        let decoded = self.images.drain(ctx);
        if decoded > 0 {
            trace!("{} image(s) uploaded", decoded);
        }
        if let Some(result) = self.contact.poll() {
            self.event_bus.emit(result);
        }
        self.status_bar.update(now);

        let mut actions = ActionQueue::new();

        // Navigation bar (top panel), opaque once the page is scrolled
        let opaque = self.sections.header_opaque();
        let fill = if opaque {
            ctx.style().visuals.panel_fill
        } else {
            ctx.style().visuals.panel_fill.gamma_multiply(0.85)
        };
        egui::TopBottomPanel::top("nav_bar")
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(fill).inner_margin(8.0))
            .show_separator_line(opaque)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.render_menu(ui);
                    actions.merge(render_nav_bar(ui, &self.portfolio.profile.name, self.sections.active()));
                });
            });

        // Status bar (bottom panel)
        if !self.is_fullscreen {
            self.status_bar.render(ctx, &self.content_label(), &self.carousel_status());
        }

        // Page
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical().id_salt("page").auto_shrink([false; 2]);
            if let Some(target) = self.scroll_target
                && let Some(top) = self.sections.top_of(target)
            {
                area = area.vertical_scroll_offset(top);
                self.scroll_target = None;
            }
            let output = area.show(ui, |ui| {
                let width = ui.available_width().min(MAX_PAGE_WIDTH);
                let margin = ((ui.available_width() - width) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(margin);
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        actions.merge(self.render_page(ui, now));
                    });
                });
            });
            self.sections.update(output.state.offset.y);
        });

        // Dialogs
        if self.gallery.is_open() {
            gallery::render_modal(
                ctx,
                &mut self.gallery,
                &self.portfolio.certifications,
                &self.portfolio,
                &mut self.images,
            );
        }
        let endpoint = self.settings.form_endpoint_for(&self.portfolio.profile.email);
        self.contact.render(ctx, endpoint, &self.settings.form_next, &self.workers);
        render_settings_window(ctx, &mut self.show_settings, &mut self.settings, &self.event_bus);

        if self.settings.show_help {
            let context = self.keyboard_target();
            egui::Area::new(egui::Id::new("help_overlay"))
                .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 56.0))
                .interactable(false)
                .show(ctx, |ui| {
                    render_help_overlay(ui, context.as_ref().map(|c| c as &dyn HelpProvider));
                });
        }

        // Widget events go through the bus like everything else
        for event in actions.events {
            self.event_bus.emit_boxed(event);
        }
        self.handle_keyboard_input(ctx);
        if self.handle_events(now) {
            ctx.request_repaint();
        }

        // Sleep until the next animation frame, timer tick or message expiry
        let wakeup = [self.carousels.next_wakeup(now), self.status_bar.next_wakeup(now)]
            .into_iter()
            .flatten()
            .min();
        if self.images.has_pending() || self.contact.is_sending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else if let Some(wakeup) = wakeup {
            ctx.request_repaint_after(wakeup);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(json) = super::storage_json(self) {
            storage.set_string(eframe::APP_KEY, json);
        }
    }

    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.unmount_all();
        trace!("Slideshows unmounted");
    }
}

impl FolioApp {
    /// Every section top to bottom. Section spans are recorded for the nav bar.
    fn render_page(&mut self, ui: &mut egui::Ui, now: Instant) -> ActionQueue {
        let mut actions = ActionQueue::new();
        let origin = ui.min_rect().top();
        let mut tops: Vec<(Section, f32)> = Vec::with_capacity(Section::ALL.len());

        tops.push((Section::Home, ui.cursor().top()));
        actions.merge(hero::render(ui, &self.portfolio.profile));

        tops.push((Section::About, ui.cursor().top()));
        section_heading(ui, "About Me", None);
        actions.merge(rotating::render(ui, &self.carousels.about, &self.portfolio.about, now));

        tops.push((Section::Skills, ui.cursor().top()));
        skills::render(ui, &self.portfolio.skills, &self.portfolio.tools);

        tops.push((Section::Resume, ui.cursor().top()));
        resume::render(ui, &self.portfolio.experience, &self.portfolio.education);

        tops.push((Section::Certifications, ui.cursor().top()));
        section_heading(ui, "Certifications", None);
        ui.horizontal(|ui| {
            let view = self.settings.cert_view;
            let label = match view {
                CertView::Carousel => "▦ Gallery view",
                CertView::Gallery => "◀▶ Carousel view",
            };
            if ui.button(label).on_hover_text("G").clicked() {
                actions.send(SetCertViewEvent(view.toggled()));
            }
        });
        ui.add_space(8.0);
        match self.settings.cert_view {
            CertView::Carousel => actions.merge(carousel::render(
                ui,
                &self.carousels.certifications,
                &self.portfolio.certifications,
                &self.portfolio,
                &mut self.images,
                now,
            )),
            CertView::Gallery => gallery::render(
                ui,
                &mut self.gallery,
                &self.portfolio.certifications,
                &self.portfolio,
                &mut self.images,
            ),
        }

        tops.push((Section::Projects, ui.cursor().top()));
        section_heading(ui, "My Projects", None);
        actions.merge(carousel::render(
            ui,
            &self.carousels.projects,
            &self.portfolio.projects,
            &self.portfolio,
            &mut self.images,
            now,
        ));

        tops.push((Section::Contact, ui.cursor().top()));
        actions.merge(contact_info::render(ui, &self.portfolio.profile, &self.portfolio.contact));
        ui.add_space(40.0);

        let end = ui.cursor().top();
        for (i, &(section, top)) in tops.iter().enumerate() {
            let bottom = tops.get(i + 1).map_or(end, |next| next.1);
            self.sections.record(section, top - origin, bottom - top);
        }
        actions
    }

    /// Content file and window menu
    fn render_menu(&self, ui: &mut egui::Ui) {
        ui.menu_button("☰", |ui| {
            if ui.button("Open...   Ctrl+O").clicked() {
                if let Some(path) = self.show_open_dialog() {
                    self.event_bus.emit(LoadContentEvent(path));
                }
                ui.close();
            }
            if ui.button("Save As...   Ctrl+S").clicked() {
                if let Some(path) = self.show_save_dialog() {
                    self.event_bus.emit(SaveContentEvent(path));
                }
                ui.close();
            }
            if ui.button("Reload   Ctrl+R").clicked() {
                self.event_bus.emit(ReloadContentEvent);
                ui.close();
            }
            ui.separator();
            if ui.button("Preferences   F12").clicked() {
                self.event_bus.emit(ToggleSettingsEvent);
                ui.close();
            }
            if ui.button("Help   F1").clicked() {
                self.event_bus.emit(ToggleHelpEvent);
                ui.close();
            }
        });
    }

    /// Reset all settings to defaults.
    pub fn reset_settings(&mut self, ctx: &egui::Context, now: Instant) {
        info!("Resetting settings to default");
        let defaults = AppSettings::default();
        self.set_cert_view(defaults.cert_view, now);
        self.settings = defaults;
        self.applied_font_size = None;
        if self.is_fullscreen {
            self.is_fullscreen = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
        }
        self.status_bar.set_message("Settings reset", now);
        ctx.request_repaint();
    }
}
