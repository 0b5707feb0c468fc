//! Keyboard help overlay.
//!
//! Carousels provide context help through `HelpProvider`; the global list
//! is shown under it.

use eframe::egui;

use crate::core::carousel_events::CarouselId;

/// Single help entry (key binding + description)
#[derive(Clone, Debug)]
pub struct HelpEntry {
    pub key: &'static str,
    pub desc: &'static str,
}

impl HelpEntry {
    pub const fn new(key: &'static str, desc: &'static str) -> Self {
        Self { key, desc }
    }
}

/// Things that provide context-sensitive help
pub trait HelpProvider {
    fn help_title(&self) -> &'static str;

    fn help_entries(&self) -> &'static [HelpEntry];
}

/// Global hotkeys
pub const GLOBAL_HELP: &[HelpEntry] = &[
    HelpEntry::new("F1", "Toggle help"),
    HelpEntry::new("F11", "Toggle Fullscreen"),
    HelpEntry::new("F12", "Toggle Preferences"),
    HelpEntry::new("ESC", "Close dialog / Exit Fullscreen"),
    HelpEntry::new("Ctrl+O", "Open content file"),
    HelpEntry::new("Ctrl+S", "Save content as"),
    HelpEntry::new("Ctrl+R", "Reload content"),
    HelpEntry::new("Space", "Toggle auto-advance"),
    HelpEntry::new("G", "Certifications: carousel / gallery"),
];

/// Record carousels (certifications, projects)
pub const CAROUSEL_HELP: &[HelpEntry] = &[
    HelpEntry::new("Left / Right", "Previous / Next"),
    HelpEntry::new("1..9", "Go to item"),
    HelpEntry::new("Drag", "Swipe (over 100 px)"),
    HelpEntry::new("Dots", "Go to item"),
];

/// Rotating about panel
pub const PANEL_HELP: &[HelpEntry] = &[
    HelpEntry::new("Left / Right", "Previous / Next"),
    HelpEntry::new("Drag", "Swipe"),
];

impl HelpProvider for CarouselId {
    fn help_title(&self) -> &'static str {
        self.as_str()
    }

    fn help_entries(&self) -> &'static [HelpEntry] {
        match self {
            CarouselId::About => PANEL_HELP,
            CarouselId::Certifications | CarouselId::Projects => CAROUSEL_HELP,
        }
    }
}

/// Render help overlay: context entries (if any) then global ones
pub fn render_help_overlay(ui: &mut egui::Ui, context: Option<&dyn HelpProvider>) {
    let font_id = egui::FontId::proportional(13.0);
    let text_color = egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200);
    let key_color = egui::Color32::from_rgb(255, 200, 100);

    let context_entries = context.map(|c| c.help_entries()).unwrap_or_default();
    let max_key_len = context_entries
        .iter()
        .chain(GLOBAL_HELP.iter())
        .map(|e| e.key.len())
        .max()
        .unwrap_or(10);
    let max_key_width = (max_key_len as f32) * 8.0 + 20.0;

    let render_entries = |ui: &mut egui::Ui, entries: &[HelpEntry]| {
        for entry in entries {
            ui.horizontal(|ui| {
                ui.add_sized(
                    [max_key_width, 18.0],
                    egui::Label::new(egui::RichText::new(entry.key).font(font_id.clone()).color(key_color)),
                );
                ui.label(egui::RichText::new(entry.desc).font(font_id.clone()).color(text_color));
            });
        }
    };
    let title = |ui: &mut egui::Ui, text: &str| {
        ui.label(egui::RichText::new(text).font(font_id.clone()).color(egui::Color32::GRAY));
        ui.add_space(4.0);
    };

    egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180))
        .inner_margin(12.0)
        .corner_radius(4.0)
        .show(ui, |ui| {
            if let Some(context) = context {
                title(ui, context.help_title());
                render_entries(ui, context_entries);
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(4.0);
            }
            title(ui, "Global");
            render_entries(ui, GLOBAL_HELP);
        });
}
