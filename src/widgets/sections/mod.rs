//! Page sections: navigation plus the static content blocks

pub mod contact_info;
pub mod hero;
pub mod nav;
pub mod resume;
pub mod section_events;
pub mod skills;

pub use nav::{Section, SectionTracker, render_nav_bar};

use eframe::egui::{self, Ui};

/// Centered section title with an accent underline and optional blurb.
pub fn section_heading(ui: &mut Ui, title: &str, blurb: Option<&str>) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading(egui::RichText::new(title).size(26.0).strong());
        let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 3.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 1.0, ui.visuals().selection.bg_fill);
        if let Some(blurb) = blurb {
            ui.add_space(6.0);
            ui.weak(blurb);
        }
        ui.add_space(16.0);
    });
}
