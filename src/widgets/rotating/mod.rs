//! Rotating "about" panel
//!
//! Same slideshow machinery as the record carousels, shorter travel and
//! text-only slides.

use eframe::egui::{self, Ui};
use std::time::Instant;

use crate::core::slideshow::Slideshow;
use crate::entities::{AboutItem, SlideItem};
use crate::widgets::actions::ActionQueue;
use crate::widgets::carousel::{CarouselLayout, slide_area};

pub fn render(ui: &mut Ui, slideshow: &Slideshow, items: &[AboutItem], now: Instant) -> ActionQueue {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            slide_area(ui, slideshow, items.len(), CarouselLayout::PANEL, now, |ui, idx| {
                if let Some(item) = items.get(idx) {
                    ui.vertical_centered(|ui| {
                        ui.add_space(12.0);
                        ui.heading(item.title());
                        ui.add_space(4.0);
                        ui.label(item.description());
                    });
                }
            })
        })
        .inner
}
