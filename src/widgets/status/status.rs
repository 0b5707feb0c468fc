use eframe::egui;
use std::time::{Duration, Instant};

use crate::core::carousel_events::CarouselId;

/// How long a message stays before the bar goes back to idle
const MESSAGE_TTL: Duration = Duration::from_secs(6);

/// Per-carousel summary shown on the right
#[derive(Clone, Copy, Debug)]
pub struct CarouselStatus {
    pub id: CarouselId,
    pub position: usize,
    pub len: usize,
    pub autoplay: bool,
}

#[derive(Default)]
pub struct StatusBar {
    message: String,
    is_error: bool,
    shown_at: Option<Instant>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.is_error = false;
        self.shown_at = Some(now);
    }

    pub fn set_error(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.is_error = true;
        self.shown_at = Some(now);
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Clear an expired message. Errors stay until replaced.
    pub fn update(&mut self, now: Instant) {
        if !self.is_error
            && let Some(shown) = self.shown_at
            && now.duration_since(shown) >= MESSAGE_TTL
        {
            self.message.clear();
            self.shown_at = None;
        }
    }

    /// Time until the current message expires
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        if self.is_error {
            return None;
        }
        self.shown_at.map(|shown| MESSAGE_TTL.saturating_sub(now.duration_since(shown)))
    }

    pub fn render(&self, ctx: &egui::Context, source: &str, carousels: &[CarouselStatus]) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(source);

                for c in carousels {
                    ui.separator();
                    let position = if c.len == 0 { 0 } else { c.position + 1 };
                    let play = if c.autoplay { "▶" } else { "⏸" };
                    ui.monospace(format!("{} {}/{} {}", c.id.as_str(), position, c.len, play));
                }

                if !self.message.is_empty() {
                    ui.separator();
                    if self.is_error {
                        ui.colored_label(ui.visuals().error_fg_color, &self.message);
                    } else {
                        ui.monospace(&self.message);
                    }
                }
            });
        });
    }
}
