use eframe::egui::{self, Ui};

use super::nav::Section;
use super::section_events::ScrollToSectionEvent;
use crate::dialogs::contact::FormKind;
use crate::dialogs::contact::contact_events::OpenFormEvent;
use crate::entities::Profile;
use crate::widgets::actions::ActionQueue;

/// Name, headline, summary and call-to-action buttons.
pub fn render(ui: &mut Ui, profile: &Profile) -> ActionQueue {
    let mut actions = ActionQueue::new();
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(egui::RichText::new("Hello, I'm").size(18.0).weak());
        ui.label(egui::RichText::new(&profile.name).size(40.0).strong());
        ui.label(
            egui::RichText::new(&profile.headline)
                .size(22.0)
                .color(ui.visuals().selection.bg_fill),
        );
        ui.add_space(12.0);
        ui.set_max_width(640.0);
        ui.label(&profile.summary);
        if !profile.location.is_empty() {
            ui.weak(format!("📍 {}", profile.location));
        }
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if ui.button("Hire Me").clicked() {
                actions.send(OpenFormEvent(FormKind::HireMe));
            }
            if ui.button("Let's Talk").clicked() {
                actions.send(ScrollToSectionEvent(Section::Contact));
            }
            if let Some(resume) = profile.resume_url.as_deref().filter(|r| !r.is_empty())
                && ui.button("Download Resume").on_hover_text(resume).clicked()
            {
                ui.ctx().open_url(egui::OpenUrl::new_tab(resume));
            }
            if let Some(user) = profile.github_user.as_deref().filter(|u| !u.is_empty())
                && ui.button("GitHub").clicked()
            {
                ui.ctx().open_url(egui::OpenUrl::new_tab(format!("https://github.com/{}", user)));
            }
        });
        ui.add_space(48.0);
    });
    actions
}
