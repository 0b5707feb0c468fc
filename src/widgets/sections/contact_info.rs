use eframe::egui::{self, Ui};

use super::section_heading;
use crate::dialogs::contact::FormKind;
use crate::dialogs::contact::contact_events::OpenFormEvent;
use crate::entities::{ContactInfo, Profile};
use crate::widgets::actions::ActionQueue;

fn icon_glyph(icon: Option<&str>) -> &'static str {
    match icon.unwrap_or_default() {
        "email" => "✉",
        "phone" => "📞",
        "location" => "📍",
        "status" => "●",
        _ => "•",
    }
}

/// Contact details list plus the form entry points.
pub fn render(ui: &mut Ui, profile: &Profile, contact: &[ContactInfo]) -> ActionQueue {
    let mut actions = ActionQueue::new();
    section_heading(ui, "Get In Touch", Some("Have a project in mind or just want to say hello?"));

    ui.columns(2, |cols| {
        egui::Frame::group(cols[0].style())
            .corner_radius(8.0)
            .inner_margin(12.0)
            .show(&mut cols[0], |ui| {
                ui.set_width(ui.available_width());
                ui.strong("Contact Information");
                ui.add_space(6.0);
                egui::Grid::new("contact_info_grid").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                    for item in contact {
                        ui.label(icon_glyph(item.icon.as_deref()));
                        ui.vertical(|ui| {
                            ui.small(&item.label);
                            ui.label(&item.text);
                        });
                        ui.end_row();
                    }
                });
                if !profile.email.is_empty() && ui.link(&profile.email).clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(format!("mailto:{}", profile.email)));
                }
            });

        egui::Frame::group(cols[1].style())
            .corner_radius(8.0)
            .inner_margin(12.0)
            .show(&mut cols[1], |ui| {
                ui.set_width(ui.available_width());
                ui.strong("Send Me a Message");
                ui.add_space(6.0);
                ui.label("Questions, feedback or a project idea: the form goes straight to my inbox.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("✉ Write a message").clicked() {
                        actions.send(OpenFormEvent(FormKind::Contact));
                    }
                    if ui.button("Hire Me").clicked() {
                        actions.send(OpenFormEvent(FormKind::HireMe));
                    }
                });
            });
    });
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_glyphs() {
        assert_eq!(icon_glyph(Some("email")), "✉");
        assert_eq!(icon_glyph(Some("unknown")), "•");
        assert_eq!(icon_glyph(None), "•");
    }
}
