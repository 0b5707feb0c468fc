use eframe::egui::{self, Ui};

use super::section_heading;
use crate::entities::{Education, Experience};
use crate::widgets::carousel::tag_chip;

/// Experience and education columns.
pub fn render(ui: &mut Ui, experience: &[Experience], education: &[Education]) {
    section_heading(ui, "My Resume", Some("A summary of my education and work experience"));

    ui.columns(2, |cols| {
        cols[0].strong("💼 Work Experience");
        cols[0].add_space(6.0);
        for job in experience {
            experience_card(&mut cols[0], job);
        }

        cols[1].strong("🎓 Education");
        cols[1].add_space(6.0);
        for edu in education {
            education_card(&mut cols[1], edu);
        }
    });
}

fn card_header(ui: &mut Ui, title: &str, subtitle: &str, period: &str) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.strong(title);
            ui.weak(subtitle);
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            tag_chip(ui, period);
        });
    });
}

fn bullets(ui: &mut Ui, items: &[String]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.colored_label(ui.visuals().selection.bg_fill, "•");
            ui.label(item);
        });
    }
}

fn experience_card(ui: &mut Ui, job: &Experience) {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            card_header(ui, &job.title, &job.company, &job.period);
            ui.add_space(4.0);
            bullets(ui, &job.responsibilities);
            ui.horizontal_wrapped(|ui| {
                for tech in &job.technologies {
                    tag_chip(ui, tech);
                }
            });
        });
    ui.add_space(8.0);
}

fn education_card(ui: &mut Ui, edu: &Education) {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            card_header(ui, &edu.degree, &edu.institution, &edu.period);
            if !edu.achievements.is_empty() {
                ui.add_space(4.0);
                ui.small("Achievements:");
                bullets(ui, &edu.achievements);
            }
        });
    ui.add_space(8.0);
}
