use eframe::egui::{self, Ui};

use super::section_heading;
use crate::entities::{Skill, SkillGroup};
use crate::widgets::carousel::tag_chip;

const GROUP_WIDTH: f32 = 300.0;

/// Skill groups with level bars, then the tool cloud.
pub fn render(ui: &mut Ui, groups: &[SkillGroup], tools: &[String]) {
    section_heading(ui, "My Skills", None);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
        for group in groups {
            egui::Frame::group(ui.style())
                .corner_radius(8.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_width(GROUP_WIDTH);
                    ui.strong(&group.title);
                    ui.add_space(6.0);
                    for skill in &group.skills {
                        skill_bar(ui, skill);
                    }
                });
        }
    });

    if !tools.is_empty() {
        ui.add_space(16.0);
        ui.strong("Tools & Technologies");
        ui.horizontal_wrapped(|ui| {
            for tool in tools {
                tag_chip(ui, tool);
            }
        });
    }
}

fn skill_bar(ui: &mut Ui, skill: &Skill) {
    let level = skill.level.min(100);
    ui.horizontal(|ui| {
        ui.label(&skill.name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(ui.visuals().selection.bg_fill, format!("{}%", level));
        });
    });
    if let Some(description) = &skill.description {
        ui.small(description);
    }
    ui.add(egui::ProgressBar::new(level as f32 / 100.0).desired_height(6.0));
    ui.add_space(4.0);
}
