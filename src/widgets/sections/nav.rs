//! Page sections and scroll tracking.
//!
//! The page is one vertical scroll area. Each frame the sections report
//! where they were laid out; [`SectionTracker`] turns the scroll offset into
//! the highlighted nav entry and the header opacity.

use eframe::egui::{self, Ui};
use log::trace;
use serde::{Deserialize, Serialize};

use super::section_events::ScrollToSectionEvent;
use crate::widgets::actions::ActionQueue;

/// A section becomes active this far before its top reaches the viewport top
pub const ACTIVE_LEAD: f32 = 200.0;
/// Header turns opaque past this scroll offset
pub const HEADER_OPAQUE_AFTER: f32 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Resume,
    Certifications,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Resume,
        Section::Certifications,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Resume => "Resume",
            Section::Certifications => "Certifications",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Case-insensitive lookup by label (CLI `--section`)
    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.label().eq_ignore_ascii_case(name.trim()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    top: f32,
    height: f32,
}

#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    bounds: [Option<Bounds>; 7],
    active: Section,
    scroll: f32,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a section was laid out, in content coordinates.
    pub fn record(&mut self, section: Section, top: f32, height: f32) {
        self.bounds[section.index()] = Some(Bounds { top, height });
    }

    pub fn top_of(&self, section: Section) -> Option<f32> {
        self.bounds[section.index()].map(|b| b.top)
    }

    /// Recompute the active section for `scroll`.
    ///
    /// Active when `scroll >= top - 200` and `scroll < top + height - 200`;
    /// the last matching section wins. No match keeps the previous one.
    pub fn update(&mut self, scroll: f32) -> Section {
        self.scroll = scroll;
        let current = Section::ALL.into_iter().rev().find(|s| {
            self.bounds[s.index()].is_some_and(|b| {
                scroll >= b.top - ACTIVE_LEAD && scroll < b.top + b.height - ACTIVE_LEAD
            })
        });
        if let Some(section) = current
            && section != self.active
        {
            trace!("Active section: {:?} -> {:?}", self.active, section);
            self.active = section;
        }
        self.active
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn header_opaque(&self) -> bool {
        self.scroll > HEADER_OPAQUE_AFTER
    }
}

/// Top navigation bar: name on the left, one button per section.
pub fn render_nav_bar(ui: &mut Ui, title: &str, active: Section) -> ActionQueue {
    let mut actions = ActionQueue::new();
    ui.horizontal(|ui| {
        if ui.add(egui::Button::new(egui::RichText::new(title).strong().size(18.0)).frame(false)).clicked() {
            actions.send(ScrollToSectionEvent(Section::Home));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for section in Section::ALL.into_iter().rev() {
                if ui.selectable_label(section == active, section.label()).clicked() {
                    actions.send(ScrollToSectionEvent(section));
                }
            }
        });
    });
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out() -> SectionTracker {
        let mut t = SectionTracker::new();
        let mut top = 0.0;
        for s in Section::ALL {
            t.record(s, top, 600.0);
            top += 600.0;
        }
        t
    }

    #[test]
    fn test_active_section_rule() {
        let mut t = laid_out();
        assert_eq!(t.update(0.0), Section::Home);
        // About starts at 600, active from 400
        assert_eq!(t.update(399.0), Section::Home);
        assert_eq!(t.update(400.0), Section::About);
        assert_eq!(t.update(999.0), Section::About);
        assert_eq!(t.update(1000.0), Section::Skills);
        assert_eq!(t.update(3400.0), Section::Contact);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut t = SectionTracker::new();
        t.record(Section::Skills, 1000.0, 300.0);
        assert_eq!(t.update(850.0), Section::Skills);
        // Past the end of every recorded section
        assert_eq!(t.update(5000.0), Section::Skills);
        assert_eq!(t.active(), Section::Skills);
    }

    #[test]
    fn test_header_opacity() {
        let mut t = laid_out();
        t.update(50.0);
        assert!(!t.header_opaque());
        t.update(50.5);
        assert!(t.header_opaque());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Section::from_name("projects"), Some(Section::Projects));
        assert_eq!(Section::from_name(" Contact "), Some(Section::Contact));
        assert_eq!(Section::from_name("blog"), None);
    }

    #[test]
    fn test_top_of() {
        let t = laid_out();
        assert_eq!(t.top_of(Section::Resume), Some(1800.0));
        assert_eq!(SectionTracker::new().top_of(Section::Resume), None);
    }
}
