use eframe::egui;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::carousel_events::CarouselId;
use crate::core::event_bus::EventBus;
use crate::core::motion::Easing;
use crate::core::slideshow::SlideshowConfig;

use super::prefs_events::{ResetSettingsEvent, SetCertViewEvent};

/// Settings categories
#[derive(Debug, Clone, Copy, PartialEq)]
enum SettingsCategory {
    Appearance,
    Carousels,
    Contact,
}

impl SettingsCategory {
    const ALL: [SettingsCategory; 3] = [
        SettingsCategory::Appearance,
        SettingsCategory::Carousels,
        SettingsCategory::Contact,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SettingsCategory::Appearance => "Appearance",
            SettingsCategory::Carousels => "Carousels",
            SettingsCategory::Contact => "Contact",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// How the certifications section lays out its items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CertView {
    #[default]
    Carousel,
    Gallery,
}

impl CertView {
    pub fn toggled(self) -> Self {
        match self {
            CertView::Carousel => CertView::Gallery,
            CertView::Gallery => CertView::Carousel,
        }
    }
}

/// Application settings, persisted through eframe storage
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Appearance
    pub dark_mode: bool,
    pub font_size: f32,
    pub show_help: bool,

    // Carousels
    pub transition_ms: u64,
    pub swipe_threshold: f32,
    pub easing: Easing,
    pub projects_interval_ms: u64,
    pub about_interval_ms: u64,
    /// 0 = no auto-advance for certifications
    pub certifications_interval_ms: u64,
    pub autoplay: bool,
    pub pause_on_hover: bool,
    pub cert_view: CertView,

    // Contact
    /// Form relay URL; empty means derive from the profile email
    pub form_endpoint: String,
    /// Redirect target sent as `_next`
    pub form_next: String,

    // Internal
    pub selected_settings_category: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: 14.0,
            show_help: false,
            transition_ms: 500,
            swipe_threshold: 100.0,
            easing: Easing::EaseInOut,
            projects_interval_ms: 5000,
            about_interval_ms: 4000,
            certifications_interval_ms: 0,
            autoplay: true,
            pause_on_hover: false,
            cert_view: CertView::Carousel,
            form_endpoint: String::new(),
            form_next: String::new(),
            selected_settings_category: Some("Carousels".to_string()),
        }
    }
}

/// Lower bound so a bad config file can't spin the timer
const MIN_INTERVAL_MS: u64 = 1000;

impl AppSettings {
    /// Slideshow behaviour for one carousel instance.
    pub fn slideshow_config(&self, id: CarouselId) -> SlideshowConfig {
        let interval_ms = match id {
            CarouselId::About => self.about_interval_ms,
            CarouselId::Projects => self.projects_interval_ms,
            CarouselId::Certifications => self.certifications_interval_ms,
        };
        let auto_advance = (self.autoplay && interval_ms > 0)
            .then(|| Duration::from_millis(interval_ms.max(MIN_INTERVAL_MS)));
        SlideshowConfig {
            transition: Duration::from_millis(self.transition_ms.clamp(50, 5000)),
            swipe_threshold: self.swipe_threshold.max(1.0),
            auto_advance,
            pause_on_hover: self.pause_on_hover,
            easing: self.easing,
        }
    }

    /// Form relay URL, falling back to `https://formsubmit.co/<email>`.
    pub fn form_endpoint_for(&self, email: &str) -> Option<String> {
        let endpoint = self.form_endpoint.trim();
        if !endpoint.is_empty() {
            return Some(endpoint.to_string());
        }
        let email = email.trim();
        (!email.is_empty()).then(|| format!("https://formsubmit.co/{}", email))
    }
}

fn render_appearance_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Appearance");
    ui.add_space(8.0);

    ui.label("Font Size:");
    ui.add(
        egui::Slider::new(&mut settings.font_size, 10.0..=22.0)
            .suffix(" px")
            .step_by(0.5),
    );
    ui.add_space(8.0);

    ui.checkbox(&mut settings.dark_mode, "Dark Mode");
    ui.checkbox(&mut settings.show_help, "Show Help (F1)");
}

fn interval_slider(ui: &mut egui::Ui, label: &str, value: &mut u64, allow_off: bool) {
    ui.label(label);
    let range = if allow_off { 0..=15000 } else { MIN_INTERVAL_MS..=15000 };
    let mut slider = egui::Slider::new(value, range).suffix(" ms").step_by(250.0);
    if allow_off {
        slider = slider.custom_formatter(|v, _| if v == 0.0 { "off".to_string() } else { format!("{}", v) });
    }
    ui.add(slider);
    ui.add_space(6.0);
}

fn render_carousel_settings(ui: &mut egui::Ui, settings: &mut AppSettings, event_bus: &EventBus) {
    ui.heading("Motion");
    ui.add_space(8.0);

    ui.label("Transition (each phase):");
    ui.add(
        egui::Slider::new(&mut settings.transition_ms, 100..=2000)
            .suffix(" ms")
            .step_by(50.0),
    );
    ui.horizontal(|ui| {
        ui.label("Easing:");
        egui::ComboBox::from_id_salt("easing_combo")
            .selected_text(format!("{:?}", settings.easing))
            .show_ui(ui, |ui| {
                for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
                    ui.selectable_value(&mut settings.easing, easing, format!("{:?}", easing));
                }
            });
    });
    ui.label("Swipe threshold:");
    ui.add(
        egui::Slider::new(&mut settings.swipe_threshold, 20.0..=300.0)
            .suffix(" px")
            .step_by(5.0),
    );

    ui.add_space(16.0);
    ui.heading("Auto-advance");
    ui.add_space(8.0);
    ui.checkbox(&mut settings.autoplay, "Enabled");
    ui.checkbox(&mut settings.pause_on_hover, "Pause while the pointer is over a carousel");
    ui.add_space(6.0);
    interval_slider(ui, "Projects:", &mut settings.projects_interval_ms, false);
    interval_slider(ui, "About panel:", &mut settings.about_interval_ms, false);
    interval_slider(ui, "Certifications:", &mut settings.certifications_interval_ms, true);

    ui.add_space(16.0);
    ui.heading("Certifications");
    ui.add_space(8.0);
    let prev = settings.cert_view;
    ui.horizontal(|ui| {
        ui.radio_value(&mut settings.cert_view, CertView::Carousel, "Carousel");
        ui.radio_value(&mut settings.cert_view, CertView::Gallery, "Gallery");
    });
    if settings.cert_view != prev {
        // The app owns the mount/unmount side of the switch
        let view = settings.cert_view;
        settings.cert_view = prev;
        event_bus.emit(SetCertViewEvent(view));
    }
}

fn render_contact_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Form relay");
    ui.add_space(8.0);
    ui.label("Endpoint URL (empty: https://formsubmit.co/<profile email>):");
    ui.text_edit_singleline(&mut settings.form_endpoint);
    ui.add_space(8.0);
    ui.label("Redirect after submit (_next):");
    ui.text_edit_singleline(&mut settings.form_next);
}

/// Render settings window
pub fn render_settings_window(
    ctx: &egui::Context,
    show_settings: &mut bool,
    settings: &mut AppSettings,
    event_bus: &EventBus,
) {
    let mut selected = settings
        .selected_settings_category
        .as_ref()
        .and_then(|s| SettingsCategory::from_str(s))
        .unwrap_or(SettingsCategory::Carousels);

    egui::Window::new("Settings")
        .id(egui::Id::new("settings_window"))
        .open(show_settings)
        .default_size([620.0, 460.0])
        .min_size([460.0, 340.0])
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                // Left: category list
                ui.vertical(|ui| {
                    ui.set_width(140.0);
                    ui.add_space(4.0);
                    for category in SettingsCategory::ALL {
                        ui.selectable_value(&mut selected, category, category.as_str());
                    }
                    ui.add_space(16.0);
                    if ui.button("Reset to defaults").clicked() {
                        event_bus.emit(ResetSettingsEvent);
                    }
                });

                ui.separator();

                // Right: content for selected category
                egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                    ui.add_space(8.0);
                    match selected {
                        SettingsCategory::Appearance => render_appearance_settings(ui, settings),
                        SettingsCategory::Carousels => render_carousel_settings(ui, settings, event_bus),
                        SettingsCategory::Contact => render_contact_settings(ui, settings),
                    }
                });
            });
        });

    settings.selected_settings_category = Some(selected.as_str().to_string());
}
