use crossbeam_channel::{Receiver, TryRecvError, bounded};
use eframe::egui;
use log::{info, warn};

use super::contact::{Budget, ContactError, ContactForm, FormKind, FormPayload, HireInquiry, ProjectType, submit};
use super::contact_events::FormSubmittedEvent;
use crate::core::workers::Workers;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Contact / hire-me dialog state
pub struct ContactDialog {
    kind: Option<FormKind>,
    pub contact: ContactForm,
    pub hire: HireInquiry,
    state: SubmitState,
    result_rx: Option<Receiver<Result<(), ContactError>>>,
    sending_kind: FormKind,
}

impl Default for ContactDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactDialog {
    pub fn new() -> Self {
        Self {
            kind: None,
            contact: ContactForm::default(),
            hire: HireInquiry::default(),
            state: SubmitState::Idle,
            result_rx: None,
            sending_kind: FormKind::Contact,
        }
    }

    pub fn open(&mut self, kind: FormKind) {
        if self.kind != Some(kind) && !self.is_sending() {
            self.state = SubmitState::Idle;
        }
        self.kind = Some(kind);
    }

    /// Close the window. An in-flight submission still reports through `poll`.
    pub fn close(&mut self) {
        self.kind = None;
    }

    pub fn is_open(&self) -> bool {
        self.kind.is_some()
    }

    pub fn kind(&self) -> Option<FormKind> {
        self.kind
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmitState::Sending
    }

    /// Validate and queue the POST on the worker pool.
    ///
    /// Validation failures are shown in the dialog and nothing is sent.
    pub fn submit(&mut self, kind: FormKind, endpoint: Option<String>, next: &str, workers: &Workers) -> bool {
        if self.is_sending() {
            return false;
        }
        let validated = match kind {
            FormKind::Contact => self.contact.validate().map(|_| self.contact.form_pairs(next)),
            FormKind::HireMe => self.hire.validate().map(|_| self.hire.form_pairs(next)),
        };
        let pairs = match validated {
            Ok(pairs) => pairs,
            Err(e) => {
                self.state = SubmitState::Failed(e.to_string());
                return false;
            }
        };
        let Some(endpoint) = endpoint else {
            self.state = SubmitState::Failed(ContactError::NoEndpoint.to_string());
            return false;
        };

        let (tx, rx) = bounded(1);
        self.result_rx = Some(rx);
        self.state = SubmitState::Sending;
        self.sending_kind = kind;
        info!("Sending {:?} form", kind);
        workers.execute(move || {
            let _ = tx.send(submit(&endpoint, &pairs));
        });
        true
    }

    /// Pick up a finished submission. Clears the form on success.
    pub fn poll(&mut self) -> Option<FormSubmittedEvent> {
        let result = match self.result_rx.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            // Worker died without answering
            Err(TryRecvError::Disconnected) => Err(ContactError::Interrupted),
        };
        self.result_rx = None;
        let kind = self.sending_kind;
        let error = match result {
            Ok(()) => {
                self.state = SubmitState::Sent;
                match kind {
                    FormKind::Contact => self.contact = ContactForm::default(),
                    FormKind::HireMe => self.hire = HireInquiry::default(),
                }
                None
            }
            Err(e) => {
                warn!("Form submission failed: {}", e);
                self.state = SubmitState::Failed(e.to_string());
                Some(e.to_string())
            }
        };
        Some(FormSubmittedEvent { kind, error })
    }

    /// Render the open form, if any.
    pub fn render(&mut self, ctx: &egui::Context, endpoint: Option<String>, next: &str, workers: &Workers) {
        let Some(kind) = self.kind else {
            return;
        };

        let mut open = true;
        let mut send = false;
        egui::Window::new(kind.title())
            .id(egui::Id::new("contact_dialog"))
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_width(460.0);
                let sending = self.is_sending();
                ui.add_enabled_ui(!sending, |ui| match kind {
                    FormKind::Contact => contact_fields(ui, &mut self.contact),
                    FormKind::HireMe => hire_fields(ui, &mut self.hire),
                });

                ui.add_space(8.0);
                match &self.state {
                    SubmitState::Idle => {}
                    SubmitState::Sending => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Sending...");
                        });
                    }
                    SubmitState::Sent => {
                        ui.colored_label(egui::Color32::from_rgb(80, 200, 120), "Message sent. Thank you!");
                    }
                    SubmitState::Failed(msg) => {
                        ui.colored_label(ui.visuals().error_fg_color, msg);
                    }
                }

                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = match kind {
                        FormKind::Contact => "Send Message",
                        FormKind::HireMe => "Submit Inquiry",
                    };
                    if ui.add_enabled(!sending, egui::Button::new(label)).clicked() {
                        send = true;
                    }
                });
            });

        if send {
            self.submit(kind, endpoint, next, workers);
        }
        if !open {
            self.close();
        }
    }
}

fn labeled_line(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(f32::INFINITY));
    ui.add_space(4.0);
}

fn labeled_text(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );
}

fn contact_fields(ui: &mut egui::Ui, form: &mut ContactForm) {
    ui.columns(2, |cols| {
        labeled_line(&mut cols[0], "Name", &mut form.name, "Your name");
        labeled_line(&mut cols[1], "Email", &mut form.email, "Your email");
    });
    labeled_line(ui, "Subject", &mut form.subject, "Subject");
    labeled_text(ui, "Message", &mut form.message, "Your message");
}

fn hire_fields(ui: &mut egui::Ui, form: &mut HireInquiry) {
    ui.weak("Fill out the form below to discuss your project needs and how I can help.");
    ui.add_space(6.0);
    ui.columns(2, |cols| {
        labeled_line(&mut cols[0], "Name", &mut form.name, "Your name");
        labeled_line(&mut cols[1], "Email", &mut form.email, "Your email");
    });

    ui.label("Project Type");
    egui::ComboBox::from_id_salt("hire_project_type")
        .width(ui.available_width())
        .selected_text(form.project_type.map_or("Select project type", ProjectType::label))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut form.project_type, None, "Select project type");
            for t in ProjectType::ALL {
                ui.selectable_value(&mut form.project_type, Some(t), t.label());
            }
        });
    ui.add_space(4.0);

    ui.label("Budget Range");
    egui::ComboBox::from_id_salt("hire_budget")
        .width(ui.available_width())
        .selected_text(form.budget.map_or("Select budget range", Budget::label))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut form.budget, None, "Select budget range");
            for b in Budget::ALL {
                ui.selectable_value(&mut form.budget, Some(b), b.label());
            }
        });
    ui.add_space(4.0);

    labeled_text(ui, "Project Details", &mut form.message, "Tell me about your project");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(dialog: &mut ContactDialog) {
        dialog.contact = ContactForm {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };
    }

    #[test]
    fn test_invalid_form_not_sent() {
        let workers = Workers::new(1);
        let mut d = ContactDialog::new();
        d.open(FormKind::Contact);
        assert!(!d.submit(FormKind::Contact, Some("http://127.0.0.1:9".into()), "", &workers));
        assert_eq!(d.state(), &SubmitState::Failed("Name is required".into()));
        assert!(d.poll().is_none());
    }

    #[test]
    fn test_missing_endpoint() {
        let workers = Workers::new(1);
        let mut d = ContactDialog::new();
        filled(&mut d);
        assert!(!d.submit(FormKind::Contact, None, "", &workers));
        assert!(matches!(d.state(), SubmitState::Failed(_)));
    }

    #[test]
    fn test_failed_delivery_reported() {
        let workers = Workers::new(1);
        let mut d = ContactDialog::new();
        filled(&mut d);
        // Nothing listens on the discard port
        assert!(d.submit(FormKind::Contact, Some("http://127.0.0.1:9/form".into()), "", &workers));
        assert!(d.is_sending());
        assert!(!d.submit(FormKind::Contact, Some("http://127.0.0.1:9/form".into()), "", &workers));

        let mut event = None;
        for _ in 0..500 {
            event = d.poll();
            if event.is_some() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        let event = event.unwrap();
        assert_eq!(event.kind, FormKind::Contact);
        assert!(event.error.is_some());
        assert!(matches!(d.state(), SubmitState::Failed(_)));
        // Form kept so the user can retry
        assert_eq!(d.contact.name, "Jo");
    }

    #[test]
    fn test_open_close() {
        let mut d = ContactDialog::new();
        assert!(!d.is_open());
        d.open(FormKind::HireMe);
        assert_eq!(d.kind(), Some(FormKind::HireMe));
        d.close();
        assert!(!d.is_open());
    }

    #[test]
    fn test_lost_worker_fails_submission() {
        let mut d = ContactDialog::new();
        filled(&mut d);
        let (tx, rx) = bounded::<Result<(), ContactError>>(1);
        d.result_rx = Some(rx);
        d.state = SubmitState::Sending;
        assert!(d.poll().is_none());

        drop(tx);
        let event = d.poll().unwrap();
        assert_eq!(event.error.as_deref(), Some("submission was interrupted"));
        assert_eq!(d.state(), &SubmitState::Failed("submission was interrupted".into()));
        assert!(!d.is_sending());
        // Form kept for a retry
        assert_eq!(d.contact.name, "Jo");
        assert!(d.poll().is_none());
    }
}
