//! Contact and hire-me forms

pub mod contact;
pub mod contact_events;
pub mod contact_ui;

pub use contact::{ContactError, ContactForm, FormKind, HireInquiry};
pub use contact_ui::{ContactDialog, SubmitState};
