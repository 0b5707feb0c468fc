//! Contact dialog events.

use super::contact::FormKind;

/// Open the contact or hire-me form
#[derive(Clone, Debug)]
pub struct OpenFormEvent(pub FormKind);

/// Relay answered (or failed); `error` is None on success
#[derive(Clone, Debug)]
pub struct FormSubmittedEvent {
    pub kind: FormKind,
    pub error: Option<String>,
}
