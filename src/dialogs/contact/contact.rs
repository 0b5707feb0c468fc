//! Contact and hire-me forms: model, validation, relay payload, submission.
//!
//! Both forms post `application/x-www-form-urlencoded` to a form relay
//! (formsubmit-style) with three hidden fields: `_subject`, `_captcha=false`
//! and `_next`.

use log::{debug, info};
use std::time::Duration;
use thiserror::Error;

pub const CONTACT_SUBJECT: &str = "New portfolio contact message!";
pub const HIRE_SUBJECT: &str = "Hire Me Inquiry from Portfolio!";

const SUBMIT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("no form endpoint configured")]
    NoEndpoint,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("form relay answered HTTP {0}")]
    Status(u16),
    #[error("submission was interrupted")]
    Interrupted,
}

/// Which dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    HireMe,
}

impl FormKind {
    pub fn title(self) -> &'static str {
        match self {
            FormKind::Contact => "Send Me a Message",
            FormKind::HireMe => "Let's Work Together",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Website,
    App,
    Ecommerce,
    Design,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Website,
        ProjectType::App,
        ProjectType::Ecommerce,
        ProjectType::Design,
        ProjectType::Other,
    ];

    /// Form value
    pub fn value(self) -> &'static str {
        match self {
            ProjectType::Website => "website",
            ProjectType::App => "app",
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::Design => "design",
            ProjectType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Website => "Website Development",
            ProjectType::App => "Mobile App",
            ProjectType::Ecommerce => "E-commerce",
            ProjectType::Design => "UI/UX Design",
            ProjectType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl Budget {
    pub const ALL: [Budget; 4] = [Budget::Small, Budget::Medium, Budget::Large, Budget::Enterprise];

    pub fn value(self) -> &'static str {
        match self {
            Budget::Small => "small",
            Budget::Medium => "medium",
            Budget::Large => "large",
            Budget::Enterprise => "enterprise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Budget::Small => "$1,000 - $5,000",
            Budget::Medium => "$5,000 - $10,000",
            Budget::Large => "$10,000 - $20,000",
            Budget::Enterprise => "$20,000+",
        }
    }
}

/// Shape check equivalent to a browser's `type=email` field:
/// non-empty local part, one `@`, dotted domain without empty labels.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty() && !l.starts_with('-') && !l.ends_with('-'))
}

fn required(value: &str, field: &'static str) -> Result<(), ContactError> {
    if value.trim().is_empty() {
        return Err(ContactError::Missing(field));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), ContactError> {
    required(email, "Email")?;
    if !is_valid_email(email) {
        return Err(ContactError::InvalidEmail(email.trim().to_string()));
    }
    Ok(())
}

fn hidden_fields(subject: &str, next: &str) -> Vec<(&'static str, String)> {
    vec![
        ("_subject", subject.to_string()),
        ("_captcha", "false".to_string()),
        ("_next", next.to_string()),
    ]
}

/// Anything the relay can receive
pub trait FormPayload {
    fn validate(&self) -> Result<(), ContactError>;

    /// Ordered form fields, hidden ones first
    fn form_pairs(&self, next: &str) -> Vec<(&'static str, String)>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormPayload for ContactForm {
    fn validate(&self) -> Result<(), ContactError> {
        required(&self.name, "Name")?;
        check_email(&self.email)?;
        required(&self.subject, "Subject")?;
        required(&self.message, "Message")
    }

    fn form_pairs(&self, next: &str) -> Vec<(&'static str, String)> {
        let mut pairs = hidden_fields(CONTACT_SUBJECT, next);
        pairs.extend([
            ("name", self.name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("subject", self.subject.trim().to_string()),
            ("message", self.message.trim().to_string()),
        ]);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HireInquiry {
    pub name: String,
    pub email: String,
    pub project_type: Option<ProjectType>,
    pub budget: Option<Budget>,
    pub message: String,
}

impl FormPayload for HireInquiry {
    fn validate(&self) -> Result<(), ContactError> {
        required(&self.name, "Name")?;
        check_email(&self.email)?;
        required(&self.message, "Project details")
    }

    fn form_pairs(&self, next: &str) -> Vec<(&'static str, String)> {
        let mut pairs = hidden_fields(HIRE_SUBJECT, next);
        pairs.extend([
            ("name", self.name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("project-type", self.project_type.map(ProjectType::value).unwrap_or_default().to_string()),
            ("budget", self.budget.map(Budget::value).unwrap_or_default().to_string()),
            ("message", self.message.trim().to_string()),
        ]);
        pairs
    }
}

/// Blocking POST to the relay. Call from a worker thread.
pub fn submit(endpoint: &str, pairs: &[(&'static str, String)]) -> Result<(), ContactError> {
    if endpoint.trim().is_empty() {
        return Err(ContactError::NoEndpoint);
    }
    debug!("Submitting {} form fields to {}", pairs.len(), endpoint);

    let client = reqwest::blocking::Client::builder().timeout(SUBMIT_TIMEOUT).build()?;
    let response = client.post(endpoint).form(pairs).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(ContactError::Status(status.as_u16()));
    }
    info!("Form submitted to {} ({})", endpoint, status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactForm {
        ContactForm {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            subject: "Hello".into(),
            message: "Nice carousel".into(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" first.last@mail.example.org "));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@localhost"));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@-b.com"));
    }

    #[test]
    fn test_contact_validation_order() {
        assert!(contact().validate().is_ok());

        let mut f = contact();
        f.name = "  ".into();
        assert!(matches!(f.validate(), Err(ContactError::Missing("Name"))));

        let mut f = contact();
        f.email = "nope".into();
        assert!(matches!(f.validate(), Err(ContactError::InvalidEmail(_))));

        let mut f = contact();
        f.message.clear();
        assert!(matches!(f.validate(), Err(ContactError::Missing("Message"))));
    }

    #[test]
    fn test_contact_payload() {
        let pairs = contact().form_pairs("https://example.com/#contact");
        assert_eq!(pairs[0], ("_subject", CONTACT_SUBJECT.to_string()));
        assert_eq!(pairs[1], ("_captcha", "false".to_string()));
        assert_eq!(pairs[2], ("_next", "https://example.com/#contact".to_string()));
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys[3..], ["name", "email", "subject", "message"]);
    }

    #[test]
    fn test_hire_payload() {
        let inquiry = HireInquiry {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            project_type: Some(ProjectType::Ecommerce),
            budget: None,
            message: "Shop".into(),
        };
        assert!(inquiry.validate().is_ok());
        let pairs = inquiry.form_pairs("");
        assert_eq!(pairs[0].1, HIRE_SUBJECT);
        assert!(pairs.contains(&("project-type", "ecommerce".to_string())));
        assert!(pairs.contains(&("budget", String::new())));

        let empty = HireInquiry::default();
        assert!(matches!(empty.validate(), Err(ContactError::Missing("Name"))));
    }

    #[test]
    fn test_submit_without_endpoint() {
        let err = submit(" ", &contact().form_pairs("")).unwrap_err();
        assert!(matches!(err, ContactError::NoEndpoint));
        assert_eq!(err.to_string(), "no form endpoint configured");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Budget::Enterprise.label(), "$20,000+");
        assert_eq!(ProjectType::Design.label(), "UI/UX Design");
        assert_eq!(FormKind::HireMe.title(), "Let's Work Together");
    }
}
