//! Contact form model and client-side validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Placeholder marker left in an endpoint that was never configured.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_FORM_ID";

// something@something.something
static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// `false` for an empty endpoint or one still carrying the placeholder.
pub fn endpoint_configured(endpoint: &str) -> bool {
    !endpoint.trim().is_empty() && !endpoint.contains(ENDPOINT_PLACEHOLDER)
}

// ───────────────────────────────────────── fields ────────────

/// Focusable rows of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
    ProjectType,
    Budget,
    Company,
    Phone,
    Newsletter,
    Submit,
}

impl Field {
    pub const ALL: &[Field] = &[
        Field::Name,
        Field::Email,
        Field::Message,
        Field::ProjectType,
        Field::Budget,
        Field::Company,
        Field::Phone,
        Field::Newsletter,
        Field::Submit,
    ];

    /// Dictionary key for the field label.
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact.form.name",
            Field::Email => "contact.form.email",
            Field::Message => "contact.form.message",
            Field::ProjectType => "contact.form.projectType",
            Field::Budget => "contact.form.budget",
            Field::Company => "contact.form.company",
            Field::Phone => "contact.form.phone",
            Field::Newsletter => "contact.form.newsletter",
            Field::Submit => "contact.form.send",
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, Field::Newsletter | Field::Submit)
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::Name | Field::Email | Field::Message | Field::ProjectType | Field::Budget
        )
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ───────────────────────────────────────── form ──────────────

/// Validation failure, in the order checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidEmail,
    EndpointNotConfigured,
}

impl ValidationError {
    /// Dictionary key of the notification explaining the failure.
    pub fn message_key(self) -> &'static str {
        match self {
            ValidationError::MissingFields => "notification.error.fields",
            ValidationError::InvalidEmail => "notification.error.email",
            ValidationError::EndpointNotConfigured => "notification.error.form",
        }
    }
}

/// Body posted to the relay.  Optional fields that were left blank are
/// omitted, as is an unticked newsletter box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub project_type: String,
    pub budget: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub project_type: String,
    pub budget: String,
    pub company: String,
    pub phone: String,
    pub newsletter: bool,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> Option<&str> {
        let v = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::ProjectType => &self.project_type,
            Field::Budget => &self.budget,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Newsletter | Field::Submit => return None,
        };
        Some(v.as_str())
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Message => Some(&mut self.message),
            Field::ProjectType => Some(&mut self.project_type),
            Field::Budget => Some(&mut self.budget),
            Field::Company => Some(&mut self.company),
            Field::Phone => Some(&mut self.phone),
            Field::Newsletter | Field::Submit => None,
        }
    }

    /// Append a character to a text field.  Ignored for non-text rows.
    pub fn push_char(&mut self, field: Field, c: char) {
        if let Some(v) = self.value_mut(field) {
            v.push(c);
        }
    }

    pub fn backspace(&mut self, field: Field) {
        if let Some(v) = self.value_mut(field) {
            v.pop();
        }
    }

    pub fn toggle_newsletter(&mut self) {
        self.newsletter = !self.newsletter;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Run the client-side checks and build the request body.  Values are
    /// checked and sent exactly as typed; only an empty field is missing.
    pub fn validate(&self, endpoint: &str) -> Result<Submission, ValidationError> {
        let missing = Field::ALL
            .iter()
            .filter(|f| f.is_required())
            .any(|f| self.value(*f).is_none_or(str::is_empty));
        if missing {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !endpoint_configured(endpoint) {
            return Err(ValidationError::EndpointNotConfigured);
        }

        let optional = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Ok(Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            project_type: self.project_type.clone(),
            budget: self.budget.clone(),
            company: optional(&self.company),
            phone: optional(&self.phone),
            newsletter: self.newsletter.then_some("on"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://formspree.io/f/abc123";

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Need a site".into(),
            project_type: "Landing Page".into(),
            budget: "€500 - €1000".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn missing_required_field_is_reported_first() {
        let mut form = filled();
        form.budget.clear();
        form.email = "broken".into();
        assert_eq!(form.validate(ENDPOINT), Err(ValidationError::MissingFields));
    }

    #[test]
    fn whitespace_is_kept_as_typed() {
        let mut form = filled();
        form.name = "   ".into();
        let submission = form.validate(ENDPOINT).unwrap();
        assert_eq!(submission.name, "   ");

        form.email = " ada@example.com".into();
        assert_eq!(form.validate(ENDPOINT), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut form = filled();
        form.email = "ada.example.com".into();
        assert_eq!(form.validate(ENDPOINT), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn placeholder_endpoint_is_rejected() {
        let form = filled();
        assert_eq!(
            form.validate("https://formspree.io/f/YOUR_FORM_ID"),
            Err(ValidationError::EndpointNotConfigured)
        );
        assert_eq!(form.validate("  "), Err(ValidationError::EndpointNotConfigured));
    }

    #[test]
    fn optional_fields_are_omitted_from_payload() {
        let submission = filled().validate(ENDPOINT).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("company").is_none());
        assert!(json.get("newsletter").is_none());
        assert_eq!(json["project_type"], "Landing Page");

        let mut form = filled();
        form.company = "Acme".into();
        form.toggle_newsletter();
        let json = serde_json::to_value(form.validate(ENDPOINT).unwrap()).unwrap();
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["newsletter"], "on");
    }

    #[test]
    fn editing_ignores_non_text_rows() {
        let mut form = ContactForm::default();
        form.push_char(Field::Name, 'x');
        form.push_char(Field::Submit, 'y');
        form.push_char(Field::Newsletter, 'z');
        assert_eq!(form.name, "x");
        form.backspace(Field::Name);
        form.backspace(Field::Name);
        assert_eq!(form.name, "");
    }

    #[test]
    fn tab_order_wraps() {
        assert_eq!(Field::Submit.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Submit);
        assert_eq!(Field::Email.next(), Field::Message);
    }
}
