//! Contact form validation and submit state.
//!
//! Nothing here talks to the network. The browser layer calls
//! [`ContactForm::begin_submit`], waits a fixed delay and then reports the
//! outcome through [`ContactForm::finish`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::FormError;

/// Minimum characters for the name field.
pub const NAME_MIN_LEN: usize = 2;
/// Minimum characters for the message field.
pub const MESSAGE_MIN_LEN: usize = 10;
/// Maximum characters for the optional subject.
pub const SUBJECT_MAX_LEN: usize = 120;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Whitespace spelled out: the crate is built without Unicode class tables.
    Regex::new(r"^[^@\t\n\x0B\x0C\r ]+@[^@\t\n\x0B\x0C\r ]+\.[^@\t\n\x0B\x0C\r ]+$")
        .expect("email pattern is valid")
});

// ============================================================================
// Fields
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Subject)
    }

    /// Form control id / name attribute.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

/// A single field's validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort { min: usize },
    TooLong { max: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "This field is required"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::TooShort { min } => write!(f, "Please enter at least {} characters", min),
            Self::TooLong { max } => write!(f, "Please keep this under {} characters", max),
        }
    }
}

/// Validates one field value.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let len = value.chars().count();

    if value.is_empty() {
        return if field.is_required() {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    match field {
        Field::Name if len < NAME_MIN_LEN => Err(FieldError::TooShort { min: NAME_MIN_LEN }),
        Field::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
        Field::Subject if len > SUBJECT_MAX_LEN => Err(FieldError::TooLong {
            max: SUBJECT_MAX_LEN,
        }),
        Field::Message if len < MESSAGE_MIN_LEN => Err(FieldError::TooShort {
            min: MESSAGE_MIN_LEN,
        }),
        _ => Ok(()),
    }
}

/// Field-level errors keyed by field, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }

    fn set(&mut self, field: Field, result: Result<(), FieldError>) {
        match result {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(e) => {
                self.0.insert(field, e);
            }
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.set(field, validate_field(field, self.get(field)));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

// ============================================================================
// ContactForm
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Form draft, inline errors and submit state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: FieldErrors,
    state: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmitState::Sending
    }

    /// Updates a field. A field that already shows an error is re-checked
    /// so the message clears as soon as the input becomes valid.
    pub fn input(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        if self.errors.get(field).is_some() {
            self.blur(field);
        }
    }

    /// Validates a single field (on blur).
    pub fn blur(&mut self, field: Field) {
        let result = validate_field(field, self.draft.get(field));
        self.errors.set(field, result);
    }

    /// Validates everything and, when valid, enters `Sending`.
    ///
    /// Returns the draft to submit.
    pub fn begin_submit(&mut self) -> Result<ContactDraft, FormError> {
        if self.is_sending() {
            return Err(FormError::AlreadySending);
        }
        match self.draft.validate() {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.state = SubmitState::Sending;
                Ok(self.draft.clone())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(FormError::Invalid(errors))
            }
        }
    }

    /// Records the outcome of a submission. Success clears the draft.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                self.draft = ContactDraft::default();
                self.state = SubmitState::Sent;
            }
            Err(reason) => self.state = SubmitState::Failed(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.input(Field::Name, "Ada".into());
        form.input(Field::Email, "ada@example.com".into());
        form.input(Field::Message, "Hello there, nice site!".into());
        form
    }

    #[test]
    fn test_validate_field_rules() {
        assert_eq!(validate_field(Field::Name, "  "), Err(FieldError::Required));
        assert_eq!(
            validate_field(Field::Name, "A"),
            Err(FieldError::TooShort { min: NAME_MIN_LEN })
        );
        assert_eq!(
            validate_field(Field::Email, "not-an-email"),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(validate_field(Field::Email, "a@b.io"), Ok(()));
        assert_eq!(validate_field(Field::Subject, ""), Ok(()));
        assert_eq!(
            validate_field(Field::Subject, &"x".repeat(SUBJECT_MAX_LEN + 1)),
            Err(FieldError::TooLong { max: SUBJECT_MAX_LEN })
        );
        assert_eq!(
            validate_field(Field::Message, "short"),
            Err(FieldError::TooShort { min: MESSAGE_MIN_LEN })
        );
    }

    #[test]
    fn test_empty_required_field_blocks_submit() {
        let mut form = filled();
        form.input(Field::Email, String::new());

        let err = form.begin_submit().unwrap_err();
        match err {
            FormError::Invalid(errors) => {
                assert_eq!(errors.get(Field::Email), Some(&FieldError::Required));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(form.state(), &SubmitState::Idle);
        assert_eq!(form.errors().first(), Some(Field::Email));
    }

    #[test]
    fn test_submit_flow() {
        let mut form = filled();
        let draft = form.begin_submit().unwrap();
        assert_eq!(draft.name, "Ada");
        assert!(form.is_sending());
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySending));

        form.finish(Ok(()));
        assert_eq!(form.state(), &SubmitState::Sent);
        assert_eq!(form.draft(), &ContactDraft::default());
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(Err("offline".into()));
        assert_eq!(form.state(), &SubmitState::Failed("offline".into()));
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn test_error_clears_on_valid_input() {
        let mut form = ContactForm::new();
        form.blur(Field::Name);
        assert_eq!(form.errors().get(Field::Name), Some(&FieldError::Required));

        form.input(Field::Name, "Grace".into());
        assert_eq!(form.errors().get(Field::Name), None);
    }
}
