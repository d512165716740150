use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    macros::nutype_string,
    validation::{Field, FieldKind, FieldValue, Rule, RuleTable, ValidationErrors},
};

pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const CONTACT_NAME_MIN_LENGTH: usize = 2;
pub const CONTACT_SUBJECT_MAX_LENGTH: usize = 100;
pub const CONTACT_MESSAGE_MIN_LENGTH: usize = 10;

pub static CONTACT_FORM_RULES: LazyLock<RuleTable<ContactField>> = LazyLock::new(|| {
    RuleTable::new(vec![
        (
            ContactField::Name,
            vec![
                Rule::Required("Name is required"),
                Rule::MinLength(
                    CONTACT_NAME_MIN_LENGTH,
                    "Name must be at least 2 characters",
                ),
            ],
        ),
        (
            ContactField::Email,
            vec![
                Rule::Required("Email is required"),
                Rule::Pattern(CONTACT_EMAIL_REGEX.clone(), "Enter a valid email address"),
            ],
        ),
        (ContactField::Choice, vec![]),
        (
            ContactField::Subject,
            vec![Rule::MaxLength(
                CONTACT_SUBJECT_MAX_LENGTH,
                "Subject must be at most 100 characters",
            )],
        ),
        (
            ContactField::Message,
            vec![
                Rule::Required("Message is required"),
                Rule::MinLength(
                    CONTACT_MESSAGE_MIN_LENGTH,
                    "Message must be at least 10 characters",
                ),
            ],
        ),
        (
            ContactField::ConfirmSubmit,
            vec![Rule::Required("Please confirm before submitting")],
        ),
    ])
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
    Choice,
    ConfirmSubmit,
}

impl Field for ContactField {
    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::Choice => "choice",
            Self::ConfirmSubmit => "confirmSubmit",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Name | Self::Email | Self::Subject | Self::Message | Self::Choice => {
                FieldKind::Text
            }
            Self::ConfirmSubmit => FieldKind::Flag,
        }
    }
}

/// The option picked from the contact form's dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactChoice {
    #[default]
    Num1,
    Num2,
    Num3,
}

impl ContactChoice {
    pub const ALL: [Self; 3] = [Self::Num1, Self::Num2, Self::Num3];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Num1 => "num1",
            Self::Num2 => "num2",
            Self::Num3 => "num3",
        }
    }
}

impl fmt::Display for ContactChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactChoice {
    type Err = ParseContactChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.as_str() == s)
            .ok_or_else(|| ParseContactChoiceError(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown choice `{0}`, expected one of num1, num2, num3")]
pub struct ParseContactChoiceError(pub String);

/// The raw values of the contact form as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub choice: ContactChoice,
    pub confirm_submit: bool,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> FieldValue<'_> {
        match field {
            ContactField::Name => FieldValue::Text(&self.name),
            ContactField::Email => FieldValue::Text(&self.email),
            ContactField::Subject => FieldValue::Text(&self.subject),
            ContactField::Message => FieldValue::Text(&self.message),
            ContactField::Choice => FieldValue::Text(self.choice.as_str()),
            ContactField::ConfirmSubmit => FieldValue::Flag(self.confirm_submit),
        }
    }

    pub fn validate(&self) -> ValidationErrors<ContactField> {
        CONTACT_FORM_RULES.validate(|field| self.value(field))
    }

    /// Validates the form and converts it into a trimmed submission.
    pub fn to_submission(&self) -> Result<ContactSubmission, ValidationErrors<ContactField>> {
        let errors = self.validate();
        if !errors.is_valid() {
            return Err(errors);
        }

        let subject = ContactSubject::new(self.subject.clone());
        Ok(ContactSubmission {
            name: ContactName::new(self.name.clone()),
            email: ContactEmail::new(self.email.clone()),
            subject: (!subject.is_empty()).then_some(subject),
            message: ContactMessage::new(self.message.clone()),
            choice: self.choice,
        })
    }

    /// Applies a single field edit and returns the edited field.
    pub fn apply(&mut self, change: ContactFieldChange) -> ContactField {
        let field = change.field();
        match change {
            ContactFieldChange::Name(name) => self.name = name,
            ContactFieldChange::Email(email) => self.email = email,
            ContactFieldChange::Subject(subject) => self.subject = subject,
            ContactFieldChange::Message(message) => self.message = message,
            ContactFieldChange::Choice(choice) => self.choice = choice,
            ContactFieldChange::ConfirmSubmit(confirm) => self.confirm_submit = confirm,
        }
        field
    }
}

/// A single edit of a contact form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFieldChange {
    Name(String),
    Email(String),
    Subject(String),
    Message(String),
    Choice(ContactChoice),
    ConfirmSubmit(bool),
}

impl ContactFieldChange {
    pub fn field(&self) -> ContactField {
        match self {
            Self::Name(_) => ContactField::Name,
            Self::Email(_) => ContactField::Email,
            Self::Subject(_) => ContactField::Subject,
            Self::Message(_) => ContactField::Message,
            Self::Choice(_) => ContactField::Choice,
            Self::ConfirmSubmit(_) => ContactField::ConfirmSubmit,
        }
    }
}

/// The state of a contact form between user interactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub values: ContactForm,
    pub errors: ValidationErrors<ContactField>,
    /// Set once a submit has been attempted, cleared when the form is reset.
    pub is_submitted: bool,
    /// Set after a successful submit until the next edit or submit.
    pub is_success: bool,
}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: Option<ContactSubject>,
    pub message: ContactMessage,
    pub choice: ContactChoice,
}

nutype_string!(ContactName);
nutype_string!(ContactEmail);
nutype_string!(ContactSubject);
nutype_string!(ContactMessage);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use snakepit_utils::assert_matches;

    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "  Max Mustermann ".into(),
            email: "max@example.com".into(),
            subject: "".into(),
            message: "Please add more vipers.".into(),
            choice: ContactChoice::Num2,
            confirm_submit: true,
        }
    }

    #[test]
    fn rules_are_well_formed() {
        let fields = CONTACT_FORM_RULES.fields().collect::<Vec<_>>();
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn valid() {
        assert!(valid_form().validate().is_valid());
    }

    #[test]
    fn default_form() {
        // Act
        let errors = ContactForm::default().validate();

        // Assert
        assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
        assert_eq!(errors.get(ContactField::Email), Some("Email is required"));
        assert_eq!(errors.get(ContactField::Subject), None);
        assert_eq!(
            errors.get(ContactField::Message),
            Some("Message is required")
        );
        assert_eq!(
            errors.get(ContactField::ConfirmSubmit),
            Some("Please confirm before submitting")
        );
        assert_eq!(errors.get(ContactField::Choice), None);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn short_name() {
        let form = ContactForm {
            name: "A".into(),
            ..valid_form()
        };

        let errors = form.validate();

        assert_eq!(
            errors.get(ContactField::Name),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn email_pattern() {
        for (email, valid) in [
            ("max@example.com", true),
            ("  max@example.com ", true),
            ("max.mustermann@mail.example.de", true),
            ("max@example", false),
            ("max example@example.com", false),
            ("@example.com", false),
            ("max@@example.com", false),
            ("max@.com", false),
        ] {
            let form = ContactForm {
                email: email.into(),
                ..valid_form()
            };
            assert_eq!(
                form.validate().get(ContactField::Email).is_none(),
                valid,
                "{email:?}"
            );
        }
    }

    #[test]
    fn subject_length() {
        let mut form = valid_form();

        form.subject = "x".repeat(CONTACT_SUBJECT_MAX_LENGTH);
        assert!(form.validate().is_valid());

        form.subject = "x".repeat(CONTACT_SUBJECT_MAX_LENGTH + 1);
        assert_eq!(
            form.validate().get(ContactField::Subject),
            Some("Subject must be at most 100 characters")
        );
    }

    #[test]
    fn short_message() {
        let form = ContactForm {
            message: "too short".into(),
            ..valid_form()
        };

        assert_eq!(
            form.validate().get(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn unconfirmed() {
        let form = ContactForm {
            confirm_submit: false,
            ..valid_form()
        };

        assert_eq!(
            form.validate().iter().map(|e| e.field).collect::<Vec<_>>(),
            [ContactField::ConfirmSubmit]
        );
    }

    #[test]
    fn to_submission_trims_values() {
        // Act
        let result = valid_form().to_submission();

        // Assert
        assert_eq!(
            result.unwrap(),
            ContactSubmission {
                name: ContactName::new(String::from("Max Mustermann")),
                email: ContactEmail::new(String::from("max@example.com")),
                subject: None,
                message: ContactMessage::new(String::from("Please add more vipers.")),
                choice: ContactChoice::Num2,
            }
        );
    }

    #[test]
    fn to_submission_invalid() {
        let form = ContactForm {
            name: "A".into(),
            ..valid_form()
        };

        assert_matches!(form.to_submission(), Err(errors) if errors.len() == 1);
    }

    #[test]
    fn apply_change() {
        let mut form = ContactForm::default();

        let field = form.apply(ContactFieldChange::Choice(ContactChoice::Num3));

        assert_eq!(field, ContactField::Choice);
        assert_eq!(form.choice, ContactChoice::Num3);
    }

    #[test]
    fn parse_choice() {
        assert_eq!("num2".parse::<ContactChoice>(), Ok(ContactChoice::Num2));
        assert_eq!(
            "num4".parse::<ContactChoice>(),
            Err(ParseContactChoiceError("num4".into()))
        );
        assert_eq!(ContactChoice::Num3.to_string(), "num3");
    }

    #[test]
    fn serialize_submission() {
        let submission = valid_form().to_submission().unwrap();

        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Max Mustermann",
                "email": "max@example.com",
                "subject": null,
                "message": "Please add more vipers.",
                "choice": "num2",
            })
        );
    }
}
