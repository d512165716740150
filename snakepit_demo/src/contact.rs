use std::sync::LazyLock;

use snakepit_models::contact::{
    ContactChoice, ContactEmail, ContactForm, ContactMessage, ContactName, ContactSubject,
    ContactSubmission,
};

pub static VALID_FORM: LazyLock<ContactForm> = LazyLock::new(|| ContactForm {
    name: " Max Mustermann ".into(),
    email: "max.mustermann@example.de ".into(),
    subject: "  Feedback".into(),
    message: "Please add a section about sea snakes.".into(),
    choice: ContactChoice::Num2,
    confirm_submit: true,
});

pub static VALID_SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: ContactName::new("Max Mustermann".to_owned()),
    email: ContactEmail::new("max.mustermann@example.de".to_owned()),
    subject: Some(ContactSubject::new("Feedback".to_owned())),
    message: ContactMessage::new("Please add a section about sea snakes.".to_owned()),
    choice: ContactChoice::Num2,
});
