use snakepit_models::{
    contact::{ContactField, ContactFieldChange, ContactForm, ContactFormState, ContactSubmission},
    validation::ValidationErrors,
};
use thiserror::Error;

pub mod handler;

pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate the form values against the contact form rules.
    fn validate(&self, form: &ContactForm) -> ValidationErrors<ContactField>;

    /// Apply a single field edit to the form.
    ///
    /// - Clears the success flag of a previous submission.
    /// - Once a submit has been attempted, the edited field is validated again.
    fn edit(&self, state: &mut ContactFormState, change: ContactFieldChange);

    /// Submit the contact form.
    ///
    /// If the form is valid, the submission is handed to the configured
    /// submission handler, the form is reset to its defaults and the success
    /// flag is set. Otherwise the form keeps its values and the errors are
    /// stored in the state.
    fn submit(
        &self,
        state: &mut ContactFormState,
    ) -> Result<ContactSubmission, ContactSubmitError>;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The contact form contains {} invalid field(s).", .0.len())]
    Invalid(ValidationErrors<ContactField>),
}
