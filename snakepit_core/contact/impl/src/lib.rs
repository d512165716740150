use snakepit_core_contact_contracts::{
    handler::ContactSubmissionHandler, ContactFeatureService, ContactSubmitError,
};
use snakepit_di::Build;
use snakepit_models::{
    contact::{
        ContactField, ContactFieldChange, ContactForm, ContactFormState, ContactSubmission,
        CONTACT_FORM_RULES,
    },
    validation::ValidationErrors,
};
use snakepit_utils::trace_instrument;
use tracing::debug;

pub mod handler;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Handler> {
    handler: Handler,
}

impl<Handler> ContactFeatureService for ContactFeatureServiceImpl<Handler>
where
    Handler: ContactSubmissionHandler,
{
    fn validate(&self, form: &ContactForm) -> ValidationErrors<ContactField> {
        form.validate()
    }

    #[trace_instrument(skip(self, state))]
    fn edit(&self, state: &mut ContactFormState, change: ContactFieldChange) {
        let field = state.values.apply(change);
        state.is_success = false;

        if state.is_submitted {
            let result = CONTACT_FORM_RULES.check_field(field, state.values.value(field));
            state.errors.set(field, result);
        }
    }

    #[trace_instrument(skip(self, state))]
    fn submit(
        &self,
        state: &mut ContactFormState,
    ) -> Result<ContactSubmission, ContactSubmitError> {
        state.is_success = false;
        state.is_submitted = true;

        let submission = match state.values.to_submission() {
            Ok(submission) => submission,
            Err(errors) => {
                debug!(invalid_fields = errors.len(), "Rejected contact form");
                state.errors = errors.clone();
                return Err(ContactSubmitError::Invalid(errors));
            }
        };

        self.handler.handle(&submission);

        *state = ContactFormState {
            is_success: true,
            ..Default::default()
        };

        Ok(submission)
    }
}
