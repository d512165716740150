use std::process::ExitCode;

use clap::Args;
use snakepit_config::Config;
use snakepit_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use snakepit_di::Provides;
use snakepit_models::{
    contact::{ContactChoice, ContactFieldChange, ContactFormState},
    validation::Field,
};

use crate::environment::{types::ContactFeature, ConfigProvider, Provider};

pub const CONTACT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Your name
    #[arg(long, default_value = "")]
    name: String,
    /// Your email address
    #[arg(long, default_value = "")]
    email: String,
    /// The subject of the message
    #[arg(long, default_value = "")]
    subject: String,
    /// The message itself
    #[arg(long, default_value = "")]
    message: String,
    /// The selected option
    #[arg(long, default_value_t)]
    choice: ContactChoice,
    /// Confirm that the message should be sent
    #[arg(long)]
    confirm: bool,
}

impl ContactCommand {
    pub fn invoke(self, config: &Config) -> anyhow::Result<ExitCode> {
        let mut provider = Provider::new(ConfigProvider::new(config));
        let contact: ContactFeature = provider.provide();

        let mut state = ContactFormState::default();
        for change in self.into_changes() {
            contact.edit(&mut state, change);
        }

        match contact.submit(&mut state) {
            Ok(_) => {
                println!("{CONTACT_SUCCESS_MESSAGE}");
                Ok(ExitCode::SUCCESS)
            }
            Err(ContactSubmitError::Invalid(errors)) => {
                for error in errors.iter() {
                    println!("{}: {}", error.field.name(), error.message);
                }
                Ok(ExitCode::FAILURE)
            }
        }
    }

    fn into_changes(self) -> [ContactFieldChange; 6] {
        [
            ContactFieldChange::Name(self.name),
            ContactFieldChange::Email(self.email),
            ContactFieldChange::Subject(self.subject),
            ContactFieldChange::Message(self.message),
            ContactFieldChange::Choice(self.choice),
            ContactFieldChange::ConfirmSubmit(self.confirm),
        ]
    }
}
