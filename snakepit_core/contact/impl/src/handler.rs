use snakepit_core_contact_contracts::handler::ContactSubmissionHandler;
use snakepit_di::Build;
use snakepit_models::contact::ContactSubmission;
use tracing::{debug, info};

/// Writes every submission to the diagnostic log.
#[derive(Debug, Clone, Build)]
pub struct LogContactSubmissionHandler {
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactFeatureConfig {
    /// Log submissions at info level instead of debug level.
    pub log_submissions: bool,
}

impl ContactSubmissionHandler for LogContactSubmissionHandler {
    fn handle(&self, submission: &ContactSubmission) {
        let subject = submission.subject.as_deref().map(String::as_str);
        if self.config.log_submissions {
            info!(
                submission.name = %submission.name,
                submission.email = %submission.email,
                submission.subject = subject,
                submission.message = %submission.message,
                submission.choice = %submission.choice,
                "Contact form submitted"
            );
        } else {
            debug!(submission.email = %submission.email, "Contact form submitted");
        }
    }
}
