use snakepit_models::contact::ContactSubmission;

/// Receives every successful contact form submission.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSubmissionHandler: Send + Sync + 'static {
    fn handle(&self, submission: &ContactSubmission);
}

#[cfg(feature = "mock")]
impl MockContactSubmissionHandler {
    pub fn with_handle(mut self, submission: ContactSubmission) -> Self {
        self.expect_handle()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_const(());
        self
    }
}
