use std::fmt::Debug;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait IdService: Send + Sync + 'static {
    /// Generates a new unique ID.
    ///
    /// IDs are strictly increasing and never reused within a process.
    fn generate<I: From<u64> + Debug + 'static>(&self) -> I;
}

#[cfg(feature = "mock")]
impl MockIdService {
    pub fn with_generate<I: From<u64> + Debug + Send + 'static>(mut self, id: I) -> Self {
        self.expect_generate().once().return_once(|| id);
        self
    }
}
