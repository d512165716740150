use snakepit_models::snake::{Snake, SnakeCollection, SnakeDraft, SnakeId, SnakeValidationError};

/// Create, update and delete snakes of a collection.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SnakeService: Send + Sync + 'static {
    /// Validate the draft and append a new snake with a fresh id.
    fn create(
        &self,
        snakes: &mut SnakeCollection,
        draft: &SnakeDraft,
    ) -> Result<Snake, SnakeValidationError>;

    /// Validate the draft and replace the fields of the snake with the given id
    /// in place.
    ///
    /// Returns `Ok(None)` if no such snake exists.
    fn update(
        &self,
        snakes: &mut SnakeCollection,
        id: SnakeId,
        draft: &SnakeDraft,
    ) -> Result<Option<Snake>, SnakeValidationError>;

    /// Remove the snake with the given id.
    ///
    /// Returns `None` if no such snake exists.
    fn delete(&self, snakes: &mut SnakeCollection, id: SnakeId) -> Option<Snake>;
}

#[cfg(feature = "mock")]
impl MockSnakeService {
    pub fn with_create(
        mut self,
        draft: SnakeDraft,
        result: Result<Snake, SnakeValidationError>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(draft))
            .return_once(|_, _| result);
        self
    }

    pub fn with_update(
        mut self,
        id: SnakeId,
        draft: SnakeDraft,
        result: Result<Option<Snake>, SnakeValidationError>,
    ) -> Self {
        self.expect_update()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(id),
                mockall::predicate::eq(draft),
            )
            .return_once(|_, _, _| result);
        self
    }

    pub fn with_delete(mut self, id: SnakeId, result: Option<Snake>) -> Self {
        self.expect_delete()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(id))
            .return_once(|_, _| result);
        self
    }
}
