use snakepit_models::snake::{Snake, SnakeBoard, SnakeId, SnakeValidationError};
use thiserror::Error;

pub mod snake;

/// Drives the snake list view: the add/edit dialog, the delete confirmation
/// and the list itself.
///
/// Opening a dialog always replaces the dialog that is currently open.
pub trait SnakeFeatureService: Send + Sync + 'static {
    /// Open the dialog for adding a new snake with an empty draft.
    fn begin_add(&self, board: &mut SnakeBoard);

    /// Open the dialog for editing the snake with the given id and load its
    /// values into the draft.
    ///
    /// Does nothing if the snake does not exist.
    fn begin_edit(&self, board: &mut SnakeBoard, id: SnakeId);

    /// Close any open dialog and reset the draft.
    fn cancel(&self, board: &mut SnakeBoard);

    /// Save the draft of the open add/edit dialog.
    ///
    /// On success the dialog is closed and the draft is reset. On a
    /// validation failure the dialog stays open and the error is attached to
    /// the board.
    ///
    /// Returns `Ok(None)` if the edited snake no longer exists. The dialog is
    /// closed in that case, too.
    fn save(&self, board: &mut SnakeBoard) -> Result<Option<Snake>, SnakeSaveError>;

    /// Ask for confirmation before deleting the snake with the given id.
    fn request_delete(&self, board: &mut SnakeBoard, id: SnakeId);

    /// Delete the snake awaiting confirmation and close the dialog.
    ///
    /// Returns the deleted snake, if any.
    fn confirm_delete(&self, board: &mut SnakeBoard) -> Option<Snake>;
}

#[derive(Debug, Error)]
pub enum SnakeSaveError {
    #[error(transparent)]
    Validation(#[from] SnakeValidationError),
    #[error("No snake is being added or edited.")]
    NotEditing,
}
