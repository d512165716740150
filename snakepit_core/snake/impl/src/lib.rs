use snakepit_core_snake_contracts::{snake::SnakeService, SnakeFeatureService, SnakeSaveError};
use snakepit_di::Build;
use snakepit_models::{
    snake::{Snake, SnakeBoard, SnakeDraft, SnakeId, SnakeModal},
    validation::Field,
};
use snakepit_utils::trace_instrument;
use tracing::{debug, warn};

pub mod snake;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Build)]
pub struct SnakeFeatureServiceImpl<SnakeS> {
    snake: SnakeS,
}

impl<SnakeS> SnakeFeatureService for SnakeFeatureServiceImpl<SnakeS>
where
    SnakeS: SnakeService,
{
    #[trace_instrument(skip(self, board))]
    fn begin_add(&self, board: &mut SnakeBoard) {
        open(board, SnakeModal::Adding, SnakeDraft::default());
    }

    #[trace_instrument(skip(self, board))]
    fn begin_edit(&self, board: &mut SnakeBoard, id: SnakeId) {
        let Some(snake) = board.snakes.get(id) else {
            warn!(%id, "Cannot edit unknown snake");
            return;
        };

        let draft = SnakeDraft::from(&snake.details);
        open(board, SnakeModal::Editing(id), draft);
    }

    #[trace_instrument(skip(self, board))]
    fn cancel(&self, board: &mut SnakeBoard) {
        close(board);
    }

    #[trace_instrument(skip(self, board))]
    fn save(&self, board: &mut SnakeBoard) -> Result<Option<Snake>, SnakeSaveError> {
        let result = match board.modal {
            SnakeModal::Adding => self.snake.create(&mut board.snakes, &board.draft).map(Some),
            SnakeModal::Editing(id) => {
                let result = self.snake.update(&mut board.snakes, id, &board.draft);
                if let Ok(None) = result {
                    warn!(%id, "Edited snake no longer exists");
                }
                result
            }
            SnakeModal::Closed | SnakeModal::ConfirmingDelete(_) => {
                return Err(SnakeSaveError::NotEditing)
            }
        };

        match result {
            Ok(snake) => {
                close(board);
                Ok(snake)
            }
            Err(err) => {
                debug!(field = err.field.name(), message = err.message, "Rejected snake");
                board.error = Some(err);
                Err(err.into())
            }
        }
    }

    #[trace_instrument(skip(self, board))]
    fn request_delete(&self, board: &mut SnakeBoard, id: SnakeId) {
        open(board, SnakeModal::ConfirmingDelete(id), SnakeDraft::default());
    }

    #[trace_instrument(skip(self, board))]
    fn confirm_delete(&self, board: &mut SnakeBoard) -> Option<Snake> {
        let SnakeModal::ConfirmingDelete(id) = board.modal else {
            return None;
        };

        let deleted = self.snake.delete(&mut board.snakes, id);
        close(board);
        deleted
    }
}

fn open(board: &mut SnakeBoard, modal: SnakeModal, draft: SnakeDraft) {
    board.modal = modal;
    board.draft = draft;
    board.error = None;
}

fn close(board: &mut SnakeBoard) {
    open(board, SnakeModal::Closed, SnakeDraft::default());
}
