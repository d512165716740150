use snakepit_core_snake_contracts::snake::SnakeService;
use snakepit_di::Build;
use snakepit_models::snake::{Snake, SnakeCollection, SnakeDraft, SnakeId, SnakeValidationError};
use snakepit_shared_contracts::id::IdService;
use snakepit_utils::trace_instrument;

#[derive(Debug, Clone, Default, Build)]
pub struct SnakeServiceImpl<Id> {
    id: Id,
}

impl<Id> SnakeService for SnakeServiceImpl<Id>
where
    Id: IdService,
{
    #[trace_instrument(skip(self, snakes))]
    fn create(
        &self,
        snakes: &mut SnakeCollection,
        draft: &SnakeDraft,
    ) -> Result<Snake, SnakeValidationError> {
        let details = draft.validate()?;

        let snake = Snake {
            id: self.id.generate(),
            details,
        };
        snakes.push(snake.clone());

        Ok(snake)
    }

    #[trace_instrument(skip(self, snakes))]
    fn update(
        &self,
        snakes: &mut SnakeCollection,
        id: SnakeId,
        draft: &SnakeDraft,
    ) -> Result<Option<Snake>, SnakeValidationError> {
        let details = draft.validate()?;

        let Some(snake) = snakes.get_mut(id) else {
            return Ok(None);
        };
        snake.details = details;

        Ok(Some(snake.clone()))
    }

    #[trace_instrument(skip(self, snakes))]
    fn delete(&self, snakes: &mut SnakeCollection, id: SnakeId) -> Option<Snake> {
        snakes.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use snakepit_demo::snake::{collection, BALL_PYTHON, COBRA, CORN_SNAKE, KING_COBRA};
    use snakepit_models::{
        snake::{SnakeCategory, SnakeDetails, SnakeField, SnakeName, SnakeScientificName},
        validation::ValidationError,
    };
    use snakepit_shared_contracts::id::MockIdService;
    use snakepit_utils::assert_matches;

    use super::*;

    fn draft(name: &str, scientific_name: &str, category: SnakeCategory) -> SnakeDraft {
        SnakeDraft {
            name: name.into(),
            scientific_name: scientific_name.into(),
            category,
        }
    }

    fn ids(snakes: &SnakeCollection) -> Vec<u64> {
        snakes.iter().map(|snake| *snake.id).collect()
    }

    #[test]
    fn create_ok() {
        // Arrange
        let id = MockIdService::new().with_generate(SnakeId::from(17u64));
        let sut = SnakeServiceImpl { id };

        let mut snakes = collection();
        let draft = draft(" Black Mamba  ", "Dendroaspis polylepis", SnakeCategory::Venomous);

        // Act
        let result = sut.create(&mut snakes, &draft);

        // Assert
        let expected = Snake {
            id: SnakeId::from(17u64),
            details: SnakeDetails {
                name: SnakeName::new("Black Mamba".to_owned()),
                scientific_name: SnakeScientificName::new("Dendroaspis polylepis".to_owned()),
                category: SnakeCategory::Venomous,
            },
        };
        assert_eq!(result.unwrap(), expected);
        assert_eq!(ids(&snakes), [1, 2, 3, 4, 17]);
        assert_eq!(snakes.get(SnakeId::from(17u64)), Some(&expected));
    }

    #[test]
    fn create_invalid_name() {
        for name in ["", "  ", "X"] {
            // Arrange
            let sut = SnakeServiceImpl {
                id: MockIdService::new(),
            };
            let mut snakes = collection();

            // Act
            let result = sut.create(
                &mut snakes,
                &draft(name, "Dendroaspis polylepis", SnakeCategory::Venomous),
            );

            // Assert
            assert_matches!(
                result,
                Err(ValidationError {
                    field: SnakeField::Name,
                    ..
                })
            );
            assert_eq!(snakes, collection());
        }
    }

    #[test]
    fn create_missing_scientific_name() {
        let sut = SnakeServiceImpl {
            id: MockIdService::new(),
        };
        let mut snakes = collection();

        let result = sut.create(&mut snakes, &draft("Black Mamba", "", SnakeCategory::Venomous));

        assert_eq!(
            result,
            Err(ValidationError {
                field: SnakeField::ScientificName,
                message: "Scientific name is required",
            })
        );
        assert_eq!(snakes.len(), 4);
    }

    #[test]
    fn update_ok() {
        // Arrange
        let sut = SnakeServiceImpl {
            id: MockIdService::new(),
        };
        let mut snakes = collection();

        // Act
        let result = sut.update(
            &mut snakes,
            CORN_SNAKE.id,
            &draft("Red Rat Snake", " Pantherophis guttatus ", SnakeCategory::NonVenomous),
        );

        // Assert
        let updated = result.unwrap().unwrap();
        assert_eq!(updated.id, CORN_SNAKE.id);
        assert_eq!(*updated.details.name, "Red Rat Snake");
        assert_eq!(ids(&snakes), [1, 2, 3, 4]);
        assert_eq!(snakes.iter().nth(1), Some(&updated));
        assert_eq!(snakes.get(COBRA.id), Some(&*COBRA));
    }

    #[test]
    fn update_not_found() {
        let sut = SnakeServiceImpl {
            id: MockIdService::new(),
        };
        let mut snakes = collection();

        let result = sut.update(
            &mut snakes,
            SnakeId::from(42u64),
            &draft("Black Mamba", "Dendroaspis polylepis", SnakeCategory::Venomous),
        );

        assert_eq!(result, Ok(None));
        assert_eq!(snakes, collection());
    }

    #[test]
    fn update_invalid() {
        let sut = SnakeServiceImpl {
            id: MockIdService::new(),
        };
        let mut snakes = collection();

        let result = sut.update(
            &mut snakes,
            KING_COBRA.id,
            &draft("K", "Ophiophagus hannah", SnakeCategory::Venomous),
        );

        assert_matches!(
            result,
            Err(ValidationError {
                field: SnakeField::Name,
                ..
            })
        );
        assert_eq!(snakes, collection());
    }

    #[test]
    fn delete_ok() {
        let sut = SnakeServiceImpl {
            id: MockIdService::new(),
        };
        let mut snakes = collection();

        let result = sut.delete(&mut snakes, KING_COBRA.id);

        assert_eq!(result.as_ref(), Some(&*KING_COBRA));
        assert_eq!(ids(&snakes), [1, 2, 4]);
        assert!(!snakes.contains(KING_COBRA.id));
    }

    #[test]
    fn delete_not_found() {
        let sut = SnakeServiceImpl {
            id: MockIdService::new(),
        };
        let mut snakes = collection();

        let result = sut.delete(&mut snakes, SnakeId::from(42u64));

        assert_eq!(result, None);
        assert_eq!(snakes, collection());
        assert_eq!(snakes.get(BALL_PYTHON.id), Some(&*BALL_PYTHON));
    }
}
