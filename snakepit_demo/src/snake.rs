use std::sync::LazyLock;

use snakepit_models::snake::{
    Snake, SnakeCategory, SnakeCollection, SnakeDetails, SnakeName, SnakeScientificName,
};

pub static ALL_SNAKES: LazyLock<Vec<&Snake>> =
    LazyLock::new(|| vec![&COBRA, &CORN_SNAKE, &KING_COBRA, &BALL_PYTHON]);

pub static COBRA: LazyLock<Snake> =
    LazyLock::new(|| snake(1, "Cobra", "Naja naja", SnakeCategory::Venomous));

pub static CORN_SNAKE: LazyLock<Snake> = LazyLock::new(|| {
    snake(
        2,
        "Corn Snake",
        "Pantherophis guttatus",
        SnakeCategory::NonVenomous,
    )
});

pub static KING_COBRA: LazyLock<Snake> = LazyLock::new(|| {
    snake(
        3,
        "King Cobra",
        "Ophiophagus hannah",
        SnakeCategory::Venomous,
    )
});

pub static BALL_PYTHON: LazyLock<Snake> = LazyLock::new(|| {
    snake(
        4,
        "Ball Python",
        "Python regius",
        SnakeCategory::NonVenomous,
    )
});

/// A collection containing all demo snakes in order.
pub fn collection() -> SnakeCollection {
    ALL_SNAKES.iter().copied().cloned().collect()
}

fn snake(id: u64, name: &str, scientific_name: &str, category: SnakeCategory) -> Snake {
    Snake {
        id: id.into(),
        details: SnakeDetails {
            name: SnakeName::new(name.to_owned()),
            scientific_name: SnakeScientificName::new(scientific_name.to_owned()),
            category,
        },
    }
}
