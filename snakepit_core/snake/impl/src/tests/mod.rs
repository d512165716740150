use snakepit_core_snake_contracts::snake::MockSnakeService;
use snakepit_demo::snake::collection;
use snakepit_models::snake::SnakeBoard;

use crate::SnakeFeatureServiceImpl;


type Sut = SnakeFeatureServiceImpl<MockSnakeService>;

fn demo_board() -> SnakeBoard {
    SnakeBoard::new(collection())
}
