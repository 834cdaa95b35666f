use torus_snake::config::GameConfig;
use torus_snake::food::Food;
use torus_snake::game::{GameState, GameStatus};
use torus_snake::grid::{GridSize, Position};
use torus_snake::input::{Direction, GameInput};
use torus_snake::snake::Snake;

fn config(width: u16, height: u16) -> GameConfig {
    GameConfig {
        grid: GridSize { width, height },
        ..GameConfig::default()
    }
}

#[test]
fn eat_grow_and_relocate_food() {
    let mut state = GameState::new_with_seed(config(10, 10), 42).unwrap();
    state.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
    state.food = Food::at(Position { x: 6, y: 5 });

    // One tick moves the head onto the food.
    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
    assert_eq!(state.score, 1);
    assert_ne!(state.food.position, Position { x: 6, y: 5 });
    assert!(!state.snake.occupies(state.food.position));

    // Growth trails by one tick: length catches up on the next one.
    state.food = Food::at(Position { x: 0, y: 0 });
    state.tick();
    assert_eq!(state.snake.len(), 2);
}

#[test]
fn full_lap_around_the_torus_is_survivable() {
    let mut state = GameState::new_with_seed(config(6, 4), 7).unwrap();
    state.snake = Snake::new(Position { x: 0, y: 2 }, Direction::Right);
    state.food = Food::at(Position { x: 3, y: 0 });

    // Six ticks bring a one-cell snake right around to where it began.
    for _ in 0..6 {
        state.tick();
        assert_eq!(state.status, GameStatus::Playing);
    }

    assert_eq!(state.snake.head(), Position { x: 0, y: 2 });
}

#[test]
fn pause_freezes_the_run_and_resume_continues_it() {
    let mut state = GameState::new_with_seed(config(8, 8), 3).unwrap();
    state.snake = Snake::new(Position { x: 2, y: 2 }, Direction::Down);
    state.food = Food::at(Position { x: 7, y: 7 });

    state.tick();
    let head = state.snake.head();

    state.apply_input(GameInput::Pause);
    for _ in 0..5 {
        state.tick();
    }
    assert_eq!(state.snake.head(), head);
    assert_eq!(state.tick_count, 1);

    state.apply_input(GameInput::Pause);
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 2, y: 4 });
}

#[test]
fn steering_into_food_then_into_the_tail() {
    let mut state = GameState::new_with_seed(config(6, 4), 42).unwrap();
    state.snake = Snake::new(Position { x: 1, y: 1 }, Direction::Right);
    state.food = Food::at(Position { x: 2, y: 1 });

    state.tick();
    assert_eq!(state.score, 1);

    // Grow a few more times by chasing pinned food along the row.
    for x in 3..6 {
        state.food = Food::at(Position { x, y: 1 });
        state.tick();
    }
    assert_eq!(state.score, 4);
    assert!(state.snake.len() >= 4);

    // Loop back into the body: Down, Left, Up revisits a body cell.
    state.food = Food::at(Position { x: 0, y: 3 });
    state.apply_input(GameInput::Direction(Direction::Down));
    state.tick();
    state.apply_input(GameInput::Direction(Direction::Left));
    state.tick();
    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();

    assert_eq!(state.status, GameStatus::GameOver);
}
