//! Snake on a toroidal grid.
//!
//! The simulation core (`grid`, `snake`, `food`, `game`) is pure and
//! deterministic when seeded; everything that touches the terminal lives
//! in `renderer`, `ui`, `terminal_runtime`, and the binary's loop driver.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
