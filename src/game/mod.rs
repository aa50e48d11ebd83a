//! Core Connect Four game logic: board representation, run detection,
//! center-out column ordering, and the turn state machine.

mod board;
mod ordering;
mod player;
mod sequence;
mod state;

pub use board::{Board, Cell, CONNECT_N, DEFAULT_COLS, DEFAULT_ROWS};
pub use ordering::column_order;
pub use player::Player;
pub use sequence::{has_run, has_run_through};
pub use state::{GameOutcome, GameState};
