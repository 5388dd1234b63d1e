//! Core Connect Four game logic: board representation, player types, winner
//! identification, and the game state machine with immutable transitions.

mod board;
mod player;
mod referee;
mod state;

pub use board::{Board, Cell, MoveError, COLS, ROWS};
pub use player::Player;
pub use referee::{identify_winner, is_terminal, GameOutcome};
pub use state::{GameState, StateError};
