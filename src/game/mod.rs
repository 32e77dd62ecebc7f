//! Core Connect Four game logic: the gravity board engine, player identity,
//! and the turn orchestrator that drives one game.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Outcome, Position, StandardBoard, COLS, CONNECT, ROWS};
pub use player::{
    validate_name, Marker, MarkerPool, Player, PlayerId, PlayersConfig,
    MAX_NAME_LENGTH,
};
pub use state::{GameConfig, GameOutcome, GameState};
