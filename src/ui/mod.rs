//! Terminal UI: player setup screens, the game board, and the replay prompt.

mod app;
pub mod board_widget;
mod game_view;

pub use app::{App, UiConfig};
