//! # Connect Four
//!
//! Two-player Connect Four in the terminal. Players enter their names, pick a
//! disc color, and take turns dropping discs into a 6×7 board until one of
//! them connects four or the board fills up.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: gravity board engine, players, turn order
//! - [`ui`]: Terminal UI built with Ratatui: setup screens, board, replay
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: File-backed `log` output
//! - [`error`]: Structured error types
//!
//! ## Example
//!
//! ```
//! use connect_four::game::{Marker, Outcome, StandardBoard};
//!
//! let mut board = StandardBoard::new();
//! for token in ["1", "2", "3", "4"] {
//!     let column = board.parse_move(token).unwrap();
//!     board.apply_move(column, Marker::Red);
//! }
//! assert_eq!(board.result(), Some(Outcome::Win(Marker::Red)));
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
