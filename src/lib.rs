//! Reversi (Othello) engine: board model, move rules, turn handling and
//! two computer opponents.

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod rules;
pub mod table;
pub mod types;
pub mod wasm;

pub use ai::{MoveSelector, choose_move};
pub use board::Board;
pub use config::{GameConfig, GameMode};
pub use error::{ConfigError, CoordinateError, LayoutError, MoveError};
pub use game::{GameSession, MoveOutcome, TurnState};
pub use geometry::{Coordinate, Direction};
pub use table::Table;
pub use types::{Cell, Difficulty, DiscCounts, GameResult, GameSnapshot, Player};
