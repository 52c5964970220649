//! Error types for the engine and its outer surfaces.

use derive_more::{Display, Error, From};

use crate::geometry::Coordinate;
use crate::types::Player;

/// A row or column outside the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("coordinate ({row}, {col}) is out of range for an 8x8 board")]
pub struct CoordinateError {
    pub row: u8,
    pub col: u8,
}

/// Why a move was not applied. The session is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("game is already over")]
    GameOver,
    #[display("{at} is not a legal move for {player}")]
    Illegal { at: Coordinate, player: Player },
    #[display("{player} has no legal moves")]
    NoLegalMove { player: Player },
    #[display("it is not {player}'s turn")]
    NotYourTurn { player: Player },
    #[display("move selector returned no move for {player}")]
    SelectorFailed { player: Player },
}

/// Text board layout could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum LayoutError {
    #[display("expected 8 rows, got {rows}")]
    RowCount { rows: usize },
    #[display("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
    #[display("unexpected cell {symbol:?} at row {row}, column {col}")]
    Symbol { row: usize, col: usize, symbol: char },
}

#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("invalid game config: {_0}")]
    Toml(toml::de::Error),
}
