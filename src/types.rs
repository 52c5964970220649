use serde::{Deserialize, Serialize};

use crate::geometry::Coordinate;

/// One of the two sides. Black always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Player {
    #[display("Black")]
    Black,
    #[display("White")]
    White,
}

impl Player {
    pub fn opposite(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Self::Black => Cell::Black,
            Self::White => Cell::White,
        }
    }
}

/// Occupancy of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Wire encoding used by snapshots: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Black => 1,
            Self::White => 2,
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Player::Black),
            Self::White => Some(Player::White),
        }
    }
}

/// Strength tier of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Difficulty {
    /// Greedy: best immediate move.
    #[default]
    #[display("Beginner")]
    Beginner,
    /// Also weighs the opponent's best reply.
    #[display("Professional")]
    Professional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscCounts {
    pub black: u8,
    pub white: u8,
}

impl DiscCounts {
    pub fn empty(self) -> u8 {
        crate::geometry::NUM_SQUARES as u8 - self.black - self.white
    }

    pub fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

/// Public game state handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    /// Row-major cells, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    /// Side to move; `None` once the game is over.
    pub current_player: Option<Player>,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    pub winner: Option<Player>,
    /// Hints for the side to move; empty once the game is over.
    pub legal_moves: Vec<Coordinate>,
    /// Contract:
    /// - Normal move: the discs flipped by the previous move.
    /// - New game: must be an empty list.
    pub flipped: Vec<Coordinate>,
    /// The player skipped by a forced pass after the previous move, if any.
    pub passed: Option<Player>,
}

/// Final result after game over. `winner` is `None` for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub black_count: u8,
    pub white_count: u8,
}
