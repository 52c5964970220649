use std::fmt;

use crate::error::LayoutError;
use crate::geometry::{BOARD_SIZE, Coordinate, NUM_SQUARES};
use crate::types::{Cell, DiscCounts, Player};

/// Reversi board state represented by two bitboards.
///
/// The board is a plain `Copy` value: copying it is the deep copy the
/// computer opponent simulates on, so simulations never touch a live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=white, (3,4)=black, (4,3)=black, (4,4)=white.
    pub fn new() -> Self {
        Self {
            black: Coordinate::new(3, 4).bit() | Coordinate::new(4, 3).bit(),
            white: Coordinate::new(3, 3).bit() | Coordinate::new(4, 4).bit(),
        }
    }

    /// Parses eight rows of eight cells: `B`/`X` black, `W`/`O` white, `.`/`-` empty.
    /// Whitespace inside a row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, LayoutError> {
        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::RowCount { rows: rows.len() });
        }

        let mut board = Self { black: 0, white: 0 };
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(LayoutError::RowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, symbol) in cells.into_iter().enumerate() {
                let square = 1u64 << (row * BOARD_SIZE + col);
                match symbol.to_ascii_uppercase() {
                    'B' | 'X' => board.black |= square,
                    'W' | 'O' => board.white |= square,
                    '.' | '-' => {}
                    _ => return Err(LayoutError::Symbol { row, col, symbol }),
                }
            }
        }

        Ok(board)
    }

    pub fn cell(&self, at: Coordinate) -> Cell {
        let square = at.bit();
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    pub fn is_empty_at(&self, at: Coordinate) -> bool {
        (self.occupied() & at.bit()) == 0
    }

    pub fn counts(&self) -> DiscCounts {
        DiscCounts {
            black: self.black.count_ones() as u8,
            white: self.white.count_ones() as u8,
        }
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        self.counts().empty()
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut cells = [0u8; NUM_SQUARES];
        for (at, code) in Coordinate::all().zip(cells.iter_mut()) {
            *code = self.cell(at).code();
        }
        cells
    }

    /// `(own, opponent)` occupancy masks from `player`'s point of view.
    pub(crate) fn sides(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    pub(crate) fn occupied(&self) -> u64 {
        self.black | self.white
    }

    /// Puts a `player` disc at `at` and turns every square in `flips` to `player`.
    /// Legality is the caller's concern.
    pub(crate) fn place(&mut self, at: Coordinate, player: Player, flips: u64) {
        debug_assert!(self.is_empty_at(at), "placing on occupied square {at}");

        let gained = at.bit() | flips;
        match player {
            Player::Black => {
                self.black |= gained;
                self.white &= !flips;
            }
            Player::White => {
                self.white |= gained;
                self.black &= !flips;
            }
        }

        debug_assert_eq!(self.black & self.white, 0);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, at) in Coordinate::all().enumerate() {
            let symbol = match self.cell(at) {
                Cell::Empty => '.',
                Cell::Black => 'B',
                Cell::White => 'W',
            };
            write!(f, "{symbol}")?;
            if i % BOARD_SIZE == BOARD_SIZE - 1 && i + 1 < NUM_SQUARES {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_has_four_center_discs() {
        let board = Board::new();

        assert_eq!(board.cell(Coordinate::new(3, 3)), Cell::White);
        assert_eq!(board.cell(Coordinate::new(4, 4)), Cell::White);
        assert_eq!(board.cell(Coordinate::new(3, 4)), Cell::Black);
        assert_eq!(board.cell(Coordinate::new(4, 3)), Cell::Black);
        assert_eq!(board.counts(), DiscCounts { black: 2, white: 2 });
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn place_sets_disc_and_flips_mask() {
        let mut board = Board::new();
        let at = Coordinate::new(2, 3);

        board.place(at, Player::Black, Coordinate::new(3, 3).bit());

        assert_eq!(board.counts(), DiscCounts { black: 4, white: 1 });
        let cells = board.to_array();
        assert_eq!(cells[at.index()], 1);
        assert_eq!(cells[Coordinate::new(3, 3).index()], 1);
        assert_eq!(cells[Coordinate::new(4, 4).index()], 2);
    }

    #[test]
    fn copies_are_independent() {
        let original = Board::new();
        let mut copy = original;

        copy.place(Coordinate::new(2, 3), Player::Black, Coordinate::new(3, 3).bit());

        assert_eq!(original, Board::new());
        assert_ne!(copy, original);
    }

    #[test]
    fn from_rows_round_trips_through_display() {
        let rows = [
            "B.......", "........", "........", "...WB...", "...BW...", "........", "........",
            ".......W",
        ];
        let board = Board::from_rows(&rows).unwrap();

        assert_eq!(board.to_string(), rows.join("\n"));
        assert_eq!(board.cell(Coordinate::new(0, 0)), Cell::Black);
        assert_eq!(board.cell(Coordinate::new(7, 7)), Cell::White);
    }

    #[test]
    fn from_rows_rejects_malformed_layouts() {
        assert_eq!(
            Board::from_rows(&["........"]).unwrap_err(),
            LayoutError::RowCount { rows: 1 }
        );

        let mut rows = ["........"; 8];
        rows[2] = ".......";
        assert_eq!(
            Board::from_rows(&rows).unwrap_err(),
            LayoutError::RowLength { row: 2, len: 7 }
        );

        rows[2] = "...?....";
        assert_eq!(
            Board::from_rows(&rows).unwrap_err(),
            LayoutError::Symbol {
                row: 2,
                col: 3,
                symbol: '?'
            }
        );
    }
}
