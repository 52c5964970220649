use serde::Serialize;

use crate::error::CoordinateError;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A board coordinate. Both components are always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Creates a coordinate.
    ///
    /// # Panics
    /// Panics when `row` or `col` is outside `0..8`; use [`Coordinate::try_new`]
    /// for untrusted input.
    pub fn new(row: u8, col: u8) -> Self {
        match Self::try_new(row, col) {
            Ok(at) => at,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(row: u8, col: u8) -> Result<Self, CoordinateError> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(CoordinateError { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major square index in `0..64`.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_SQUARES, "square index out of range: {index}");
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    pub(crate) fn bit(self) -> u64 {
        1u64 << self.index()
    }

    /// The neighbouring coordinate in `direction`, or `None` past the edge.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let row = self.row as i8 + direction.d_row;
        let col = self.col as i8 + direction.d_col;
        if in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn is_corner(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    /// True for every cell on the outer ring, corners included.
    pub fn is_edge(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        self.row == 0 || self.row == last || self.col == 0 || self.col == last
    }

    /// All 64 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..NUM_SQUARES).map(Self::from_index)
    }
}

/// One of the eight unit scan directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(1, -1),
        Direction::new(1, 0),
        Direction::new(1, 1),
    ];

    const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

fn in_bounds(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col)
}

/// Expands an occupancy mask into coordinates, lowest index (row-major) first.
pub(crate) fn mask_to_coordinates(mask: u64) -> Vec<Coordinate> {
    let mut bits = mask;
    let mut out = Vec::with_capacity(bits.count_ones() as usize);

    while bits != 0 {
        out.push(Coordinate::from_index(bits.trailing_zeros() as usize));
        bits &= bits - 1;
    }

    out
}
