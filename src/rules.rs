//! Move legality and capture resolution. Pure functions over a board snapshot.

use crate::board::Board;
use crate::geometry::{Coordinate, Direction, NUM_SQUARES, mask_to_coordinates};
use crate::types::Player;

/// Opposing discs that `mover` would flip by playing at `at`, in row-major order.
/// Empty when `at` is occupied or captures nothing, i.e. when the move is illegal.
pub fn captured_discs(board: &Board, at: Coordinate, mover: Player) -> Vec<Coordinate> {
    mask_to_coordinates(capture_mask(board, at, mover))
}

pub fn is_legal(board: &Board, at: Coordinate, mover: Player) -> bool {
    capture_mask(board, at, mover) != 0
}

/// Every legal move for `mover`, in row-major order.
pub fn legal_moves(board: &Board, mover: Player) -> Vec<Coordinate> {
    mask_to_coordinates(legal_mask(board, mover))
}

pub fn has_legal_move(board: &Board, mover: Player) -> bool {
    legal_mask(board, mover) != 0
}

pub(crate) fn legal_mask(board: &Board, mover: Player) -> u64 {
    let occupied = board.occupied();
    let mut legal = 0u64;

    for index in 0..NUM_SQUARES {
        let at = Coordinate::from_index(index);
        if (occupied & at.bit()) != 0 {
            continue;
        }
        if capture_mask(board, at, mover) != 0 {
            legal |= at.bit();
        }
    }

    legal
}

/// Bitmask of the discs captured by `mover` at `at`; zero when illegal.
pub(crate) fn capture_mask(board: &Board, at: Coordinate, mover: Player) -> u64 {
    if !board.is_empty_at(at) {
        return 0;
    }

    let (me, opp) = board.sides(mover);
    let mut flips = 0u64;

    for direction in Direction::ALL {
        let mut line = 0u64;
        let mut cursor = at.step(direction);

        while let Some(square) = cursor {
            let bit = square.bit();
            if (opp & bit) != 0 {
                line |= bit;
            } else {
                if (me & bit) != 0 {
                    flips |= line;
                }
                break;
            }
            cursor = square.step(direction);
        }
    }

    flips
}
