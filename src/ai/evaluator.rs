use crate::board::Board;
use crate::geometry::Coordinate;
use crate::rules::captured_discs;
use crate::types::Player;

const CORNER_PLACEMENT: f64 = 0.8;
const EDGE_PLACEMENT: f64 = 0.4;
const INTERIOR_PLACEMENT: f64 = 0.0;
const EDGE_CAPTURE: f64 = 2.0;
const INTERIOR_CAPTURE: f64 = 1.0;

/// Static positional score of `mover` playing at `at`:
/// placement value of `at` plus the value of every disc it captures.
/// Illegal moves score negative infinity.
pub fn score(board: &Board, at: Coordinate, mover: Player) -> f64 {
    let captured = captured_discs(board, at, mover);
    if captured.is_empty() {
        return f64::NEG_INFINITY;
    }

    cell_value(at) + captured.into_iter().map(captured_value).sum::<f64>()
}

/// Value of occupying `at`.
pub fn cell_value(at: Coordinate) -> f64 {
    if at.is_corner() {
        CORNER_PLACEMENT
    } else if at.is_edge() {
        EDGE_PLACEMENT
    } else {
        INTERIOR_PLACEMENT
    }
}

/// Value of flipping the disc at `at`. Corners count as edges.
pub fn captured_value(at: Coordinate) -> f64 {
    if at.is_edge() {
        EDGE_CAPTURE
    } else {
        INTERIOR_CAPTURE
    }
}
