use tracing::{debug, instrument};
use web_time::Instant;

use crate::ai::evaluator;
use crate::board::Board;
use crate::geometry::Coordinate;
use crate::rules::{capture_mask, legal_moves};
use crate::types::{Difficulty, Player};

/// Anything that can propose a move for `player` on `board`.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, player: Player) -> Option<Coordinate>;
}

impl MoveSelector for Difficulty {
    fn select_move(&self, board: &Board, player: Player) -> Option<Coordinate> {
        choose_move(board, player, *self)
    }
}

/// Plays the first legal move in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&self, board: &Board, player: Player) -> Option<Coordinate> {
        legal_moves(board, player).into_iter().next()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub at: Coordinate,
    pub score: f64,
}

/// Picks the best move for `player`, or `None` when it has no legal move.
/// Ties go to the move that comes first in row-major order.
#[instrument(skip(board), fields(board = %board))]
pub fn choose_move(board: &Board, player: Player, difficulty: Difficulty) -> Option<Coordinate> {
    let started = Instant::now();
    let scored = score_moves(board, player, difficulty);

    let mut best: Option<ScoredMove> = None;
    for candidate in scored {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    debug!(
        chosen = ?best.map(|b| b.at),
        score = ?best.map(|b| b.score),
        elapsed_us = started.elapsed().as_micros() as u64,
        "computer move chosen"
    );
    best.map(|b| b.at)
}

/// Scores every legal move of `player` in row-major order.
pub fn score_moves(board: &Board, player: Player, difficulty: Difficulty) -> Vec<ScoredMove> {
    let score_fn: fn(&Board, Coordinate, Player) -> f64 = match difficulty {
        Difficulty::Beginner => greedy_score,
        Difficulty::Professional => reply_aware_score,
    };

    legal_moves(board, player)
        .into_iter()
        .map(|at| ScoredMove {
            at,
            score: score_fn(board, at, player),
        })
        .collect()
}

fn greedy_score(board: &Board, at: Coordinate, player: Player) -> f64 {
    evaluator::score(board, at, player)
}

/// Own gain minus the opponent's best immediate reply (zero if it has none).
fn reply_aware_score(board: &Board, at: Coordinate, player: Player) -> f64 {
    let flips = capture_mask(board, at, player);
    if flips == 0 {
        return f64::NEG_INFINITY;
    }

    let mut simulated = *board;
    simulated.place(at, player, flips);

    let own = evaluator::score(board, at, player);

    let opponent = player.opposite();
    let opponent_best = legal_moves(&simulated, opponent)
        .into_iter()
        .map(|reply| evaluator::score(&simulated, reply, opponent))
        .fold(0.0, f64::max);

    own - opponent_best
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn at(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col)
    }

    /// Black can take a top-edge disc at (0,3), which hands White a three-disc
    /// edge sweep from the corner, or quietly flip (4,3) from (5,3).
    fn edge_trap() -> Board {
        Board::from_rows(&[
            ".BW.W...", "........", "........", "...B....", "...W....", "........", "........",
            "........",
        ])
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn no_legal_moves_yields_none() {
        let board = Board::from_rows(&[
            "B.......", "........", "........", "........", "........", "........", "........",
            ".......W",
        ])
        .unwrap();

        for difficulty in Difficulty::iter() {
            assert_eq!(choose_move(&board, Player::Black, difficulty), None);
            assert_eq!(choose_move(&board, Player::White, difficulty), None);
        }
    }

    #[test]
    fn ties_break_to_first_move_in_row_major_order() {
        let board = Board::new();

        for difficulty in Difficulty::iter() {
            assert_eq!(
                choose_move(&board, Player::Black, difficulty),
                Some(at(2, 3)),
                "{difficulty} as Black"
            );
            assert_eq!(
                choose_move(&board, Player::White, difficulty),
                Some(at(2, 4)),
                "{difficulty} as White"
            );
        }
    }

    #[test]
    fn opening_moves_all_score_the_same_for_professional() {
        let board = Board::new();

        for player in [Player::Black, Player::White] {
            let scored = score_moves(&board, player, Difficulty::Professional);

            assert_eq!(scored.len(), 4);
            // One interior flip each way: 1.0 - 1.0.
            for candidate in &scored {
                assert_close(candidate.score, 0.0);
            }
        }
    }

    #[test]
    fn beginner_takes_greedy_edge_capture() {
        let board = edge_trap();
        let scored = score_moves(&board, Player::Black, Difficulty::Beginner);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].at, at(0, 3));
        assert_close(scored[0].score, 2.4);
        assert_eq!(scored[1].at, at(5, 3));
        assert_close(scored[1].score, 1.0);
        assert_eq!(
            choose_move(&board, Player::Black, Difficulty::Beginner),
            Some(at(0, 3))
        );
    }

    #[test]
    fn professional_avoids_move_that_opens_edge_sweep() {
        let board = edge_trap();
        let scored = score_moves(&board, Player::Black, Difficulty::Professional);

        // (0,3): 2.4 - (0.8 + 3 * 2.0); (5,3): 1.0 - (0.8 + 2.0)
        assert_close(scored[0].score, -4.4);
        assert_close(scored[1].score, -1.8);
        assert_eq!(
            choose_move(&board, Player::Black, Difficulty::Professional),
            Some(at(5, 3))
        );
    }

    #[test]
    fn professional_scoring_never_mutates_the_input_board() {
        let board = edge_trap();
        let before = board;

        let _ = score_moves(&board, Player::Black, Difficulty::Professional);

        assert_eq!(board, before);
    }

    #[test]
    fn reply_without_opponent_moves_counts_as_zero() {
        // White's only move flips Black's last disc.
        let board = Board::from_rows(&[
            ".BW.....", "........", "........", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();
        let scored = score_moves(&board, Player::White, Difficulty::Professional);

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].at, at(0, 0));
        assert_close(scored[0].score, 2.8);
    }

    #[test]
    fn difficulty_selector_matches_choose_move() {
        let board = edge_trap();

        assert_eq!(
            Difficulty::Professional.select_move(&board, Player::Black),
            Some(at(5, 3))
        );
        assert_eq!(
            FirstLegalMoveSelector.select_move(&board, Player::Black),
            Some(at(0, 3))
        );
    }
}
