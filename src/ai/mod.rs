pub mod evaluator;
pub mod pacing;
pub mod strategy;

pub use strategy::{FirstLegalMoveSelector, MoveSelector, ScoredMove, choose_move, score_moves};
