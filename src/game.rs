use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::ai::{MoveSelector, choose_move};
use crate::board::Board;
use crate::error::MoveError;
use crate::geometry::{Coordinate, mask_to_coordinates};
use crate::rules::{capture_mask, has_legal_move, legal_moves};
use crate::types::{Difficulty, DiscCounts, GameResult, GameSnapshot, Player};

/// Where a session stands between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TurnState {
    AwaitingMove { player: Player },
    /// `winner` is `None` for a draw.
    GameOver { winner: Option<Player> },
}

/// What a successful move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub player: Player,
    pub placed: Coordinate,
    pub flipped: Vec<Coordinate>,
    /// Set when the opponent had no reply and was skipped.
    pub passed: Option<Player>,
    pub next: TurnState,
}

/// A live game: the board plus whose turn it is. All mutation goes through here.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    state: TurnState,
    last_flipped: Vec<Coordinate>,
    last_passed: Option<Player>,
}

impl GameSession {
    /// Standard opening position, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: TurnState::AwaitingMove {
                player: Player::Black,
            },
            last_flipped: Vec::new(),
            last_passed: None,
        }
    }

    /// Starts from an arbitrary position. If `to_move` cannot move the turn
    /// passes to the opponent, and if neither side can move the game is over.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let (state, passed) = settle(&board, to_move);
        Self {
            board,
            state,
            last_flipped: Vec::new(),
            last_passed: passed,
        }
    }

    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Side to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            TurnState::AwaitingMove { player } => Some(player),
            TurnState::GameOver { .. } => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Player> {
        match self.state {
            TurnState::GameOver { winner } => winner,
            TurnState::AwaitingMove { .. } => None,
        }
    }

    pub fn disc_counts(&self) -> DiscCounts {
        self.board.counts()
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Coordinate> {
        self.current_player()
            .map(|player| legal_moves(&self.board, player))
            .unwrap_or_default()
    }

    /// Applies a move for the side to move. Returns `false`, leaving the
    /// session untouched, when the move is illegal or the game is over.
    pub fn apply_move(&mut self, at: Coordinate) -> bool {
        self.try_apply_move(at).is_ok()
    }

    #[instrument(skip(self))]
    pub fn try_apply_move(&mut self, at: Coordinate) -> Result<MoveOutcome, MoveError> {
        let player = self.current_player().ok_or(MoveError::GameOver)?;

        let flips = capture_mask(&self.board, at, player);
        if flips == 0 {
            return Err(MoveError::Illegal { at, player });
        }

        self.board.place(at, player, flips);
        let (next, passed) = settle(&self.board, player.opposite());
        self.state = next;
        self.last_flipped = mask_to_coordinates(flips);
        self.last_passed = passed;

        let counts = self.board.counts();
        debug!(
            %player,
            flipped = self.last_flipped.len(),
            black = counts.black,
            white = counts.white,
            "move applied"
        );
        if let Some(skipped) = passed {
            debug!(%skipped, "no legal move, turn passes back");
        }
        if let TurnState::GameOver { winner } = next {
            info!(?winner, black = counts.black, white = counts.white, "game over");
        }

        Ok(MoveOutcome {
            player,
            placed: at,
            flipped: self.last_flipped.clone(),
            passed,
            next,
        })
    }

    /// Lets `selector` pick the move for the side to move and applies it.
    #[instrument(skip(self, selector))]
    pub fn play_ai_move<S: MoveSelector + ?Sized>(
        &mut self,
        selector: &S,
    ) -> Result<MoveOutcome, MoveError> {
        let player = self.current_player().ok_or(MoveError::GameOver)?;
        if !has_legal_move(&self.board, player) {
            return Err(MoveError::NoLegalMove { player });
        }

        let at = selector
            .select_move(&self.board, player)
            .ok_or(MoveError::SelectorFailed { player })?;

        self.try_apply_move(at).inspect_err(|err| {
            warn!(%player, %at, %err, "selector proposed a move that was rejected");
        })
    }

    /// Best move for `player` at `difficulty` on the current board.
    /// Looks ahead on a copy; the session itself is never touched.
    pub fn choose_ai_move(&self, player: Player, difficulty: Difficulty) -> Option<Coordinate> {
        choose_move(&self.board, player, difficulty)
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            TurnState::GameOver { winner } => {
                let counts = self.board.counts();
                Some(GameResult {
                    winner,
                    black_count: counts.black,
                    white_count: counts.white,
                })
            }
            TurnState::AwaitingMove { .. } => None,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let counts = self.board.counts();
        GameSnapshot {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player(),
            black_count: counts.black,
            white_count: counts.white,
            is_game_over: self.is_game_over(),
            winner: self.winner(),
            legal_moves: self.legal_moves(),
            flipped: self.last_flipped.clone(),
            passed: self.last_passed,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands the turn to `candidate` if it can move, otherwise back to the other
/// side (a forced pass, reported as the second value), otherwise ends the game.
fn settle(board: &Board, candidate: Player) -> (TurnState, Option<Player>) {
    if has_legal_move(board, candidate) {
        return (TurnState::AwaitingMove { player: candidate }, None);
    }

    let other = candidate.opposite();
    if has_legal_move(board, other) {
        return (TurnState::AwaitingMove { player: other }, Some(candidate));
    }

    (
        TurnState::GameOver {
            winner: winner_by_count(board.counts()),
        },
        None,
    )
}

fn winner_by_count(counts: DiscCounts) -> Option<Player> {
    if counts.black > counts.white {
        Some(Player::Black)
    } else if counts.white > counts.black {
        Some(Player::White)
    } else {
        None
    }
}
