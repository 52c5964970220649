use std::time::Duration;

use tracing::{instrument, warn};
use web_time::Instant;

use crate::ai::pacing::Pacer;
use crate::config::{GameConfig, GameMode};
use crate::error::MoveError;
use crate::game::{GameSession, MoveOutcome};
use crate::geometry::Coordinate;

/// A match between two humans, or a human and the computer.
///
/// Human input arrives through [`Table::human_move`]; the front-end polls
/// [`Table::poll_computer`] and the computer replies once its pause is over.
#[derive(Debug, Clone)]
pub struct Table {
    session: GameSession,
    mode: GameMode,
    pacer: Pacer,
}

impl Table {
    /// Starts a new match at `now`. If the computer opens, its pause starts here.
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        let mut table = Self {
            session: GameSession::new(),
            mode: config.mode,
            pacer: Pacer::new(config.ai_delay()),
        };
        table.start_turn(now);
        table
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn ai_delay(&self) -> Duration {
        self.pacer.delay()
    }

    pub fn reset(&mut self, now: Instant) {
        self.session.reset();
        self.start_turn(now);
    }

    /// True when the side to move is played by the computer.
    pub fn is_computer_turn(&self) -> bool {
        match (self.mode.computer(), self.session.current_player()) {
            (Some((computer, _)), Some(to_move)) => computer == to_move,
            _ => false,
        }
    }

    /// Applies a human move made at `now`. If it hands the turn to the
    /// computer, the computer's pause is counted from `now`.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, at: Coordinate, now: Instant) -> Result<MoveOutcome, MoveError> {
        if let Some((computer, _)) = self.mode.computer()
            && self.is_computer_turn()
        {
            return Err(MoveError::NotYourTurn {
                player: computer.opposite(),
            });
        }
        let outcome = self.session.try_apply_move(at)?;
        self.start_turn(now);
        Ok(outcome)
    }

    /// Plays the computer's move if it is the computer's turn and the pause
    /// since its turn began has elapsed. `None` means nothing was played.
    #[instrument(skip(self))]
    pub fn poll_computer(&mut self, now: Instant) -> Option<MoveOutcome> {
        let (_, difficulty) = self.mode.computer()?;
        if !self.is_computer_turn() {
            self.pacer.disarm();
            return None;
        }

        // No-op unless the turn began without a timestamp.
        self.pacer.arm(now);
        if !self.pacer.is_ready(now) {
            return None;
        }

        match self.session.play_ai_move(&difficulty) {
            Ok(outcome) => {
                // A forced pass can hand the computer another turn right away.
                self.start_turn(now);
                Some(outcome)
            }
            Err(err) => {
                warn!(%err, "computer could not move on its own turn");
                None
            }
        }
    }

    /// Restarts the pause at `now` when the computer is to move, clears it otherwise.
    fn start_turn(&mut self, now: Instant) {
        self.pacer.disarm();
        if self.is_computer_turn() {
            self.pacer.arm(now);
        }
    }
}
