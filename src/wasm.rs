//! Browser bindings. Thin wrappers over [`Table`]; all rules live elsewhere.

use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::config::GameConfig;
use crate::geometry::Coordinate;
use crate::table::Table;
use crate::types::{Difficulty, Player};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

#[wasm_bindgen]
pub struct ReversiGame {
    table: Table,
}

#[wasm_bindgen]
impl ReversiGame {
    /// `config` is optional TOML text; an empty string means two humans.
    #[wasm_bindgen(constructor)]
    pub fn new(config: &str) -> Result<ReversiGame, JsError> {
        let config = GameConfig::from_toml_str(config)?;
        Ok(Self {
            table: Table::new(&config, Instant::now()),
        })
    }

    pub fn reset(&mut self) {
        self.table.reset(Instant::now());
    }

    /// Human move at `(row, col)`. `false` means it was rejected.
    pub fn place(&mut self, row: u8, col: u8) -> Result<bool, JsError> {
        let at = Coordinate::try_new(row, col)?;
        Ok(self.table.human_move(at, Instant::now()).is_ok())
    }

    /// Call from a timer; returns the computer's move outcome, or `undefined`.
    pub fn tick(&mut self) -> Result<JsValue, JsError> {
        let outcome = self.table.poll_computer(Instant::now());
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    /// Saturates at `u32::MAX` for delays too long for a JS timer anyway.
    #[wasm_bindgen(js_name = aiDelayMs)]
    pub fn ai_delay_ms(&self) -> u32 {
        u32::try_from(self.table.ai_delay().as_millis()).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen(js_name = isComputerTurn)]
    pub fn is_computer_turn(&self) -> bool {
        self.table.is_computer_turn()
    }

    /// Serialized [`crate::types::GameSnapshot`].
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.table.session().snapshot())?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(
            &self.table.session().legal_moves(),
        )?)
    }

    /// Hint: the move `difficulty` would play for `player` ("black"/"white").
    #[wasm_bindgen(js_name = suggestMove)]
    pub fn suggest_move(&self, player: &str, difficulty: &str) -> Result<JsValue, JsError> {
        let player: Player = player.parse()?;
        let difficulty: Difficulty = difficulty.parse()?;
        let mv = self.table.session().choose_ai_move(player, difficulty);
        Ok(serde_wasm_bindgen::to_value(&mv)?)
    }
}
