// TTS Cepat – A crossword word game
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use wasm_bindgen::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use super::config::Config;
use super::dictionary::WordList;
use super::grid::Coordinate;
use super::level::Level;
use super::logging;
use super::session::{
    PuzzleSession, SubmitOutcome, HintOutcome, ShuffleOutcome, SelectOutcome,
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(false);
}

/// The puzzle session as seen from the JavaScript side. Everything
/// that changes is reported through the JSON from `pending_events`.
#[wasm_bindgen]
pub struct TtsSession {
    session: PuzzleSession<WordList, StdRng>,
}

#[wasm_bindgen]
impl TtsSession {
    #[wasm_bindgen(constructor)]
    pub fn new(
        level_json: &str,
        dictionary_text: &str,
        config_json: Option<String>,
        already_completed: bool,
    ) -> Result<TtsSession, JsValue> {
        let level = level_json.parse::<Level>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let config = match config_json {
            Some(json) => json.parse::<Config>()
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Config::default(),
        };

        let dictionary = dictionary_text.lines().collect::<WordList>();

        let mut session = PuzzleSession::new(
            level,
            dictionary,
            &config,
            StdRng::from_entropy(),
        );

        session.set_already_completed(already_completed);

        Ok(TtsSession { session })
    }

    pub fn select_letter(&mut self, tile: usize) -> bool {
        matches!(self.session.select_letter(tile), SelectOutcome::Selected(_))
    }

    pub fn undo_letter(&mut self) -> bool {
        self.session.undo_letter().is_some()
    }

    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
    }

    pub fn current_word(&self) -> String {
        self.session.current_word()
    }

    pub fn should_auto_submit(&self) -> bool {
        self.session.should_auto_submit()
    }

    pub fn check_bonus_selection(&mut self) -> bool {
        self.session.check_bonus_selection()
    }

    pub fn submit(&mut self) -> String {
        match self.session.submit() {
            SubmitOutcome::Empty => "empty",
            SubmitOutcome::Found => "found",
            SubmitOutcome::AlreadyFound => "already_found",
            SubmitOutcome::Bonus => "bonus",
            SubmitOutcome::Rejected => "rejected",
            SubmitOutcome::Finished => "finished",
        }.to_string()
    }

    pub fn use_hint(&mut self) -> String {
        match self.session.use_hint() {
            HintOutcome::Revealed(_) => "revealed",
            HintOutcome::NoHintsLeft => "no_hints_left",
            HintOutcome::NothingToReveal => "nothing_to_reveal",
            HintOutcome::AllWordsFound => "all_words_found",
        }.to_string()
    }

    pub fn shuffle(&mut self) -> bool {
        self.session.shuffle() == ShuffleOutcome::Shuffled
    }

    /// Tile ids in the order they should be shown
    pub fn tile_order(&self) -> js_sys::Array {
        self.session.tile_order().iter()
            .map(|&id| JsValue::from(id as u32))
            .collect()
    }

    pub fn tile_letter(&self, tile: usize) -> Option<String> {
        self.session.tile_letter(tile).map(|letter| letter.to_string())
    }

    pub fn tile_used(&self, tile: usize) -> bool {
        self.session.is_tile_used(tile)
    }

    pub fn is_revealed(&self, row: u32, col: u32) -> bool {
        self.session.is_revealed(Coordinate::new(row, col))
    }

    pub fn pending_events(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.pending_events())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn level_id(&self) -> u32 {
        self.session.level().id
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn hints_remaining(&self) -> u32 {
        self.session.hints_remaining()
    }

    pub fn shuffles_remaining(&self) -> u32 {
        self.session.shuffles_remaining()
    }

    pub fn is_won(&self) -> bool {
        self.session.is_won()
    }
}
