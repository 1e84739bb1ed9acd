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

use super::grid::Coordinate;
use super::level::Level;
use super::letter_bank::{LetterBank, Tile, TileId};
use super::dictionary::Dictionary;
use super::config::Config;
use super::word_finder;
use std::collections::{BTreeSet, HashSet};
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::Serialize;
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    InProgress,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected {
    pub letter: char,
    pub tile: TileId,
}

/// Things that happened to the session that the user interface
/// might want to show. They are queued until collected with
/// [`PuzzleSession::pending_events`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    WordFound {
        word: String,
        coordinates: Vec<Coordinate>,
        score: u32,
    },
    WordRejected {
        word: String,
    },
    BonusWordFound {
        word: String,
        score: u32,
    },
    HintUsed {
        coordinate: Coordinate,
    },
    LevelWon {
        level_id: u32,
        score: u32,
    },
    // A word from the level’s list that isn’t in the grid. This is a
    // mistake in the level data, not something the player did.
    DataIntegrityWarning {
        word: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected(char),
    AlreadyUsed,
    NoSuchTile,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Empty,
    Found,
    AlreadyFound,
    Bonus,
    Rejected,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    Revealed(Coordinate),
    NoHintsLeft,
    NothingToReveal,
    AllWordsFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleOutcome {
    Shuffled,
    NoShufflesLeft,
}

pub struct PuzzleSession<D, R> {
    level: Level,
    dictionary: D,
    rng: R,
    bank: LetterBank,
    state: State,
    selection: Vec<Selected>,
    n_unique_words: usize,
    found_words: HashSet<String>,
    bonus_words: Vec<String>,
    revealed: BTreeSet<Coordinate>,
    score: u32,
    hints_remaining: u32,
    shuffles_remaining: u32,
    min_bonus_word_length: usize,
    max_score: u32,
    // Replaying a completed level doesn’t earn any points
    already_completed: bool,
    pending_events: Vec<Event>,
}

impl<D: Dictionary, R: Rng> PuzzleSession<D, R> {
    pub fn new(
        level: Level,
        dictionary: D,
        config: &Config,
        mut rng: R,
    ) -> PuzzleSession<D, R> {
        let bank = LetterBank::new(&level.random_letters, &mut rng);

        let n_unique_words = level.words.iter()
            .map(String::as_str)
            .collect::<HashSet<&str>>()
            .len();

        if n_unique_words == 0 {
            warn!("level {} has no words", level.id);
        }

        debug!(
            "starting level {} with {} words and {} tiles",
            level.id,
            n_unique_words,
            bank.len(),
        );

        PuzzleSession {
            level,
            dictionary,
            rng,
            bank,
            state: State::InProgress,
            selection: Vec::new(),
            n_unique_words,
            found_words: HashSet::new(),
            bonus_words: Vec::new(),
            revealed: BTreeSet::new(),
            score: 0,
            hints_remaining: config.hints_per_level,
            shuffles_remaining: config.shuffles_per_level,
            min_bonus_word_length: config.min_bonus_word_length,
            max_score: config.max_score_value,
            already_completed: false,
            pending_events: Vec::new(),
        }
    }

    pub fn set_already_completed(&mut self, already_completed: bool) {
        self.already_completed = already_completed;
    }

    pub fn already_completed(&self) -> bool {
        self.already_completed
    }

    fn add_score(&mut self, points: u32) {
        if !self.already_completed {
            self.score = self.score.saturating_add(points).min(self.max_score);
        }
    }

    pub fn select_letter(&mut self, tile: TileId) -> SelectOutcome {
        if self.state == State::Won {
            return SelectOutcome::Finished;
        }

        match self.bank.take(tile) {
            Some(letter) => {
                self.selection.push(Selected { letter, tile });
                SelectOutcome::Selected(letter)
            },
            None => match self.bank.letter(tile) {
                Some(_) => SelectOutcome::AlreadyUsed,
                None => SelectOutcome::NoSuchTile,
            },
        }
    }

    /// Removes the last selected letter and frees its tile.
    pub fn undo_letter(&mut self) -> Option<char> {
        let selected = self.selection.pop()?;
        self.bank.release(selected.tile);
        Some(selected.letter)
    }

    pub fn clear_selection(&mut self) {
        // Only the selection ever holds tiles
        self.selection.clear();
        self.bank.release_all();
    }

    /// Replaces the selection with free tiles spelling the word. If
    /// the free tiles can’t spell it the selection is left empty and
    /// false is returned.
    pub fn spell(&mut self, word: &str) -> bool {
        self.clear_selection();

        for letter in word.chars() {
            let selected = self.bank.find_free(letter)
                .map(|tile| self.select_letter(tile));

            if !matches!(selected, Some(SelectOutcome::Selected(_))) {
                self.clear_selection();
                return false;
            }
        }

        true
    }

    pub fn current_word(&self) -> String {
        self.selection.iter().map(|selected| selected.letter).collect()
    }

    fn is_level_word(&self, word: &str) -> bool {
        self.level.words.iter().any(|w| w == word)
    }

    /// True if the current selection is an unfound word that isn’t
    /// also the beginning of a longer unfound word, so the interface
    /// can submit it without waiting for the player.
    pub fn should_auto_submit(&self) -> bool {
        let word = self.current_word();

        if !self.is_level_word(&word) || self.found_words.contains(&word) {
            return false;
        }

        !self.level.words.iter().any(|w| {
            w.len() > word.len() &&
                w.starts_with(&word) &&
                !self.found_words.contains(w)
        })
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state == State::Won {
            return SubmitOutcome::Finished;
        }

        let word = self.current_word();

        if word.is_empty() {
            return SubmitOutcome::Empty;
        }

        self.clear_selection();

        if self.is_level_word(&word) {
            if self.found_words.contains(&word) {
                debug!("{} was already found", word);
                self.pending_events.push(Event::WordRejected { word });
                return SubmitOutcome::AlreadyFound;
            }

            self.score_found_word(word);

            SubmitOutcome::Found
        } else {
            self.pending_events.push(Event::WordRejected {
                word: word.clone(),
            });

            if self.check_bonus_word(word) {
                SubmitOutcome::Bonus
            } else {
                SubmitOutcome::Rejected
            }
        }
    }

    fn score_found_word(&mut self, word: String) {
        self.add_score(word.chars().count() as u32);

        let coordinates = word_finder::locate(&self.level.grid, &word);

        if coordinates.is_empty() {
            warn!(
                "level {}: word {} is in the word list but not in the grid",
                self.level.id,
                word,
            );
            self.pending_events.push(Event::DataIntegrityWarning {
                word: word.clone(),
            });
        }

        self.revealed.extend(coordinates.iter().copied());
        self.found_words.insert(word.clone());

        self.pending_events.push(Event::WordFound {
            word,
            coordinates,
            score: self.score,
        });

        if self.found_words.len() >= self.n_unique_words {
            self.state = State::Won;

            info!("level {} won with score {}", self.level.id, self.score);

            self.pending_events.push(Event::LevelWon {
                level_id: self.level.id,
                score: self.score,
            });
        }
    }

    /// Awards the bonus for the current selection if it is a
    /// dictionary word, without submitting it. The selection is kept.
    /// Interfaces that submit automatically call this after every
    /// letter.
    pub fn check_bonus_selection(&mut self) -> bool {
        if self.state == State::Won {
            return false;
        }

        let word = self.current_word();

        !word.is_empty() && self.check_bonus_word(word)
    }

    fn check_bonus_word(&mut self, word: String) -> bool {
        if word.chars().count() < self.min_bonus_word_length ||
            self.is_level_word(&word) ||
            self.bonus_words.contains(&word) ||
            !self.dictionary.contains(&word)
        {
            return false;
        }

        debug!("bonus word {}", word);

        self.add_score(1);
        self.bonus_words.push(word.clone());
        self.pending_events.push(Event::BonusWordFound {
            word,
            score: self.score,
        });

        true
    }

    /// Cells of words that haven’t been found yet and aren’t already
    /// showing.
    pub fn hintable_cells(&self) -> BTreeSet<Coordinate> {
        self.level.words.iter()
            .filter(|word| !self.found_words.contains(*word))
            .flat_map(|word| word_finder::locate(&self.level.grid, word))
            .filter(|pos| !self.revealed.contains(pos))
            .collect()
    }

    pub fn use_hint(&mut self) -> HintOutcome {
        if self.state == State::Won {
            return HintOutcome::AllWordsFound;
        }

        if self.hints_remaining == 0 {
            return HintOutcome::NoHintsLeft;
        }

        let Some(coordinate) =
            self.hintable_cells().into_iter().choose(&mut self.rng)
        else {
            return HintOutcome::NothingToReveal;
        };

        self.hints_remaining -= 1;
        self.revealed.insert(coordinate);
        self.pending_events.push(Event::HintUsed { coordinate });

        debug!(
            "hint revealed {}, {} hints left",
            coordinate,
            self.hints_remaining,
        );

        HintOutcome::Revealed(coordinate)
    }

    pub fn shuffle(&mut self) -> ShuffleOutcome {
        if self.shuffles_remaining == 0 {
            return ShuffleOutcome::NoShufflesLeft;
        }

        self.shuffles_remaining -= 1;
        self.bank.shuffle(&mut self.rng);

        ShuffleOutcome::Shuffled
    }
}

impl<D, R> PuzzleSession<D, R> {
    pub fn pending_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == State::Won
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    pub fn shuffles_remaining(&self) -> u32 {
        self.shuffles_remaining
    }

    pub fn selection(&self) -> &[Selected] {
        &self.selection
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.bank.tiles()
    }

    /// Tile ids in the order they should be shown
    pub fn tile_order(&self) -> &[TileId] {
        self.bank.order()
    }

    pub fn tile_letter(&self, tile: TileId) -> Option<char> {
        self.bank.letter(tile)
    }

    pub fn is_tile_used(&self, tile: TileId) -> bool {
        self.bank.is_used(tile)
    }

    /// Found words in the order of the level’s word list.
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();

        self.level.words.iter()
            .map(String::as_str)
            .filter(move |word| {
                self.found_words.contains(*word) && seen.insert(*word)
            })
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found_words.contains(word)
    }

    pub fn n_words_found(&self) -> usize {
        self.found_words.len()
    }

    pub fn total_n_words(&self) -> usize {
        self.n_unique_words
    }

    pub fn bonus_words(&self) -> &[String] {
        &self.bonus_words
    }

    pub fn is_revealed(&self, pos: Coordinate) -> bool {
        self.revealed.contains(&pos)
    }

    pub fn revealed_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.revealed.iter().copied()
    }
}
