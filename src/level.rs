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

use std::fmt;
use std::str::FromStr;
use std::path::Path;
use std::collections::{HashMap, HashSet};
use serde::Deserialize;
use super::grid::{self, Grid};
use super::word_finder;

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "LevelDocument")]
pub struct Level {
    pub id: u32,
    pub words: Vec<String>,
    pub random_letters: Vec<char>,
    pub grid: Grid,
}

// The layout of the JSON files before the grid is checked
#[derive(Deserialize)]
struct LevelDocument {
    id: u32,
    words: Vec<String>,
    random_letters: Vec<String>,
    grid: Vec<Vec<String>>,
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => e.fmt(f),
            Error::Json(e) => e.fmt(f),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DocumentError {
    Grid(grid::Error),
    InvalidLetter(String),
}

impl From<grid::Error> for DocumentError {
    fn from(e: grid::Error) -> DocumentError {
        DocumentError::Grid(e)
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocumentError::Grid(e) => e.fmt(f),
            DocumentError::InvalidLetter(s) => {
                write!(f, "invalid letter in letter bank: {:?}", s)
            },
        }
    }
}

impl TryFrom<LevelDocument> for Level {
    type Error = DocumentError;

    fn try_from(doc: LevelDocument) -> Result<Level, DocumentError> {
        let grid = Grid::from_rows(&doc.grid)?;

        let mut random_letters = Vec::with_capacity(doc.random_letters.len());

        for letter in doc.random_letters.into_iter() {
            let mut chars = letter.chars();

            match (chars.next(), chars.next()) {
                (Some(ch), None) => random_letters.push(ch),
                _ => return Err(DocumentError::InvalidLetter(letter)),
            }
        }

        Ok(Level {
            id: doc.id,
            words: doc.words,
            random_letters,
            grid,
        })
    }
}

/// Something wrong with the contents of a level that would make it
/// unfair or unwinnable.
#[derive(Debug, PartialEq, Eq)]
pub enum Problem {
    InvalidId(u32),
    NoWords,
    DuplicateWord(String),
    UnlocatableWord(String),
    UnspellableWord(String),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Problem::InvalidId(id) => write!(f, "invalid level id {}", id),
            Problem::NoWords => write!(f, "no words"),
            Problem::DuplicateWord(word) => {
                write!(f, "duplicate word {}", word)
            },
            Problem::UnlocatableWord(word) => {
                write!(f, "{} is not in the grid", word)
            },
            Problem::UnspellableWord(word) => {
                write!(f, "{} can’t be spelled with the letter bank", word)
            },
        }
    }
}

pub fn file_name(id: u32) -> String {
    format!("level_{:06}.json", id)
}

impl Level {
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Level, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Level, Error> {
        let file = std::fs::File::open(filename)?;
        Level::from_reader(std::io::BufReader::new(file))
    }

    pub fn file_name(&self) -> String {
        file_name(self.id)
    }

    pub fn can_spell(&self, word: &str) -> bool {
        let mut counts = HashMap::<char, usize>::new();

        for &letter in self.random_letters.iter() {
            *counts.entry(letter).or_insert(0) += 1;
        }

        word.chars().all(|ch| {
            match counts.get_mut(&ch) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                },
                _ => false,
            }
        })
    }

    /// Lists everything wrong with the level. Ids below
    /// `min_level_id` are reported as invalid.
    pub fn validate(&self, min_level_id: u32) -> Vec<Problem> {
        let mut problems = Vec::new();

        if self.id < min_level_id {
            problems.push(Problem::InvalidId(self.id));
        }

        if self.words.is_empty() {
            problems.push(Problem::NoWords);
        }

        let mut seen = HashSet::new();

        for word in self.words.iter() {
            if !seen.insert(word.as_str()) {
                problems.push(Problem::DuplicateWord(word.clone()));
                continue;
            }

            if word_finder::find(&self.grid, word).is_none() {
                problems.push(Problem::UnlocatableWord(word.clone()));
            }

            if !self.can_spell(word) {
                problems.push(Problem::UnspellableWord(word.clone()));
            }
        }

        problems
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Error> {
        Ok(serde_json::from_str(s)?)
    }
}

fn write_json_list<I, T>(
    f: &mut fmt::Formatter,
    items: I,
    separator: &str,
) -> fmt::Result
    where I: IntoIterator<Item = T>,
          T: AsRef<str>
{
    write!(f, "[")?;

    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }

        let quoted = serde_json::to_string(item.as_ref())
            .map_err(|_| fmt::Error)?;
        write!(f, "{}", quoted)?;
    }

    write!(f, "]")
}

// The compact layout used for the level files, with one grid row
// per line.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "    \"id\": {},", self.id)?;

        write!(f, "    \"words\": ")?;
        write_json_list(f, self.words.iter(), ", ")?;
        writeln!(f, ",")?;

        write!(f, "    \"random_letters\": ")?;
        write_json_list(
            f,
            self.random_letters.iter().map(|ch| ch.to_string()),
            ",",
        )?;
        writeln!(f, ",")?;

        writeln!(f, "    \"grid\": [")?;

        for (row_num, row) in self.grid.rows().enumerate() {
            write!(f, "      ")?;
            write_json_list(
                f,
                row.iter().map(|ch| ch.to_string()),
                ",",
            )?;

            if row_num + 1 < self.grid.height() as usize {
                writeln!(f, ",")?;
            } else {
                writeln!(f)?;
            }
        }

        writeln!(f, "    ]")?;
        write!(f, "}}")
    }
}
