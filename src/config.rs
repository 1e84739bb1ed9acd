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
use serde::{Deserialize, Serialize};

pub const MIN_LEVEL_ID: u32 = 1;
pub const DEFAULT_HINTS_PER_LEVEL: u32 = 3;
pub const DEFAULT_SHUFFLES_PER_LEVEL: u32 = 5;
pub const MIN_BONUS_WORD_LENGTH: usize = 3;
pub const MAX_SCORE_VALUE: u32 = 999_999;
pub const ACTIVE_LEVELS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub name: String,
    pub description: String,
    pub first_level: u32,
    pub last_level: u32,
    // Number of completed levels needed to unlock the category
    #[serde(default)]
    pub requirement: usize,
}

impl Category {
    fn new(
        name: &str,
        description: &str,
        first_level: u32,
        last_level: u32,
        requirement: usize,
    ) -> Category {
        Category {
            name: name.to_string(),
            description: description.to_string(),
            first_level,
            last_level,
            requirement,
        }
    }

    pub fn contains(&self, level_id: u32) -> bool {
        (self.first_level..=self.last_level).contains(&level_id)
    }

    pub fn is_unlocked(&self, n_completed_levels: usize) -> bool {
        n_completed_levels >= self.requirement
    }
}

fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Pemula", "Kata-kata dasar untuk pemula", 1, 25, 0),
        Category::new("Dasar", "Kata-kata dasar sehari-hari", 26, 50, 10),
        Category::new(
            "Menengah",
            "Kata-kata yang lebih menantang",
            51, 75,
            30,
        ),
        Category::new("Lanjut", "Kata-kata tingkat lanjut", 76, 100, 60),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub hints_per_level: u32,
    pub shuffles_per_level: u32,
    pub min_bonus_word_length: usize,
    pub max_score_value: u32,
    pub min_level_id: u32,
    pub active_levels: u32,
    pub categories: Vec<Category>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            hints_per_level: DEFAULT_HINTS_PER_LEVEL,
            shuffles_per_level: DEFAULT_SHUFFLES_PER_LEVEL,
            min_bonus_word_length: MIN_BONUS_WORD_LENGTH,
            max_score_value: MAX_SCORE_VALUE,
            min_level_id: MIN_LEVEL_ID,
            active_levels: ACTIVE_LEVELS,
            categories: default_categories(),
        }
    }
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

impl Config {
    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Config, Error> {
        let file = std::fs::File::open(filename)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    pub fn is_valid_level_id(&self, level_id: u32) -> bool {
        (self.min_level_id..=self.active_levels).contains(&level_id)
    }

    pub fn category_for_level(&self, level_id: u32) -> Option<&Category> {
        self.categories.iter().find(|category| category.contains(level_id))
    }

    pub fn is_level_unlocked(
        &self,
        level_id: u32,
        n_completed_levels: usize,
    ) -> bool {
        self.is_valid_level_id(level_id) &&
            self.category_for_level(level_id)
            .map(|category| category.is_unlocked(n_completed_levels))
            .unwrap_or(true)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Config, Error> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.hints_per_level, 3);
        assert_eq!(config.shuffles_per_level, 5);
        assert_eq!(config.min_bonus_word_length, 3);
        assert_eq!(config.max_score_value, 999999);
        assert_eq!(config.categories.len(), 4);

        assert_eq!("{}".parse::<Config>().unwrap(), config);
    }

    #[test]
    fn partial_file() {
        let config = r#"{"hints_per_level": 1, "active_levels": 200}"#
            .parse::<Config>()
            .unwrap();

        assert_eq!(config.hints_per_level, 1);
        assert_eq!(config.active_levels, 200);
        assert_eq!(config.shuffles_per_level, DEFAULT_SHUFFLES_PER_LEVEL);
        assert!(config.is_valid_level_id(150));

        assert!(matches!(
            "{\"hints_per_level\": -1}".parse::<Config>().unwrap_err(),
            Error::Json(_),
        ));
    }

    #[test]
    fn level_ids() {
        let config = Config::default();

        assert!(!config.is_valid_level_id(0));
        assert!(config.is_valid_level_id(1));
        assert!(config.is_valid_level_id(100));
        assert!(!config.is_valid_level_id(101));
    }

    #[test]
    fn categories() {
        let config = Config::default();

        assert_eq!(&config.category_for_level(1).unwrap().name, "Pemula");
        assert_eq!(&config.category_for_level(26).unwrap().name, "Dasar");
        assert_eq!(&config.category_for_level(75).unwrap().name, "Menengah");
        assert_eq!(&config.category_for_level(100).unwrap().name, "Lanjut");
        assert!(config.category_for_level(101).is_none());

        assert!(config.is_level_unlocked(25, 0));
        assert!(!config.is_level_unlocked(26, 9));
        assert!(config.is_level_unlocked(26, 10));
        assert!(!config.is_level_unlocked(76, 59));
        assert!(config.is_level_unlocked(76, 60));
        assert!(!config.is_level_unlocked(101, 1000));
    }
}
