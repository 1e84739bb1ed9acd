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
use std::io::Write;
use std::str::FromStr;
use std::path::Path;
use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

/// The player’s record of completed levels and the best score for
/// each one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Progress {
    completed_levels: BTreeSet<u32>,
    scores: BTreeMap<u32, u32>,
}

/// What gets sent to the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub total_score: u64,
    pub highest_level_completed: u32,
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

impl Progress {
    pub fn new() -> Progress {
        Progress::default()
    }

    /// Marks the level as completed. The stored score is only ever
    /// raised. Returns true if this is the first time the level was
    /// completed.
    pub fn record_completion(&mut self, level_id: u32, score: u32) -> bool {
        let first_time = self.completed_levels.insert(level_id);

        let best = self.scores.entry(level_id).or_insert(score);

        if *best < score {
            *best = score;
        }

        first_time
    }

    pub fn is_completed(&self, level_id: u32) -> bool {
        self.completed_levels.contains(&level_id)
    }

    pub fn score(&self, level_id: u32) -> u32 {
        self.scores.get(&level_id).copied().unwrap_or(0)
    }

    pub fn total_score(&self) -> u64 {
        self.scores.values().map(|&score| score as u64).sum()
    }

    pub fn highest_level_completed(&self) -> u32 {
        self.completed_levels.last().copied().unwrap_or(0)
    }

    pub fn completed_count(&self) -> usize {
        self.completed_levels.len()
    }

    pub fn completed_levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.completed_levels.iter().copied()
    }

    pub fn leaderboard_entry(&self) -> LeaderboardEntry {
        LeaderboardEntry {
            total_score: self.total_score(),
            highest_level_completed: self.highest_level_completed(),
        }
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Progress, Error> {
        let file = std::fs::File::open(filename)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    /// Same as [`load`](Progress::load) except that a missing file
    /// is treated as a new player.
    pub fn load_or_default<P: AsRef<Path>>(
        filename: P,
    ) -> Result<Progress, Error> {
        match Progress::load(filename) {
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Progress::new())
            },
            result => result,
        }
    }

    pub fn save<P: AsRef<Path>>(&self, filename: P) -> Result<(), Error> {
        let file = std::fs::File::create(filename)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}

impl FromStr for Progress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Progress, Error> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn record_completion() {
        let mut progress = Progress::new();

        assert!(!progress.is_completed(3));
        assert_eq!(progress.score(3), 0);
        assert_eq!(progress.highest_level_completed(), 0);

        assert!(progress.record_completion(3, 20));
        assert!(progress.is_completed(3));
        assert_eq!(progress.score(3), 20);

        // Replaying never lowers the score
        assert!(!progress.record_completion(3, 5));
        assert_eq!(progress.score(3), 20);

        assert!(!progress.record_completion(3, 25));
        assert_eq!(progress.score(3), 25);

        progress.record_completion(1, 10);

        assert_eq!(progress.completed_count(), 2);
        assert_eq!(progress.total_score(), 35);
        assert_eq!(progress.highest_level_completed(), 3);
        assert_eq!(progress.completed_levels().collect::<Vec<_>>(), &[1, 3]);
        assert_eq!(
            progress.leaderboard_entry(),
            LeaderboardEntry { total_score: 35, highest_level_completed: 3 },
        );
    }

    #[test]
    fn display() {
        let mut progress = Progress::new();

        assert_eq!(
            &progress.to_string(),
            "{\"completed_levels\":[],\"scores\":{}}",
        );

        progress.record_completion(2, 7);
        progress.record_completion(1, 4);

        assert_eq!(
            &progress.to_string(),
            "{\"completed_levels\":[1,2],\"scores\":{\"1\":4,\"2\":7}}",
        );
    }

    #[test]
    fn parse() {
        let progress = "{\"completed_levels\":[5],\"scores\":{\"5\":12}}"
            .parse::<Progress>()
            .unwrap();

        assert!(progress.is_completed(5));
        assert_eq!(progress.score(5), 12);

        assert_eq!("{}".parse::<Progress>().unwrap(), Progress::new());

        assert!(matches!(
            "{\"scores\":{\"x\":1}}".parse::<Progress>().unwrap_err(),
            Error::Json(_),
        ));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn save_to_full_disk() {
        let mut progress = Progress::new();
        progress.record_completion(1, 10);

        assert!(matches!(
            progress.save("/dev/full").unwrap_err(),
            Error::Io(_),
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Progress::load("/nonexistent/progress.json").unwrap_err(),
            Error::Io(_),
        ));
        assert_eq!(
            Progress::load_or_default("/nonexistent/progress.json").unwrap(),
            Progress::new(),
        );
    }
}
