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

use std::collections::HashSet;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Something that can tell whether a word is a real word. It is
/// only used to award bonus words, never to decide which words belong
/// to a level.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// A dictionary loaded from a plain word list. Words are stored in
/// uppercase to match the letters used in the grids.
#[derive(Debug, Default, Clone)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> WordList {
        WordList::default()
    }

    pub fn insert(&mut self, word: &str) {
        let word = word.trim();

        if !word.is_empty() && !word.starts_with('#') {
            self.words.insert(word.to_uppercase());
        }
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<WordList, std::io::Error> {
        let mut word_list = WordList::new();

        for line in reader.lines() {
            word_list.insert(&line?);
        }

        Ok(word_list)
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> Result<WordList, std::io::Error> {
        std::fs::File::open(&filename)
            .and_then(|file| WordList::from_reader(BufReader::new(file)))
            .map_err(|e| {
                let kind = e.kind();
                std::io::Error::new(
                    kind,
                    format!(
                        "{}: {}",
                        filename.as_ref().to_string_lossy(),
                        e,
                    ))
            })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> WordList {
        let mut word_list = WordList::new();

        for word in iter {
            word_list.insert(word);
        }

        word_list
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_reader() {
        let text = "# Kamus\n\
                    rumah\n\
                    \n\
                    \x20 makan  \n\
                    MINUM\n";

        let word_list = WordList::from_reader(text.as_bytes()).unwrap();

        assert_eq!(word_list.len(), 3);
        assert!(word_list.contains("RUMAH"));
        assert!(word_list.contains("MAKAN"));
        assert!(word_list.contains("MINUM"));
        assert!(!word_list.contains("rumah"));
        assert!(!word_list.contains("# KAMUS"));
    }

    #[test]
    fn empty() {
        let word_list = WordList::new();

        assert!(word_list.is_empty());
        assert!(!word_list.contains("RUMAH"));
    }

    #[test]
    fn missing_file() {
        let err = WordList::load("/nonexistent/kbbi.txt").unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with("/nonexistent/kbbi.txt: "));
    }

    #[test]
    fn hash_set() {
        let set = ["SAYA".to_string()].into_iter().collect::<HashSet<_>>();

        assert!(Dictionary::contains(&set, "SAYA"));
        assert!(!Dictionary::contains(&set, "KAMU"));
        assert!(Dictionary::contains(&&set, "SAYA"));
    }
}
