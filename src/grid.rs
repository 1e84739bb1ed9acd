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
use serde::Serialize;

// Cells with this value are not part of any word
pub const BACKGROUND: char = '1';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub row: u32,
    pub col: u32,
}

impl Coordinate {
    pub fn new(row: u32, col: u32) -> Coordinate {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    values: Box<[char]>,
    width: u32,
    height: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyGrid,
    RaggedRow { row: usize, expected: usize, found: usize },
    InvalidCell { row: usize, col: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "empty grid"),
            Error::RaggedRow { row, expected, found } => write!(
                f,
                "row {} has {} cells but {} were expected",
                row,
                found,
                expected,
            ),
            Error::InvalidCell { row, col } => write!(
                f,
                "cell ({}, {}) is not a single character",
                row,
                col,
            ),
        }
    }
}

impl Grid {
    // Line-based layout where every character is a cell. Short lines
    // are padded with background cells and trailing blank lines are
    // ignored. Levels always come from `from_rows`; this is for
    // writing grids compactly in tests.
    #[cfg(test)]
    pub fn new(s: &str) -> Result<Grid, Error> {
        // Find the longest line
        let width = s.lines().map(|line| line.trim_end().chars().count())
            .max()
            .unwrap_or(0);

        if width < 1 {
            return Err(Error::EmptyGrid);
        }

        let mut values = Vec::new();

        for (row, line) in s.lines().enumerate() {
            let line = line.trim_end();

            if !line.is_empty() {
                values.resize(row * width, BACKGROUND);
            }

            values.extend(line.chars());
        }

        let height = (values.len() + width - 1) / width;

        values.resize(width * height, BACKGROUND);

        Ok(Grid {
            values: values.into_boxed_slice(),
            width: width as u32,
            height: height as u32,
        })
    }

    /// Builds a grid from rows of single-character strings, which is
    /// how grids are stored in the level documents. Every row must
    /// have the same length.
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Grid, Error>
        where R: AsRef<[S]>,
              S: AsRef<str>
    {
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);

        if width < 1 {
            return Err(Error::EmptyGrid);
        }

        let mut values = Vec::with_capacity(width * rows.len());

        for (row_num, row) in rows.iter().enumerate() {
            let row = row.as_ref();

            if row.len() != width {
                return Err(Error::RaggedRow {
                    row: row_num,
                    expected: width,
                    found: row.len(),
                });
            }

            for (col_num, cell) in row.iter().enumerate() {
                let mut chars = cell.as_ref().chars();

                let (Some(ch), None) = (chars.next(), chars.next())
                else {
                    return Err(Error::InvalidCell {
                        row: row_num,
                        col: col_num,
                    });
                };

                values.push(ch);
            }
        }

        Ok(Grid {
            values: values.into_boxed_slice(),
            width: width as u32,
            height: rows.len() as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Positions off the top or left edge wrap around to u32::MAX so
    // a single comparison against the dimensions catches them.
    pub fn get(&self, row: u32, col: u32) -> Option<char> {
        (row < self.height && col < self.width).then(|| {
            self.values[(row * self.width + col) as usize]
        })
    }

    /// True if the position is outside the grid or holds a
    /// background cell.
    pub fn is_open(&self, row: u32, col: u32) -> bool {
        self.get(row, col).map(|ch| ch == BACKGROUND).unwrap_or(true)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.values.chunks(self.width as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row_num, row) in self.rows().enumerate() {
            if row_num > 0 {
                writeln!(f)?;
            }

            for &ch in row.iter() {
                write!(f, "{}", ch)?;
            }
        }

        Ok(())
    }
}
