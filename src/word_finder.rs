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

use super::grid::{Grid, Coordinate};
use super::directions::{Direction, SEARCH_ORDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start: Coordinate,
    pub direction: Direction,
    pub length: u32,
}

impl Placement {
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let Placement { start, direction, length } = *self;

        (0..length).map(move |i| {
            let (row, col) = direction.step(start.row, start.col, i as i32);
            Coordinate::new(row, col)
        })
    }
}

// Checks whether the word is spelled starting at the position and
// that the run of letters doesn’t continue on either side.
fn matches_at(
    grid: &Grid,
    letters: &[char],
    direction: Direction,
    row: u32,
    col: u32,
) -> bool {
    for (i, &letter) in letters.iter().enumerate() {
        let (r, c) = direction.step(row, col, i as i32);

        if grid.get(r, c) != Some(letter) {
            return false;
        }
    }

    let (before_row, before_col) = direction.step(row, col, -1);
    let (after_row, after_col) =
        direction.step(row, col, letters.len() as i32);

    grid.is_open(before_row, before_col) && grid.is_open(after_row, after_col)
}

fn find_in_direction(
    grid: &Grid,
    letters: &[char],
    direction: Direction,
) -> Option<Placement> {
    let length = letters.len() as u32;

    // Each line is a row for Across and a column for Down
    let (n_lines, line_length) = match direction {
        Direction::Across => (grid.height(), grid.width()),
        Direction::Down => (grid.width(), grid.height()),
    };

    if length > line_length {
        return None;
    }

    for line in 0..n_lines {
        for start in 0..=line_length - length {
            let (row, col) = match direction {
                Direction::Across => (line, start),
                Direction::Down => (start, line),
            };

            if matches_at(grid, letters, direction, row, col) {
                return Some(Placement {
                    start: Coordinate::new(row, col),
                    direction,
                    length,
                });
            }
        }
    }

    None
}

/// Finds where the word is placed in the grid. Only complete runs of
/// letters count, so a word is never found inside a longer word.
pub fn find(grid: &Grid, word: &str) -> Option<Placement> {
    let letters = word.chars().collect::<Vec<char>>();

    if letters.is_empty() {
        return None;
    }

    SEARCH_ORDER.iter().find_map(|&direction| {
        find_in_direction(grid, &letters, direction)
    })
}

/// Same as [`find`] but returns the cells of the word, or an empty
/// vec if the word isn’t in the grid.
pub fn locate(grid: &Grid, word: &str) -> Vec<Coordinate> {
    find(grid, word)
        .map(|placement| placement.coordinates().collect())
        .unwrap_or_default()
}
