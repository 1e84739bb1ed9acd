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

// Words in the crossword only run left to right or top to bottom.
// Across is searched before Down so that when a word could be placed
// either way the horizontal placement wins.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

pub const SEARCH_ORDER: [Direction; 2] = [Direction::Across, Direction::Down];

impl Direction {
    /// Returns the position `distance` cells further along the
    /// direction. Negative distances go backwards.
    pub fn step(self, row: u32, col: u32, distance: i32) -> (u32, u32) {
        match self {
            Direction::Across => (row, col.wrapping_add_signed(distance)),
            Direction::Down => (row.wrapping_add_signed(distance), col),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn step_both_directions() {
        assert_eq!(Direction::Across.step(1, 2, 1), (1, 3));
        assert_eq!(Direction::Across.step(1, 2, -2), (1, 0));
        assert_eq!(Direction::Down.step(1, 2, 3), (4, 2));
        assert_eq!(Direction::Down.step(1, 2, -1), (0, 2));
    }

    #[test]
    fn overflow() {
        // Going off the top or left of the grid should wrap the
        // coordinates around the integer maximum so that the rest of
        // the program can easily detect invalid positions with just a
        // single comparison against the dimensions of the grid.
        assert_eq!(Direction::Across.step(0, 0, -1), (0, u32::MAX));
        assert_eq!(Direction::Down.step(0, 0, -1), (u32::MAX, 0));
    }
}
