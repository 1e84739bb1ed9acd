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

use rand::Rng;
use rand::seq::SliceRandom;

// A tile id is the position of the letter in the level’s letter bank.
// It stays the same however the tiles are shuffled.
pub type TileId = usize;

#[derive(Debug, Clone)]
pub struct LetterBank {
    letters: Box<[char]>,
    used: Box<[bool]>,
    // Tile ids in the order they are shown
    order: Vec<TileId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub letter: char,
    pub used: bool,
}

impl LetterBank {
    pub fn new<R: Rng + ?Sized>(letters: &[char], rng: &mut R) -> LetterBank {
        let mut order = (0..letters.len()).collect::<Vec<_>>();
        order.shuffle(rng);

        LetterBank {
            letters: letters.into(),
            used: vec![false; letters.len()].into_boxed_slice(),
            order,
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letter(&self, id: TileId) -> Option<char> {
        self.letters.get(id).copied()
    }

    pub fn is_used(&self, id: TileId) -> bool {
        self.used.get(id).copied().unwrap_or(false)
    }

    /// Marks the tile as used and returns its letter, or `None` if
    /// there is no such tile or it is already in use.
    pub fn take(&mut self, id: TileId) -> Option<char> {
        let used = self.used.get_mut(id)?;

        if std::mem::replace(used, true) {
            None
        } else {
            Some(self.letters[id])
        }
    }

    pub fn release(&mut self, id: TileId) {
        if let Some(used) = self.used.get_mut(id) {
            *used = false;
        }
    }

    pub fn release_all(&mut self) {
        self.used.fill(false);
    }

    /// Shuffles the free tiles amongst the positions they occupy.
    /// Tiles that are in use keep their place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let slots = self.order.iter()
            .enumerate()
            .filter_map(|(slot, &id)| (!self.used[id]).then_some(slot))
            .collect::<Vec<_>>();

        let mut free_tiles = slots.iter()
            .map(|&slot| self.order[slot])
            .collect::<Vec<_>>();

        free_tiles.shuffle(rng);

        for (slot, id) in slots.into_iter().zip(free_tiles.into_iter()) {
            self.order[slot] = id;
        }
    }

    pub fn order(&self) -> &[TileId] {
        &self.order
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.order.iter().map(|&id| Tile {
            id,
            letter: self.letters[id],
            used: self.used[id],
        })
    }

    /// Returns the first free tile with the letter in display order.
    pub fn find_free(&self, letter: char) -> Option<TileId> {
        self.tiles()
            .find(|tile| !tile.used && tile.letter == letter)
            .map(|tile| tile.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank(letters: &str) -> LetterBank {
        let letters = letters.chars().collect::<Vec<_>>();
        LetterBank::new(&letters, &mut StdRng::seed_from_u64(1))
    }

    fn sorted_order(bank: &LetterBank) -> Vec<TileId> {
        let mut order = bank.order().to_vec();
        order.sort_unstable();
        order
    }

    #[test]
    fn take_and_release() {
        let mut bank = bank("KATA");

        assert_eq!(bank.len(), 4);
        assert_eq!(bank.letter(1), Some('A'));
        assert_eq!(bank.letter(4), None);

        assert_eq!(bank.take(0), Some('K'));
        assert!(bank.is_used(0));
        assert_eq!(bank.take(0), None);
        assert_eq!(bank.take(17), None);

        bank.release(0);
        assert!(!bank.is_used(0));
        assert_eq!(bank.take(0), Some('K'));

        bank.take(3);
        bank.release_all();
        assert!(bank.tiles().all(|tile| !tile.used));
    }

    #[test]
    fn order_is_permutation() {
        let bank = bank("SEKOLAH");

        assert_eq!(sorted_order(&bank), (0..7).collect::<Vec<_>>());
        assert_eq!(
            bank.tiles().map(|tile| bank.letter(tile.id).unwrap())
                .collect::<String>(),
            bank.tiles().map(|tile| tile.letter).collect::<String>(),
        );
    }

    #[test]
    fn shuffle_keeps_used_tiles() {
        let mut bank = bank("ABCDEFGHIJ");
        let mut rng = StdRng::seed_from_u64(7);

        bank.take(2);
        bank.take(5);

        let slot_2 = bank.order().iter().position(|&id| id == 2).unwrap();
        let slot_5 = bank.order().iter().position(|&id| id == 5).unwrap();

        for _ in 0..10 {
            bank.shuffle(&mut rng);

            assert_eq!(bank.order()[slot_2], 2);
            assert_eq!(bank.order()[slot_5], 5);
            assert!(bank.is_used(2));
            assert!(bank.is_used(5));
            assert_eq!(sorted_order(&bank), (0..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn find_free() {
        let mut bank = bank("ADA");

        let first = bank.find_free('A').unwrap();
        assert_eq!(bank.letter(first), Some('A'));
        bank.take(first);

        let second = bank.find_free('A').unwrap();
        assert_ne!(first, second);
        bank.take(second);

        assert!(bank.find_free('A').is_none());
        assert_eq!(bank.find_free('D'), Some(1));
        assert!(bank.find_free('Z').is_none());
    }
}
