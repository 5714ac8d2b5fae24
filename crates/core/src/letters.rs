//! Letters module - the draw pool and the 7-slot rack
//!
//! The pool is the multiset of undrawn tiles, initialized from the fixed
//! letter inventory (98 letters plus 2 jokers). Racks hold exactly 7 ordered
//! slots; emptied slots are refilled from the pool until it is exhausted.
//! Running dry is not an error: a rack may legitimately end the game with
//! fewer than 7 tiles.
//!
//! Invariant maintained by the game state machine: pool + both racks +
//! letters on the board always sum to the full inventory.

use crate::rng::SimpleRng;
use serde::{Deserialize, Serialize};
use wordmine_types::{JOKER, JOKER_COUNT, LETTER_SET, RACK_SIZE};

/// Multiset of undrawn tiles. Jokers travel as `'*'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterPool {
    tiles: Vec<char>,
}

impl LetterPool {
    /// The full, unshuffled inventory (98 letters + 2 jokers)
    pub fn full() -> Self {
        let mut tiles = Vec::with_capacity(100);
        for &(letter, count, _) in LETTER_SET.iter() {
            for _ in 0..count {
                tiles.push(letter);
            }
        }
        for _ in 0..JOKER_COUNT {
            tiles.push(JOKER);
        }
        Self { tiles }
    }

    /// The full inventory, shuffled with the given RNG
    pub fn shuffled(rng: &mut SimpleRng) -> Self {
        let mut pool = Self::full();
        rng.shuffle(&mut pool.tiles);
        pool
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Deal up to `n` tiles from the front of the pool (game start)
    pub fn deal(&mut self, n: usize) -> Vec<char> {
        let n = n.min(self.tiles.len());
        self.tiles.drain(..n).collect()
    }

    /// Draw one tile at a uniformly random position (turn-end refill)
    pub fn draw_random(&mut self, rng: &mut SimpleRng) -> Option<char> {
        let idx = rng.pick_index(self.tiles.len())?;
        Some(self.tiles.swap_remove(idx))
    }

    /// Return tiles to the pool (letter-loss discard, cancelled effects)
    pub fn return_tiles(&mut self, tiles: impl IntoIterator<Item = char>) {
        self.tiles.extend(tiles);
    }

    #[cfg(test)]
    pub(crate) fn tiles(&self) -> &[char] {
        &self.tiles
    }
}

/// A player's rack: exactly 7 ordered slots, each holding a tile or empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    slots: [Option<char>; RACK_SIZE],
}

impl Rack {
    /// Empty rack
    pub fn new() -> Self {
        Self {
            slots: [None; RACK_SIZE],
        }
    }

    /// Rack from a dealt hand (up to 7 tiles, front-filled)
    pub fn from_deal(tiles: Vec<char>) -> Self {
        let mut rack = Self::new();
        for (slot, tile) in rack.slots.iter_mut().zip(tiles) {
            *slot = Some(tile);
        }
        rack
    }

    pub fn slots(&self) -> &[Option<char>; RACK_SIZE] {
        &self.slots
    }

    /// Tile in the given slot, if any (slot out of range counts as empty)
    pub fn get(&self, slot: usize) -> Option<char> {
        self.slots.get(slot).copied().flatten()
    }

    /// Take the tile out of a slot, leaving it empty
    pub fn take(&mut self, slot: usize) -> Option<char> {
        self.slots.get_mut(slot)?.take()
    }

    /// Put a tile into the first empty slot; false if the rack is full
    pub fn put_back(&mut self, tile: char) -> bool {
        for slot in self.slots.iter_mut() {
            if slot.is_none() {
                *slot = Some(tile);
                return true;
            }
        }
        false
    }

    /// Fill empty slots with random draws until the pool runs dry
    pub fn refill(&mut self, pool: &mut LetterPool, rng: &mut SimpleRng) {
        for slot in self.slots.iter_mut() {
            if slot.is_none() {
                match pool.draw_random(rng) {
                    Some(tile) => *slot = Some(tile),
                    None => break,
                }
            }
        }
    }

    /// Move every tile on the rack back into the pool (letter-loss mine)
    pub fn discard_all(&mut self, pool: &mut LetterPool) {
        for slot in self.slots.iter_mut() {
            if let Some(tile) = slot.take() {
                pool.return_tiles([tile]);
            }
        }
    }

    /// Number of occupied slots
    pub fn tile_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_count() == 0
    }

    /// The tiles currently on the rack, in slot order
    pub fn letters(&self) -> Vec<char> {
        self.slots.iter().filter_map(|slot| *slot).collect()
    }
}

impl Default for Rack {
    fn default() -> Self {
        Self::new()
    }
}
