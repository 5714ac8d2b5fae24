//! Scoring module - pure point calculation for extracted words
//!
//! Letter values come from the fixed inventory table. Bonus squares apply
//! only under the tiles staged this turn; letters committed on earlier turns
//! spent their bonuses then. Jokers are always worth zero, even on a bonus
//! square, though word multipliers under a fresh joker still apply.

use crate::words::Word;
use wordmine_types::{letter_point, SpecialTile};

/// Score a single word.
///
/// `bonus_blocked` suppresses every multiplier (a triggered bonus-blocker
/// mine); base letter values still count.
pub fn score_word(word: &Word, bonus_blocked: bool) -> u32 {
    let mut score: u32 = 0;
    let mut word_multiplier: u32 = 1;

    for tile in word.tiles() {
        let base = if tile.joker { 0 } else { letter_point(tile.letter) };

        if bonus_blocked || !tile.newly_placed {
            score += base;
            continue;
        }

        match tile.special {
            SpecialTile::DoubleLetter => score += base * 2,
            SpecialTile::TripleLetter => score += base * 3,
            SpecialTile::DoubleWord => {
                score += base;
                word_multiplier *= 2;
            }
            SpecialTile::TripleWord => {
                score += base;
                word_multiplier *= 3;
            }
            // The start square gates the first move but carries no bonus
            SpecialTile::Start | SpecialTile::None => score += base,
        }
    }

    score * word_multiplier
}

/// Total raw score of a move's words before any mine effect
pub fn score_words(words: &[Word], bonus_blocked: bool) -> u32 {
    words.iter().map(|word| score_word(word, bonus_blocked)).sum()
}
