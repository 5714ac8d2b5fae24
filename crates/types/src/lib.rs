//! Shared types module - data structures and configuration tables
//!
//! This module defines the fundamental types used throughout the rules
//! engine. All types are pure data structures with no behavior beyond
//! trivial accessors, making them usable in any context (rules engine,
//! host application, persistence layer).
//!
//! # Board Geometry
//!
//! The board is a 15x15 grid, coordinates 0-indexed as (row, col):
//!
//! - **Start square**: (7, 7), the board center; the first move must cover it
//! - **Bonus squares**: fixed coordinate tables for double/triple letter and
//!   double/triple word squares, assigned once at board construction
//!
//! # Letter Inventory
//!
//! The letter set is the standard Turkish inventory: 29 letters with
//! per-letter point values and supply counts (98 tiles) plus two zero-point
//! jokers (`'*'`), for a fixed total of 100 tiles. The inventory is
//! configuration data, not engine logic; the engine only relies on its
//! invariants (fixed total, joker scores zero).
//!
//! # Mines
//!
//! Five mine kinds are hidden on the board at game start, on squares not
//! claimed by a bonus square:
//!
//! | Kind | Count | Effect on the triggering word |
//! |------|-------|-------------------------------|
//! | `PointDivision` | 5 | mover keeps 30% of the score |
//! | `PointTransfer` | 4 | full score goes to the opponent |
//! | `LetterLoss` | 3 | full score, but the rack is replaced |
//! | `BonusBlocker` | 2 | rescored with all multipliers suppressed |
//! | `WordCancel` | 2 | word scores zero |
//!
//! # Examples
//!
//! ```
//! use wordmine_types::{DurationClass, GameStatus, MineKind, SpecialTile, letter_point};
//!
//! assert_eq!(letter_point('A'), 1);
//! assert_eq!(letter_point('J'), 10);
//! assert_eq!(letter_point('*'), 0); // joker
//!
//! assert_eq!(DurationClass::Minutes5.seconds(), 300);
//! assert!(GameStatus::Completed.is_terminal());
//! assert_eq!(MineKind::PointDivision.count_per_game(), 5);
//! assert_eq!(SpecialTile::TripleWord.as_str(), "tw");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board edge length in cells (15x15 grid)
pub const BOARD_SIZE: u8 = 15;

/// Number of slots on a player's rack
pub const RACK_SIZE: usize = 7;

/// The joker/blank tile marker as it travels through pool and rack
pub const JOKER: char = '*';

/// Number of joker tiles in the supply
pub const JOKER_COUNT: u8 = 2;

/// Total tile inventory: 98 letters plus 2 jokers
pub const TOTAL_TILES: usize = 100;

/// Consecutive passes (by either player) that end the game
pub const PASS_LIMIT: u8 = 3;

/// Start square coordinate (board center)
pub const START_SQUARE: (u8, u8) = (7, 7);

/// Double-letter bonus squares
pub const DOUBLE_LETTER_SQUARES: [(u8, u8); 24] = [
    (0, 5),
    (0, 9),
    (1, 6),
    (1, 8),
    (5, 0),
    (5, 5),
    (5, 9),
    (5, 14),
    (6, 1),
    (6, 6),
    (6, 8),
    (6, 13),
    (8, 1),
    (8, 6),
    (8, 8),
    (8, 13),
    (9, 0),
    (9, 5),
    (9, 9),
    (9, 14),
    (13, 6),
    (13, 8),
    (14, 5),
    (14, 9),
];

/// Triple-letter bonus squares
pub const TRIPLE_LETTER_SQUARES: [(u8, u8); 8] = [
    (1, 1),
    (1, 13),
    (4, 4),
    (4, 10),
    (10, 4),
    (10, 10),
    (13, 1),
    (13, 13),
];

/// Double-word bonus squares
pub const DOUBLE_WORD_SQUARES: [(u8, u8); 9] = [
    (2, 7),
    (3, 3),
    (3, 11),
    (7, 2),
    (7, 7),
    (7, 12),
    (11, 3),
    (11, 11),
    (12, 7),
];

/// Triple-word bonus squares
pub const TRIPLE_WORD_SQUARES: [(u8, u8); 8] = [
    (0, 2),
    (0, 12),
    (2, 0),
    (2, 14),
    (12, 0),
    (12, 14),
    (14, 2),
    (14, 12),
];

/// Letter inventory: (letter, supply count, point value).
///
/// The standard Turkish tile set. The joker is listed separately via
/// [`JOKER`] and [`JOKER_COUNT`]; it always scores zero.
pub const LETTER_SET: [(char, u8, u32); 29] = [
    ('A', 12, 1),
    ('B', 2, 3),
    ('C', 2, 4),
    ('Ç', 2, 4),
    ('D', 2, 3),
    ('E', 8, 1),
    ('F', 1, 7),
    ('G', 1, 5),
    ('Ğ', 1, 8),
    ('H', 1, 5),
    ('I', 4, 2),
    ('İ', 7, 1),
    ('J', 1, 10),
    ('K', 7, 1),
    ('L', 7, 1),
    ('M', 4, 2),
    ('N', 5, 1),
    ('O', 3, 2),
    ('Ö', 1, 7),
    ('P', 1, 5),
    ('R', 6, 1),
    ('S', 3, 2),
    ('Ş', 2, 4),
    ('T', 5, 1),
    ('U', 3, 2),
    ('Ü', 2, 3),
    ('V', 1, 7),
    ('Y', 2, 3),
    ('Z', 2, 4),
];

/// Point value of a letter (0 for the joker and unknown letters)
pub fn letter_point(letter: char) -> u32 {
    LETTER_SET
        .iter()
        .find(|&&(l, _, _)| l == letter)
        .map(|&(_, _, points)| points)
        .unwrap_or(0)
}

/// Supply count of a letter in the full inventory (0 for unknown letters)
pub fn letter_count(letter: char) -> u8 {
    if letter == JOKER {
        return JOKER_COUNT;
    }
    LETTER_SET
        .iter()
        .find(|&&(l, _, _)| l == letter)
        .map(|&(_, count, _)| count)
        .unwrap_or(0)
}

/// Bonus classification of a board square.
///
/// Immutable after board construction; exactly one square is `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecialTile {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    Start,
}

impl SpecialTile {
    /// Convert to short lowercase tag (persistence-friendly)
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialTile::None => "none",
            SpecialTile::DoubleLetter => "dl",
            SpecialTile::TripleLetter => "tl",
            SpecialTile::DoubleWord => "dw",
            SpecialTile::TripleWord => "tw",
            SpecialTile::Start => "star",
        }
    }

    /// Parse from short tag (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(SpecialTile::None),
            "dl" => Some(SpecialTile::DoubleLetter),
            "tl" => Some(SpecialTile::TripleLetter),
            "dw" => Some(SpecialTile::DoubleWord),
            "tw" => Some(SpecialTile::TripleWord),
            "star" => Some(SpecialTile::Start),
            _ => None,
        }
    }
}

/// Mine kinds hidden on the board at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MineKind {
    PointDivision,
    PointTransfer,
    LetterLoss,
    BonusBlocker,
    WordCancel,
}

impl MineKind {
    /// All mine kinds, in placement order
    pub const ALL: [MineKind; 5] = [
        MineKind::PointDivision,
        MineKind::PointTransfer,
        MineKind::LetterLoss,
        MineKind::BonusBlocker,
        MineKind::WordCancel,
    ];

    /// How many mines of this kind are placed per game
    pub fn count_per_game(&self) -> usize {
        match self {
            MineKind::PointDivision => 5,
            MineKind::PointTransfer => 4,
            MineKind::LetterLoss => 3,
            MineKind::BonusBlocker => 2,
            MineKind::WordCancel => 2,
        }
    }

    /// Convert to string tag
    pub fn as_str(&self) -> &'static str {
        match self {
            MineKind::PointDivision => "point_division",
            MineKind::PointTransfer => "point_transfer",
            MineKind::LetterLoss => "letter_loss",
            MineKind::BonusBlocker => "bonus_blocker",
            MineKind::WordCancel => "word_cancel",
        }
    }

    /// Parse from string tag (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "point_division" => Some(MineKind::PointDivision),
            "point_transfer" => Some(MineKind::PointTransfer),
            "letter_loss" => Some(MineKind::LetterLoss),
            "bonus_blocker" => Some(MineKind::BonusBlocker),
            "word_cancel" => Some(MineKind::WordCancel),
            _ => None,
        }
    }

    /// Total mines placed per game across all kinds
    pub fn total_per_game() -> usize {
        Self::ALL.iter().map(|k| k.count_per_game()).sum()
    }
}

/// Game lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created, waiting for an opponent to join
    Waiting,
    /// Both players assigned, moves are accepted
    Active,
    /// Finished normally (surrender, pass rule, or pool exhaustion)
    Completed,
    /// The turn timer of the player on turn ran out
    Timeout,
    /// The creator cancelled the game while it was still waiting
    Abandoned,
}

impl GameStatus {
    /// Terminal states permit no further mutation
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameStatus::Completed | GameStatus::Timeout | GameStatus::Abandoned
        )
    }

    /// Convert to string tag
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Active => "active",
            GameStatus::Completed => "completed",
            GameStatus::Timeout => "timeout",
            GameStatus::Abandoned => "abandoned",
        }
    }

    /// Parse from string tag (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "waiting" => Some(GameStatus::Waiting),
            "active" => Some(GameStatus::Active),
            "completed" => Some(GameStatus::Completed),
            "timeout" => Some(GameStatus::Timeout),
            "abandoned" => Some(GameStatus::Abandoned),
            _ => None,
        }
    }
}

/// Why a game reached a terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// A player surrendered; the opponent wins
    Surrender,
    /// Three consecutive passes; higher score wins, passer loses ties
    PassLimit,
    /// The turn timer expired; the opponent wins
    Timeout,
    /// The creator cancelled a waiting game
    Abandoned,
    /// Pool empty and the mover's rack emptied; higher score wins
    PoolExhausted,
}

impl EndReason {
    /// Convert to string tag
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Surrender => "surrender",
            EndReason::PassLimit => "pass_limit",
            EndReason::Timeout => "timeout",
            EndReason::Abandoned => "abandoned",
            EndReason::PoolExhausted => "pool_exhausted",
        }
    }
}

/// Matchmaking duration classes.
///
/// Two waiting games pair only when their duration classes match; the class
/// also fixes the per-turn clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationClass {
    Minutes2,
    Minutes5,
    Hours12,
    Hours24,
}

impl DurationClass {
    /// Per-turn clock in seconds
    pub fn seconds(&self) -> u32 {
        match self {
            DurationClass::Minutes2 => 2 * 60,
            DurationClass::Minutes5 => 5 * 60,
            DurationClass::Hours12 => 12 * 60 * 60,
            DurationClass::Hours24 => 24 * 60 * 60,
        }
    }

    /// Convert to string tag
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationClass::Minutes2 => "minutes_2",
            DurationClass::Minutes5 => "minutes_5",
            DurationClass::Hours12 => "hours_12",
            DurationClass::Hours24 => "hours_24",
        }
    }

    /// Parse from string tag (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "minutes_2" => Some(DurationClass::Minutes2),
            "minutes_5" => Some(DurationClass::Minutes5),
            "hours_12" => Some(DurationClass::Hours12),
            "hours_24" => Some(DurationClass::Hours24),
            _ => None,
        }
    }
}

/// Orientation of a placed line or an extracted word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Along a row (columns vary)
    Across,
    /// Along a column (rows vary)
    Down,
}

impl Direction {
    /// The other orientation
    pub fn perpendicular(&self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

/// Opaque player identity.
///
/// A plain immutable value passed explicitly into every engine function;
/// no session or auth state lives in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_inventory_is_fixed() {
        let letters: usize = LETTER_SET.iter().map(|&(_, count, _)| count as usize).sum();
        assert_eq!(letters, 98);
        assert_eq!(letters + JOKER_COUNT as usize, TOTAL_TILES);
    }

    #[test]
    fn test_letter_points() {
        assert_eq!(letter_point('A'), 1);
        assert_eq!(letter_point('J'), 10);
        assert_eq!(letter_point('Ğ'), 8);
        assert_eq!(letter_point(JOKER), 0);
        assert_eq!(letter_point('Q'), 0); // not in the set
    }

    #[test]
    fn test_letter_counts() {
        assert_eq!(letter_count('A'), 12);
        assert_eq!(letter_count('F'), 1);
        assert_eq!(letter_count(JOKER), 2);
        assert_eq!(letter_count('W'), 0);
    }

    #[test]
    fn test_bonus_tables_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for &pos in DOUBLE_LETTER_SQUARES
            .iter()
            .chain(TRIPLE_LETTER_SQUARES.iter())
            .chain(DOUBLE_WORD_SQUARES.iter())
            .chain(TRIPLE_WORD_SQUARES.iter())
        {
            assert!(seen.insert(pos), "duplicate bonus square {:?}", pos);
            assert!(pos.0 < BOARD_SIZE && pos.1 < BOARD_SIZE);
        }
        // (7, 7) sits in the double-word table; board construction
        // classifies it as Start.
        assert!(seen.contains(&START_SQUARE));
    }

    #[test]
    fn test_mine_counts() {
        assert_eq!(MineKind::total_per_game(), 16);
        assert_eq!(MineKind::PointDivision.count_per_game(), 5);
        assert_eq!(MineKind::WordCancel.count_per_game(), 2);
    }

    #[test]
    fn test_status_terminality() {
        assert!(!GameStatus::Waiting.is_terminal());
        assert!(!GameStatus::Active.is_terminal());
        assert!(GameStatus::Completed.is_terminal());
        assert!(GameStatus::Timeout.is_terminal());
        assert!(GameStatus::Abandoned.is_terminal());
    }

    #[test]
    fn test_enum_round_trips() {
        for status in [
            GameStatus::Waiting,
            GameStatus::Active,
            GameStatus::Completed,
            GameStatus::Timeout,
            GameStatus::Abandoned,
        ] {
            assert_eq!(GameStatus::from_str(status.as_str()), Some(status));
        }
        for kind in MineKind::ALL {
            assert_eq!(MineKind::from_str(kind.as_str()), Some(kind));
        }
        for class in [
            DurationClass::Minutes2,
            DurationClass::Minutes5,
            DurationClass::Hours12,
            DurationClass::Hours24,
        ] {
            assert_eq!(DurationClass::from_str(class.as_str()), Some(class));
        }
    }

    #[test]
    fn test_duration_seconds() {
        assert_eq!(DurationClass::Minutes2.seconds(), 120);
        assert_eq!(DurationClass::Minutes5.seconds(), 300);
        assert_eq!(DurationClass::Hours12.seconds(), 43_200);
        assert_eq!(DurationClass::Hours24.seconds(), 86_400);
    }
}
