//! Board module - manages the 15x15 game grid
//!
//! Each cell carries an immutable bonus classification assigned at
//! construction and a mutable occupancy (letter, joker flag, placed-this-turn
//! flag) assigned during play. Cells are stored in a flat row-major buffer.
//! Coordinates: (row, col), both in 0..=14; the start square is (7, 7).
//!
//! Tiles staged during the current turn keep `placed_this_turn = true` until
//! the move is confirmed (`commit_turn`) or cancelled (`clear_placed`).

use serde::{Deserialize, Serialize};
use wordmine_types::{
    SpecialTile, BOARD_SIZE, DOUBLE_LETTER_SQUARES, DOUBLE_WORD_SQUARES, START_SQUARE,
    TRIPLE_LETTER_SQUARES, TRIPLE_WORD_SQUARES,
};

/// Total number of cells on the board
const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A single board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    special: SpecialTile,
    letter: Option<char>,
    joker: bool,
    placed_this_turn: bool,
}

impl Cell {
    fn empty(special: SpecialTile) -> Self {
        Self {
            special,
            letter: None,
            joker: false,
            placed_this_turn: false,
        }
    }

    /// Bonus classification; never changes after board construction
    pub fn special(&self) -> SpecialTile {
        self.special
    }

    /// The letter occupying this cell, if any.
    /// For a joker this is the letter it plays as, not `'*'`.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether the occupying tile is a joker (always scores zero)
    pub fn is_joker(&self) -> bool {
        self.joker
    }

    /// Whether the tile was staged during the current turn
    pub fn placed_this_turn(&self) -> bool {
        self.placed_this_turn
    }

    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// The game board - 15x15 cells in flat row-major storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with all bonus squares pre-assigned.
    /// Pure and deterministic: the coordinate tables are fixed configuration.
    pub fn new() -> Self {
        let mut cells = vec![Cell::empty(SpecialTile::None); CELL_COUNT];

        for &(row, col) in DOUBLE_LETTER_SQUARES.iter() {
            cells[flat(row, col)].special = SpecialTile::DoubleLetter;
        }
        for &(row, col) in TRIPLE_LETTER_SQUARES.iter() {
            cells[flat(row, col)].special = SpecialTile::TripleLetter;
        }
        for &(row, col) in DOUBLE_WORD_SQUARES.iter() {
            cells[flat(row, col)].special = SpecialTile::DoubleWord;
        }
        for &(row, col) in TRIPLE_WORD_SQUARES.iter() {
            cells[flat(row, col)].special = SpecialTile::TripleWord;
        }
        // The center coordinate appears in the double-word table; Start wins.
        cells[flat(START_SQUARE.0, START_SQUARE.1)].special = SpecialTile::Start;

        Self { cells }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_SIZE as i8 || col < 0 || col >= BOARD_SIZE as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_SIZE as usize) + (col as usize))
    }

    /// Get cell at (row, col); None if out of bounds
    pub fn cell(&self, row: i8, col: i8) -> Option<&Cell> {
        Self::index(row, col).map(|idx| &self.cells[idx])
    }

    /// Bonus classification at (row, col); in-bounds coordinates only
    pub fn special_at(&self, row: u8, col: u8) -> SpecialTile {
        self.cells[flat(row, col)].special
    }

    /// Whether (row, col) is in bounds and holds any letter
    pub fn has_letter(&self, row: i8, col: i8) -> bool {
        matches!(self.cell(row, col), Some(cell) if cell.letter.is_some())
    }

    /// Whether (row, col) holds a letter committed on a previous turn
    pub fn has_committed_letter(&self, row: i8, col: i8) -> bool {
        matches!(
            self.cell(row, col),
            Some(cell) if cell.letter.is_some() && !cell.placed_this_turn
        )
    }

    /// Whether (row, col) is in bounds and empty
    pub fn is_empty_square(&self, row: i8, col: i8) -> bool {
        matches!(self.cell(row, col), Some(cell) if cell.letter.is_none())
    }

    /// Stage a tile on an empty square for the current turn.
    /// Returns false if out of bounds or already occupied.
    pub fn place_letter(&mut self, row: i8, col: i8, letter: char, joker: bool) -> bool {
        match Self::index(row, col) {
            Some(idx) if self.cells[idx].letter.is_none() => {
                self.cells[idx].letter = Some(letter);
                self.cells[idx].joker = joker;
                self.cells[idx].placed_this_turn = true;
                true
            }
            _ => false,
        }
    }

    /// Remove a tile staged this turn, returning (letter, joker).
    /// Committed letters cannot be taken back.
    pub fn take_back(&mut self, row: i8, col: i8) -> Option<(char, bool)> {
        let idx = Self::index(row, col)?;
        let cell = &mut self.cells[idx];
        if !cell.placed_this_turn {
            return None;
        }
        let letter = cell.letter.take()?;
        let joker = cell.joker;
        cell.joker = false;
        cell.placed_this_turn = false;
        Some((letter, joker))
    }

    /// Positions of all tiles staged this turn, in row-major order
    pub fn placed_positions(&self) -> Vec<(u8, u8)> {
        let mut positions = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[flat(row, col)].placed_this_turn {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Make all staged tiles permanent (end of a confirmed turn)
    pub fn commit_turn(&mut self) {
        for cell in &mut self.cells {
            cell.placed_this_turn = false;
        }
    }

    /// Remove every staged tile, returning the removed (letter, joker) pairs
    /// in row-major order (cancelled move; tiles go back to the rack)
    pub fn clear_placed(&mut self) -> Vec<(char, bool)> {
        let mut removed = Vec::new();
        for cell in &mut self.cells {
            if cell.placed_this_turn {
                if let Some(letter) = cell.letter.take() {
                    removed.push((letter, cell.joker));
                }
                cell.joker = false;
                cell.placed_this_turn = false;
            }
        }
        removed
    }

    /// Number of occupied cells (staged and committed)
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.letter.is_some()).count()
    }

    /// Whether any letter from a previous turn exists on the board.
    /// False means the current placement is the game's first move.
    pub fn has_any_committed_letter(&self) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.letter.is_some() && !cell.placed_this_turn)
    }

    /// Place a committed letter directly (board setup in tests)
    #[cfg(test)]
    pub(crate) fn set_committed(&mut self, row: u8, col: u8, letter: char) {
        let cell = &mut self.cells[flat(row, col)];
        cell.letter = Some(letter);
        cell.joker = false;
        cell.placed_this_turn = false;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[inline(always)]
fn flat(row: u8, col: u8) -> usize {
    (row as usize) * (BOARD_SIZE as usize) + (col as usize)
}
