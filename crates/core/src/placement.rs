//! Placement module - geometric legality of a staged move
//!
//! Validates the set of tiles staged this turn against the board, in rule
//! order: at least one tile, first move covers the start square, later moves
//! touch a committed letter, tiles form a single line, and the line has no
//! internal gaps. Validation is read-only; a rejection leaves everything
//! untouched.

use crate::board::Board;
use crate::error::MoveError;
use wordmine_types::{Direction, START_SQUARE};

/// Orthogonal neighbor offsets (up, down, left, right)
const NEIGHBORS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A validated placement: the staged positions and their line orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    positions: Vec<(u8, u8)>,
    direction: Direction,
}

impl Placement {
    /// Staged positions in row-major order
    pub fn positions(&self) -> &[(u8, u8)] {
        &self.positions
    }

    /// Orientation of the placed line.
    /// A single tile reports `Across`; the extractor scans both ways.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether exactly one tile was placed
    pub fn is_single(&self) -> bool {
        self.positions.len() == 1
    }
}

/// Validate the tiles staged this turn. See module docs for rule order.
pub fn validate_placement(board: &Board) -> Result<Placement, MoveError> {
    let placed = board.placed_positions();

    // Rule 1: at least one tile
    if placed.is_empty() {
        return Err(MoveError::EmptyMove);
    }

    // Rule 2: the game's first move must cover the start square
    let first_move = !board.has_any_committed_letter();
    if first_move {
        if !placed.contains(&START_SQUARE) {
            return Err(MoveError::MustCoverStart);
        }
    } else {
        // Rule 3: later moves must touch a letter from a previous turn
        let connected = placed.iter().any(|&(row, col)| {
            NEIGHBORS.iter().any(|&(dr, dc)| {
                board.has_committed_letter(row as i8 + dr, col as i8 + dc)
            })
        });
        if !connected {
            return Err(MoveError::NotConnected);
        }
    }

    // Rule 4: a single row or a single column
    let same_row = placed.iter().all(|&(row, _)| row == placed[0].0);
    let same_col = placed.iter().all(|&(_, col)| col == placed[0].1);
    if !same_row && !same_col {
        return Err(MoveError::NotLinear);
    }
    let direction = if same_row {
        Direction::Across
    } else {
        Direction::Down
    };

    // Rule 5: no internal gaps between the line's extremes
    check_gaps(board, &placed, direction)?;

    Ok(Placement {
        positions: placed,
        direction,
    })
}

/// Every coordinate between the line's min and max must hold a letter
/// (staged this turn or committed earlier).
fn check_gaps(board: &Board, placed: &[(u8, u8)], direction: Direction) -> Result<(), MoveError> {
    match direction {
        Direction::Across => {
            let row = placed[0].0;
            let min = placed.iter().map(|&(_, col)| col).min().unwrap_or(0);
            let max = placed.iter().map(|&(_, col)| col).max().unwrap_or(0);
            for col in min..=max {
                if !board.has_letter(row as i8, col as i8) {
                    return Err(MoveError::GapInPlacement);
                }
            }
        }
        Direction::Down => {
            let col = placed[0].1;
            let min = placed.iter().map(|&(row, _)| row).min().unwrap_or(0);
            let max = placed.iter().map(|&(row, _)| row).max().unwrap_or(0);
            for row in min..=max {
                if !board.has_letter(row as i8, col as i8) {
                    return Err(MoveError::GapInPlacement);
                }
            }
        }
    }
    Ok(())
}

/// Whether (row, col) is a legal drop target for the next staged tile.
///
/// Read-only highlight query: an empty square that is the start square (or
/// adjacent to a tile staged this turn) on the first move, or adjacent to
/// any letter afterwards.
pub fn is_allowed_square(board: &Board, row: u8, col: u8) -> bool {
    if !board.is_empty_square(row as i8, col as i8) {
        return false;
    }

    let adjacent_to = |want_committed_only: bool| {
        NEIGHBORS.iter().any(|&(dr, dc)| {
            let (nr, nc) = (row as i8 + dr, col as i8 + dc);
            if want_committed_only {
                board.has_committed_letter(nr, nc)
            } else {
                board.has_letter(nr, nc)
            }
        })
    };

    if !board.has_any_committed_letter() {
        // First move: the start square, then squares touching the staged line
        (row, col) == START_SQUARE || adjacent_to(false)
    } else {
        adjacent_to(false)
    }
}
