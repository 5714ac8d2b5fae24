//! Mines module - hidden board hazards and their scoring effects
//!
//! Sixteen mines are buried on plain squares at game start, invisible to
//! both players. A confirmed move detonates at most one mine: words are
//! checked in extraction order and tiles within a word first to last, and
//! the first active mine found fires. The effect applies to the triggering
//! word only; the move's other words score normally. A fired mine is
//! deactivated and revealed, never to fire again.

use crate::rng::SimpleRng;
use crate::scoring::score_word;
use crate::words::Word;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wordmine_types::{
    MineKind, BOARD_SIZE, DOUBLE_LETTER_SQUARES, DOUBLE_WORD_SQUARES, START_SQUARE,
    TRIPLE_LETTER_SQUARES, TRIPLE_WORD_SQUARES,
};

/// A single buried mine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mine {
    pub kind: MineKind,
    pub row: u8,
    pub col: u8,
    pub is_active: bool,
    pub is_revealed: bool,
}

/// All mines of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineLayout {
    mines: Vec<Mine>,
}

impl MineLayout {
    /// Layout with no mines (game not yet activated)
    pub fn empty() -> Self {
        Self { mines: Vec::new() }
    }

    pub fn mines(&self) -> &[Mine] {
        &self.mines
    }

    /// Kind of the active mine at (row, col), if one is buried there
    pub fn active_at(&self, row: u8, col: u8) -> Option<MineKind> {
        self.mines
            .iter()
            .find(|mine| mine.row == row && mine.col == col && mine.is_active)
            .map(|mine| mine.kind)
    }

    /// Deactivate and reveal the mine at (row, col) after it fires
    pub fn trigger(&mut self, row: u8, col: u8) {
        for mine in &mut self.mines {
            if mine.row == row && mine.col == col {
                mine.is_active = false;
                mine.is_revealed = true;
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.mines.iter().filter(|mine| mine.is_active).count()
    }
}

/// Bury the full mine complement on squares not in `claimed`.
///
/// Positions are drawn by rejection sampling; each buried mine claims its
/// square so no two mines share one.
pub fn place_mines(claimed: &[(u8, u8)], rng: &mut SimpleRng) -> MineLayout {
    let mut taken: Vec<(u8, u8)> = claimed.to_vec();
    let mut mines = Vec::with_capacity(MineKind::total_per_game());

    for &kind in MineKind::ALL.iter() {
        for _ in 0..kind.count_per_game() {
            let (row, col) = loop {
                let row = rng.next_range(BOARD_SIZE as u32) as u8;
                let col = rng.next_range(BOARD_SIZE as u32) as u8;
                if !taken.contains(&(row, col)) {
                    break (row, col);
                }
            };
            taken.push((row, col));
            mines.push(Mine {
                kind,
                row,
                col,
                is_active: true,
                is_revealed: false,
            });
        }
    }

    MineLayout { mines }
}

/// Bury mines for a fresh game, keeping bonus squares and the start
/// square mine-free.
pub fn generate_mines(rng: &mut SimpleRng) -> MineLayout {
    let mut claimed: Vec<(u8, u8)> = Vec::new();
    claimed.extend_from_slice(&DOUBLE_LETTER_SQUARES);
    claimed.extend_from_slice(&TRIPLE_LETTER_SQUARES);
    claimed.extend_from_slice(&DOUBLE_WORD_SQUARES);
    claimed.extend_from_slice(&TRIPLE_WORD_SQUARES);
    claimed.push(START_SQUARE);
    place_mines(&claimed, rng)
}

/// Outcome of scoring a move's words against the mine layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineResolution {
    /// Points credited to the mover
    pub mover_delta: u32,
    /// Points credited to the opponent (point-transfer mine)
    pub opponent_delta: u32,
    /// Whether the mover's rack must be discarded and redrawn
    pub rack_replace: bool,
    /// The mine that fired, if any, with its position
    pub triggered: Option<(MineKind, (u8, u8))>,
}

/// Score a move's words, letting at most one mine fire.
///
/// Words are scanned in order, tiles within each word first to last.
/// Committed tiles count too: the at-most-one rule can leave a mine active
/// under a tile from an earlier move, and a later word reusing that square
/// detonates it. Read-only: the caller deactivates the triggered mine via
/// [`MineLayout::trigger`].
pub fn apply_mines(words: &[Word], mines: &MineLayout) -> MineResolution {
    let hit = words.iter().enumerate().find_map(|(word_idx, word)| {
        word.tiles().iter().find_map(|tile| {
            mines
                .active_at(tile.row, tile.col)
                .map(|kind| (word_idx, kind, (tile.row, tile.col)))
        })
    });

    let mut mover_delta: u32 = 0;
    let mut opponent_delta: u32 = 0;
    let mut rack_replace = false;

    for (word_idx, word) in words.iter().enumerate() {
        let raw = score_word(word, false);
        match hit {
            Some((idx, kind, pos)) if idx == word_idx => {
                debug!(kind = kind.as_str(), row = pos.0, col = pos.1, word = %word.text(), "mine triggered");
                match kind {
                    MineKind::PointDivision => {
                        // 30% of the word's score, rounded down
                        mover_delta += raw * 3 / 10;
                    }
                    MineKind::PointTransfer => {
                        opponent_delta += raw;
                    }
                    MineKind::LetterLoss => {
                        mover_delta += raw;
                        rack_replace = true;
                    }
                    MineKind::BonusBlocker => {
                        mover_delta += score_word(word, true);
                    }
                    MineKind::WordCancel => {}
                }
            }
            _ => mover_delta += raw,
        }
    }

    MineResolution {
        mover_delta,
        opponent_delta,
        rack_replace,
        triggered: hit.map(|(_, kind, pos)| (kind, pos)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::placement::validate_placement;
    use crate::words::extract_words;

    fn layout_with(kind: MineKind, row: u8, col: u8) -> MineLayout {
        MineLayout {
            mines: vec![Mine {
                kind,
                row,
                col,
                is_active: true,
                is_revealed: false,
            }],
        }
    }

    fn words_on(board: &Board) -> Vec<Word> {
        let placement = validate_placement(board).unwrap();
        extract_words(board, &placement).unwrap()
    }

    // Plain-square word worth 3 points: A T A on row 4
    fn plain_move() -> Vec<Word> {
        let mut board = Board::new();
        board.set_committed(4, 6, 'A');
        board.place_letter(4, 7, 'T', false);
        board.place_letter(4, 8, 'A', false);
        words_on(&board)
    }

    #[test]
    fn test_full_complement_placed_off_claimed_squares() {
        let mut rng = SimpleRng::new(42);
        let layout = generate_mines(&mut rng);

        assert_eq!(layout.mines().len(), 16);
        assert_eq!(layout.active_count(), 16);

        let mut positions: Vec<(u8, u8)> =
            layout.mines().iter().map(|m| (m.row, m.col)).collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), 16);

        for mine in layout.mines() {
            assert_ne!((mine.row, mine.col), START_SQUARE);
            assert!(!DOUBLE_WORD_SQUARES.contains(&(mine.row, mine.col)));
            assert!(!TRIPLE_WORD_SQUARES.contains(&(mine.row, mine.col)));
        }
    }

    #[test]
    fn test_no_mine_scores_normally() {
        let words = plain_move();
        let layout = MineLayout { mines: vec![] };

        let res = apply_mines(&words, &layout);
        assert_eq!(res.mover_delta, 3);
        assert_eq!(res.opponent_delta, 0);
        assert!(!res.rack_replace);
        assert_eq!(res.triggered, None);
    }

    #[test]
    fn test_point_division_rounds_down() {
        let words = plain_move();
        let layout = layout_with(MineKind::PointDivision, 4, 7);

        let res = apply_mines(&words, &layout);
        // floor(3 * 0.30) = 0
        assert_eq!(res.mover_delta, 0);
        assert_eq!(
            res.triggered,
            Some((MineKind::PointDivision, (4, 7)))
        );
    }

    #[test]
    fn test_point_transfer_credits_opponent() {
        let words = plain_move();
        let layout = layout_with(MineKind::PointTransfer, 4, 8);

        let res = apply_mines(&words, &layout);
        assert_eq!(res.mover_delta, 0);
        assert_eq!(res.opponent_delta, 3);
    }

    #[test]
    fn test_letter_loss_keeps_score_flags_rack() {
        let words = plain_move();
        let layout = layout_with(MineKind::LetterLoss, 4, 7);

        let res = apply_mines(&words, &layout);
        assert_eq!(res.mover_delta, 3);
        assert!(res.rack_replace);
    }

    #[test]
    fn test_bonus_blocker_rescores_without_multipliers() {
        // Word over the triple-word square at (0, 2)
        let mut board = Board::new();
        board.set_committed(0, 3, 'A');
        board.place_letter(0, 2, 'K', false);
        let words = words_on(&board);

        let layout = layout_with(MineKind::BonusBlocker, 0, 2);
        let res = apply_mines(&words, &layout);
        // K + A without the x3
        assert_eq!(res.mover_delta, 2);
    }

    #[test]
    fn test_word_cancel_zeroes_triggering_word_only() {
        // Placed tile forms AA across (cancelled) and AL down (kept)
        let mut board = Board::new();
        board.set_committed(7, 7, 'A');
        board.set_committed(8, 8, 'L');
        board.place_letter(7, 8, 'A', false);
        let words = words_on(&board);
        assert_eq!(words.len(), 2);

        let layout = layout_with(MineKind::WordCancel, 7, 8);
        let res = apply_mines(&words, &layout);

        // The first word containing the tile is cancelled; the second
        // still scores, and only one mine can fire per move.
        let second = score_word(&words[1], false);
        assert_eq!(res.mover_delta, second);
    }

    #[test]
    fn test_leftover_mine_under_committed_tile_detonates() {
        let words = plain_move();
        // The committed A at (4, 6) sits on a mine an earlier move left
        // active; reusing the square in a new word sets it off
        let layout = layout_with(MineKind::WordCancel, 4, 6);

        let res = apply_mines(&words, &layout);
        assert_eq!(res.triggered, Some((MineKind::WordCancel, (4, 6))));
        assert_eq!(res.mover_delta, 0);
    }

    #[test]
    fn test_committed_tile_wins_tile_order() {
        let words = plain_move();
        // The committed A at (4, 6) comes first in the word, so its mine
        // fires ahead of the one under the newly placed T
        let layout = MineLayout {
            mines: vec![
                Mine {
                    kind: MineKind::PointTransfer,
                    row: 4,
                    col: 7,
                    is_active: true,
                    is_revealed: false,
                },
                Mine {
                    kind: MineKind::WordCancel,
                    row: 4,
                    col: 6,
                    is_active: true,
                    is_revealed: false,
                },
            ],
        };

        let res = apply_mines(&words, &layout);
        assert_eq!(res.triggered, Some((MineKind::WordCancel, (4, 6))));
        assert_eq!(res.opponent_delta, 0);
    }

    #[test]
    fn test_inactive_mine_does_not_fire() {
        let words = plain_move();
        let mut layout = layout_with(MineKind::WordCancel, 4, 7);
        layout.trigger(4, 7);

        let res = apply_mines(&words, &layout);
        assert_eq!(res.mover_delta, 3);
        assert!(layout.mines()[0].is_revealed);
    }

    #[test]
    fn test_at_most_one_mine_fires() {
        let words = plain_move();
        let layout = MineLayout {
            mines: vec![
                Mine {
                    kind: MineKind::WordCancel,
                    row: 4,
                    col: 7,
                    is_active: true,
                    is_revealed: false,
                },
                Mine {
                    kind: MineKind::PointTransfer,
                    row: 4,
                    col: 8,
                    is_active: true,
                    is_revealed: false,
                },
            ],
        };

        let res = apply_mines(&words, &layout);
        // First tile in the word wins; the transfer mine never fires
        assert_eq!(res.triggered, Some((MineKind::WordCancel, (4, 7))));
        assert_eq!(res.opponent_delta, 0);
        assert_eq!(res.mover_delta, 0);
    }
}
