//! Game module - the full match state machine
//!
//! [`GameState`] owns everything one match needs: board, letter pool, both
//! racks, mine layout, scores, and lifecycle bookkeeping. Every operation is
//! a pure transition: it borrows `&self`, validates, and returns a fresh
//! state (or a rejection that leaves the original untouched). Time enters
//! only as an explicit `now` argument in unix seconds, and randomness only
//! as a caller-owned [`SimpleRng`], so any game can be replayed exactly.
//!
//! Lifecycle: `Waiting` (creator alone) -> `Active` (opponent joined, pool
//! dealt, mines buried, coin flip for the first turn) -> one of the
//! terminal states (`Completed`, `Timeout`, `Abandoned`).
//!
//! Turn timers are derived, never ticked: `last_move_at` plus the game's
//! duration class decides expiry whenever the host asks.

use crate::board::Board;
use crate::dict::WordJudge;
use crate::error::MoveError;
use crate::letters::{LetterPool, Rack};
use crate::mines::{apply_mines, generate_mines, MineLayout};
use crate::placement::validate_placement;
use crate::rng::SimpleRng;
use crate::words::extract_words;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use wordmine_types::{
    DurationClass, EndReason, GameStatus, MineKind, PlayerId, JOKER, PASS_LIMIT, RACK_SIZE,
};

/// Everything a confirmed move produced
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    /// The game state after the move
    pub state: GameState,
    /// Texts of the words the move formed, in extraction order
    pub words: Vec<String>,
    /// Points the mover earned
    pub mover_delta: u32,
    /// Points the opponent earned (point-transfer mine)
    pub opponent_delta: u32,
    /// The mine that fired, if any
    pub triggered_mine: Option<(MineKind, (u8, u8))>,
}

/// Complete state of one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    status: GameStatus,
    creator: PlayerId,
    opponent: Option<PlayerId>,
    current_turn: Option<PlayerId>,
    scores: BTreeMap<PlayerId, u32>,
    duration: DurationClass,
    created_at: i64,
    last_move_at: Option<i64>,
    consecutive_pass_count: u8,
    last_passed_by: Option<PlayerId>,
    winner: Option<PlayerId>,
    loser: Option<PlayerId>,
    end_reason: Option<EndReason>,
    board: Board,
    pool: LetterPool,
    racks: BTreeMap<PlayerId, Rack>,
    mines: MineLayout,
}

impl GameState {
    /// Open a new game: the creator waits for an opponent.
    pub fn create(creator: PlayerId, duration: DurationClass, now: i64) -> Self {
        let mut scores = BTreeMap::new();
        scores.insert(creator.clone(), 0);

        Self {
            status: GameStatus::Waiting,
            creator,
            opponent: None,
            current_turn: None,
            scores,
            duration,
            created_at: now,
            last_move_at: None,
            consecutive_pass_count: 0,
            last_passed_by: None,
            winner: None,
            loser: None,
            end_reason: None,
            board: Board::new(),
            pool: LetterPool::full(),
            racks: BTreeMap::new(),
            mines: MineLayout::empty(),
        }
    }

    /// Whether `user` may join this game in the given duration class
    pub fn can_join(&self, user: &PlayerId, duration: DurationClass) -> bool {
        self.status == GameStatus::Waiting && *user != self.creator && duration == self.duration
    }

    /// Pair an opponent and activate the game: shuffle the pool, deal both
    /// racks, bury the mines, and flip a coin for the first turn.
    pub fn join(
        &self,
        opponent: PlayerId,
        now: i64,
        rng: &mut SimpleRng,
    ) -> Result<GameState, MoveError> {
        if !self.can_join(&opponent, self.duration) {
            return Err(MoveError::GameNotActive);
        }

        let mut next = self.clone();
        next.pool = LetterPool::shuffled(rng);
        next.mines = generate_mines(rng);

        let creator_hand = next.pool.deal(RACK_SIZE);
        let opponent_hand = next.pool.deal(RACK_SIZE);
        next.racks
            .insert(next.creator.clone(), Rack::from_deal(creator_hand));
        next.racks
            .insert(opponent.clone(), Rack::from_deal(opponent_hand));

        next.scores.insert(opponent.clone(), 0);
        next.current_turn = Some(if rng.coin_flip() {
            next.creator.clone()
        } else {
            opponent.clone()
        });
        next.opponent = Some(opponent);
        next.status = GameStatus::Active;
        next.last_move_at = Some(now);

        debug!(
            creator = next.creator.as_str(),
            opponent = next.opponent.as_ref().map(|p| p.as_str()).unwrap_or(""),
            first = next.current_turn.as_ref().map(|p| p.as_str()).unwrap_or(""),
            "game activated"
        );
        Ok(next)
    }

    /// Creator backs out of a game nobody joined.
    pub fn abandon(&self, player: &PlayerId) -> Result<GameState, MoveError> {
        if self.status != GameStatus::Waiting {
            return Err(MoveError::GameNotActive);
        }
        if *player != self.creator {
            return Err(MoveError::NotYourTurn);
        }
        let mut next = self.clone();
        next.status = GameStatus::Abandoned;
        next.end_reason = Some(EndReason::Abandoned);
        Ok(next)
    }

    /// Stage one rack tile on an empty square. A joker (`'*'`) needs the
    /// letter it will play as in `as_letter`.
    pub fn place_tile(
        &self,
        player: &PlayerId,
        slot: usize,
        row: u8,
        col: u8,
        as_letter: Option<char>,
    ) -> Result<GameState, MoveError> {
        self.guard_turn(player)?;

        let mut next = self.clone();
        let rack = next.racks.get_mut(player).ok_or(MoveError::SlotEmpty)?;
        let tile = rack.take(slot).ok_or(MoveError::SlotEmpty)?;

        let (letter, joker) = if tile == JOKER {
            match as_letter {
                Some(letter) => (letter, true),
                None => return Err(MoveError::JokerLetterRequired),
            }
        } else {
            (tile, false)
        };

        if !next.board.place_letter(row as i8, col as i8, letter, joker) {
            return Err(MoveError::SquareUnavailable);
        }
        Ok(next)
    }

    /// Take a tile staged this turn back onto the rack.
    pub fn take_back_tile(
        &self,
        player: &PlayerId,
        row: u8,
        col: u8,
    ) -> Result<GameState, MoveError> {
        self.guard_turn(player)?;

        let mut next = self.clone();
        let (letter, joker) = next
            .board
            .take_back(row as i8, col as i8)
            .ok_or(MoveError::SquareUnavailable)?;
        let tile = if joker { JOKER } else { letter };
        if let Some(rack) = next.racks.get_mut(player) {
            rack.put_back(tile);
        }
        Ok(next)
    }

    /// Return every staged tile to the rack, leaving the turn open.
    pub fn cancel_move(&self, player: &PlayerId) -> Result<GameState, MoveError> {
        self.guard_turn(player)?;

        let mut next = self.clone();
        let removed = next.board.clear_placed();
        if let Some(rack) = next.racks.get_mut(player) {
            for (letter, joker) in removed {
                rack.put_back(if joker { JOKER } else { letter });
            }
        }
        Ok(next)
    }

    /// Confirm the staged move: validate geometry, extract and judge the
    /// words, score them through the mine layout, then commit.
    ///
    /// Any rejection leaves the staged tiles (and everything else) exactly
    /// as they were.
    pub fn confirm_move(
        &self,
        player: &PlayerId,
        judge: &dyn WordJudge,
        now: i64,
        rng: &mut SimpleRng,
    ) -> Result<MoveOutcome, MoveError> {
        self.guard_turn(player)?;
        let opponent = self
            .opponent_of(player)
            .ok_or(MoveError::OpponentMissing)?
            .clone();

        let placement = validate_placement(&self.board)?;
        let words = extract_words(&self.board, &placement)?;
        for word in &words {
            let text = word.text();
            if !judge.is_word(&text) {
                return Err(MoveError::UnknownWord { word: text });
            }
        }

        let resolution = apply_mines(&words, &self.mines);

        let mut next = self.clone();
        next.board.commit_turn();
        if let Some((_, (row, col))) = resolution.triggered {
            next.mines.trigger(row, col);
        }

        *next.scores.entry(player.clone()).or_insert(0) += resolution.mover_delta;
        *next.scores.entry(opponent.clone()).or_insert(0) += resolution.opponent_delta;

        if let Some(rack) = next.racks.get_mut(player) {
            if resolution.rack_replace {
                rack.discard_all(&mut next.pool);
            }
            rack.refill(&mut next.pool, rng);
        }

        next.consecutive_pass_count = 0;
        next.last_passed_by = None;
        next.last_move_at = Some(now);
        next.current_turn = Some(opponent);

        // A player who empties a dry pool and their rack ends the game
        let mover_rack_empty = next
            .racks
            .get(player)
            .map(|rack| rack.is_empty())
            .unwrap_or(false);
        if next.pool.is_empty() && mover_rack_empty {
            let winner = next.leader();
            next.finish(EndReason::PoolExhausted, winner, None);
        }

        debug!(
            player = player.as_str(),
            mover_delta = resolution.mover_delta,
            opponent_delta = resolution.opponent_delta,
            words = words.len(),
            "move confirmed"
        );

        Ok(MoveOutcome {
            state: next,
            words: words.iter().map(|word| word.text()).collect(),
            mover_delta: resolution.mover_delta,
            opponent_delta: resolution.opponent_delta,
            triggered_mine: resolution.triggered,
        })
    }

    /// Pass the turn. The third consecutive pass ends the game; on equal
    /// scores the player who passed last loses.
    pub fn pass(&self, player: &PlayerId, now: i64) -> Result<GameState, MoveError> {
        self.guard_turn(player)?;
        let opponent = self
            .opponent_of(player)
            .ok_or(MoveError::OpponentMissing)?
            .clone();

        let mut next = self.cancel_move(player)?;
        next.consecutive_pass_count += 1;
        next.last_passed_by = Some(player.clone());
        next.last_move_at = Some(now);
        next.current_turn = Some(opponent.clone());

        if next.consecutive_pass_count >= PASS_LIMIT {
            let winner = match next.leader() {
                Some(leader) => Some(leader),
                // Tied scores: the last passer loses
                None => Some(opponent),
            };
            next.finish(EndReason::PassLimit, winner, None);
        }
        Ok(next)
    }

    /// Concede the game. Allowed for either paired player, on turn or not.
    pub fn surrender(&self, player: &PlayerId, now: i64) -> Result<GameState, MoveError> {
        if self.status != GameStatus::Active {
            return Err(MoveError::GameNotActive);
        }
        let opponent = self
            .opponent_of(player)
            .ok_or(MoveError::OpponentMissing)?
            .clone();

        let mut next = self.clone();
        next.last_move_at = Some(now);
        next.finish(EndReason::Surrender, Some(opponent), Some(player.clone()));
        Ok(next)
    }

    /// Seconds the mover has left; a player not on turn always shows the
    /// full allowance.
    pub fn remaining_seconds(&self, player: &PlayerId, now: i64) -> u32 {
        let allowance = self.duration.seconds();
        if self.status != GameStatus::Active || self.current_turn.as_ref() != Some(player) {
            return allowance;
        }
        match self.last_move_at {
            Some(stamp) => {
                let elapsed = u32::try_from(now.saturating_sub(stamp).max(0)).unwrap_or(u32::MAX);
                allowance.saturating_sub(elapsed)
            }
            None => allowance,
        }
    }

    /// If the mover's clock ran out, the timed-out state; None otherwise.
    /// Derived from timestamps, so it can be asked at any time.
    pub fn timeout_if_expired(&self, now: i64) -> Option<GameState> {
        if self.status != GameStatus::Active {
            return None;
        }
        let stamp = self.last_move_at?;
        if now.saturating_sub(stamp) <= self.duration.seconds() as i64 {
            return None;
        }

        let loser = self.current_turn.clone()?;
        let winner = self.opponent_of(&loser).cloned();

        let mut next = self.clone();
        next.status = GameStatus::Timeout;
        next.end_reason = Some(EndReason::Timeout);
        next.winner = winner;
        next.loser = Some(loser);
        next.current_turn = None;
        Some(next)
    }

    // --- accessors ---

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn creator(&self) -> &PlayerId {
        &self.creator
    }

    pub fn opponent(&self) -> Option<&PlayerId> {
        self.opponent.as_ref()
    }

    pub fn current_turn(&self) -> Option<&PlayerId> {
        self.current_turn.as_ref()
    }

    pub fn duration(&self) -> DurationClass {
        self.duration
    }

    pub fn score_of(&self, player: &PlayerId) -> u32 {
        self.scores.get(player).copied().unwrap_or(0)
    }

    pub fn winner(&self) -> Option<&PlayerId> {
        self.winner.as_ref()
    }

    pub fn loser(&self) -> Option<&PlayerId> {
        self.loser.as_ref()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rack_of(&self, player: &PlayerId) -> Option<&Rack> {
        self.racks.get(player)
    }

    pub fn mines(&self) -> &MineLayout {
        &self.mines
    }

    pub fn consecutive_pass_count(&self) -> u8 {
        self.consecutive_pass_count
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// The other paired player, if pairing happened
    pub fn opponent_of(&self, player: &PlayerId) -> Option<&PlayerId> {
        let opponent = self.opponent.as_ref()?;
        if player == &self.creator {
            Some(opponent)
        } else if player == opponent {
            Some(&self.creator)
        } else {
            None
        }
    }

    /// Total tiles across pool, racks, and board. Always the full inventory
    /// once the game is active.
    pub fn tile_census(&self) -> usize {
        self.pool.len()
            + self.racks.values().map(|rack| rack.tile_count()).sum::<usize>()
            + self.board.letter_count()
    }

    // --- internals ---

    fn guard_turn(&self, player: &PlayerId) -> Result<(), MoveError> {
        if self.status != GameStatus::Active {
            return Err(MoveError::GameNotActive);
        }
        if self.current_turn.as_ref() != Some(player) {
            return Err(MoveError::NotYourTurn);
        }
        Ok(())
    }

    /// Player with the strictly higher score; None on a tie
    fn leader(&self) -> Option<PlayerId> {
        let opponent = self.opponent.as_ref()?;
        let creator_score = self.score_of(&self.creator);
        let opponent_score = self.score_of(opponent);
        if creator_score > opponent_score {
            Some(self.creator.clone())
        } else if opponent_score > creator_score {
            Some(opponent.clone())
        } else {
            None
        }
    }

    fn finish(&mut self, reason: EndReason, winner: Option<PlayerId>, loser: Option<PlayerId>) {
        self.status = GameStatus::Completed;
        self.end_reason = Some(reason);
        self.loser = loser.or_else(|| match (&winner, self.opponent.as_ref()) {
            (Some(w), Some(opponent)) => {
                if w == &self.creator {
                    Some(opponent.clone())
                } else {
                    Some(self.creator.clone())
                }
            }
            _ => None,
        });
        self.winner = winner;
        self.current_turn = None;
        debug!(reason = reason.as_str(), "game finished");
    }
}
