//! Core rules engine - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and move
//! resolution logic for a two-player word board game. It has **zero
//! dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed replays an identical game
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (server, client, headless)
//! - **Pure**: Every operation is `&self -> Result<new state, rejection>`
//!
//! # Module Structure
//!
//! - [`board`]: 15x15 grid with bonus squares and per-turn tile staging
//! - [`letters`]: the 100-tile draw pool and the 7-slot racks
//! - [`placement`]: geometric legality of a staged move
//! - [`words`]: extracting every word a placement forms
//! - [`scoring`]: letter values, bonus multipliers, joker handling
//! - [`mines`]: hidden hazards and their scoring effects
//! - [`dict`]: pluggable word acceptance ([`WordJudge`])
//! - [`game`]: the match lifecycle state machine ([`GameState`])
//! - [`rng`]: seeded LCG driving every random draw
//! - [`error`]: the move rejection taxonomy
//!
//! # Game Rules
//!
//! - **First move** must cover the start square at (7, 7); later moves must
//!   touch an existing letter
//! - **One line, no gaps**: a move's tiles share a row or column, and the
//!   spanned range is fully occupied
//! - **Scoring**: bonus squares multiply only under tiles placed this turn;
//!   jokers always score zero
//! - **Mines**: 16 hidden mines; at most one fires per move, affecting only
//!   the word that hit it
//! - **Ending**: three consecutive passes, surrender, clock expiry, or an
//!   emptied pool and rack
//!
//! # Example
//!
//! ```
//! use wordmine_core::{GameState, SimpleRng};
//! use wordmine_core::types::{DurationClass, PlayerId};
//!
//! let mut rng = SimpleRng::new(42);
//! let game = GameState::create(PlayerId::from("alice"), DurationClass::Minutes5, 1_000);
//! let game = game.join(PlayerId::from("bob"), 1_000, &mut rng).unwrap();
//!
//! let mover = game.current_turn().unwrap();
//! assert_eq!(game.rack_of(mover).unwrap().tile_count(), 7);
//! assert_eq!(game.tile_census(), 100);
//! ```
//!
//! # Time
//!
//! The engine never reads a clock. Hosts pass `now` (unix seconds) into
//! every time-sensitive operation, and expiry is derived on demand via
//! [`GameState::timeout_if_expired`] rather than ticked.

pub mod board;
pub mod dict;
pub mod error;
pub mod game;
pub mod letters;
pub mod mines;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod words;

pub use wordmine_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use dict::{AcceptAll, WordJudge, WordList};
pub use error::MoveError;
pub use game::{GameState, MoveOutcome};
pub use letters::{LetterPool, Rack};
pub use mines::{apply_mines, generate_mines, place_mines, Mine, MineLayout, MineResolution};
pub use placement::{is_allowed_square, validate_placement, Placement};
pub use rng::SimpleRng;
pub use scoring::{score_word, score_words};
pub use words::{extract_words, Word, WordTile};
