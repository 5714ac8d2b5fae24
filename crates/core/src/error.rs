//! Move rejection taxonomy
//!
//! Every error here is a rejection, recoverable by the caller: a rejected
//! operation never partially mutates board, rack, pool, or turn state, so
//! retrying is always safe. The host owns user-visible messaging; the
//! engine only classifies the failure.

/// Why a proposed operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// No tiles were placed this turn
    #[error("no tiles placed")]
    EmptyMove,

    /// The game's first move must include the start square
    #[error("first move must cover the start square")]
    MustCoverStart,

    /// A non-first move must touch at least one committed letter
    #[error("placed tiles touch no existing letter")]
    NotConnected,

    /// Placed tiles span neither a single row nor a single column
    #[error("placed tiles must form a single row or column")]
    NotLinear,

    /// An empty cell lies between placed tiles in the line
    #[error("gap inside the placed line")]
    GapInPlacement,

    /// Placement is geometrically legal but forms no word of length >= 2
    #[error("placement forms no word")]
    NoWordFormed,

    /// The chosen rack slot holds no tile
    #[error("rack slot is empty")]
    SlotEmpty,

    /// Target square is out of bounds, occupied, or holds no staged tile
    #[error("square is not available")]
    SquareUnavailable,

    /// A joker cannot be placed without choosing the letter it plays as
    #[error("joker placement requires a letter")]
    JokerLetterRequired,

    /// An extracted word was refused by the configured word judge
    #[error("word {word:?} was not accepted")]
    UnknownWord { word: String },

    /// Operation attempted against a terminal or waiting game
    #[error("game is not active")]
    GameNotActive,

    /// Mutation attempted by the player not on turn
    #[error("not this player's turn")]
    NotYourTurn,

    /// Operation requiring two players attempted before pairing
    #[error("opponent has not joined yet")]
    OpponentMissing,
}

impl MoveError {
    /// Stable machine-readable tag (persistence/telemetry friendly)
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveError::EmptyMove => "invalid_move_empty",
            MoveError::MustCoverStart => "must_cover_start",
            MoveError::NotConnected => "not_connected",
            MoveError::NotLinear => "not_linear",
            MoveError::GapInPlacement => "gap_in_placement",
            MoveError::NoWordFormed => "no_word_formed",
            MoveError::SlotEmpty => "slot_empty",
            MoveError::SquareUnavailable => "square_unavailable",
            MoveError::JokerLetterRequired => "joker_letter_required",
            MoveError::UnknownWord { .. } => "unknown_word",
            MoveError::GameNotActive => "game_not_active",
            MoveError::NotYourTurn => "not_your_turn",
            MoveError::OpponentMissing => "opponent_missing",
        }
    }
}
