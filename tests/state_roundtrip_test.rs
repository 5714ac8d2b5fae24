//! Serialization tests: a persisted game resumes exactly where it stopped

use wordmine::core::{AcceptAll, GameState, MoveError, SimpleRng};
use wordmine::types::{DurationClass, GameStatus, PlayerId, TOTAL_TILES};

fn paired_game(seed: u32) -> (GameState, SimpleRng) {
    let mut rng = SimpleRng::new(seed);
    let game = GameState::create(PlayerId::from("alice"), DurationClass::Hours12, 50_000);
    let game = game
        .join(PlayerId::from("bob"), 50_000, &mut rng)
        .unwrap();
    (game, rng)
}

#[test]
fn test_waiting_game_round_trips() {
    let game = GameState::create(PlayerId::from("alice"), DurationClass::Minutes5, 100);

    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.status(), GameStatus::Waiting);
}

#[test]
fn test_active_game_round_trips() {
    let (game, _) = paired_game(91);

    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.tile_census(), TOTAL_TILES);
    assert_eq!(restored.mines().active_count(), 16);
    assert_eq!(restored.current_turn(), game.current_turn());
}

#[test]
fn test_restored_game_keeps_playing() {
    let (game, mut rng) = paired_game(93);
    let mover = game.current_turn().unwrap().clone();

    // Stage a move, persist, restore, then confirm on the restored state
    let staged = match game.place_tile(&mover, 0, 7, 7, None) {
        Ok(state) => state,
        Err(MoveError::JokerLetterRequired) => {
            game.place_tile(&mover, 0, 7, 7, Some('E')).unwrap()
        }
        Err(other) => panic!("staging failed: {other}"),
    };
    let staged = match staged.place_tile(&mover, 1, 7, 8, None) {
        Ok(state) => state,
        Err(MoveError::JokerLetterRequired) => {
            staged.place_tile(&mover, 1, 7, 8, Some('E')).unwrap()
        }
        Err(other) => panic!("staging failed: {other}"),
    };

    let json = serde_json::to_string(&staged).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.board().placed_positions(), vec![(7, 7), (7, 8)]);

    let outcome = restored
        .confirm_move(&mover, &AcceptAll, 50_100, &mut rng)
        .unwrap();
    assert_eq!(outcome.state.tile_census(), TOTAL_TILES);
    assert_eq!(outcome.state.current_turn(), restored.opponent_of(&mover));
}
