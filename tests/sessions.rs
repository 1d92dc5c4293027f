//! Ranking persistence across controller sessions

#![cfg(not(target_arch = "wasm32"))]

use std::path::PathBuf;

use heart_snake::persistence::FileBackend;
use heart_snake::platform::{ManualTicker, Ticker};
use heart_snake::renderer::RecordingSurface;
use heart_snake::sim::{Cell, Direction, EndReason, Snake, StepOutcome};
use heart_snake::{GameConfig, GameController};

type NativeController = GameController<FileBackend, ManualTicker, RecordingSurface>;

fn store_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("heart-snake-it-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("store.json");
    let _ = std::fs::remove_file(&path);
    path
}

fn session(path: &PathBuf, seed: u64) -> NativeController {
    GameController::new(
        GameConfig::default(),
        FileBackend::open(path),
        ManualTicker::new(),
        RecordingSurface::new(),
        seed,
    )
}

/// Eat `score` foods in a straight line along row 0, then hit the right wall
fn play_to_wall(game: &mut NativeController, name: &str, score: i32) {
    game.start(name);
    let state = game.state_mut();
    state.snake = Snake::from_cells([Cell::new(0, 0)]).unwrap();
    assert!(game.set_direction(Direction::RIGHT));

    for x in 1..=score {
        assert!(game.state_mut().set_food(Cell::new(x, 0)));
        assert!(matches!(game.tick(), StepOutcome::Ate { .. }));
    }
    game.state_mut().set_food(Cell::new(0, 5));
    while game.game_over().is_none() {
        game.tick();
    }
    assert_eq!(game.game_over().unwrap().reason, EndReason::Wall);
}

#[test]
fn ranking_survives_new_session() {
    let path = store_path("sessions");

    let mut first = session(&path, 1);
    assert_eq!(first.high_score(), 0);
    play_to_wall(&mut first, "Ana", 3);
    assert_eq!(first.high_score(), 3);
    drop(first);

    let mut second = session(&path, 2);
    assert_eq!(second.high_score(), 3);
    play_to_wall(&mut second, "", 7);

    let over = second.game_over().unwrap();
    assert_eq!(over.final_score, 7);
    assert_eq!(over.rank, Some(1));
    let ranking: Vec<(String, u32)> = over
        .ranking
        .iter()
        .map(|e| (e.name.clone(), e.score))
        .collect();
    assert_eq!(
        ranking,
        vec![("Anonymous".to_string(), 7), ("Ana".to_string(), 3)]
    );
}

#[test]
fn speed_reaches_floor_and_timer_follows() {
    let path = store_path("speed");
    let mut game = session(&path, 3);
    play_to_wall(&mut game, "Ana", 19);

    // Scores 5, 10 and 15 each shortened the interval
    assert_eq!(game.ticker().starts(), &[150, 140, 130, 120]);
    assert!(!game.ticker().is_running());
    assert_eq!(game.high_score(), 19);
}
