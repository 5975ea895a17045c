use assert_matches::assert_matches;
use dice_bingo::game::simulate_game::{simulate_game, PlacementStrategy};
use dice_bingo::ranking::{submit_score, JsonFileRankingStore, PlayerName, RankingStore};
use dice_bingo::recording::{load_records, CsvWriter};
use dice_bingo::{
    classify, score_board, DiceRoll, GameController, GameEvent, HandCategory, LineId,
    PlacementError, BOARD_SIZE, MAX_TURNS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

fn roll_of(sum: u8) -> DiceRoll {
    let first = sum.clamp(2, 7) - 1;
    DiceRoll {
        first,
        second: sum - first,
    }
}

#[test]
fn test_reference_classifications() {
    let cases = [
        ([1, 2, 3, 4, 5], HandCategory::StraightNoSeven, 12),
        ([3, 4, 5, 6, 7], HandCategory::StraightWithSeven, 8),
        ([4, 4, 4, 4, 4], HandCategory::FiveOfAKind, 10),
        ([2, 2, 2, 5, 5], HandCategory::FullHouse, 8),
        ([2, 2, 3, 3, 9], HandCategory::TwoPair, 3),
    ];
    for (values, category, score) in cases {
        assert_eq!(classify(&values.map(Some)), (category, score), "{:?}", values);
    }
}

#[test]
fn test_first_row_of_sevens() {
    let mut game = GameController::seeded(1);
    for col in 0..BOARD_SIZE {
        game.accept_roll(roll_of(7)).unwrap();
        game.place(0, col).unwrap();
    }

    let sheet = game.score_sheet();
    assert_eq!(sheet.total, 10);
    for line in &sheet.lines {
        if line.line == LineId::Row(0) {
            assert_eq!(line.category, HandCategory::FiveOfAKind);
            assert!(line.complete);
        } else {
            assert!(!line.complete);
            assert_eq!(line.display_text(), "-");
        }
    }
}

#[test]
fn test_rejections_leave_everything_unchanged() {
    let mut game = GameController::seeded(2);
    game.accept_roll(roll_of(9)).unwrap();
    game.place(4, 4).unwrap();

    let board = game.board().clone();
    let total = game.total_score();

    assert_eq!(game.place(0, 0), Err(PlacementError::NoPendingValue));
    game.accept_roll(roll_of(3)).unwrap();
    assert_eq!(game.place(4, 4), Err(PlacementError::CellOccupied { row: 4, col: 4 }));
    assert_eq!(
        game.place(0, 5),
        Err(PlacementError::InvalidCoordinate { row: 0, col: 5 })
    );

    assert_eq!(game.board().turn(), board.turn());
    assert_eq!(game.board().cells(), board.cells());
    assert_eq!(game.total_score(), total);
}

#[test]
fn test_events_for_a_whole_game() {
    let mut game = GameController::seeded(3);
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    game.subscribe(move |e| sink.lock().unwrap().push(e.clone()));

    let mut rng = StdRng::seed_from_u64(3);
    let record = simulate_game(&mut game, PlacementStrategy::Random, &mut rng).unwrap();

    let events = events.lock().unwrap();
    let placed: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Placed { sheet, .. } => Some(sheet.total),
            _ => None,
        })
        .collect();
    assert_eq!(placed.len(), MAX_TURNS);
    assert_eq!(
        placed,
        record.placements.iter().map(|p| p.total_after).collect::<Vec<_>>()
    );

    let game_overs: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .collect();
    assert_eq!(game_overs, vec![&GameEvent::GameOver { total: game.total_score() }]);
    assert_eq!(score_board(game.board()), *game.score_sheet());
}

#[test]
fn test_finished_games_feed_ranking_and_records() -> dice_bingo::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = JsonFileRankingStore::in_dir(dir.path());
    let mut writer = CsvWriter::new(dir.path().join("records"))?;

    let mut finals = Vec::new();
    for seed in 0..8 {
        let mut game = GameController::seeded(seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let record = simulate_game(&mut game, PlacementStrategy::Greedy, &mut rng)?;
        let score = record.final_score.unwrap_or_default();
        finals.push(score);
        writer.write_game(&record)?;
        submit_score(&store, PlayerName::parse("gr")?, score)?;
    }
    writer.close()?;

    let ranking = store.load()?;
    let mut expected = finals.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    expected.truncate(5);
    let stored: Vec<u32> = ranking.entries().iter().map(|e| e.score).collect();
    assert_eq!(stored, expected);
    assert!(ranking.entries().iter().all(|e| e.name.as_str() == "GR"));

    let rows = load_records(writer.current_path())?;
    assert_eq!(rows.len(), 8 * MAX_TURNS);
    Ok(())
}

#[test]
fn test_invalid_player_name() {
    assert_matches!(
        PlayerName::parse("7"),
        Err(dice_bingo::RankingError::InvalidName(_))
    );
}
