use std::path::PathBuf;

use battleship_solo::{
    Board, Cell, FleetPlacer, GameSession, GameStatus, GridError, PlacementError, ShotResult,
    BOARD_COLS, BOARD_ROWS, TOTAL_SHIP_CELLS,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "battleship-solo-{}-{}.txt",
        std::process::id(),
        name
    ))
}

fn started(seed: u64) -> GameSession {
    let mut session = GameSession::seeded(seed);
    session.new_game().unwrap();
    session
}

fn find(board: &Board, state: Cell) -> (usize, usize) {
    (0..BOARD_ROWS)
        .flat_map(|r| (0..BOARD_COLS).map(move |c| (r, c)))
        .find(|&(r, c)| board.cell(r, c).unwrap() == state)
        .unwrap()
}

#[test]
fn test_new_session_is_empty() {
    let session = GameSession::seeded(1);
    assert_eq!(*session.player(), Board::new());
    assert_eq!(*session.opponent(), Board::new());
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_new_game_deploys_both_fleets() {
    let session = started(5);
    assert_eq!(session.player().remaining_ships(), TOTAL_SHIP_CELLS);
    assert_eq!(session.opponent().remaining_ships(), TOTAL_SHIP_CELLS);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_new_game_replaces_previous_state() {
    let mut session = started(5);
    let (r, c) = find(session.opponent(), Cell::Ship);
    session.target(r, c).unwrap();
    session.new_game().unwrap();
    assert_eq!(session.opponent().count(Cell::Hit), 0);
    assert_eq!(session.opponent().count(Cell::Miss), 0);
    assert_eq!(session.opponent().remaining_ships(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_entropy_session_deploys() {
    let mut session = GameSession::from_entropy();
    session.new_game().unwrap();
    assert_eq!(session.player().remaining_ships(), TOTAL_SHIP_CELLS);
    assert_eq!(session.opponent().remaining_ships(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_same_seed_same_fleets() {
    let a = started(77);
    let b = started(77);
    assert_eq!(a.player(), b.player());
    assert_eq!(a.opponent(), b.opponent());
}

#[test]
fn test_target_only_touches_opponent() {
    let mut session = started(9);
    let player_before = *session.player();

    let (r, c) = find(session.opponent(), Cell::Ship);
    assert_eq!(session.target(r, c).unwrap(), ShotResult::Hit);
    assert_eq!(session.target(r, c).unwrap(), ShotResult::AlreadyTargeted);
    assert_eq!(session.opponent().remaining_ships(), TOTAL_SHIP_CELLS - 1);

    let (r, c) = find(session.opponent(), Cell::Empty);
    assert_eq!(session.target(r, c).unwrap(), ShotResult::Miss);

    assert_eq!(*session.player(), player_before);
    assert_eq!(
        session.target(BOARD_ROWS, 0).unwrap_err(),
        GridError::InvalidCoordinate { row: BOARD_ROWS, col: 0 }
    );
}

#[test]
fn test_sinking_every_ship_wins() {
    let mut session = started(31);
    let mut hits = 0;
    'outer: for r in 0..BOARD_ROWS {
        for c in 0..BOARD_COLS {
            assert_eq!(session.status(), GameStatus::InProgress);
            if session.target(r, c).unwrap() == ShotResult::Hit {
                hits += 1;
            }
            if session.opponent().remaining_ships() == 0 {
                break 'outer;
            }
        }
    }
    assert_eq!(hits, TOTAL_SHIP_CELLS);
    assert_eq!(session.opponent().remaining_ships(), 0);
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn test_failed_new_game_leaves_boards_empty() {
    let mut session =
        GameSession::seeded(3).with_placer(FleetPlacer::default().with_max_attempts(0));
    let err = session.new_game().unwrap_err();
    assert_eq!(
        err,
        PlacementError::Infeasible {
            length: 4,
            attempts: 0
        }
    );
    assert_eq!(*session.player(), Board::new());
    assert_eq!(*session.opponent(), Board::new());
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = temp_path("roundtrip");
    let mut session = started(11);
    let (r, c) = find(session.opponent(), Cell::Ship);
    session.target(r, c).unwrap();
    let (r, c) = find(session.opponent(), Cell::Empty);
    session.target(r, c).unwrap();
    session.save(&path).unwrap();

    let mut restored = started(12);
    restored.load(&path).unwrap();
    assert_eq!(restored.player(), session.player());
    assert_eq!(restored.opponent(), session.opponent());
    assert_eq!(restored.opponent().remaining_ships(), TOTAL_SHIP_CELLS - 1);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_missing_file_keeps_session() {
    let path = temp_path("does-not-exist");
    let _ = std::fs::remove_file(&path);
    let mut session = started(13);
    let player = *session.player();
    let opponent = *session.opponent();

    let err = session.load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Error loading the game"));
    assert_eq!(*session.player(), player);
    assert_eq!(*session.opponent(), opponent);
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let dir = temp_path("missing-dir");
    let _ = std::fs::remove_dir_all(&dir);
    let session = started(14);
    let err = session.save(dir.join("save.txt")).unwrap_err();
    assert!(format!("{:#}", err).contains("Error saving the game"));
}

#[test]
fn test_load_malformed_file_recounts_ships() {
    let path = temp_path("malformed");
    // player: one short row; opponent: a single unhit ship and a hit
    let mut text = String::from("S S\n");
    text.push_str(&"\n".repeat(9));
    text.push('\n');
    text.push_str("H S\n");
    std::fs::write(&path, text).unwrap();

    let mut session = started(15);
    session.load(&path).unwrap();
    assert_eq!(session.player().remaining_ships(), 2);
    assert_eq!(session.player().cell(0, 2).unwrap(), Cell::Empty);
    assert_eq!(session.opponent().remaining_ships(), 1);
    assert_eq!(session.status(), GameStatus::InProgress);

    assert_eq!(session.target(0, 1).unwrap(), ShotResult::Hit);
    assert_eq!(session.status(), GameStatus::Won);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_defeated_player_is_lost() {
    let path = temp_path("lost");
    let mut text = String::from("H H\n");
    text.push_str(&"\n".repeat(9));
    text.push('\n');
    text.push_str("S\n");
    std::fs::write(&path, text).unwrap();

    let mut session = started(16);
    session.load(&path).unwrap();
    assert_eq!(session.status(), GameStatus::Lost);

    std::fs::remove_file(&path).unwrap();
}
