use battleship_solo::{place_fleet, Board, Cell, ShotResult, BOARD_COLS, BOARD_ROWS, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    place_fleet(&mut board, &mut rng).unwrap();
    let guesses = rng.random_range(0..BOARD_ROWS * BOARD_COLS);
    for _ in 0..guesses {
        let r = rng.random_range(0..BOARD_ROWS);
        let c = rng.random_range(0..BOARD_COLS);
        board.resolve_shot(r, c).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn serialize_roundtrip(seed in any::<u64>()) {
        let board = random_board(seed);
        let restored = Board::deserialize(board.serialize());
        prop_assert_eq!(restored, board);
    }

    #[test]
    fn shot_idempotent(seed in any::<u64>(), row in 0..BOARD_ROWS, col in 0..BOARD_COLS) {
        let mut board = random_board(seed);
        let first = board.resolve_shot(row, col).unwrap();
        let after_first = board;
        let second = board.resolve_shot(row, col).unwrap();
        prop_assert_eq!(second, ShotResult::AlreadyTargeted);
        prop_assert_eq!(board, after_first);
        prop_assert_eq!(board.remaining_ships(), after_first.remaining_ships());
        if first != ShotResult::AlreadyTargeted {
            prop_assert!(board.cell(row, col).unwrap().is_targeted());
        }
    }

    #[test]
    fn counter_tracks_ship_cells(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..BOARD_ROWS, 0..BOARD_COLS), 0..150),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        place_fleet(&mut board, &mut rng).unwrap();

        let mut hits = 0;
        for (r, c) in shots {
            if board.resolve_shot(r, c).unwrap() == ShotResult::Hit {
                hits += 1;
            }
            prop_assert_eq!(board.remaining_ships(), board.count(Cell::Ship));
            prop_assert_eq!(board.remaining_ships(), TOTAL_SHIP_CELLS - hits);
            prop_assert_eq!(board.count(Cell::Hit), hits);
        }
    }
}
