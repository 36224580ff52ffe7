use battleship_solo::{
    init_logging, render_view, GameSession, GameStatus, ShotResult, View, BOARD_COLS, BOARD_ROWS,
};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut session = GameSession::seeded(seed);
    session.new_game()?;

    let mut targets: Vec<(usize, usize)> = (0..BOARD_ROWS)
        .flat_map(|r| (0..BOARD_COLS).map(move |c| (r, c)))
        .collect();
    let mut shooter = SmallRng::seed_from_u64(seed.wrapping_add(1));
    targets.shuffle(&mut shooter);

    let (mut hits, mut misses) = (0usize, 0usize);
    for (r, c) in targets {
        match session.target(r, c)? {
            ShotResult::Hit => hits += 1,
            ShotResult::Miss => misses += 1,
            ShotResult::AlreadyTargeted => {}
        }
        if session.status() != GameStatus::InProgress {
            break;
        }
    }

    let board: Vec<String> = render_view(session.opponent(), View::Revealed)
        .iter()
        .map(|row| row.iter().collect())
        .collect();
    let result = json!({
        "seed": seed,
        "status": session.status(),
        "shots": hits + misses,
        "hits": hits,
        "misses": misses,
        "opponent": board,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
