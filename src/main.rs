use std::io;
use std::path::PathBuf;

use battleship_solo::{cli, init_logging, GameSession};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Single-player Battleship against a random computer fleet", long_about = None)]
struct Args {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Resume a game saved with the `save` command")]
    load: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut session = match args.seed {
        Some(s) => {
            println!("Using fixed seed: {} (fleets will be reproducible)", s);
            GameSession::seeded(s)
        }
        None => GameSession::from_entropy(),
    };
    session.new_game()?;

    if let Some(path) = args.load {
        if let Err(e) = session.load(&path) {
            eprintln!("{:#}", e);
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    cli::run(&mut session, stdin.lock(), &mut stdout)
}
