#![cfg(feature = "std")]

//! Line-oriented terminal front-end driving a [`GameSession`].

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::{
    common::ShotResult,
    config::{BOARD_COLS, BOARD_ROWS},
    game::{GameSession, GameStatus},
    view::{column_label, format_view, View},
};

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fire(usize, usize),
    View,
    Board,
    New,
    Save(PathBuf),
    Load(PathBuf),
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  fire <coord>   fire at a cell, e.g. `fire B7` (or just `B7`)
  board          show the computer's board (shots only) and your own
  view           reveal the computer's board
  new            start a new game
  save <path>    save the game to a file
  load <path>    load a game from a file
  help           show this message
  quit           leave the game";

/// Format a zero-based coordinate as e.g. `B7`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    format!("{}{}", column_label(c), r + 1)
}

/// Parse a coordinate such as `B7` into zero-based (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty coordinate".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    let last = column_label(BOARD_COLS - 1);
    if !col_ch.is_ascii_uppercase() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_COLS {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last));
    }
    let row_str = chars.as_str();
    if row_str.is_empty() {
        return Err("Missing row number (e.g., A5)".to_string());
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, BOARD_ROWS))?;
    if row == 0 || row > BOARD_ROWS {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, BOARD_ROWS));
    }
    Ok((row - 1, col))
}

/// Parse one line of input.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let path = |what: &str| {
        if rest.is_empty() {
            Err(format!("Usage: {} <path>", what))
        } else {
            Ok(PathBuf::from(rest))
        }
    };
    match word.to_ascii_lowercase().as_str() {
        "" => Err("Type `help` for a list of commands".to_string()),
        "fire" | "f" => {
            let (r, c) = parse_coord(rest)?;
            Ok(Command::Fire(r, c))
        }
        "view" => Ok(Command::View),
        "board" => Ok(Command::Board),
        "new" => Ok(Command::New),
        "save" => path("save").map(Command::Save),
        "load" => path("load").map(Command::Load),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ if rest.is_empty() && looks_like_coord(word) => {
            let (r, c) = parse_coord(word)?;
            Ok(Command::Fire(r, c))
        }
        _ => Err(format!("Unknown command '{}'. Type `help` for a list of commands", word)),
    }
}

fn looks_like_coord(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && !chars.as_str().is_empty()
        && chars.all(|c| c.is_ascii_digit())
}

fn print_status<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    writeln!(out, "Status: {}", text)
}

/// Apply `cmd` to the session, writing feedback to `out`.
///
/// Returns `false` once the user asked to quit. Failed saves and loads are
/// reported and leave the session as it was.
pub fn execute<W: Write>(
    session: &mut GameSession,
    cmd: Command,
    out: &mut W,
) -> anyhow::Result<bool> {
    match cmd {
        Command::Fire(r, c) => {
            if session.status() != GameStatus::InProgress {
                print_status(out, "The game is over. Type `new` to play again.")?;
                return Ok(true);
            }
            let at = coord_to_string(r, c);
            match session.target(r, c)? {
                ShotResult::Hit => {
                    print_status(out, &format!("Hit at {}", at))?;
                    if session.opponent().remaining_ships() == 0 {
                        writeln!(out, "Congratulations, you won the game!")?;
                    }
                }
                ShotResult::Miss => print_status(out, &format!("Missed at {}", at))?,
                ShotResult::AlreadyTargeted => {
                    print_status(out, &format!("Already targeted at {}", at))?
                }
            }
        }
        Command::View => {
            writeln!(out, "Computer's board:")?;
            write!(out, "{}", format_view(session.opponent(), View::Revealed))?;
        }
        Command::Board => {
            writeln!(out, "Computer's board:")?;
            write!(out, "{}", format_view(session.opponent(), View::Fogged))?;
            writeln!(out, "\nYour board:")?;
            write!(out, "{}", format_view(session.player(), View::Revealed))?;
        }
        Command::New => {
            session.new_game()?;
            print_status(out, "New game started. Good luck!")?;
        }
        Command::Save(path) => match session.save(&path) {
            Ok(()) => print_status(out, &format!("Game saved to {}.", path.display()))?,
            Err(e) => writeln!(out, "{:#}", e)?,
        },
        Command::Load(path) => match session.load(&path) {
            Ok(()) => {
                print_status(out, "Game loaded successfully.")?;
                match session.status() {
                    GameStatus::Won => writeln!(out, "Congratulations, you won the game!")?,
                    GameStatus::Lost => writeln!(out, "Game Over, you lost.")?,
                    GameStatus::InProgress => {}
                }
            }
            Err(e) => writeln!(out, "{:#}", e)?,
        },
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Read commands from `input` until `quit` or end of input.
pub fn run<B: BufRead, W: Write>(
    session: &mut GameSession,
    input: B,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "Battleship: sink the computer's fleet.")?;
    writeln!(out, "{}", HELP)?;
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        match parse_command(&line) {
            Ok(cmd) => {
                if !execute(session, cmd, out)? {
                    break;
                }
            }
            Err(msg) => writeln!(out, "{}", msg)?,
        }
    }
    writeln!(out)?;
    Ok(())
}
