//! Plain-text save format: the player's board, a blank line, then the
//! computer's board. Every cell is written as its character followed by a
//! space.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use crate::grid::Grid;

/// Write both grids to `out`.
pub fn write_grids<W: Write, const R: usize, const C: usize>(
    out: &mut W,
    player: &Grid<R, C>,
    opponent: &Grid<R, C>,
) -> std::io::Result<()> {
    write_block(out, player)?;
    writeln!(out)?;
    write_block(out, opponent)?;
    out.flush()
}

fn write_block<W: Write, const R: usize, const C: usize>(
    out: &mut W,
    grid: &Grid<R, C>,
) -> std::io::Result<()> {
    for row in grid.serialize() {
        let line: String = row.iter().flat_map(|&ch| [ch, ' ']).collect();
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Read two grids from `input`.
///
/// Each line is read positionally: the character at offset `2 * col` is
/// column `col`. Short or missing lines leave the remaining cells empty.
/// The line after the first block is skipped as the separator whatever it
/// contains.
pub fn read_grids<B: BufRead, const R: usize, const C: usize>(
    input: B,
) -> std::io::Result<(Grid<R, C>, Grid<R, C>)> {
    let mut lines = input.lines();
    let player = read_block::<_, R, C>(&mut lines)?;
    if lines.next().transpose()?.is_none() {
        return Ok((player, Grid::new()));
    }
    let opponent = read_block::<_, R, C>(&mut lines)?;
    Ok((player, opponent))
}

fn read_block<I, const R: usize, const C: usize>(lines: &mut I) -> std::io::Result<Grid<R, C>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut rows: Vec<Vec<char>> = Vec::with_capacity(R);
    for _ in 0..R {
        match lines.next().transpose()? {
            Some(line) => rows.push(parse_row(&line)),
            None => break,
        }
    }
    Ok(Grid::deserialize(rows))
}

fn parse_row(line: &str) -> Vec<char> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.chars().step_by(2).collect()
}

/// Save both grids to the file at `path`, replacing its contents.
pub fn save_file<const R: usize, const C: usize>(
    path: &Path,
    player: &Grid<R, C>,
    opponent: &Grid<R, C>,
) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Error saving the game to {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_grids(&mut out, player, opponent)
        .with_context(|| format!("Error saving the game to {}", path.display()))?;
    log::info!("game saved to {}", path.display());
    Ok(())
}

/// Load both grids from the file at `path`.
pub fn load_file<const R: usize, const C: usize>(
    path: &Path,
) -> anyhow::Result<(Grid<R, C>, Grid<R, C>)> {
    let file = File::open(path)
        .with_context(|| format!("Error loading the game from {}", path.display()))?;
    let grids = read_grids(BufReader::new(file))
        .with_context(|| format!("Error loading the game from {}", path.display()))?;
    log::info!("game loaded from {}", path.display());
    Ok(grids)
}
