//! Terminal game loop: scripted or interactive over stdin

use anyhow::{bail, Context, Result};
use std::io::BufRead;
use std::path::PathBuf;
use tracing::info;
use trihex_core::{
    AdjacencyMode, Game, GameConfig, HexCoord, MoveOutcome, Phase, PARTS_PER_HEX, PLAYERS,
};

pub fn run(
    grid_size: usize,
    players: usize,
    win_length: usize,
    mode: &str,
    config_path: Option<PathBuf>,
    moves: Option<String>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig {
            grid_size,
            num_players: players,
            min_win_length: win_length,
            mode: mode.parse::<AdjacencyMode>()?,
        },
    };

    let mut game = Game::new();
    game.start(config)?;

    let bounds = game.geometry().bounds();
    info!(
        grid_size = config.grid_size,
        players = config.num_players,
        win_length = config.min_win_length,
        mode = %config.mode,
        width = bounds.width(),
        height = bounds.height(),
        "game started"
    );

    match moves {
        Some(script) => run_script(&mut game, &script),
        None => run_interactive(&mut game),
    }
}

fn run_script(game: &mut Game, script: &str) -> Result<()> {
    for token in script.split(',') {
        let cell: usize = token
            .trim()
            .parse()
            .with_context(|| format!("bad cell index '{}'", token.trim()))?;
        let outcome = game
            .place(cell)
            .with_context(|| format!("move at cell {cell} rejected"))?;
        info!(cell, outcome = ?outcome, "placed");
        if outcome != MoveOutcome::Continue {
            break;
        }
    }

    println!("{}", render(game));
    println!("{}", game.status());
    if game.phase() == Phase::Active {
        bail!("script ended with the game still running");
    }
    Ok(())
}

fn run_interactive(game: &mut Game) -> Result<()> {
    println!("Enter a cell index to place, 'clear <cell>' to erase, 'quit' to exit.");
    println!("{}", render(game));
    println!("{}", game.status());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        if let Some(rest) = input.strip_prefix("clear ") {
            match rest.trim().parse::<usize>() {
                Ok(cell) => match game.edit_clear(cell) {
                    Ok(()) => info!(cell, "cleared"),
                    Err(e) => println!("{e}"),
                },
                Err(_) => println!("bad cell index '{}'", rest.trim()),
            }
        } else {
            match input.parse::<usize>() {
                Ok(cell) => match game.place(cell) {
                    Ok(outcome) => info!(cell, outcome = ?outcome, "placed"),
                    Err(e) => println!("{e}"),
                },
                Err(_) => println!("unknown command '{input}'"),
            }
        }

        println!("{}", render(game));
        println!("{} ({} moves left)", game.status(), game.remaining_moves());
        if game.phase() != Phase::Active {
            break;
        }
    }
    Ok(())
}

/// One bracket per hexagon; empty parts show their cell index,
/// claimed parts the owner's label. Odd rows are indented half a hex.
fn render(game: &Game) -> String {
    let geo = game.geometry();
    let mut out = String::new();
    for row in 0..geo.rows() {
        if row % 2 == 1 {
            out.push_str("      ");
        }
        for col in 0..geo.cols() {
            let base = geo.index_of(HexCoord::new(row, col), 0);
            let parts: Vec<String> = (0..PARTS_PER_HEX)
                .map(|p| match game.mark_at(base + p) {
                    Some(id) => format!("{:>3}", PLAYERS[id as usize].label),
                    None => format!("{:>3}", base + p),
                })
                .collect();
            out.push_str(&format!("[{}]", parts.join(" ")));
        }
        out.push('\n');
    }
    out
}
