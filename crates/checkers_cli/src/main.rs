//! Checkers move finder
//!
//! Reads one position from stdin (8 rows of `0`/`1`/`2`, then the side to
//! move) and prints the chosen move: start square, landing count, landings.
//!
//! ```bash
//! checkers < position.txt
//! checkers --config engine.toml < position.txt
//! RUST_LOG=debug checkers < position.txt
//! ```

use std::io::{self, Read, Write};
use std::path::PathBuf;

use alphabeta_engine::AlphaBetaEngine;
use anyhow::{bail, Context, Result};
use checkers_core::{
    parse_state, write_move, write_no_move, Engine, EngineConfig, Rules, SearchLimits,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match parse_args(std::env::args().skip(1))? {
        Some(path) => EngineConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    // The budget covers the whole process, input parsing included.
    let mut limits = config.limits();
    limits.start();

    init_logging();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read position from stdin")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&input, limits, &mut out)?;
    out.flush()?;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("--config requires a path"),
            },
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(config)
}

fn init_logging() {
    // stdout carries the answer, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse the position, search it and write the answer.
fn run<W: Write>(input: &str, limits: SearchLimits, out: &mut W) -> Result<()> {
    let state = parse_state(input).context("failed to parse position")?;
    tracing::debug!("position:\n{state}");

    let mut engine = AlphaBetaEngine::new(Rules::standard());
    let result = engine.search(&state, limits);
    tracing::info!(
        engine = engine.name(),
        depth = result.depth,
        score = result.score,
        nodes = result.nodes,
        stopped = result.stopped,
        "search finished"
    );

    match result.best_move() {
        Ok(mv) => write_move(out, mv)?,
        Err(err) => {
            tracing::warn!("{err}; printing the empty move");
            write_no_move(out)?;
        }
    }
    Ok(())
}
