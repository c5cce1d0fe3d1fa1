use anyhow::{Context, Result};
use holdem_shared::TableSnapshot;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::{Cli, Commands};
use crate::config::Config;
use crate::demo::deal_table;
use crate::pretty::format_table_human;

/// Read and decode a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<TableSnapshot> {
    let bytes = fs::read(path).with_context(|| format!("reading snapshot '{}'", path.display()))?;
    let gs: TableSnapshot = holdem_shared::from_slice(&bytes)
        .with_context(|| format!("decoding snapshot '{}'", path.display()))?;
    tracing::debug!(file = %path.display(), seats = gs.seats(), step = ?gs.round_step, "loaded snapshot");
    Ok(gs)
}

fn write_json(out: &mut impl Write, gs: &TableSnapshot) -> Result<()> {
    let text = holdem_shared::to_json_pretty(gs).context("encoding snapshot")?;
    writeln!(out, "{}", text)?;
    Ok(())
}

fn write_table(out: &mut impl Write, gs: &TableSnapshot, json: bool, color: bool) -> Result<()> {
    if json {
        write_json(out, gs)
    } else {
        write!(out, "{}", format_table_human(gs, color))?;
        Ok(())
    }
}

/// Execute one parsed command, writing its output to `out`.
pub fn run(cli: &Cli, cfg: &Config, out: &mut impl Write) -> Result<()> {
    let color = cfg.color.enabled();
    match &cli.command {
        Commands::Show { file } => {
            let gs = load_snapshot(file)?;
            write_table(out, &gs, cli.json, color)?;
        }
        Commands::Check { file } => {
            let gs = load_snapshot(file)?;
            gs.validate()
                .with_context(|| format!("snapshot '{}' is inconsistent", file.display()))?;
            tracing::info!(file = %file.display(), players = gs.occupied().count(), "snapshot ok");
            writeln!(out, "{}: ok", file.display())?;
        }
        Commands::Redact { file, viewer } => {
            let gs = load_snapshot(file)?;
            let viewer = viewer.or(cfg.default_viewer);
            let redacted = gs
                .for_viewer(viewer)
                .with_context(|| format!("redacting '{}' for viewer", file.display()))?;
            tracing::info!(file = %file.display(), viewer = ?viewer, "redacted snapshot");
            write_json(out, &redacted)?;
        }
        Commands::Demo {
            players,
            seed,
            step,
            viewer,
        } => {
            let gs = match seed {
                Some(seed) => deal_table(cfg.seats, *players, (*step).into(), &mut StdRng::seed_from_u64(*seed))?,
                None => deal_table(cfg.seats, *players, (*step).into(), &mut rand::rng())?,
            };
            let gs = match viewer.or(cfg.default_viewer) {
                Some(seat) => gs
                    .for_viewer(Some(seat))
                    .context("redacting demo table for viewer")?,
                None => gs,
            };
            write_json(out, &gs)?;
        }
    }
    Ok(())
}
