//! Slicer - command line shell for the slicer core
//!
//! Stands in for the interactive front end: the source image and the
//! destination directory come from arguments instead of pickers, cut
//! positions come from `--cut`/`--click` instead of pointer events, and the
//! summary or error message is printed instead of shown in a dialog.
//!
//! # Usage
//!
//! ```text
//! slicer long.png -o out/ --cut 1200 --cut 2400
//! slicer long.png --display-width 800 --click 300 --dry-run
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use slicer_core::{slice_row, ClickOutcome, SliceSession};

mod args;

use args::Args;

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let stdout = std::io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Load, apply cuts, then print the boundaries or export.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let config = args.resolve_config()?;
    let mut session = SliceSession::new(config);

    session
        .load(&args.image)
        .with_context(|| format!("Cannot open {}", args.image.display()))?;
    writeln!(out, "{}", session.status_line())?;
    info!(
        "Preview scale {:.4} ({}x{})",
        session.viewport().factor,
        session.viewport().display_width,
        session.viewport().display_height
    );

    for &y in &args.cuts {
        report_outcome(session.add_cut_line(y), &format!("--cut {y}"));
    }
    for &y in &args.clicks {
        report_outcome(session.click(0.0, y), &format!("--click {y}"));
    }

    for label in session.list_labels() {
        writeln!(out, "{label}")?;
    }

    if args.dry_run {
        for (i, bounds) in session.boundaries().into_iter().enumerate() {
            writeln!(out, "{}", slice_row(i + 1, bounds))?;
        }
        if let Some(reason) = session.export_blocker() {
            writeln!(out, "Note: export would be refused: {reason}")?;
        }
        return Ok(());
    }

    let destination = args
        .output
        .as_deref()
        .context("No destination directory given")?;
    let report = session.export(destination)?;
    writeln!(out, "{}", report.summary())?;
    Ok(())
}

fn report_outcome(outcome: ClickOutcome, source: &str) {
    match outcome {
        ClickOutcome::Added(y) => info!("{source}: cut line at y={y}"),
        ClickOutcome::Duplicate(y) => info!("{source}: y={y} already present"),
        ClickOutcome::OutsideImage => warn!("{source}: outside the image, ignored"),
        ClickOutcome::NoImage => warn!("{source}: no image loaded, ignored"),
    }
}
