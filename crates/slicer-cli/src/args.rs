//! Command line arguments and configuration resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use slicer_core::SlicerConfig;

/// Slice a tall image into horizontal strips.
///
/// Cut positions can be given in original-image rows (`--cut`) or as
/// clicks on the scaled preview (`--click`), which are mapped back through
/// the same scale factor the preview uses.
#[derive(Debug, Parser)]
#[command(name = "slicer", version, about)]
pub struct Args {
    /// Source image (PNG, JPEG, BMP, GIF, TIFF or WebP)
    pub image: PathBuf,

    /// Destination directory for the slices
    #[arg(short, long, value_name = "DIR", required_unless_present = "dry_run")]
    pub output: Option<PathBuf>,

    /// Cut line in original-image rows (repeatable)
    #[arg(short, long = "cut", value_name = "Y")]
    pub cuts: Vec<u32>,

    /// Click position on the scaled preview, in display pixels (repeatable)
    #[arg(long = "click", value_name = "Y", allow_negative_numbers = true)]
    pub clicks: Vec<f64>,

    /// Width available for the preview, in display pixels
    #[arg(long, value_name = "W")]
    pub display_width: Option<f64>,

    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Export a single slice when no cut lines are given
    #[arg(long)]
    pub allow_uncut: bool,

    /// Print the slice ranges without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level implied by `-v` flags.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    /// Settings from the config file (if any) with flags layered on top.
    pub fn resolve_config(&self) -> Result<SlicerConfig> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => SlicerConfig::default(),
        };
        if let Some(width) = self.display_width {
            config.display_width = width;
        }
        if self.allow_uncut {
            config.allow_uncut_export = true;
        }
        Ok(config)
    }
}

fn read_config(path: &Path) -> Result<SlicerConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))
}
