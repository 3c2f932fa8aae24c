// graft-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Graft: video detail-transfer preflight",
    long_about = "Probes video pairs with ffprobe, normalizes their metadata, and reports \
                  obstacles to frame-accurate detail transfer via the graft-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probes a single file and prints its canonical descriptor
    Info(InfoArgs),
    /// Compares a reference/target pair and prints compatibility warnings
    Check(CheckArgs),
    /// Creates a project file for a reference/target pair
    New(NewArgs),
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Video file to probe
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Reference file (the graded master detail is taken from)
    #[arg(short = 'r', long = "reference", required = true, value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Target file (the version detail is transferred onto)
    #[arg(short = 't', long = "target", required = true, value_name = "TARGET")]
    pub target: PathBuf,

    /// Emit warnings as a JSON array instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Path of the project file to create
    #[arg(required = true, value_name = "PROJECT_FILE")]
    pub project_file: PathBuf,

    /// Reference file
    #[arg(short = 'r', long = "reference", required = true, value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Target file
    #[arg(short = 't', long = "target", required = true, value_name = "TARGET")]
    pub target: PathBuf,

    /// Project name (defaults to the project file stem)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}
