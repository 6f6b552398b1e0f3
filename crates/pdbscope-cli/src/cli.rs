use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Nina Gerber",
    version,
    about = "PDBScope CLI - Inspect Protein Data Bank files: structure summaries, backbone torsion angles and distance-inferred bonds.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a structure: chains, models, residue and atom counts, composition.
    Info(InfoArgs),
    /// Compute phi/psi backbone torsion angles as Ramachandran CSV data.
    Rama(RamaArgs),
    /// Infer bonds from interatomic distances and list the bonded atom pairs.
    Bonds(BondsArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input PDB file.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Emit the summary as JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `rama` subcommand.
#[derive(Args, Debug)]
pub struct RamaArgs {
    /// Path to the input PDB file.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CSV file. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `bonds` subcommand.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Path to the input PDB file.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CSV file. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
