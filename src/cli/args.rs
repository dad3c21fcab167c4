//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Hot-reload change impact for component compiler watch mode
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: hotmod.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "hotmod.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute the hot-reload payload for one build snapshot
    #[command(visible_alias = "i")]
    Impact {
        /// Build snapshot written by the compile phase
        #[arg(value_hint = clap::ValueHint::FilePath)]
        snapshot: PathBuf,

        /// Treat the snapshot as a rebuild cycle regardless of its `isRebuild`
        #[arg(short, long)]
        rebuild: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Recompute the payload every time the build snapshot changes
    #[command(visible_alias = "w")]
    Watch {
        /// Build snapshot written by the compile phase
        #[arg(value_hint = clap::ValueHint::FilePath)]
        snapshot: PathBuf,
    },
}
