//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum. Running with no
//! subcommand performs one update pass; `--watch` keeps the process alive.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Documentation index maintainer
#[derive(Parser)]
#[command(
    name = "metadex",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep documentation index sections in sync with their markdown sources",
    long_about = "Rewrites the index region of each target document from the markdown files \
                  in the category directories (specs, stages, decisions, troubleshooting, \
                  explainers). Content above the last '---' separator line is never touched.",
    after_help = "Examples:\n  metadex            # one update pass\n  metadex --watch    # rebuild on category changes\n  metadex init       # create .metadex/settings.toml\n  metadex config     # show active settings",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep running and rebuild indexes when category directories change
    #[arg(long)]
    pub watch: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize project
    #[command(about = "Set up .metadex directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from .metadex/settings.toml")]
    Config,
}
