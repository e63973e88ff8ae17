//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Deconflict - Git conflict marker cleaner
///
/// Remove conflict markers left behind by incomplete merges or reverts from
/// a Dart source tree, keeping the HEAD side of each conflict.
#[derive(Parser, Debug)]
#[command(
    name = "deconflict",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Strip leftover Git conflict markers from Dart source trees",
    long_about = "Deconflict scans a Dart source tree for files containing Git conflict \
                  markers (<<<<<<< HEAD / ======= / >>>>>>>) and rewrites them in place, \
                  keeping the HEAD section of each conflict and discarding the other side.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  deconflict\n    \
                  deconflict clean --dry-run\n    \
                  deconflict clean --root packages/app/lib\n    \
                  deconflict -C ~/work/my_app clean\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/deconflict/deconflict"
)]
pub struct Cli {
    /// Project directory the default source tree is resolved against
    /// (defaults to the current directory)
    #[arg(long, short = 'C', global = true)]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove conflict markers from source files (the default)
    Clean(CleanArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the clean command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Clean lib/ of the current project:\n    deconflict clean\n\n\
                  Preview without writing anything:\n    deconflict clean --dry-run\n\n\
                  Clean a different source tree:\n    deconflict clean --root packages/app/lib")]
pub struct CleanArgs {
    /// Scan this directory instead of the project's lib/ subdirectory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Report what would change without rewriting any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    deconflict completions --shell bash > ~/.bash_completion.d/deconflict\n\n\
                  Generate zsh completions:\n    deconflict completions --shell zsh > ~/.zfunc/_deconflict\n\n\
                  Generate fish completions:\n    deconflict completions --shell fish > ~/.config/fish/completions/deconflict.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
