//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.
//!
//! The default invocation takes trailing template names directly
//! (`ignorer go docker`); `list` and `completions` are subcommands. The two
//! shapes are mutually exclusive via `args_conflicts_with_subcommands`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ignorer",
    bin_name = "ignorer",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate .gitignore files from predefined templates",
    long_about = "Ignorer generates a .gitignore for your project by combining \
                  predefined templates for languages, frameworks, and tools.",
    after_help = "EXAMPLES:\n\
        \x20 ignorer go\n\
        \x20 ignorer python django docker\n\
        \x20 ignorer rust --append\n\
        \x20 ignorer list\n\
        \x20 ignorer completions bash > /usr/share/bash-completion/completions/ignorer",
    arg_required_else_help = true,
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Default-invocation arguments (`ignorer <template>...`).
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute, if any.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available .gitignore templates",
        after_help = "EXAMPLES:\n\
            \x20 ignorer list\n\
            \x20 ignorer list --format json\n\
            \x20 ignorer list --format list | grep go"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ignorer completions bash > ~/.local/share/bash-completion/completions/ignorer\n\
            \x20 ignorer completions zsh  > ~/.zfunc/_ignorer\n\
            \x20 ignorer completions fish > ~/.config/fish/completions/ignorer.fish"
    )]
    Completions(CompletionsArgs),
}

// ── default invocation (generate) ─────────────────────────────────────────────

/// Arguments for the default `ignorer <template>...` invocation.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Template names to combine into one `.gitignore`.
    #[arg(
        value_name = "TEMPLATE",
        help = "Template names to combine (e.g. go docker macos)"
    )]
    pub templates: Vec<String>,

    /// Append to an existing `.gitignore` instead of replacing it.
    #[arg(long = "append", help = "Append to an existing .gitignore")]
    pub append: bool,

    /// Directory to write the `.gitignore` into.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory (default: current directory)"
    )]
    pub output: PathBuf,

    /// Print the generated content without writing any file.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Pick templates interactively.
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with = "templates",
        help = "Select templates interactively"
    )]
    pub interactive: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `ignorer list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Grouped human-readable listing.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ignorer completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
