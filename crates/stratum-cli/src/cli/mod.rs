//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! Required values (`-p`, at least one use case) are deliberately optional
//! at the clap level: their absence is reported as a usage error by the
//! command handler, with the `ERROR - <message>` presentation.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stratum",
    bin_name = "stratum",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Clean-architecture workspace scaffolding",
    long_about = "Stratum creates a Cargo workspace split into domain, business, \
                  infrastructure and application crates, and generates the \
                  interactor, messages, presenter and view model for each use case.",
    after_help = "EXAMPLES:\n\
        \x20 stratum -p shop place_order\n\
        \x20 stratum -p shop -d ~/projects cancel_order refund_order\n\
        \x20 stratum -p shop -f -y place_order      # regenerate without prompting\n\
        \x20 stratum -p shop --dry-run place_order\n\
        \x20 stratum --completions bash > ~/.local/share/bash-completion/completions/stratum",
)]
pub struct Cli {
    /// Logging, colour, config and output flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to scaffold and where.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,

    /// Print a shell completion script and exit.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        help = "Generate shell completions and exit"
    )]
    pub completions: Option<Shell>,
}

// ── Scaffolding ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Project name in snake_case; also the project directory name.
    #[arg(
        short = 'p',
        long = "project-name",
        value_name = "NAME",
        help = "Project name in snake_case (required)"
    )]
    pub project_name: Option<String>,

    /// Directory the project is created in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "TARGET_DIR",
        help = "Target directory, created if missing (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Re-register and regenerate use cases that already exist.
    #[arg(short = 'f', long = "force", help = "Force overwriting existing use cases")]
    pub force: bool,

    /// Skip the `--force` confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Answer yes to the overwrite prompt")]
    pub yes: bool,

    /// Create layer crates without running `cargo new`.
    #[arg(
        long = "no-cargo",
        help = "Write layer manifests directly instead of running cargo new"
    )]
    pub no_cargo: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Use case names in snake_case.
    #[arg(value_name = "USE_CASE", help = "One or more use case names in snake_case")]
    pub use_cases: Vec<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
