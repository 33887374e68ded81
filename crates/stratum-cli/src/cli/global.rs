//! Flags that shape how a run reports, not what it scaffolds.

use std::path::PathBuf;

use clap::{Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` every file written, `-vvv` trace.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only errors reach stderr; progress lines are dropped.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain text only. Any non-empty `NO_COLOR` other than `0`/`false`
    /// turns this on.
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Config file to use instead of the platform default; must exist.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering of stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured progress lines.
    Human,
    /// Progress lines without colour.
    Plain,
    /// One JSON document (report or plan), nothing else.
    Json,
}
