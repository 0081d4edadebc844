pub mod commands;
pub mod render;

use clap::ValueEnum;

/// How command output is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
