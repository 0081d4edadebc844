use clap::{Parser, Subcommand};
use cli::OutputFormat;

#[derive(Parser)]
#[command(name = "pocl")]
#[command(about = "pocl CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the token stream of a source file
    Tokens {
        /// Path to the source file (.pocl)
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Parse a source file and print its syntax tree
    Ast {
        /// Path to the source file (.pocl)
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Parse a source file and report whether it is well-formed
    Check {
        /// Path to the source file (.pocl)
        path: String,
    },
}
