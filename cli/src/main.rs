use anyhow::Result;
use clap::Parser;

mod args;

use args::{Cli, Commands};
use cli::commands::{ast, check, tokens};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Tokens { path, format } => tokens::tokens_file(path, *format),
        Commands::Ast { path, format } => ast::ast_file(path, *format),
        Commands::Check { path } => check::check_file(path).map(|_| ()),
    }
}
