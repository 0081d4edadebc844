use anyhow::Result;

use super::{load_source, parse_source};
use crate::render;
use crate::OutputFormat;

pub fn ast_file(path: &str, format: OutputFormat) -> Result<()> {
    let source = load_source(path)?;
    let program = parse_source(path, &source)?;

    match format {
        OutputFormat::Text => print!("{}", render::print_ast(&program)),
        OutputFormat::Json => println!("{}", render::to_json(&program)?),
    }
    Ok(())
}
