use anyhow::Result;

use super::load_source;
use crate::render;
use crate::OutputFormat;

pub fn tokens_file(path: &str, format: OutputFormat) -> Result<()> {
    let source = load_source(path)?;
    let tokens = pocl_parser::tokenize(&source);

    for warning in render::scan_warnings(&source, &tokens) {
        eprintln!("{path}: {warning}");
    }

    match format {
        OutputFormat::Text => print!("{}", render::format_tokens(&tokens)),
        OutputFormat::Json => println!("{}", render::to_json(&tokens)?),
    }
    Ok(())
}
