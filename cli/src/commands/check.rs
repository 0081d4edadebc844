use anyhow::Result;

use super::{load_source, parse_source};
use crate::render;

/// Parse the file and report the number of top-level statements.
///
/// Malformed characters are reported as warnings first; the parse itself
/// then fails on the first of them that the grammar reaches.
pub fn check_file(path: &str) -> Result<usize> {
    let source = load_source(path)?;

    let tokens = pocl_parser::tokenize(&source);
    for warning in render::scan_warnings(&source, &tokens) {
        eprintln!("{path}: {warning}");
    }

    let program = parse_source(path, &source)?;
    let count = program.statements.len();
    println!("ok: {count} statement(s)");
    Ok(count)
}
