pub mod ast;
pub mod check;
pub mod tokens;

use anyhow::{Context, Result};
use pocl_parser::ast::Program;
use std::fs;

use crate::render;

pub fn load_source(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
}

/// Scan and parse `source`, turning a syntax error into a located diagnostic.
pub fn parse_source(path: &str, source: &str) -> Result<Program> {
    pocl_parser::parse_program(source)
        .map_err(|e| anyhow::anyhow!("{path}: {}", render::diagnostic(source, &e)))
}
