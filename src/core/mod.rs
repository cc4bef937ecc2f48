//! Core generation modules
//!
//! - `parser`: header/data row parsing
//! - `generator`: field derivation and struct rendering
//! - `session`: the interactive read-parse-emit loop
//! - `options`: generation options and presets

pub mod generator;
pub mod options;
pub mod parser;
pub mod session;

pub use generator::{build_comment, snake_to_camel, Field, StructGenerator};
pub use options::GenOptions;
pub use parser::{parse_row, Header, ParsedLine, Row, Table, TableParser};
pub use session::{classify_line, LineKind, Session, SessionEnd};

use crate::utils::error::{ConversionOutput, ConversionResult};

/// Parse a complete table given as one string.
///
/// Empty lines are ignored; session tokens such as `ok` are not interpreted.
pub fn parse_table(input: &str, options: &GenOptions) -> ConversionResult<Table> {
    let mut parser = TableParser::new(options.strip_backticks);
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        parser.push_line(line)?;
    }
    Ok(parser.finish())
}

/// Generate a Go struct from a complete table in one shot
pub fn generate_struct(input: &str, options: &GenOptions) -> ConversionResult<ConversionOutput> {
    let table = parse_table(input, options)?;
    Ok(StructGenerator::new(options).generate(&table))
}
