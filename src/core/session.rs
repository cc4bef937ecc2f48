//! Interactive read-parse-emit session
//!
//! A session repeatedly prompts for a table, reads it line by line until
//! `ok`, and prints the generated struct. It ends on `exit`, on an empty
//! line (unless blank lines are skipped), or at end of input. A column
//! count mismatch aborts the whole session.

use std::io::{BufRead, Write};

use tracing::{debug, error, warn};

use super::generator::StructGenerator;
use super::options::GenOptions;
use super::parser::{Table, TableParser};
use crate::data::constants::{COLUMN_MISMATCH_MESSAGE, END_TABLE_TOKEN, EXIT_TOKEN, PROMPT};
use crate::utils::error::ConversionResult;

/// How a session terminated normally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `exit` was entered
    ExitToken,
    /// An empty line was entered
    BlankLine,
    /// The input stream was closed
    EndOfInput,
}

/// Classification of one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Exit,
    EndTable,
    Blank,
    Table,
}

/// Classify a line with its line terminator already removed
pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::Blank;
    }
    match line.trim() {
        EXIT_TOKEN => LineKind::Exit,
        END_TABLE_TOKEN => LineKind::EndTable,
        _ => LineKind::Table,
    }
}

enum Cycle {
    Complete(Table),
    Terminated(SessionEnd),
}

/// Interactive generator session over any line reader and writer
pub struct Session<R, W> {
    input: R,
    output: W,
    options: GenOptions,
    cycles: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: GenOptions) -> Self {
        Self {
            input,
            output,
            options,
            cycles: 0,
        }
    }

    /// Run until a terminator is read.
    ///
    /// A column count mismatch prints the mismatch message and returns the
    /// error without emitting the pending struct.
    pub fn run(&mut self) -> ConversionResult<SessionEnd> {
        debug!(options = ?self.options, "session started");
        loop {
            match self.run_cycle()? {
                Cycle::Complete(table) => self.emit(&table)?,
                Cycle::Terminated(end) => {
                    debug!(?end, cycles = self.cycles, "session finished");
                    return Ok(end);
                }
            }
        }
    }

    /// Number of structs emitted so far
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn run_cycle(&mut self) -> ConversionResult<Cycle> {
        writeln!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut parser = TableParser::new(self.options.strip_backticks);
        let mut buf = String::new();

        loop {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                return Ok(Cycle::Terminated(SessionEnd::EndOfInput));
            }
            let line = buf.trim_end_matches(['\n', '\r']);

            match classify_line(line) {
                LineKind::Exit => return Ok(Cycle::Terminated(SessionEnd::ExitToken)),
                LineKind::Blank if self.options.blank_line_exits => {
                    return Ok(Cycle::Terminated(SessionEnd::BlankLine))
                }
                LineKind::Blank => continue,
                LineKind::EndTable => return Ok(Cycle::Complete(parser.finish())),
                LineKind::Table => {
                    if let Err(err) = parser.push_line(line) {
                        error!(%err, "table rejected");
                        writeln!(self.output, "{}", COLUMN_MISMATCH_MESSAGE)?;
                        self.output.flush()?;
                        return Err(err);
                    }
                }
            }
        }
    }

    fn emit(&mut self, table: &Table) -> ConversionResult<()> {
        let output = StructGenerator::new(&self.options).generate(table);
        for warning in &output.warnings {
            warn!(kind = %warning.kind, line = ?warning.line, "{}", warning.message);
        }

        writeln!(self.output, "{}", output.content)?;
        self.output.flush()?;

        self.cycles += 1;
        debug!(rows = table.rows.len(), cycle = self.cycles, "struct emitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ConversionError;
    use std::io::Cursor;

    fn run(input: &str, options: GenOptions) -> (ConversionResult<SessionEnd>, String) {
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), options);
        let result = session.run();
        let out = String::from_utf8(session.into_output()).unwrap();
        (result, out)
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("  exit "), LineKind::Exit);
        assert_eq!(classify_line("ok"), LineKind::EndTable);
        assert_eq!(classify_line("Exit"), LineKind::Table);
        assert_eq!(classify_line("   "), LineKind::Table);
    }

    #[test]
    fn test_exit_before_table() {
        let (result, out) = run("exit\n", GenOptions::default());
        assert_eq!(result, Ok(SessionEnd::ExitToken));
        assert_eq!(out, format!("{}\n", PROMPT));
    }

    #[test]
    fn test_blank_line_terminates() {
        let (result, out) = run("参数名|类型\n\nok\n", GenOptions::default());
        assert_eq!(result, Ok(SessionEnd::BlankLine));
        assert!(!out.contains("struct"));
    }

    #[test]
    fn test_blank_line_skipped() {
        let opts = GenOptions {
            blank_line_exits: false,
            ..Default::default()
        };
        let (result, out) = run("参数名|类型\n\nid|num\nok\n", opts);
        assert_eq!(result, Ok(SessionEnd::EndOfInput));
        assert!(out.contains("\tId int `json:\"id\"`"));
    }

    #[test]
    fn test_crlf_input() {
        let (result, out) = run("参数名|类型\r\nid|num\r\nok\r\nexit\r\n", GenOptions::default());
        assert_eq!(result, Ok(SessionEnd::ExitToken));
        assert!(out.contains("type T struct {\n\tId int `json:\"id\"`\n}\n"));
    }

    #[test]
    fn test_mismatch_aborts() {
        let (result, out) = run("参数名|类型\na|num|x\nok\nexit\n", GenOptions::default());
        assert_eq!(result, Err(ConversionError::column_mismatch(2, 2, 3)));
        assert!(out.ends_with(&format!("{}\n", COLUMN_MISMATCH_MESSAGE)));
        assert!(!out.contains("struct"));
    }

    #[test]
    fn test_multiple_cycles() {
        let input = "参数名|类型\na|num\nok\n字段|类型\nb|str\nok\nexit\n";
        let mut session = Session::new(Cursor::new(input), Vec::new(), GenOptions::default());
        assert_eq!(session.run(), Ok(SessionEnd::ExitToken));
        assert_eq!(session.cycles(), 2);

        let out = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(out.contains("\tA int `json:\"a\"`"));
        assert!(out.contains("\tB string `json:\"b\"`"));
    }
}
