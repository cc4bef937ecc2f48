//! Error handling for mdstruct
//!
//! This module provides a unified error type and result type for parsing,
//! generation and session handling, plus the non-fatal warning type.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A data row has a different number of cells than the header
    ColumnMismatch {
        /// 1-indexed line within the current table
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Invalid configuration value
    InvalidConfig { message: String },
    /// IO error (console read/write)
    IoError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::ColumnMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "Column count mismatch at line {}: expected {} cells, found {}",
                line, expected, found
            ),
            ConversionError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Kind of a non-fatal issue found while generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A header label is not in the mapping table; its column is dropped
    UnknownHeader,
    /// A type token is not recognised and is emitted verbatim
    UnknownType,
    /// A row has no field name
    MissingName,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::UnknownHeader => write!(f, "unknown header"),
            WarningKind::UnknownType => write!(f, "unknown type"),
            WarningKind::MissingName => write!(f, "missing name"),
        }
    }
}

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    pub kind: WarningKind,
    pub message: String,
    /// 1-indexed line within the table, when known
    pub line: Option<usize>,
}

impl ConversionWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(l) = self.line {
            write!(f, "Warning at line {} ({}): {}", l, self.kind, self.message)
        } else {
            write!(f, "Warning ({}): {}", self.kind, self.message)
        }
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The generated code
    pub content: String,
    /// Any warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// Convenience constructors for errors
impl ConversionError {
    pub fn column_mismatch(line: usize, expected: usize, found: usize) -> Self {
        ConversionError::ColumnMismatch {
            line,
            expected,
            found,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        ConversionError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether the error came from the table itself rather than the console
    pub fn is_table_error(&self) -> bool {
        matches!(self, ConversionError::ColumnMismatch { .. })
    }
}
