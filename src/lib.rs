//! # mdstruct
//!
//! Generate Go struct declarations from Markdown field tables.
//!
//! API documentation often lists request and response fields as a Markdown
//! table with Chinese column headers. `mdstruct` turns such a table into a
//! Go struct with `json` tags and trailing comments.
//!
//! ## Usage Examples
//!
//! ### One-shot conversion
//!
//! ```rust
//! use mdstruct::{generate_struct, GenOptions};
//!
//! let table = "参数名|类型|必要性|内容\nuser_id|num|必要|用户ID\nis_deleted|bool|可选|";
//! let output = generate_struct(table, &GenOptions::default()).unwrap();
//! assert_eq!(
//!     output.content,
//!     "type T struct {\n\tUserId int `json:\"user_id\"` // 用户ID\n\tIsDeleted bool `json:\"is_deleted,omitempty\"`\n}"
//! );
//! ```
//!
//! ### Interactive session
//!
//! ```rust
//! use mdstruct::{GenOptions, Session, SessionEnd};
//! use std::io::Cursor;
//!
//! let input = "参数名|类型\nitems|array\nok\nexit\n";
//! let mut session = Session::new(Cursor::new(input), Vec::new(), GenOptions::default());
//! assert_eq!(session.run().unwrap(), SessionEnd::ExitToken);
//!
//! let out = String::from_utf8(session.into_output()).unwrap();
//! assert!(out.contains("\tItems []Items `json:\"items\"`"));
//! ```

/// Core parsing, generation and session modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core API
pub use core::{
    build_comment, classify_line, generate_struct, parse_row, parse_table, snake_to_camel, Field,
    GenOptions, Header, LineKind, ParsedLine, Row, Session, SessionEnd, StructGenerator, Table,
    TableParser,
};

// Re-export data modules
pub use data::constants;
pub use data::{lookup_header, resolve_go_type, ColumnKey};

// Re-export utilities
pub use utils::error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};
