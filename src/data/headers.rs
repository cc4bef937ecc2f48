//! Header label mappings
//!
//! Field tables are written with Chinese column labels. Each recognised label
//! maps onto one canonical column key; anything else is dropped.

use phf::phf_map;
use std::fmt;

/// Canonical identity of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    /// Raw snake_case field name
    Name,
    /// Type token (`num`, `str`, `array`, ...)
    Type,
    /// Field description
    Content,
    /// Required marker column
    NotNull,
    /// Free-form remark
    Comment,
}

impl ColumnKey {
    /// Canonical key string, as used in documentation and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::Name => "name",
            ColumnKey::Type => "type",
            ColumnKey::Content => "content",
            ColumnKey::NotNull => "notnull",
            ColumnKey::Comment => "comment",
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header label to canonical column key
pub static HEADER_MAPPING: phf::Map<&'static str, ColumnKey> = phf_map! {
    // Field name
    "参数名" => ColumnKey::Name,
    "字段" => ColumnKey::Name,
    "字段名" => ColumnKey::Name,
    "项" => ColumnKey::Name,

    "类型" => ColumnKey::Type,
    "内容" => ColumnKey::Content,
    "必要性" => ColumnKey::NotNull,
    "备注" => ColumnKey::Comment,
};

/// Look up a (trimmed) header label
pub fn lookup_header(label: &str) -> Option<ColumnKey> {
    HEADER_MAPPING.get(label).copied()
}
