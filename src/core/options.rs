//! Generation options

use crate::data::constants::{
    DEFAULT_REQUIRED_MARKER, DEFAULT_STRUCT_NAME, EXTENDED_REQUIRED_MARKERS,
};

/// Options controlling parsing and code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOptions {
    /// Name of the generated struct (default: "T")
    pub struct_name: String,
    /// Understand `list`, `array(num)` and friends, and singularize nested
    /// array element names
    pub extended_types: bool,
    /// Values of the required column that mark a field as required
    pub required_markers: Vec<String>,
    /// Add `request:"query,omitempty"` next to the json tag of optional fields
    pub request_tag: bool,
    /// Remove backticks from every input line before parsing
    pub strip_backticks: bool,
    /// Remove backslashes from comment text
    pub strip_backslashes: bool,
    /// Whether an empty input line ends the session.
    /// false = blank lines are skipped
    pub blank_line_exits: bool,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            struct_name: DEFAULT_STRUCT_NAME.to_string(),
            extended_types: false,
            required_markers: vec![DEFAULT_REQUIRED_MARKER.to_string()],
            request_tag: false,
            strip_backticks: false,
            strip_backslashes: false,
            blank_line_exits: true,
        }
    }
}

impl GenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset matching the richer table dialect: array families, several
    /// required markers, request tags and tolerant input cleanup
    pub fn extended() -> Self {
        Self {
            extended_types: true,
            required_markers: EXTENDED_REQUIRED_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            request_tag: true,
            strip_backticks: true,
            strip_backslashes: true,
            blank_line_exits: false,
            ..Default::default()
        }
    }

    /// Look up a preset by name (`basic` or `extended`)
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(Self::default()),
            "extended" => Some(Self::extended()),
            _ => None,
        }
    }

    pub fn with_struct_name(mut self, name: impl Into<String>) -> Self {
        self.struct_name = name.into();
        self
    }

    /// Whether a required-column value marks the field as required.
    /// A missing value counts as required.
    pub fn is_required(&self, marker: Option<&str>) -> bool {
        match marker {
            None => true,
            Some(m) => self.required_markers.iter().any(|r| r == m),
        }
    }
}
