//! Data layer - Static mappings and constants
//!
//! This module contains all static data used for struct generation:
//! - Header label mappings
//! - Type token mappings
//! - Session and output constants

pub mod constants;
pub mod gotypes;
pub mod headers;

// Re-export commonly used items
pub use gotypes::{is_known_type, resolve_go_type, ArrayElement, EXTENDED_ARRAY_TYPES};
pub use headers::{lookup_header, ColumnKey, HEADER_MAPPING};
