//! Utility modules
//!
//! This module contains the error and warning types shared by parsing,
//! generation and the interactive session.

pub mod error;

// Re-export commonly used items
pub use error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};
