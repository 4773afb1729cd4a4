//! # Sectionmap - journal section mapping conversion
//!
//! Sectionmap converts the hand-maintained section mapping CSV into the JSON
//! index the publication reader loads to open a volume PDF at the right page.
//! It runs once per site build; there is no state between runs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ mapping.csv │────▶│   Parser    │────▶│  Pipeline   │────▶│ mapping.json │
//! │ (hdr + rows)│     │ (auto-enc)  │     │ (coerce+chk)│     │ (sections[]) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use sectionmap::convert_file;
//!
//! let conversion = convert_file(
//!     Path::new("public/journals/mapping.csv"),
//!     Path::new("public/journals/mapping.json"),
//! )?;
//! println!("Converted {} sections", conversion.map.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy
//! - [`models`] - Domain models (Section, SectionMap)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`pipeline`] - Coercion, self-check, and output
//! - [`validation`] - Embedded schema check of the generated document

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Conversion
pub mod pipeline;

// Validation
pub mod validation;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, ConvertResult, CsvError, CsvResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Section, SectionMap};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, parse_bytes, parse_str, ParseResult,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{
    coerce_rows, convert_bytes, convert_file, Conversion, CsvInfo, REQUIRED_COLUMNS,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{is_valid_section_map, validate, validate_section_map};
