//! Domain models for the section mapping conversion.
//!
//! - [`Section`] - one table-of-contents entry located inside a volume PDF
//! - [`SectionMap`] - the full ordered mapping as persisted to `mapping.json`

use serde::{Deserialize, Serialize};

// =============================================================================
// Section
// =============================================================================

/// One section of a journal volume.
///
/// A row of the mapping spreadsheet: which volume the section belongs to,
/// its position in that volume's table of contents, and the PDF page the
/// section starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Volume number.
    pub volume: i64,
    /// Zero-based position in the volume's table of contents.
    pub section_index: i64,
    /// First page of the section in the volume PDF.
    pub pdf_page_start: i64,
}

// =============================================================================
// Section Map
// =============================================================================

/// The complete mapping document served to the reader.
///
/// `sections` preserves input row order exactly; the document has no other
/// top-level fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    /// All sections, in input order.
    pub sections: Vec<Section>,
}

impl SectionMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section, preserving insertion order.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the mapping holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Render the document exactly as it is written to disk:
    /// two-space indentation, struct field order, non-ASCII literal.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
