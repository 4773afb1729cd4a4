//! The conversion pipeline: parse → coerce → check → write.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use sectionmap::pipeline::convert_file;
//!
//! let conversion = convert_file(
//!     Path::new("public/journals/mapping.csv"),
//!     Path::new("public/journals/mapping.json"),
//! )?;
//! println!("Converted {} sections", conversion.map.len());
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ConvertError, ConvertResult, CsvError};
use crate::models::{Section, SectionMap};
use crate::parser::{parse_bytes, ParseResult};
use crate::validation::validate_section_map;

/// Columns every data row must provide, in output field order.
pub const REQUIRED_COLUMNS: [&str; 3] = ["volume", "sectionIndex", "pdfPageStart"];

/// Input file metadata for the status block.
#[derive(Debug, Clone)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The coerced sections, in input order.
    pub map: SectionMap,
    /// The serialized document, byte-identical to what lands on disk.
    pub document: String,
    /// Input metadata.
    pub csv_info: CsvInfo,
}

/// Convert the mapping CSV at `input` and write the JSON document to `output`.
///
/// This is the main entry point for the pipeline. The output file is only
/// created or modified after the entire input has been parsed, coerced, and
/// checked in memory; every earlier failure leaves the output untouched.
pub fn convert_file(input: &Path, output: &Path) -> ConvertResult<Conversion> {
    let bytes = match fs::read(input) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConvertError::FileNotFound {
                path: input.to_path_buf(),
            })
        }
        Err(e) => return Err(CsvError::Io(e).into()),
    };

    let conversion = convert_bytes(&bytes)?;
    fs::write(output, &conversion.document)?;
    Ok(conversion)
}

/// Convert raw CSV bytes into the serialized mapping document.
///
/// Same as [`convert_file`] but without touching the filesystem.
pub fn convert_bytes(bytes: &[u8]) -> ConvertResult<Conversion> {
    let parsed = parse_bytes(bytes)?;
    let map = coerce_rows(&parsed)?;

    let document = map.to_pretty_json()?;

    // Self-check against the embedded schema before anything is written.
    let value: serde_json::Value = serde_json::from_str(&document)?;
    validate_section_map(&value)
        .map_err(|errors| ConvertError::SchemaCheck(errors.join("; ")))?;

    let csv_info = CsvInfo {
        encoding: parsed.encoding.clone(),
        delimiter: parsed.delimiter,
        headers: parsed.headers.clone(),
        row_count: parsed.rows.len(),
    };

    Ok(Conversion {
        map,
        document,
        csv_info,
    })
}

/// Coerce parsed rows into sections, preserving input order.
///
/// Fails on the first absent required column or non-integer value.
pub fn coerce_rows(parsed: &ParseResult) -> ConvertResult<SectionMap> {
    let mut indices = [0usize; 3];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = parsed
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ConvertError::MissingField {
                column: name.to_string(),
            })?;
    }
    let [volume_col, index_col, page_col] = indices;

    let mut map = SectionMap::new();
    for (i, row) in parsed.rows.iter().enumerate() {
        let line = i + 2; // +1 for 0-index, +1 for header
        map.push(Section {
            volume: coerce_field(row, volume_col, REQUIRED_COLUMNS[0], line)?,
            section_index: coerce_field(row, index_col, REQUIRED_COLUMNS[1], line)?,
            pdf_page_start: coerce_field(row, page_col, REQUIRED_COLUMNS[2], line)?,
        });
    }

    Ok(map)
}

/// Trim surrounding whitespace and parse one cell as a base-10 integer.
fn coerce_field(row: &[String], idx: usize, column: &str, line: usize) -> ConvertResult<i64> {
    let raw = row.get(idx).ok_or_else(|| ConvertError::MissingField {
        column: column.to_string(),
    })?;

    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ConvertError::ValueConversion {
            row: line,
            column: column.to_string(),
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_str(csv: &str) -> ConvertResult<Conversion> {
        convert_bytes(csv.as_bytes())
    }

    #[test]
    fn test_basic_conversion() {
        let conversion = convert_str(
            "volume,sectionIndex,pdfPageStart\n1,0,5\n1,1,12",
        )
        .unwrap();

        assert_eq!(conversion.map.len(), 2);
        assert_eq!(
            conversion.map.sections[0],
            Section {
                volume: 1,
                section_index: 0,
                pdf_page_start: 5
            }
        );
        assert_eq!(
            conversion.map.sections[1],
            Section {
                volume: 1,
                section_index: 1,
                pdf_page_start: 12
            }
        );
    }

    #[test]
    fn test_exact_document_rendering() {
        let conversion = convert_str(
            "volume,sectionIndex,pdfPageStart\n1,0,5\n1,1,12",
        )
        .unwrap();

        let expected = "\
{
  \"sections\": [
    {
      \"volume\": 1,
      \"sectionIndex\": 0,
      \"pdfPageStart\": 5
    },
    {
      \"volume\": 1,
      \"sectionIndex\": 1,
      \"pdfPageStart\": 12
    }
  ]
}";
        assert_eq!(conversion.document, expected);
    }

    #[test]
    fn test_header_only_input() {
        let conversion = convert_str("volume,sectionIndex,pdfPageStart\n").unwrap();

        assert!(conversion.map.is_empty());
        assert_eq!(conversion.document, "{\n  \"sections\": []\n}");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let conversion = convert_str(
            "title,volume,sectionIndex,pdfPageStart,notes\nForeword,1,0,5,skip me",
        )
        .unwrap();

        assert_eq!(conversion.map.len(), 1);
        assert_eq!(conversion.map.sections[0].pdf_page_start, 5);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let conversion = convert_str(
            "volume,sectionIndex,pdfPageStart\n 7 ,\t0\t, 12 ",
        )
        .unwrap();

        let section = &conversion.map.sections[0];
        assert_eq!(section.volume, 7);
        assert_eq!(section.section_index, 0);
        assert_eq!(section.pdf_page_start, 12);
    }

    #[test]
    fn test_signed_values() {
        let conversion = convert_str("volume,sectionIndex,pdfPageStart\n-1,+2,3").unwrap();

        let section = &conversion.map.sections[0];
        assert_eq!(section.volume, -1);
        assert_eq!(section.section_index, 2);
    }

    #[test]
    fn test_missing_column_in_header() {
        let err = convert_str("volume,pdfPageStart\n1,5").unwrap_err();

        assert!(matches!(
            err,
            ConvertError::MissingField { ref column } if column == "sectionIndex"
        ));
    }

    #[test]
    fn test_short_row_names_missing_column() {
        let err = convert_str("volume,sectionIndex,pdfPageStart\n1,0").unwrap_err();

        assert!(matches!(
            err,
            ConvertError::MissingField { ref column } if column == "pdfPageStart"
        ));
    }

    #[test]
    fn test_non_integer_value() {
        let err = convert_str("volume,sectionIndex,pdfPageStart\n1,0,12a").unwrap_err();

        match err {
            ConvertError::ValueConversion { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "pdfPageStart");
                assert_eq!(value, "12a");
            }
            other => panic!("expected ValueConversion, got {other:?}"),
        }
    }

    #[test]
    fn test_float_and_empty_values_rejected() {
        assert!(matches!(
            convert_str("volume,sectionIndex,pdfPageStart\n1,0,3.5"),
            Err(ConvertError::ValueConversion { .. })
        ));
        assert!(matches!(
            convert_str("volume,sectionIndex,pdfPageStart\n1,,5"),
            Err(ConvertError::ValueConversion { .. })
        ));
    }

    #[test]
    fn test_embedded_whitespace_rejected() {
        let err = convert_str("volume,sectionIndex,pdfPageStart\n\"1 2\",0,5").unwrap_err();

        assert!(matches!(
            err,
            ConvertError::ValueConversion { ref value, .. } if value == "1 2"
        ));
    }

    #[test]
    fn test_failure_stops_at_first_bad_row() {
        // row 2 is fine, row 3 is not; nothing is emitted
        let err = convert_str("volume,sectionIndex,pdfPageStart\n1,0,5\n1,1,oops").unwrap_err();

        assert!(matches!(
            err,
            ConvertError::ValueConversion { row: 3, .. }
        ));
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let conversion = convert_str(
            "volume,sectionIndex,pdfPageStart\n1,0,5\n2,0,1\n2,1,9",
        )
        .unwrap();

        let reparsed: SectionMap = serde_json::from_str(&conversion.document).unwrap();
        assert_eq!(reparsed.to_pretty_json().unwrap(), conversion.document);
    }

    #[test]
    fn test_convert_file_writes_only_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mapping.csv");
        let output = dir.path().join("mapping.json");

        std::fs::write(&input, "volume,sectionIndex,pdfPageStart\n1,0,bad").unwrap();
        let err = convert_file(&input, &output).unwrap_err();
        assert!(matches!(err, ConvertError::ValueConversion { .. }));
        assert!(!output.exists());

        std::fs::write(&input, "volume,sectionIndex,pdfPageStart\n1,0,5").unwrap();
        let conversion = convert_file(&input, &output).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            conversion.document
        );
    }

    #[test]
    fn test_convert_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nope.csv");
        let output = dir.path().join("mapping.json");

        let err = convert_file(&input, &output).unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound { .. }));
        assert!(err.to_string().contains("nope.csv"));
        assert!(!output.exists());
    }

    #[test]
    fn test_csv_info_metadata() {
        let conversion = convert_str(
            "volume,sectionIndex,pdfPageStart\n1,0,5\n1,1,12",
        )
        .unwrap();

        let info = &conversion.csv_info;
        assert_eq!(info.encoding, "utf-8");
        assert_eq!(info.delimiter, ',');
        assert_eq!(info.row_count, 2);
        assert_eq!(info.headers, REQUIRED_COLUMNS.to_vec());
    }
}
