//! JSON Schema self-check for the generated mapping document.
//!
//! The pipeline validates the serialized [`crate::models::SectionMap`]
//! against a Draft 7 schema before the output file is written. For any
//! document this crate produces the check passes; it guards against
//! serializer regressions, not against user input.
//!
//! The schema is embedded at compile time from `schemas/section-map.json`.

use serde_json::Value;

/// Validate a JSON value against a schema.
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(Vec<String>)` with every violation otherwise
pub fn validate(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::draft7::new(schema)
        .map_err(|e| vec![format!("Invalid schema: {}", e)])?;

    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a document against the embedded section map schema.
pub fn validate_section_map(data: &Value) -> Result<(), Vec<String>> {
    let schema: Value = serde_json::from_str(include_str!("../../schemas/section-map.json"))
        .expect("Invalid embedded schema");
    validate(&schema, data)
}

/// Quick check against the section map schema.
pub fn is_valid_section_map(data: &Value) -> bool {
    let schema: Value = serde_json::from_str(include_str!("../../schemas/section-map.json"))
        .expect("Invalid embedded schema");
    jsonschema::draft7::is_valid(&schema, data)
}
