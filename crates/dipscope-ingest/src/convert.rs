//! Conversion of API JSON into domain values
//!
//! This is the only place that looks at JSON types; everything after it
//! sees [`FieldValue`]s.

use crate::error::IngestError;
use dipscope_domain::{FieldValue, RawDocument};
use serde_json::Value;
use tracing::warn;

/// Map a JSON value onto the field union
pub fn to_field_value(value: &Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Scalar(b.to_string()),
        Value::Number(n) => FieldValue::Scalar(n.to_string()),
        Value::String(s) => FieldValue::Scalar(s.clone()),
        Value::Array(items) => FieldValue::List(items.iter().map(to_field_value).collect()),
        Value::Object(map) => FieldValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_field_value(v)))
                .collect(),
        ),
    }
}

/// Convert one JSON document; non-objects yield `None`
pub fn to_raw_document(value: &Value) -> Option<RawDocument> {
    let obj = value.as_object()?;
    Some(RawDocument::new(
        obj.iter()
            .map(|(k, v)| (k.clone(), to_field_value(v)))
            .collect(),
    ))
}

/// Extract the documents of one API page (`{"documents": [...]}`)
///
/// A page without a `documents` array is malformed. Entries that are not
/// objects are skipped with a warning.
pub fn page_documents(page: &Value) -> Result<Vec<RawDocument>, IngestError> {
    let docs = page
        .get("documents")
        .and_then(Value::as_array)
        .ok_or_else(|| IngestError::MalformedPage("Expected a 'documents' array".to_string()))?;

    let mut out = Vec::with_capacity(docs.len());
    for (idx, doc) in docs.iter().enumerate() {
        match to_raw_document(doc) {
            Some(raw) => out.push(raw),
            None => warn!("Document {} is not a JSON object, skipping", idx),
        }
    }
    Ok(out)
}

/// Parse a page from its text
pub fn parse_page(contents: &str) -> Result<Vec<RawDocument>, IngestError> {
    let page: Value = serde_json::from_str(contents)?;
    page_documents(&page)
}
