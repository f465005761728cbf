//! Body encoding.
//!
//! Decides how the declarative `value`/`multipart` fields become an
//! outbound payload. Multipart file references are materialized into byte
//! buffers through the injected [`FileReader`]; a read failure aborts the
//! whole request. String values that look like JSON (brace/bracket prefix)
//! are parsed — POST replaces the string with the parsed document, PUT and
//! PATCH only validate and keep the original string.

use super::spec::PartSpec;
use reqwire_core::fs::FileReader;
use reqwire_core::{FormPart, InvokeError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Materialize multipart fields, reading file references from disk.
pub(crate) fn encode_multipart(
    parts: &BTreeMap<String, PartSpec>,
    files: &dyn FileReader,
) -> Result<Vec<FormPart>, InvokeError> {
    let mut encoded = Vec::with_capacity(parts.len());
    for (field, part) in parts {
        match part {
            PartSpec::File(file) => {
                let buffer = files
                    .read(&file.path)
                    .map_err(|source| InvokeError::file_access(&file.path, source))?;
                let name = file
                    .name
                    .clone()
                    .unwrap_or_else(|| default_file_name(&file.path));
                let mime_type = file
                    .content_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());
                encoded.push(FormPart::file(field, name, mime_type, buffer));
            }
            PartSpec::Text(value) => encoded.push(FormPart::text(field, value.clone())),
        }
    }
    Ok(encoded)
}

/// Resolve the body value for POST: JSON-looking strings are parsed and
/// replaced by the parsed document, everything else passes through.
pub(crate) fn parse_value(value: &Value) -> Result<Value, InvokeError> {
    match json_candidate(value) {
        Some(raw) => {
            serde_json::from_str(raw).map_err(|err| InvokeError::invalid_body(err.to_string()))
        }
        None => Ok(value.clone()),
    }
}

/// Pre-flight check for PUT/PATCH: JSON-looking strings must parse, but
/// the original value is kept.
pub(crate) fn validate_value(value: &Value) -> Result<(), InvokeError> {
    if let Some(raw) = json_candidate(value) {
        serde_json::from_str::<Value>(raw)
            .map_err(|err| InvokeError::invalid_body(err.to_string()))?;
    }
    Ok(())
}

/// A string value beginning with `{` or `[` claims to be JSON.
fn json_candidate(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if s.starts_with('{') || s.starts_with('[') => Some(s),
        _ => None,
    }
}

fn default_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwire_core::FormPayload;
    use serde_json::json;
    use std::collections::HashMap;
    use std::io;

    struct MapReader(HashMap<String, Vec<u8>>);

    impl FileReader for MapReader {
        fn read(&self, path: &str) -> io::Result<Vec<u8>> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    fn reader_with(path: &str, bytes: &[u8]) -> MapReader {
        MapReader(HashMap::from([(path.to_string(), bytes.to_vec())]))
    }

    #[test]
    fn file_reference_is_read_with_explicit_metadata() {
        let parts: BTreeMap<String, PartSpec> = serde_json::from_value(json!({
            "file": {"path": "/data/report.bin", "name": "report.pdf", "contentType": "application/pdf"}
        }))
        .unwrap();
        let reader = reader_with("/data/report.bin", b"%PDF-1.7");

        let encoded = encode_multipart(&parts, &reader).unwrap();
        assert_eq!(encoded.len(), 1);
        assert_eq!(encoded[0].field, "file");
        match &encoded[0].payload {
            FormPayload::File {
                name,
                mime_type,
                buffer,
            } => {
                assert_eq!(name, "report.pdf");
                assert_eq!(mime_type, "application/pdf");
                assert_eq!(buffer, b"%PDF-1.7");
            }
            FormPayload::Text(_) => panic!("expected file payload"),
        }
    }

    #[test]
    fn file_reference_defaults_name_and_mime_type() {
        let parts: BTreeMap<String, PartSpec> =
            serde_json::from_value(json!({"file": {"path": "/data/files/upload.bin"}})).unwrap();
        let reader = reader_with("/data/files/upload.bin", b"bytes");

        let encoded = encode_multipart(&parts, &reader).unwrap();
        match &encoded[0].payload {
            FormPayload::File {
                name, mime_type, ..
            } => {
                assert_eq!(name, "upload.bin");
                assert_eq!(mime_type, "application/octet-stream");
            }
            FormPayload::Text(_) => panic!("expected file payload"),
        }
    }

    #[test]
    fn scalar_fields_pass_through_unchanged() {
        let parts: BTreeMap<String, PartSpec> =
            serde_json::from_value(json!({"count": 3, "draft": false, "note": null})).unwrap();
        let reader = MapReader(HashMap::new());

        let encoded = encode_multipart(&parts, &reader).unwrap();
        let payloads: Vec<_> = encoded.iter().map(|p| (&p.field, &p.payload)).collect();
        // BTreeMap iteration: count, draft, note.
        assert_eq!(
            payloads[0],
            (&"count".to_string(), &FormPayload::Text(json!(3)))
        );
        assert_eq!(
            payloads[1],
            (&"draft".to_string(), &FormPayload::Text(json!(false)))
        );
        assert_eq!(
            payloads[2],
            (&"note".to_string(), &FormPayload::Text(Value::Null))
        );
    }

    #[test]
    fn unreadable_file_aborts_encoding() {
        let parts: BTreeMap<String, PartSpec> =
            serde_json::from_value(json!({"file": {"path": "/missing.bin"}})).unwrap();
        let reader = MapReader(HashMap::new());

        let err = encode_multipart(&parts, &reader).unwrap_err();
        assert!(matches!(err, InvokeError::FileAccess { ref path, .. } if path == "/missing.bin"));
    }

    #[test]
    fn post_parses_and_replaces_json_strings() {
        let parsed = parse_value(&json!("{\"a\":1}")).unwrap();
        assert_eq!(parsed, json!({"a": 1}));

        let parsed = parse_value(&json!("[1,2,3]")).unwrap();
        assert_eq!(parsed, json!([1, 2, 3]));
    }

    #[test]
    fn post_passes_other_values_through() {
        assert_eq!(parse_value(&json!("plain text")).unwrap(), json!("plain text"));
        assert_eq!(parse_value(&json!(42)).unwrap(), json!(42));
        assert_eq!(parse_value(&json!(true)).unwrap(), json!(true));
        assert_eq!(parse_value(&Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn invalid_json_string_is_rejected() {
        let err = parse_value(&json!("{invalid")).unwrap_err();
        assert!(matches!(err, InvokeError::InvalidBody { .. }));

        let err = validate_value(&json!("[1,")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON value:"));
    }

    #[test]
    fn validate_keeps_the_original_value() {
        // Validation only; the caller keeps sending the raw string.
        validate_value(&json!("{\"a\":1}")).unwrap();
        validate_value(&json!("not json at all")).unwrap();
        validate_value(&json!(7)).unwrap();
    }

    #[test]
    fn default_file_name_falls_back_to_the_path() {
        assert_eq!(default_file_name("/data/files/upload.bin"), "upload.bin");
        assert_eq!(default_file_name("upload.bin"), "upload.bin");
        assert_eq!(default_file_name("/data/files/"), "files");
        assert_eq!(default_file_name("/"), "/");
    }
}
