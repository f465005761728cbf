//! Declarative request description.
//!
//! Tool input is a JSON document deserialized into [`RequestSpec`]. The
//! `value` and `multipart` fields are mutually exclusive encodings; when
//! both are present, multipart wins (branch priority in the encoder).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Declarative description of a single HTTP request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestSpec {
    pub url: String,
    /// Bearer token injected as `Authorization` unless the caller
    /// overrides that header. Empty tokens inject nothing.
    #[serde(default)]
    pub token: Option<String>,
    /// Caller-supplied headers; these take precedence over injected ones.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Request body for POST/PUT/PATCH: a string, number, boolean, null,
    /// or structured document.
    #[serde(default)]
    pub value: Option<Value>,
    /// Multipart form fields, keyed by field name. A `BTreeMap` keeps
    /// field materialization order deterministic.
    #[serde(default)]
    pub multipart: Option<BTreeMap<String, PartSpec>>,
}

impl RequestSpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            headers: HashMap::new(),
            value: None,
            multipart: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Add a multipart file field read from `path` at call time.
    pub fn with_file_part(mut self, field: impl Into<String>, file: FilePartSpec) -> Self {
        self.multipart
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), PartSpec::File(file));
        self
    }

    /// Add a multipart scalar field passed through unchanged.
    pub fn with_text_part(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.multipart
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), PartSpec::Text(value.into()));
        self
    }
}

/// One multipart form field: a file reference or a scalar passthrough.
///
/// Untagged: any JSON object carrying a `path` field is a file reference;
/// everything else passes through as a plain form field.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PartSpec {
    File(FilePartSpec),
    Text(Value),
}

/// File reference inside a multipart mapping.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilePartSpec {
    /// Local path read at call time.
    pub path: String,
    /// File name presented to the server; defaults to the last path
    /// segment.
    #[serde(default)]
    pub name: Option<String>,
    /// Mime type; defaults to `application/octet-stream`.
    #[serde(default, rename = "contentType")]
    pub content_type: Option<String>,
}

impl FilePartSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            content_type: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_spec_parses_from_url_only() {
        let spec: RequestSpec = serde_json::from_str(r#"{"url":"https://api.test/items"}"#)
            .expect("minimal spec should parse");
        assert_eq!(spec.url, "https://api.test/items");
        assert!(spec.token.is_none());
        assert!(spec.headers.is_empty());
        assert!(spec.value.is_none());
        assert!(spec.multipart.is_none());
    }

    #[test]
    fn multipart_object_with_path_is_a_file_reference() {
        let spec: RequestSpec = serde_json::from_value(json!({
            "url": "https://api.test/upload",
            "multipart": {
                "file": {"path": "/tmp/a.bin", "name": "a.bin", "contentType": "application/pdf"},
                "label": "release"
            }
        }))
        .unwrap();

        let parts = spec.multipart.unwrap();
        match parts.get("file").unwrap() {
            PartSpec::File(file) => {
                assert_eq!(file.path, "/tmp/a.bin");
                assert_eq!(file.name.as_deref(), Some("a.bin"));
                assert_eq!(file.content_type.as_deref(), Some("application/pdf"));
            }
            PartSpec::Text(_) => panic!("expected file reference"),
        }
        match parts.get("label").unwrap() {
            PartSpec::Text(value) => assert_eq!(value, &json!("release")),
            PartSpec::File(_) => panic!("expected scalar passthrough"),
        }
    }

    #[test]
    fn multipart_scalars_keep_their_types() {
        let spec: RequestSpec = serde_json::from_value(json!({
            "url": "https://api.test/upload",
            "multipart": {"count": 3, "draft": false, "note": null}
        }))
        .unwrap();

        let parts = spec.multipart.unwrap();
        assert!(matches!(parts.get("count").unwrap(), PartSpec::Text(v) if v == &json!(3)));
        assert!(matches!(parts.get("draft").unwrap(), PartSpec::Text(v) if v == &json!(false)));
        assert!(matches!(parts.get("note").unwrap(), PartSpec::Text(v) if v.is_null()));
    }

    #[test]
    fn builder_mirrors_the_wire_shape() {
        let spec = RequestSpec::new("https://api.test/items")
            .with_token("t0k3n")
            .with_header("X-Trace", "abc")
            .with_value(json!({"a": 1}));

        assert_eq!(spec.token.as_deref(), Some("t0k3n"));
        assert_eq!(spec.headers.get("X-Trace").unwrap(), "abc");
        assert_eq!(spec.value.unwrap(), json!({"a": 1}));
    }
}
