//! Tool contract and response envelope.
//!
//! Every HTTP verb tool implements [`Tool`] and returns a
//! [`ResponseEnvelope`] — either an ordered list of human-readable summary
//! lines or a single error message. Envelopes are built fresh per
//! invocation and carry no state across calls.

/// The five HTTP methods exposed as tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    /// Display form used in request summary lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Delete => "DELETE",
        }
    }

    /// Registry name of the corresponding tool.
    pub fn tool_name(&self) -> &'static str {
        match self {
            HttpVerb::Get => "http_get",
            HttpVerb::Post => "http_post",
            HttpVerb::Put => "http_put",
            HttpVerb::Patch => "http_patch",
            HttpVerb::Delete => "http_delete",
        }
    }

    /// Try to resolve a registry tool name back to a verb.
    pub fn from_tool_name(name: &str) -> Option<Self> {
        match name {
            "http_get" => Some(HttpVerb::Get),
            "http_post" => Some(HttpVerb::Post),
            "http_put" => Some(HttpVerb::Put),
            "http_patch" => Some(HttpVerb::Patch),
            "http_delete" => Some(HttpVerb::Delete),
            _ => None,
        }
    }

    /// All verbs, in registry order.
    pub fn all() -> &'static [HttpVerb] {
        &[
            HttpVerb::Get,
            HttpVerb::Post,
            HttpVerb::Put,
            HttpVerb::Patch,
            HttpVerb::Delete,
        ]
    }
}

impl std::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request to invoke a specific tool with input data.
///
/// The input is an opaque string; tools are responsible for parsing and
/// validating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    /// Name of the tool to invoke.
    pub name: String,
    /// The input data to pass to the tool.
    pub input: String,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
        }
    }
}

/// The result of a tool invocation.
///
/// `ResponseEnvelope` represents either a completed HTTP exchange,
/// summarized as an ordered sequence of display lines, or a failure with a
/// single message. The two-variant design makes inconsistent
/// success/failure states unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseEnvelope {
    /// The exchange completed; `lines` summarize request, status, and body.
    Success { lines: Vec<String> },
    /// The invocation failed before or during the exchange.
    Error { message: String },
}

impl ResponseEnvelope {
    /// Create a success envelope from summary lines.
    pub fn success(lines: Vec<String>) -> Self {
        ResponseEnvelope::Success { lines }
    }

    /// Create an error envelope from a message.
    pub fn error(message: impl Into<String>) -> Self {
        ResponseEnvelope::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseEnvelope::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseEnvelope::Error { .. })
    }

    /// Summary lines, if this is a success envelope.
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            ResponseEnvelope::Success { lines } => Some(lines),
            ResponseEnvelope::Error { .. } => None,
        }
    }

    /// Error message, if this is an error envelope.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ResponseEnvelope::Success { .. } => None,
            ResponseEnvelope::Error { message } => Some(message),
        }
    }

    /// Convert to a `Result` for easier error handling.
    pub fn into_result(self) -> Result<Vec<String>, String> {
        match self {
            ResponseEnvelope::Success { lines } => Ok(lines),
            ResponseEnvelope::Error { message } => Err(message),
        }
    }
}

impl std::fmt::Display for ResponseEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseEnvelope::Success { lines } => write!(f, "{}", lines.join("\n")),
            ResponseEnvelope::Error { message } => write!(f, "{message}"),
        }
    }
}

/// Trait defining an external capability that agents can invoke.
///
/// Each tool has a unique name and processes a string input — for the HTTP
/// tools, a JSON document describing the request — into a
/// [`ResponseEnvelope`].
///
/// # Example
///
/// ```rust
/// use reqwire_core::tool::{ResponseEnvelope, Tool};
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     fn name(&self) -> &str {
///         "echo"
///     }
///
///     fn call(&self, input: String) -> ResponseEnvelope {
///         ResponseEnvelope::success(vec![input])
///     }
/// }
/// ```
pub trait Tool: Send + Sync {
    /// Unique name used by registries to route tool calls.
    fn name(&self) -> &str;

    /// Human-readable description for tool listings.
    fn description(&self) -> &str {
        ""
    }

    /// Execute the tool with the provided input.
    fn call(&self, input: String) -> ResponseEnvelope;
}
