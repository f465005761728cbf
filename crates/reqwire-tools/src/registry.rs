//! Tool registry.
//!
//! A small in-memory registry for routing [`ToolCall`]s to the verb tools.
//! The registry holds `Arc<dyn Tool>` values keyed by tool name; lookup is
//! O(1) and dispatch is a single call.

use crate::standard::network::{
    HttpContext, HttpDeleteTool, HttpGetTool, HttpPatchTool, HttpPostTool, HttpPutTool,
};
use reqwire_core::{ResponseEnvelope, Tool, ToolCall};
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for managing and dispatching tool calls.
pub trait ToolRegistry {
    /// Look up the tool by name and execute it with the call's input.
    /// Returns `None` if the tool is not registered.
    fn dispatch(&self, call: &ToolCall) -> Option<ResponseEnvelope>;

    /// Dispatch with a not-found error instead of `None`.
    fn try_dispatch(&self, call: &ToolCall) -> Result<ResponseEnvelope, String> {
        self.dispatch(call)
            .ok_or_else(|| format!("Tool not found: {}", call.name))
    }
}

/// In-memory tool registry for local tool storage and dispatch.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use reqwire_tools::{
///     HttpContext, InMemoryToolRegistry, ReqwestTransport, ToolCall, ToolRegistry,
/// };
///
/// let ctx = HttpContext::new(Arc::new(ReqwestTransport::new()));
/// let registry = InMemoryToolRegistry::with_http_tools(ctx);
/// let result = registry.dispatch(&ToolCall::new("http_get", "https://example.com"));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl InMemoryToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register all five HTTP verb tools against one execution context.
    pub fn with_http_tools(ctx: HttpContext) -> Self {
        Self::new()
            .with_tool(Arc::new(HttpGetTool::new(ctx.clone())))
            .with_tool(Arc::new(HttpPostTool::new(ctx.clone())))
            .with_tool(Arc::new(HttpPutTool::new(ctx.clone())))
            .with_tool(Arc::new(HttpPatchTool::new(ctx.clone())))
            .with_tool(Arc::new(HttpDeleteTool::new(ctx)))
    }

    /// Register a tool under its own name.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.insert(tool.name().to_string(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Registered tool names, sorted.
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolRegistry for InMemoryToolRegistry {
    fn dispatch(&self, call: &ToolCall) -> Option<ResponseEnvelope> {
        self.tools
            .get(&call.name)
            .map(|tool| tool.call(call.input.clone()))
    }
}
