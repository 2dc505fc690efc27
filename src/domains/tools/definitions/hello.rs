//! Hello tool definition.
//!
//! A greeting tool that welcomes a caller to the OpenTofu MCP server.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the hello tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HelloParams {
    /// The name to greet.
    pub name: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Hello tool - greets the given name.
pub struct HelloTool;

impl HelloTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "hello";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Greet someone by name and welcome them to the OpenTofu MCP Server.";

    /// Build the greeting for the given name.
    pub fn greet(name: &str) -> String {
        format!("Hello, {name}! Welcome to the OpenTofu MCP Server.")
    }

    /// Execute the tool logic (for STDIO transport via rmcp).
    #[instrument(skip_all, fields(name = %params.name))]
    pub fn execute(params: &HelloParams) -> CallToolResult {
        info!("Hello tool called for: {}", params.name);

        CallToolResult::success(vec![Content::text(Self::greet(&params.name))])
    }

    /// HTTP handler for this tool (for the HTTP transport).
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let name = arguments
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ToolError::invalid_arguments("Missing or invalid 'name' argument")
                    .with_detail("field", "name")
            })?
            .to_string();

        info!("Hello tool (HTTP) called for: {}", name);

        let result = Self::execute(&HelloParams { name });

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HelloParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: HelloParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
