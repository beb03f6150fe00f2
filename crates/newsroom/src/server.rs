//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the content analyzer, publishing gate, and preview renderer to
//! editor assistants over stdio.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library
//! that the CLI commands use, and each `#[tool]` method delegates to
//! `newsroom_core` rather than implementing business logic directly.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use newsroom_core::analyzer::{self, AnalysisInput, ContentMetrics};
use newsroom_core::gate::{PublishingDecision, PublishingGate};
use newsroom_core::markdown;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `check_publish` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckPublishParams {
    /// Article body (markdown).
    pub content: String,
    /// SEO score computed by the SEO analyzer.
    pub seo_score: i32,
    /// Minimum SEO score. Defaults to the server's configured threshold.
    pub min_seo_score: Option<i32>,
    /// Minimum content score. Defaults to the server's configured threshold.
    pub min_content_score: Option<i32>,
}

/// Parameters for the `render_preview` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RenderPreviewParams {
    /// Article body (markdown).
    pub content: String,
}

#[derive(Serialize)]
struct PublishCheck {
    #[serde(flatten)]
    decision: PublishingDecision,
    metrics: ContentMetrics,
}

/// MCP server exposing newsroom tools to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    gate: PublishingGate,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(
            PublishingGate::default(),
            Some(newsroom_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

impl ProjectServer {
    fn check_input_size(&self, content: &str) -> Result<(), McpError> {
        if let Some(max) = self.max_input_bytes
            && content.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    content.len()
                ),
                None,
            ));
        }
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a server using the given gate thresholds and input limit.
    pub fn new(gate: PublishingGate, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            gate,
            max_input_bytes,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Analyze an article draft.
    #[tool(
        description = "Analyze an article draft. Returns word, sentence, paragraph, heading, image and link counts, Flesch readability, sentiment, and a 0-100 content score."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_content(
        &self,
        Parameters(params): Parameters<AnalysisInput>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_content",
            input_len = params.content.len(),
            "executing MCP tool"
        );
        self.check_input_size(&params.content)?;

        let metrics = analyzer::analyze_input(&params);
        let json = to_json(&metrics)?;

        tracing::info!(
            tool = "analyze_content",
            content_score = metrics.content_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Decide whether a draft may be published.
    #[tool(
        description = "Check whether an article may be published. Requires the SEO score; the content score is computed from the draft. Both must meet their minimums (default 60)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", seo_score = params.seo_score))]
    fn check_publish(
        &self,
        Parameters(params): Parameters<CheckPublishParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_publish", "executing MCP tool");
        self.check_input_size(&params.content)?;

        let gate = PublishingGate {
            min_seo_score: params.min_seo_score.unwrap_or(self.gate.min_seo_score),
            min_content_score: params
                .min_content_score
                .unwrap_or(self.gate.min_content_score),
        };
        let metrics = analyzer::analyze(&params.content);
        let decision = gate.evaluate(params.seo_score, i32::from(metrics.content_score));

        tracing::info!(
            tool = "check_publish",
            can_publish = decision.can_publish,
            "MCP tool completed"
        );
        let json = to_json(&PublishCheck { decision, metrics })?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Render an HTML preview.
    #[tool(
        description = "Render an article draft's markdown to an HTML preview. Raw HTML in the draft is escaped."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn render_preview(
        &self,
        Parameters(params): Parameters<RenderPreviewParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "render_preview", "executing MCP tool");
        self.check_input_size(&params.content)?;

        let html = markdown::render_preview(&params.content);

        tracing::info!(tool = "render_preview", html_len = html.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(html)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Analyze article drafts, check whether they may be published, and render previews.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
