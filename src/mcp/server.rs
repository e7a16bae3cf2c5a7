// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, JsonObject,
    ListResourcesResult, ListToolsResult, PaginatedRequestParams, ReadResourceRequestParams,
    ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData, ServerHandler, ServiceExt};
use tracing::{debug, warn};

use crate::config::EndpointConfig;
use crate::error::ProxyError;
use crate::ide::IdeClient;

use super::catalog::{self, ToolAction, ToolSpec, ACTION_OK};

/// MCP server that answers discovery from the static catalogs and forwards tool calls to
/// the IDE.
///
/// Holds no mutable state; clones share one HTTP client.
#[derive(Debug, Clone)]
pub struct IdeProxy {
    client: Arc<IdeClient>,
}

impl IdeProxy {
    pub fn new(client: IdeClient) -> Self {
        Self { client: Arc::new(client) }
    }

    pub fn from_config(config: EndpointConfig) -> Result<Self, ProxyError> {
        Ok(Self::new(IdeClient::new(config)?))
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        self.client.config()
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    /// Runs one tool call. Never fails: every error becomes an `is_error` result.
    pub async fn call_tool_named(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        debug!(tool = name, "tool call");
        let outcome = match catalog::find_tool(name) {
            Some(tool) => self.run_tool(tool, &arguments).await,
            None => Err(ProxyError::UnknownTool(name.to_owned())),
        };
        if let Err(err) = &outcome {
            warn!(tool = name, error = %err, "tool call failed");
        }
        into_envelope(outcome)
    }

    async fn run_tool(
        &self,
        tool: &ToolSpec,
        arguments: &JsonObject,
    ) -> Result<String, ProxyError> {
        match tool.action {
            ToolAction::Fetch => self.client.fetch_text(tool.path, tool.on_failure).await,
            ToolAction::Post => {
                self.client.post_text(tool.path, arguments, tool.on_failure).await?;
                Ok(ACTION_OK.to_owned())
            }
        }
    }

    pub async fn read_resource_contents(&self, uri: &str) -> Result<ResourceContents, ProxyError> {
        let resource = catalog::find_resource(uri)
            .ok_or_else(|| ProxyError::ResourceNotFound(uri.to_owned()))?;
        let text = self.client.fetch_text(resource.path, resource.on_failure).await?;

        let mut contents = ResourceContents::text(text, resource.uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(resource.mime_type.to_owned());
        }
        Ok(contents)
    }
}

/// Converts an operation outcome into the single-item result envelope.
pub fn into_envelope(outcome: Result<String, ProxyError>) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => CallToolResult::error(vec![Content::text(err.to_string())]),
    }
}

fn resource_fault(err: ProxyError) -> ErrorData {
    match err {
        ProxyError::ResourceNotFound(_) => ErrorData::resource_not_found(err.to_string(), None),
        other => ErrorData::internal_error(other.to_string(), None),
    }
}

impl ServerHandler for IdeProxy {
    fn get_info(&self) -> ServerInfo {
        let names: Vec<&str> = catalog::TOOLS.iter().map(|tool| tool.name).collect();

        let mut server_info = Implementation::from_build_env();
        server_info.name = "jetbrains/proxy".to_owned();
        server_info.version = env!("CARGO_PKG_VERSION").to_owned();

        ServerInfo {
            instructions: Some(format!(
                "JetBrains IDE proxy (tools: {}; resources: {})",
                names.join(", "),
                catalog::CURRENT_FILE_URI
            )),
            capabilities: ServerCapabilities::builder().enable_tools().enable_resources().build(),
            server_info,
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(catalog::list_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.call_tool_named(&request.name, arguments).await)
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(catalog::list_resources()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let contents = self.read_resource_contents(&request.uri).await.map_err(resource_fault)?;
        Ok(ReadResourceResult { contents: vec![contents] })
    }
}
