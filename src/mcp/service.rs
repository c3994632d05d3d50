//! MCP Service - core JSON-RPC 2.0 request handler.

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::mcp::rpc::{OutboundResponse, RpcRequest, JSONRPC_VERSION};
use crate::mcp::tools::{ToolDescriptor, ToolRegistry};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Clone)]
pub struct McpService {
    registry: Arc<ToolRegistry>,
}

impl McpService {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Handle one request; `None` means no response is due (notification).
    pub fn handle_request(&self, request: RpcRequest) -> Option<OutboundResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            warn!("received unsupported jsonrpc version: {}", request.jsonrpc);
            return Some(OutboundResponse::invalid_request(
                request.id,
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }

        if request.is_notification() {
            info!("received client notification: {}", request.method);
            return None;
        }

        let RpcRequest {
            method, params, id, ..
        } = request;

        let response = match method.as_str() {
            "initialize" => self.handle_initialize(id, params),
            "tools/list" => self.handle_list_tools(id),
            "tools/call" => self.handle_call_tool(id, params),
            "ping" => OutboundResponse::success(id, json!({ "ok": true })),
            other => OutboundResponse::method_not_found(id, other),
        };
        Some(response)
    }

    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: InitializeParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        info!(
            "client requested initialization: {} v{} (protocol {})",
            parsed.client_info.name,
            parsed
                .client_info
                .version
                .as_deref()
                .unwrap_or("unknown"),
            parsed.protocol_version
        );

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ImplementationInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Passport & Compliance Tools".to_string()),
            },
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
        };

        OutboundResponse::from_payload(id, &result)
    }

    fn handle_list_tools(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
        };
        OutboundResponse::from_payload(id, &payload)
    }

    fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: CallToolParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        info!("calling tool: {}", parsed.name);
        let result = self.registry.call_tool(&parsed.name, parsed.arguments);
        OutboundResponse::from_payload(id, &result)
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    protocol_version: String,
    #[serde(rename = "clientInfo")]
    client_info: ClientInfo,
}

#[derive(Debug, Deserialize)]
struct ClientInfo {
    name: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    protocol_version: String,
    #[serde(rename = "serverInfo")]
    server_info: ImplementationInfo,
    capabilities: ServerCapabilities,
}

#[derive(Debug, Serialize)]
struct ImplementationInfo {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    tools: ToolsCapability,
}

#[derive(Debug, Serialize)]
struct ToolsCapability {
    #[serde(rename = "listChanged")]
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct ListToolsResult {
    tools: Vec<ToolDescriptor>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    serde_json::from_value(params.unwrap_or(Value::Null)).map_err(|err| err.to_string())
}
