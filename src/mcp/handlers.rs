//! Stateless MCP HTTP handler for Actix-Web.
//!
//! Each POST carries one JSON-RPC request; no session is kept.

use actix_web::{web, HttpResponse, Responder};

use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::service::McpService;

pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// RPC handler - POST /mcp
pub async fn rpc_handler(state: web::Data<McpState>, body: web::Bytes) -> impl Responder {
    let request: RpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("Rejected malformed MCP request: {}", err);
            return HttpResponse::Ok()
                .content_type("application/json")
                .json(OutboundResponse::parse_error(format!("Parse error: {err}")));
        }
    };

    log::info!("Received MCP request: {}", request.method);

    match state.service.handle_request(request) {
        Some(response) => HttpResponse::Ok()
            .content_type("application/json")
            .json(response),
        // Notifications are acknowledged without a body
        None => HttpResponse::Accepted().finish(),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mcp").route(web::post().to(rpc_handler)));
}
