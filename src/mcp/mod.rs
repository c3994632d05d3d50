//! MCP (Model Context Protocol) module.
//!
//! Exposes both tools over stateless JSON-RPC 2.0 on HTTP POST.

pub mod handlers;
pub mod rpc;
pub mod service;
pub mod tools;

pub use handlers::{config, McpState};
pub use service::McpService;
