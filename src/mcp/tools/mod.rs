//! MCP tools exposed via JSON-RPC.
//!
//! Each tool provides a descriptor (name, description, input schema); the
//! registry parses arguments, validates them and formats the result.

mod compliance_template;
mod passport_status;
pub mod registry;
pub mod result;

pub use registry::{ToolDescriptor, ToolRegistry};
pub use result::{ContentItem, ToolResult};

pub const PASSPORT_STATUS_TOOL: &str = passport_status::TOOL_NAME;
pub const COMPLIANCE_TEMPLATE_TOOL: &str = compliance_template::TOOL_NAME;
