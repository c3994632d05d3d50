//! Tool registry - central routing for MCP tools.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::result::{ContentItem, ToolResult};
use super::{compliance_template, passport_status};
use crate::common::local_today;
use crate::compliance::{self, ComposeRequest};
use crate::passport::{self, model::PassportStatusRequest};

/// Tool descriptor in the shape MCP clients expect.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Central registry for both tools.
pub struct ToolRegistry {
    clock: fn() -> NaiveDate,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { clock: local_today }
    }

    /// Registry with a fixed notion of "today" when the caller omits it.
    pub fn with_clock(clock: fn() -> NaiveDate) -> Self {
        Self { clock }
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![
            passport_status::descriptor(),
            compliance_template::descriptor(),
        ]
    }

    pub fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        match name {
            passport_status::TOOL_NAME => self.call_passport_status(arguments),
            compliance_template::TOOL_NAME => self.call_compliance_template(arguments),
            _ => ToolResult::error(format!(
                "Tool '{}' is not available. Available tools: {}, {}",
                name,
                passport_status::TOOL_NAME,
                compliance_template::TOOL_NAME,
            )),
        }
    }

    fn call_passport_status(&self, arguments: Option<Value>) -> ToolResult {
        let request = match parse_arguments::<PassportStatusRequest>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };
        let today = request.today.unwrap_or_else(self.clock);

        match passport::evaluate(request.birth_date, request.issue_date, today) {
            Ok(response) => ToolResult::success(vec![
                ContentItem::text(response.summary()),
                ContentItem::json(&response),
            ]),
            Err(errors) => {
                log::warn!("{} rejected input: {}", passport_status::TOOL_NAME, errors.len());
                ToolResult::error(errors.to_text())
            }
        }
    }

    fn call_compliance_template(&self, arguments: Option<Value>) -> ToolResult {
        let request = match parse_arguments::<ComposeRequest>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };

        let response = compliance::respond(&request);
        if response.placeholder {
            return ToolResult::error(response.text);
        }

        ToolResult::success(vec![
            ContentItem::text(response.text.clone()),
            ContentItem::json(&response),
        ])
    }
}

fn parse_arguments<T: for<'de> Deserialize<'de>>(arguments: Option<Value>) -> Result<T, String> {
    let value = arguments.unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|err| format!("Invalid arguments: {}", err))
}
