//! Tool definition for the passport renewal calculator.

use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "passport_renewal_status";

/// Get the tool descriptor for MCP tools/list.
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Calculates when a Russian internal passport must be replaced. ",
            "The passport is issued at 14 and replaced at 20 and 45; ",
            "replacement is due within 90 days after the birthday. ",
            "Returns the stage of the current document, the next replacement date, ",
            "the deadline and whether the passport is valid, due or invalid. ",
            "Dates use the YYYY-MM-DD format; 'today' is optional."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "birth_date": { "type": "string", "format": "date", "description": "Date of birth" },
            "issue_date": { "type": "string", "format": "date", "description": "Issue date of the current passport" },
            "today": { "type": "string", "format": "date", "description": "Reference date (optional, default: today)" }
        },
        "required": ["birth_date", "issue_date"]
    })
}
