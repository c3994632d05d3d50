//! Tool definition for the compliance request template.

use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "compose_compliance_request";

/// Get the tool descriptor for MCP tools/list.
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Generates a compliance request e-mail to a client in Russian or English. ",
            "Choose any of: SOF (source of funds), ID (identity document), ",
            "UB (utility bill / proof of address). ",
            "Paragraphs always follow the order SOF, ID, UB regardless of the order given."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "language": {
                "type": "string",
                "enum": ["Russian", "English"],
                "description": "Language of the request"
            },
            "categories": {
                "type": "array",
                "items": { "type": "string", "enum": ["SOF", "ID", "UB"] },
                "description": "Requested documents"
            }
        },
        "required": ["language", "categories"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        let desc = descriptor();
        assert_eq!(desc.name, TOOL_NAME);
        assert!(desc.description.contains("SOF"));
        assert!(desc.input_schema["properties"]["categories"].is_object());
    }
}
