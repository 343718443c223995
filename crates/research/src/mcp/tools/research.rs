use research_core::research::{Operation, ResearchRequest};
use serde_json::{json, Value};

use super::JsonRpcError;
use crate::gemini::GeminiClient;

pub const NAME: &str = "research";

pub fn definition() -> Value {
    let operations: Vec<&str> = Operation::ALL.iter().map(Operation::as_str).collect();

    json!({
        "name": NAME,
        "description": "Summarize a passage into an easy and a detailed explanation, or suggest related topics and further reading for it.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "operation": {
                    "type": "string",
                    "enum": operations,
                    "description": "\"summarize\" to explain the passage, \"suggest\" for related topics and reading"
                },
                "content": {
                    "type": "string",
                    "description": "The passage of text to process"
                }
            },
            "required": ["operation", "content"]
        }
    })
}

/// Run the research request and return the answer text.
pub async fn call(arguments: Option<Value>, client: &GeminiClient) -> Result<String, JsonRpcError> {
    let request: ResearchRequest = serde_json::from_value(arguments.unwrap_or(Value::Null))
        .map_err(|e| {
            JsonRpcError::new(
                JsonRpcError::INVALID_PARAMS,
                format!("Invalid arguments: {e}"),
            )
        })?;

    log::debug!("Calling research: operation='{}'", request.operation);

    client.process_content(&request).await.map_err(|e| {
        let code = if e.is_client_error() {
            JsonRpcError::INVALID_PARAMS
        } else {
            JsonRpcError::INTERNAL_ERROR
        };
        JsonRpcError::new(code, e.to_string())
    })
}
