mod research;

use super::JsonRpcError;
use crate::gemini::GeminiClient;
use serde::Deserialize;
use serde_json::{json, Value};

const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    arguments: Option<Value>,
}

pub fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {"tools": {}},
        "serverInfo": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

pub fn tools_list() -> Value {
    json!({ "tools": [research::definition()] })
}

pub async fn call_tool(params: Option<Value>, client: &GeminiClient) -> Result<Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
        .map_err(|e| JsonRpcError::new(JsonRpcError::INVALID_PARAMS, format!("Invalid params: {e}")))?;

    match params.name.as_str() {
        research::NAME => {
            let answer = research::call(params.arguments, client).await?;
            Ok(json!({ "content": [{"type": "text", "text": answer}] }))
        }
        name => Err(JsonRpcError::new(
            JsonRpcError::INVALID_PARAMS,
            format!("Unknown tool: {name}"),
        )),
    }
}
