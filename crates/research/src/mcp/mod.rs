mod stdio;
mod tools;

use crate::gemini::GeminiClient;
use crate::prelude::{eprintln, *};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "Expose the research tool to MCP clients over stdio")]
pub struct App {}

#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    id: Option<Value>,
    method: String,
    params: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: &'static str,
    id: Option<Value>,
    #[serde(flatten)]
    outcome: Outcome,
}

/// Exactly one of `result` or `error` is present in a response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Result(Value),
    Error(JsonRpcError),
}

impl JsonRpcResponse {
    fn new(id: Option<Value>, outcome: std::result::Result<Value, JsonRpcError>) -> Self {
        let outcome = match outcome {
            Ok(value) => Outcome::Result(value),
            Err(error) => Outcome::Error(error),
        };

        Self {
            jsonrpc: "2.0",
            id,
            outcome,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcError {
    pub const PARSE_ERROR: i32 = -32700;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub async fn run(_app: App, global: crate::Global) -> Result<()> {
    let client = global.gemini_client()?;

    if global.verbose {
        eprintln!("Serving the research tool over MCP stdio");
    }

    stdio::serve(
        tokio::io::stdin(),
        tokio::io::stdout(),
        &client,
        global.verbose,
    )
    .await
}

/// Handle one JSON-RPC message. Notifications get no response.
pub async fn handle_request(request_str: &str, client: &GeminiClient) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(request_str) {
        Ok(req) => req,
        Err(e) => {
            let error = JsonRpcError::new(JsonRpcError::PARSE_ERROR, format!("Parse error: {e}"));
            return Some(JsonRpcResponse::new(None, Err(error)));
        }
    };

    if request.jsonrpc != "2.0" {
        log::warn!("Unexpected JSON-RPC version: {}", request.jsonrpc);
    }

    if request.id.is_none() && request.method.starts_with("notifications/") {
        log::debug!("Ignoring notification: {}", request.method);
        return None;
    }

    let outcome = match request.method.as_str() {
        "initialize" => Ok(tools::initialize_result()),
        "tools/list" => Ok(tools::tools_list()),
        "tools/call" => tools::call_tool(request.params, client).await,
        method => Err(JsonRpcError::new(
            JsonRpcError::METHOD_NOT_FOUND,
            format!("Method not found: {method}"),
        )),
    };

    Some(JsonRpcResponse::new(request.id, outcome))
}
