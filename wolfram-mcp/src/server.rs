//! Request dispatch

use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use wolfram_query::KnowledgeQuery;
use wolfram_units::CompletionEngine;
use crate::protocol::{McpError, McpRequest, McpResponse};
use crate::{completion, prompts, resources, tools};

pub const PROTOCOL_VERSION: &str = "2025-06-18";
pub const SERVER_NAME: &str = "wolframalpha-llm";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const INSTRUCTIONS: &str = "Use query_wolfram for calculations, scientific data and factual lookups. \
Keep queries short and in English. For unit conversions, the unit_conversion prompt \
suggests unit names compatible with the unit already chosen.";

pub struct Server {
    engine: CompletionEngine,
    knowledge: Box<dyn KnowledgeQuery>,
}

impl Server {
    pub fn new(engine: CompletionEngine, knowledge: Box<dyn KnowledgeQuery>) -> Self {
        Server { engine, knowledge }
    }

    /// Handle one line of input. Returns the serialized reply, or `None`
    /// for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<McpRequest>(line) {
            Ok(request) => {
                debug!(method = %request.method, "processing");
                let response = self.handle_request(&request).await;
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed (no response)");
                    return None;
                }
                response
            }
            Err(e) => {
                warn!(error = %e, "error parsing request");
                McpResponse::new(Some(JsonValue::Null), Err(McpError::parse_error(e)))
            }
        };

        match serde_json::to_string(&response) {
            Ok(json) => Some(json),
            Err(e) => {
                error!(error = %e, "failed to encode response");
                None
            }
        }
    }

    pub async fn handle_request(&self, request: &McpRequest) -> McpResponse {
        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => handle_initialize(&request.params),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => tools::tools_list(),
            "tools/call" => tools::tool_call(self.knowledge.as_ref(), &request.params).await,

            // Prompts
            "prompts/list" => prompts::prompts_list(),
            "prompts/get" => prompts::prompts_get(&request.params),

            // Completion
            "completion/complete" => completion::complete(&self.engine, &request.params),

            // Resources
            "resources/list" => resources::resources_list(self.engine.taxonomy()),
            "resources/read" => resources::resources_read(self.engine.taxonomy(), &request.params),

            _ => Err(McpError::method_not_found(&request.method)),
        };

        if let Err(ref e) = result {
            debug!(method = %request.method, code = e.code, message = %e.message, "request failed");
        }

        McpResponse::new(request.id.clone(), result)
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Echo the client's protocol version for compatibility
    let client_protocol = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        },
        "capabilities": {
            "tools": { "listChanged": false },
            "prompts": { "listChanged": false },
            "resources": { "subscribe": false, "listChanged": false },
            "completions": {}
        },
        "instructions": INSTRUCTIONS
    }))
}
