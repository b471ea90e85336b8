//! Tools: query_wolfram

use serde_json::{json, Value as JsonValue};
use tracing::info;
use wolfram_query::{KnowledgeQuery, QueryParams, QueryResult};
use crate::protocol::{require_params, require_str, McpError, INTERNAL_ERROR};

pub const QUERY_TOOL: &str = "query_wolfram";

const QUERY_DESCRIPTION: &str = "\
Query the Wolfram|Alpha LLM API for computed answers and curated knowledge: \
mathematics, physics and chemistry, unit conversions, geography, history, astronomy \
and general facts.

Query tips:
- Prefer short keyword queries (\"France population\" rather than a full question).
- English only; translate other languages first.
- Write exponents as 6*10^14, never 6e14. Use single-letter variable names.
- Name physical constants instead of substituting values (\"speed of light\").
- Ask for one property per call.

The result may include image URLs; show them with Markdown. A 501 status means \
the input was not understood and may carry a suggested rephrasing.";

pub fn tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": QUERY_TOOL,
                "description": QUERY_DESCRIPTION,
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Natural language query in English"
                        },
                        "maxchars": {
                            "type": "integer",
                            "minimum": 1,
                            "description": "Maximum response characters (service default: 6800)"
                        },
                        "units": {
                            "type": "string",
                            "description": "Unit system preference, e.g. \"metric\" or \"imperial\""
                        },
                        "location": {
                            "type": "string",
                            "description": "Geographic context for location-dependent queries"
                        }
                    },
                    "required": ["query"]
                }
            }
        ]
    }))
}

pub async fn tool_call(
    knowledge: &dyn KnowledgeQuery,
    params: &Option<JsonValue>,
) -> Result<JsonValue, McpError> {
    let params = require_params(params)?;
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        QUERY_TOOL => tool_query(knowledge, &args).await,
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

async fn tool_query(knowledge: &dyn KnowledgeQuery, args: &JsonValue) -> Result<JsonValue, McpError> {
    let params = query_params(args)?;
    let outcome = knowledge.query(&params).await;
    let result = QueryResult::from_outcome(params.input, outcome);

    info!(success = result.success, status = ?result.status_code, "query_wolfram finished");

    let text = serde_json::to_string_pretty(&result)
        .map_err(|e| McpError::new(INTERNAL_ERROR, format!("Failed to encode result: {}", e)))?;

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": result,
        "isError": !result.success
    }))
}

fn query_params(args: &JsonValue) -> Result<QueryParams, McpError> {
    let mut params = QueryParams::new(require_str(args, "query").map_err(|_| {
        McpError::invalid_params("Missing query argument")
    })?);

    match args.get("maxchars") {
        None | Some(JsonValue::Null) => {}
        Some(v) => {
            let maxchars = v
                .as_u64()
                .filter(|&n| n > 0)
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| McpError::invalid_params("maxchars must be a positive integer"))?;
            params.maxchars = Some(maxchars);
        }
    }

    params.units = optional_str(args, "units")?;
    params.location = optional_str(args, "location")?;
    Ok(params)
}

fn optional_str(args: &JsonValue, field: &str) -> Result<Option<String>, McpError> {
    match args.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(McpError::invalid_params(format!("{} must be a string", field))),
    }
}
