//! completion/complete for prompt arguments
//!
//! Only the unit_conversion prompt's unit arguments are completed. Anything
//! else gets an empty completion, which is how MCP says "no suggestions".

use serde_json::{json, Value as JsonValue};
use tracing::debug;
use wolfram_units::{Completion, CompletionContext, CompletionEngine};
use crate::prompts::UNIT_CONVERSION_PROMPT;
use crate::protocol::{require_params, McpError};

pub fn complete(engine: &CompletionEngine, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = require_params(params)?;

    let reference = params
        .get("ref")
        .filter(|r| r.is_object())
        .ok_or_else(|| McpError::invalid_params("Missing ref parameter"))?;
    let argument = params
        .get("argument")
        .filter(|a| a.is_object())
        .ok_or_else(|| McpError::invalid_params("Missing argument parameter"))?;

    let argument_name = argument
        .get("name")
        .and_then(|n| n.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing argument name"))?;
    let partial = argument.get("value").and_then(|v| v.as_str()).unwrap_or("");

    let is_conversion_prompt = reference.get("type").and_then(|t| t.as_str()) == Some("ref/prompt")
        && reference.get("name").and_then(|n| n.as_str()) == Some(UNIT_CONVERSION_PROMPT);

    let completion = if is_conversion_prompt {
        let context = parse_context(params.get("context"));
        engine.complete(argument_name, partial, context.as_ref())
    } else {
        None
    };

    let completion = completion.unwrap_or_else(|| {
        debug!(argument = argument_name, "completion not applicable");
        Completion::empty()
    });

    Ok(json!({ "completion": completion }))
}

/// Resolved arguments from `context.arguments`; anything malformed is dropped
fn parse_context(context: Option<&JsonValue>) -> Option<CompletionContext> {
    let arguments = context?.get("arguments")?.as_object()?;
    Some(
        arguments
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|v| (name.as_str(), v)))
            .collect(),
    )
}
