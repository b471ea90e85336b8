//! Prompts: unit_conversion

use serde_json::{json, Value as JsonValue};
use crate::protocol::{require_params, require_str, McpError};

pub const UNIT_CONVERSION_PROMPT: &str = "unit_conversion";

pub fn prompts_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "prompts": [
            {
                "name": UNIT_CONVERSION_PROMPT,
                "description": "Convert a value between units using the query_wolfram tool",
                "arguments": [
                    {"name": "value", "description": "The numerical value to convert", "required": true},
                    {"name": "from_unit", "description": "Source unit (e.g. meter, pound, celsius)", "required": true},
                    {"name": "to_unit", "description": "Target unit (e.g. foot, kilogram, fahrenheit)", "required": true},
                    {"name": "precision", "description": "Decimal places for the result", "required": false}
                ]
            }
        ]
    }))
}

pub fn prompts_get(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = require_params(params)?;
    let name = require_str(params, "name")?;

    if name != UNIT_CONVERSION_PROMPT {
        return Err(McpError::invalid_params(format!("Unknown prompt: {}", name))
            .with_data(json!({ "available_prompts": [UNIT_CONVERSION_PROMPT] })));
    }

    let arguments = params.get("arguments").cloned().unwrap_or(json!({}));
    let value = prompt_argument(&arguments, "value")?;
    let from_unit = prompt_argument(&arguments, "from_unit")?;
    let to_unit = prompt_argument(&arguments, "to_unit")?;
    let precision = match arguments.get("precision").and_then(argument_text) {
        None => None,
        Some(raw) if raw.trim().is_empty() => None,
        Some(raw) => Some(raw.trim().parse::<u32>().map_err(|_| {
            McpError::invalid_params(format!("precision must be a non-negative integer, got '{}'", raw))
        })?),
    };

    Ok(json!({
        "description": format!("Convert {} {} to {}", value, from_unit, to_unit),
        "messages": [{
            "role": "user",
            "content": {
                "type": "text",
                "text": conversion_prompt(&value, &from_unit, &to_unit, precision)
            }
        }]
    }))
}

/// Prompt arguments arrive as strings; numbers are accepted as a courtesy
fn argument_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn prompt_argument(arguments: &JsonValue, name: &str) -> Result<String, McpError> {
    arguments
        .get(name)
        .and_then(argument_text)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| McpError::invalid_params(format!("Missing required argument: {}", name)))
}

/// Instruction text for a conversion; all fields are embedded verbatim
pub fn conversion_prompt(value: &str, from_unit: &str, to_unit: &str, precision: Option<u32>) -> String {
    let mut prompt = format!(
        "Please perform a unit conversion:\n\nValue: {}\nFrom unit: {}\nTo unit: {}",
        value, from_unit, to_unit
    );

    if let Some(p) = precision {
        prompt.push_str(&format!("\nPrecision: {} decimal places", p));
    }

    prompt.push_str(&format!(
        "\n\nUse the `query_wolfram` tool to perform this conversion by searching for:\n\
         \"{value} {from_unit} to {to_unit}\"\n\n\
         Please format the result as:\n\
         - Conversion result: [value] [unit]\n\
         - Calculation details: [if provided by Wolfram|Alpha]\n\n\
         Example usage:\n\
         query_wolfram(\"{value} {from_unit} to {to_unit}\")"
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(arguments: JsonValue) -> Result<JsonValue, McpError> {
        prompts_get(&Some(json!({ "name": UNIT_CONVERSION_PROMPT, "arguments": arguments })))
    }

    fn text(result: &JsonValue) -> &str {
        result["messages"][0]["content"]["text"].as_str().unwrap()
    }

    #[test]
    fn test_basic_length() {
        let prompt = conversion_prompt("100", "meter", "foot", None);
        assert!(prompt.contains("Value: 100"));
        assert!(prompt.contains("From unit: meter"));
        assert!(prompt.contains("To unit: foot"));
        assert!(!prompt.contains("Precision"));
        assert!(prompt.contains("query_wolfram(\"100 meter to foot\")"));
        assert!(prompt.len() > 100);
    }

    #[test]
    fn test_with_precision() {
        let prompt = conversion_prompt("75", "kg", "pound", Some(2));
        assert!(prompt.contains("Value: 75"));
        assert!(prompt.contains("From unit: kg"));
        assert!(prompt.contains("To unit: pound"));
        assert!(prompt.contains("Precision: 2 decimal places"));
    }

    #[test]
    fn test_value_kept_verbatim() {
        let prompt = conversion_prompt("1.50", "nautical_mile", "kilometer", Some(0));
        assert!(prompt.contains("Value: 1.50\n"));
        assert!(prompt.contains("\"1.50 nautical_mile to kilometer\""));
        assert!(prompt.contains("Precision: 0 decimal places"));
    }

    #[test]
    fn test_prompts_get_renders_message() {
        let result = get(json!({
            "value": "32", "from_unit": "fahrenheit", "to_unit": "celsius", "precision": "1"
        }))
        .unwrap();
        assert_eq!(result["messages"][0]["role"], "user");
        let text = text(&result);
        assert!(text.contains("Value: 32"));
        assert!(text.contains("From unit: fahrenheit"));
        assert!(text.contains("To unit: celsius"));
        assert!(text.contains("Precision: 1 decimal places"));
    }

    #[test]
    fn test_prompts_get_optional_precision() {
        let result = get(json!({"value": 1, "from_unit": "foot", "to_unit": "meter", "precision": ""})).unwrap();
        assert!(text(&result).contains("Value: 1\n"));
        assert!(!text(&result).contains("Precision"));
    }

    #[test]
    fn test_prompts_get_rejects_bad_input() {
        let err = get(json!({"value": "1", "from_unit": "foot"})).unwrap_err();
        assert_eq!(err.message, "Missing required argument: to_unit");

        let err = get(json!({"value": "1", "from_unit": "foot", "to_unit": "m", "precision": "two"}))
            .unwrap_err();
        assert_eq!(err.code, -32602);

        let err = prompts_get(&Some(json!({"name": "mortgage_calculator"}))).unwrap_err();
        assert_eq!(err.message, "Unknown prompt: mortgage_calculator");
        assert!(err.data.is_some());
    }

    #[test]
    fn test_prompts_list() {
        let list = prompts_list().unwrap();
        let prompt = &list["prompts"][0];
        assert_eq!(prompt["name"], UNIT_CONVERSION_PROMPT);
        assert_eq!(prompt["arguments"].as_array().unwrap().len(), 4);
        assert_eq!(prompt["arguments"][3]["required"], false);
    }
}
