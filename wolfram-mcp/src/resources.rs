//! Read-only resources exposing the unit taxonomy
//!
//! - units://categories - every category with its units
//! - units://categories/{name} - the units of one category

use serde_json::{json, Map, Value as JsonValue};
use wolfram_units::{Category, UnitTaxonomy};
use crate::protocol::{require_params, require_str, McpError, INTERNAL_ERROR};

const CATEGORIES_URI: &str = "units://categories";

pub fn resources_list(taxonomy: &UnitTaxonomy) -> Result<JsonValue, McpError> {
    let mut resources = vec![json!({
        "uri": CATEGORIES_URI,
        "name": "unit_categories",
        "description": format!(
            "All {} unit categories with their {} accepted unit names",
            taxonomy.categories().len(),
            taxonomy.unit_count()
        ),
        "mimeType": "application/json"
    })];

    resources.extend(taxonomy.categories().iter().map(|c| {
        json!({
            "uri": category_uri(c.name()),
            "name": c.name(),
            "description": format!("{} units accepted for {}", c.len(), c.name().replace('_', " ")),
            "mimeType": "application/json"
        })
    }));

    Ok(json!({ "resources": resources }))
}

pub fn resources_read(taxonomy: &UnitTaxonomy, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = require_params(params)?;
    let uri = require_str(params, "uri")?;

    let body = if uri == CATEGORIES_URI {
        let all: Map<String, JsonValue> = taxonomy
            .categories()
            .iter()
            .map(|c| (c.name().to_string(), units_json(c)))
            .collect();
        JsonValue::Object(all)
    } else {
        let name = uri.strip_prefix(CATEGORIES_URI).and_then(|rest| rest.strip_prefix('/')).ok_or_else(|| {
            McpError::invalid_params(format!(
                "Invalid URI: {}. Expected {} or {}/{{name}}",
                uri, CATEGORIES_URI, CATEGORIES_URI
            ))
        })?;
        let category = taxonomy.category(name).ok_or_else(|| {
            McpError::invalid_params(format!("Unknown unit category: {}", name))
        })?;
        units_json(category)
    };

    let text = serde_json::to_string_pretty(&body)
        .map_err(|e| McpError::new(INTERNAL_ERROR, format!("Failed to encode resource: {}", e)))?;

    Ok(json!({
        "contents": [{
            "uri": uri,
            "mimeType": "application/json",
            "text": text
        }]
    }))
}

fn category_uri(name: &str) -> String {
    format!("{}/{}", CATEGORIES_URI, name)
}

fn units_json(category: &Category) -> JsonValue {
    JsonValue::Array(category.units().map(|u| JsonValue::String(u.to_string())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(uri: &str) -> Result<JsonValue, McpError> {
        resources_read(&UnitTaxonomy::builtin().unwrap(), &Some(json!({ "uri": uri })))
    }

    fn body(result: &JsonValue) -> JsonValue {
        serde_json::from_str(result["contents"][0]["text"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_list_has_index_and_each_category() {
        let taxonomy = UnitTaxonomy::builtin().unwrap();
        let list = resources_list(&taxonomy).unwrap();
        let resources = list["resources"].as_array().unwrap();
        assert_eq!(resources.len(), taxonomy.categories().len() + 1);
        assert_eq!(resources[0]["uri"], CATEGORIES_URI);
        assert_eq!(resources[1]["uri"], "units://categories/length");
    }

    #[test]
    fn test_read_single_category() {
        let result = read("units://categories/temperature").unwrap();
        let units = body(&result);
        let units = units.as_array().unwrap();
        assert!(units.contains(&json!("°C")));
        assert!(units.contains(&json!("kelvin")));
        assert_eq!(units.len(), 14);
    }

    #[test]
    fn test_read_all_categories() {
        let result = read(CATEGORIES_URI).unwrap();
        let all = body(&result);
        let all = all.as_object().unwrap();
        assert_eq!(all.len(), 40);
        let total: usize = all.values().map(|v| v.as_array().unwrap().len()).sum();
        assert_eq!(total, 769);
    }

    #[test]
    fn test_read_errors() {
        let err = read("units://categories/colour").unwrap_err();
        assert_eq!(err.message, "Unknown unit category: colour");
        let err = read("file:///tmp/units.json").unwrap_err();
        assert_eq!(err.code, -32602);
        let err = read("units://categoriesx").unwrap_err();
        assert!(err.message.starts_with("Invalid URI"));
    }
}
