//! Serializable query outcome for tool responses

use serde::{Deserialize, Serialize};
use crate::{Answer, QueryError};

/// Flattened query outcome
///
/// `success` tells the two shapes apart: on success `result` and
/// `characters` are set, otherwise `error` plus whatever detail the failure
/// carried (`status_code`, `suggestion`, `response_text`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub success: bool,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
}

impl QueryResult {
    pub fn from_outcome(query: impl Into<String>, outcome: Result<Answer, QueryError>) -> Self {
        let query = query.into();
        match outcome {
            Ok(answer) => QueryResult {
                success: true,
                query,
                characters: Some(answer.characters),
                result: Some(answer.text),
                error: None,
                status_code: None,
                suggestion: None,
                response_text: None,
            },
            Err(err) => {
                let (suggestion, response_text) = match &err {
                    QueryError::NotInterpretable { suggestion } => (suggestion.clone(), None),
                    QueryError::UnexpectedStatus { body, .. } => (None, Some(body.clone())),
                    _ => (None, None),
                };
                QueryResult {
                    success: false,
                    query,
                    result: None,
                    characters: None,
                    error: Some(err.to_string()),
                    status_code: err.status_code(),
                    suggestion,
                    response_text,
                }
            }
        }
    }
}
