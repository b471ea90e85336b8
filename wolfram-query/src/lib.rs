//! Wolfram Query - LLM API client
//!
//! Sends a free-text query to the Wolfram|Alpha LLM endpoint and translates
//! the HTTP outcome into either an `Answer` or a `QueryError`:
//! - 400: bad input
//! - 401/403: invalid or missing App ID
//! - 501: input not understood, optionally with a suggestion
//! - timeouts and transport failures are distinct kinds
//!
//! `QueryResult` is the flattened, serializable form handed to MCP clients.

mod client;
mod error;
mod result;

pub use client::{
    interpret_response, Answer, ClientConfig, KnowledgeQuery, QueryParams, WolframClient,
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
pub use error::QueryError;
pub use result::QueryResult;
