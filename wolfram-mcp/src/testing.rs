//! Test doubles shared by the handler tests

use std::sync::Mutex;
use async_trait::async_trait;
use wolfram_query::{Answer, KnowledgeQuery, QueryError, QueryParams};

/// Canned knowledge source that records the last query it saw
pub struct StubKnowledge {
    outcome: Result<Answer, QueryError>,
    seen: Mutex<Option<QueryParams>>,
}

impl StubKnowledge {
    pub fn new(outcome: Result<Answer, QueryError>) -> Self {
        StubKnowledge {
            outcome,
            seen: Mutex::new(None),
        }
    }

    pub fn answering(text: &str) -> Self {
        Self::new(Ok(Answer::new(text.to_string())))
    }

    pub fn failing(err: QueryError) -> Self {
        Self::new(Err(err))
    }

    pub fn last_params(&self) -> Option<QueryParams> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl KnowledgeQuery for StubKnowledge {
    async fn query(&self, params: &QueryParams) -> Result<Answer, QueryError> {
        *self.seen.lock().unwrap() = Some(params.clone());
        self.outcome.clone()
    }
}
