use async_trait::async_trait;
use crate::enums::search_error::SearchError;
use crate::structs::http_reply::HttpReply;
use crate::structs::query::Query;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Sends one GET for `query` and returns whatever status and body came back.
    /// Only failures to complete the exchange are errors.
    async fn fetch(&self, query: &Query) -> Result<HttpReply, SearchError>;
}
