use crate::config::constants::{QUERY_PLACEHOLDER, QUERY_PROMPT};
use crate::enums::search_error::SearchError;
use crate::enums::search_outcome::SearchOutcome;
use crate::structs::api_response::ApiResponse;
use crate::structs::markdown_document::MarkdownDocument;
use crate::structs::query::Query;
use crate::traits::frontend::Frontend;
use crate::traits::search_client::SearchClient;

/// Runs one question through the search API and shows the answer or a notice.
///
/// Holds no per-search state, so overlapping searches on the same dispatcher
/// run independently and each ends in its own document or notice.
pub struct QueryDispatcher<C, F> {
    client: C,
    frontend: F,
}

impl<C: SearchClient, F: Frontend> QueryDispatcher<C, F> {
    pub const fn new(client: C, frontend: F) -> Self {
        Self { client, frontend }
    }

    pub const fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Prompts for a question, then searches.
    pub async fn run(&self) -> SearchOutcome {
        let raw = self.frontend.prompt_query(QUERY_PROMPT, QUERY_PLACEHOLDER).await;
        self.dispatch(raw).await
    }

    /// Searches for `raw`; `None` or blank input ends the flow without a request.
    pub async fn dispatch(&self, raw: Option<String>) -> SearchOutcome {
        let outcome = match Query::parse(raw) {
            Some(query) => self.search(&query).await,
            None => SearchOutcome::Cancelled,
        };

        if let Some(notice) = outcome.notice() {
            self.frontend.show_notice(&notice);
        }

        outcome
    }

    async fn search(&self, query: &Query) -> SearchOutcome {
        let markdown = match self.fetch_markdown(query).await {
            Ok(Some(markdown)) => markdown,
            Ok(None) => return SearchOutcome::NoResults,
            Err(e) => {
                log::debug!("Search failed: {e:?}");
                return SearchOutcome::Failed(e);
            }
        };

        let document = MarkdownDocument::new(markdown);
        match self.frontend.open_document(&document).await {
            Ok(()) => SearchOutcome::Displayed(document),
            Err(e) => SearchOutcome::Failed(SearchError::OpenDocument(e.to_string())),
        }
    }

    async fn fetch_markdown(&self, query: &Query) -> Result<Option<String>, SearchError> {
        let reply = self.client.fetch(query).await?;

        if !reply.is_success() {
            return Err(SearchError::HttpStatus {
                status: reply.status,
                body: reply.body,
            });
        }

        ApiResponse::from_body(&reply.body)?.into_markdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use crate::enums::notice_level::NoticeLevel;
    use crate::errors::CodequestError;
    use crate::structs::http_reply::HttpReply;
    use crate::structs::notice::Notice;
    use crate::traits::frontend::MockFrontend;
    use crate::traits::search_client::MockSearchClient;

    fn client_replying(status: u16, body: &'static str) -> MockSearchClient {
        let mut client = MockSearchClient::new();
        client
            .expect_fetch()
            .times(1)
            .returning(move |_| Ok(HttpReply::new(status, body)));
        client
    }

    fn expect_notice(frontend: &mut MockFrontend, expected: Notice) {
        frontend
            .expect_show_notice()
            .with(eq(expected))
            .times(1)
            .return_const(());
    }

    #[tokio::test]
    async fn prompts_with_question_text() {
        let mut frontend = MockFrontend::new();
        frontend
            .expect_prompt_query()
            .withf(|prompt, placeholder| prompt == "Enter your question:" && placeholder == "Type your question here...")
            .times(1)
            .returning(|_, _| Some("where is auth handled?".to_string()));
        frontend.expect_open_document().times(1).returning(|_| Ok(()));

        let mut client = MockSearchClient::new();
        client
            .expect_fetch()
            .withf(|query| query.as_str() == "where is auth handled?")
            .times(1)
            .returning(|_| Ok(HttpReply::new(200, r#"{"markdown": "In `auth.rs`."}"#)));

        let outcome = QueryDispatcher::new(client, frontend).run().await;
        assert!(matches!(outcome, SearchOutcome::Displayed(doc) if doc.content == "In `auth.rs`."));
    }

    #[tokio::test]
    async fn cancelled_or_empty_input_sends_nothing() {
        for raw in [None, Some(String::new()), Some("   ".to_string())] {
            let mut client = MockSearchClient::new();
            client.expect_fetch().never();

            let mut frontend = MockFrontend::new();
            expect_notice(&mut frontend, Notice::info("No query provided."));
            frontend.expect_open_document().never();

            let outcome = QueryDispatcher::new(client, frontend).dispatch(raw).await;
            assert_eq!(outcome, SearchOutcome::Cancelled);
        }
    }

    #[tokio::test]
    async fn server_error_body_is_shown_verbatim() {
        let mut frontend = MockFrontend::new();
        expect_notice(&mut frontend, Notice::error("API Error: server exploded"));
        frontend.expect_open_document().never();

        let outcome = QueryDispatcher::new(client_replying(500, "server exploded"), frontend)
            .dispatch(Some("anything".to_string()))
            .await;

        assert_eq!(
            outcome,
            SearchOutcome::Failed(SearchError::HttpStatus { status: 500, body: "server exploded".to_string() })
        );
    }

    #[tokio::test]
    async fn markdown_opens_a_markdown_document() {
        let mut frontend = MockFrontend::new();
        frontend.expect_show_notice().never();
        frontend
            .expect_open_document()
            .withf(|doc| doc.content == "# Hello" && doc.language == "markdown")
            .times(1)
            .returning(|_| Ok(()));

        let outcome = QueryDispatcher::new(client_replying(200, r##"{"markdown": "# Hello"}"##), frontend)
            .dispatch(Some("hello".to_string()))
            .await;

        assert!(matches!(outcome, SearchOutcome::Displayed(doc) if doc.content == "# Hello"));
    }

    #[tokio::test]
    async fn application_errors_are_joined_into_one_notice() {
        let mut frontend = MockFrontend::new();
        frontend
            .expect_show_notice()
            .withf(|notice| {
                notice.level == NoticeLevel::Error
                    && notice.message.contains("bad query")
                    && notice.message.contains("rate limited")
            })
            .times(1)
            .return_const(());
        frontend.expect_open_document().never();

        let outcome = QueryDispatcher::new(
            client_replying(200, r#"{"errors": ["bad query", "rate limited"]}"#),
            frontend,
        )
        .dispatch(Some("q".to_string()))
        .await;

        assert!(outcome.is_failure());
    }

    #[tokio::test]
    async fn empty_object_means_no_results() {
        let mut frontend = MockFrontend::new();
        expect_notice(&mut frontend, Notice::info("No results found."));
        frontend.expect_open_document().never();

        let outcome = QueryDispatcher::new(client_replying(200, "{}"), frontend)
            .dispatch(Some("q".to_string()))
            .await;

        assert_eq!(outcome, SearchOutcome::NoResults);
    }

    #[tokio::test]
    async fn array_body_means_no_results() {
        let mut frontend = MockFrontend::new();
        expect_notice(&mut frontend, Notice::info("No results found."));
        frontend.expect_open_document().never();

        let outcome = QueryDispatcher::new(client_replying(200, r#"["x", ["e"]]"#), frontend)
            .dispatch(Some("q".to_string()))
            .await;

        assert_eq!(outcome, SearchOutcome::NoResults);
    }

    #[tokio::test]
    async fn errors_win_over_markdown() {
        let mut frontend = MockFrontend::new();
        expect_notice(&mut frontend, Notice::error("API returned errors: stale index"));
        frontend.expect_open_document().never();

        let outcome = QueryDispatcher::new(
            client_replying(200, r##"{"markdown": "# Stale", "errors": ["stale index"]}"##),
            frontend,
        )
        .dispatch(Some("q".to_string()))
        .await;

        assert_eq!(
            outcome,
            SearchOutcome::Failed(SearchError::Application(vec!["stale index".to_string()]))
        );
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let mut client = MockSearchClient::new();
        client
            .expect_fetch()
            .times(1)
            .returning(|_| Err(SearchError::transport("dns error: no such host")));

        let mut frontend = MockFrontend::new();
        expect_notice(&mut frontend, Notice::error("Error fetching API: dns error: no such host"));

        let outcome = QueryDispatcher::new(client, frontend)
            .dispatch(Some("q".to_string()))
            .await;

        assert!(outcome.is_failure());
    }

    #[tokio::test]
    async fn undecodable_success_body_is_a_transport_failure() {
        let mut frontend = MockFrontend::new();
        frontend
            .expect_show_notice()
            .withf(|notice| notice.level == NoticeLevel::Error && notice.message.starts_with("Error fetching API: "))
            .times(1)
            .return_const(());
        frontend.expect_open_document().never();

        let outcome = QueryDispatcher::new(client_replying(200, "<html>gateway</html>"), frontend)
            .dispatch(Some("q".to_string()))
            .await;

        assert!(matches!(outcome, SearchOutcome::Failed(SearchError::Transport(_))));
    }

    #[tokio::test]
    async fn failing_document_view_becomes_an_error_notice() {
        let mut frontend = MockFrontend::new();
        frontend
            .expect_open_document()
            .times(1)
            .returning(|_| Err(CodequestError::system_error("write", "broken pipe")));
        frontend
            .expect_show_notice()
            .withf(|notice| notice.message.starts_with("Failed to open document: "))
            .times(1)
            .return_const(());

        let outcome = QueryDispatcher::new(client_replying(200, r#"{"markdown": "text"}"#), frontend)
            .dispatch(Some("q".to_string()))
            .await;

        assert!(matches!(outcome, SearchOutcome::Failed(SearchError::OpenDocument(_))));
    }

    #[tokio::test]
    async fn overlapping_searches_complete_independently() {
        let mut client = MockSearchClient::new();
        client.expect_fetch().times(2).returning(|query| {
            let body = format!(r#"{{"markdown": "answer to {}"}}"#, query.as_str());
            Ok(HttpReply::new(200, body))
        });

        let mut frontend = MockFrontend::new();
        frontend.expect_open_document().times(2).returning(|_| Ok(()));

        let dispatcher = QueryDispatcher::new(client, frontend);
        let (first, second) = tokio::join!(
            dispatcher.dispatch(Some("one".to_string())),
            dispatcher.dispatch(Some("two".to_string()))
        );

        assert!(matches!(first, SearchOutcome::Displayed(doc) if doc.content == "answer to one"));
        assert!(matches!(second, SearchOutcome::Displayed(doc) if doc.content == "answer to two"));
    }
}
