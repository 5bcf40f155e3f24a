use crate::config::constants::{NO_QUERY_MESSAGE, NO_RESULTS_MESSAGE};
use crate::enums::search_error::SearchError;
use crate::structs::markdown_document::MarkdownDocument;
use crate::structs::notice::Notice;

/// Terminal state of one search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Cancelled,
    Displayed(MarkdownDocument),
    NoResults,
    Failed(SearchError),
}

impl SearchOutcome {
    /// The notice shown for this outcome, if it is not a document.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Cancelled => Some(Notice::info(NO_QUERY_MESSAGE)),
            Self::NoResults => Some(Notice::info(NO_RESULTS_MESSAGE)),
            Self::Failed(error) => Some(Notice::error(error.to_string())),
            Self::Displayed(_) => None,
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
