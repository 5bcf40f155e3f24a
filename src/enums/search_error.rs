use thiserror::Error;

/// Ways a single search can fail once a query has been accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The API answered with a non-success status; the body is kept verbatim.
    #[error("API Error: {body}")]
    HttpStatus { status: u16, body: String },

    /// The request never completed, or its body could not be read or decoded.
    #[error("Error fetching API: {0}")]
    Transport(String),

    /// The API answered successfully but reported errors of its own.
    #[error("API returned errors: {}", .0.join(", "))]
    Application(Vec<String>),

    /// The answer arrived but the host could not show it.
    #[error("Failed to open document: {0}")]
    OpenDocument(String),
}

impl SearchError {
    pub fn transport(error: impl std::fmt::Display) -> Self {
        Self::Transport(error.to_string())
    }
}
