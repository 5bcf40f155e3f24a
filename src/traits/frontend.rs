use async_trait::async_trait;
use crate::errors::CodequestResult;
use crate::structs::markdown_document::MarkdownDocument;
use crate::structs::notice::Notice;

/// The host's UI primitives: an input box, transient notices and document views.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Frontend: Send + Sync {
    /// `None` when the user cancels.
    async fn prompt_query(&self, prompt: &str, placeholder: &str) -> Option<String>;

    fn show_notice(&self, notice: &Notice);

    async fn open_document(&self, document: &MarkdownDocument) -> CodequestResult<()>;
}
