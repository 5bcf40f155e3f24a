use uuid::Uuid;

pub const MARKDOWN_LANGUAGE: &str = "markdown";

/// A new, unsaved document holding a search answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    pub id: Uuid,
    pub language: &'static str,
    pub content: String,
}

impl MarkdownDocument {
    pub fn new(content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            language: MARKDOWN_LANGUAGE,
            content,
        }
    }

    /// Name used when the document is written out, e.g. `codequest-<uuid>.md`.
    pub fn untitled_file_name(&self) -> String {
        format!("codequest-{}.md", self.id)
    }
}
