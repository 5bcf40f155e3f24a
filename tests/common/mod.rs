use std::sync::Mutex;
use async_trait::async_trait;
use codequest::config::config_manager::ConfigManager;
use codequest::errors::CodequestResult;
use codequest::services::http_search_client::HttpSearchClient;
use codequest::services::query_dispatcher::QueryDispatcher;
use codequest::structs::config::config::Config;
use codequest::structs::markdown_document::MarkdownDocument;
use codequest::structs::notice::Notice;
use codequest::traits::frontend::Frontend;

/// Frontend that answers the prompt with a fixed reply and records what it was asked to show.
#[derive(Default)]
pub struct RecordingFrontend {
    pub reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
    pub notices: Mutex<Vec<Notice>>,
    pub documents: Mutex<Vec<MarkdownDocument>>,
}

impl RecordingFrontend {
    pub fn replying(reply: Option<&str>) -> Self {
        Self {
            reply: reply.map(ToString::to_string),
            ..Self::default()
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn documents(&self) -> Vec<MarkdownDocument> {
        self.documents.lock().unwrap().clone()
    }
}

#[async_trait]
impl Frontend for RecordingFrontend {
    async fn prompt_query(&self, prompt: &str, _placeholder: &str) -> Option<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }

    fn show_notice(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }

    async fn open_document(&self, document: &MarkdownDocument) -> CodequestResult<()> {
        self.documents.lock().unwrap().push(document.clone());
        Ok(())
    }
}

pub fn dispatcher_for(
    base_url: &str,
    api_key: Option<&str>,
    frontend: RecordingFrontend,
) -> QueryDispatcher<HttpSearchClient, RecordingFrontend> {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.api_key = api_key.map(ToString::to_string);

    let settings = ConfigManager::resolve_settings(&config, &|_: &str| None).unwrap();
    let client = HttpSearchClient::new(&settings).unwrap();
    QueryDispatcher::new(client, frontend)
}
