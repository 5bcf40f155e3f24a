use async_trait::async_trait;
use reqwest::header::HeaderName;
use reqwest::Client;
use crate::enums::search_error::SearchError;
use crate::errors::CodequestResult;
use crate::structs::api_key::ApiKey;
use crate::structs::http_reply::HttpReply;
use crate::structs::query::Query;
use crate::structs::search_endpoint::SearchEndpoint;
use crate::structs::search_settings::SearchSettings;
use crate::traits::search_client::SearchClient;

#[derive(Clone)]
pub struct HttpSearchClient {
    client: Client,
    endpoint: SearchEndpoint,
    api_key_header: HeaderName,
    api_key: ApiKey,
}

impl HttpSearchClient {
    pub fn new(settings: &SearchSettings) -> CodequestResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("codequest/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key_header: settings.api_key_header.clone(),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn fetch(&self, query: &Query) -> Result<HttpReply, SearchError> {
        let url = self.endpoint.request_url(query);
        log::debug!("🔎 Searching for \"{query}\": GET {url}");

        let response = self
            .client
            .get(url)
            .header(self.api_key_header.clone(), self.api_key.header_value().clone())
            .send()
            .await
            .map_err(SearchError::transport)?;

        let status = response.status();
        log::debug!("📥 Search API responded with {status}");

        let body = response.text().await.map_err(SearchError::transport)?;

        Ok(HttpReply::new(status.as_u16(), body))
    }
}
