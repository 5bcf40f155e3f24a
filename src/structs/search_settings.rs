use reqwest::header::HeaderName;
use crate::structs::api_key::ApiKey;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::search_endpoint::SearchEndpoint;

/// Everything a search needs, resolved once from config and environment.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub endpoint: SearchEndpoint,
    pub api_key_header: HeaderName,
    pub api_key: ApiKey,
    pub output: OutputConfig,
}
