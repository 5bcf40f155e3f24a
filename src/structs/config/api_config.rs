use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_query_param")]
    pub query_param: String,

    #[serde(default = "ConfigHelper::default_api_key_header")]
    pub api_key_header: String,

    /// Inline key; the environment variable named by `api_key_env` wins over it.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default)]
    pub require_api_key: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            query_param: ConfigHelper::default_query_param(),
            api_key_header: ConfigHelper::default_api_key_header(),
            api_key: None,
            api_key_env: ConfigHelper::default_api_key_env(),
            require_api_key: false,
        }
    }
}
