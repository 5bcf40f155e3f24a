use crate::config::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_API_KEY_HEADER, DEFAULT_BASE_URL, DEFAULT_QUERY_PARAM, DEFAULT_RULE_WIDTH,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_query_param() -> String {
        DEFAULT_QUERY_PARAM.to_string()
    }

    pub fn default_api_key_header() -> String {
        DEFAULT_API_KEY_HEADER.to_string()
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub const fn default_rule_width() -> usize {
        DEFAULT_RULE_WIDTH
    }
}
