pub const DEFAULT_BASE_URL: &str = "https://7x377tr6i2.execute-api.us-east-1.amazonaws.com/Prod/code/search/";
pub const DEFAULT_QUERY_PARAM: &str = "query";
pub const DEFAULT_API_KEY_HEADER: &str = "api_key";
pub const DEFAULT_API_KEY_ENV: &str = "CODEQUEST_API_KEY";
pub const DEFAULT_RULE_WIDTH: usize = 80;

pub const ENDPOINT_ENV: &str = "CODEQUEST_ENDPOINT";

pub const CONFIG_DIR_NAME: &str = "codequest";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const QUERY_PROMPT: &str = "Enter your question:";
pub const QUERY_PLACEHOLDER: &str = "Type your question here...";

pub const NO_QUERY_MESSAGE: &str = "No query provided.";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
