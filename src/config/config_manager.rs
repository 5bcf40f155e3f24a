use std::fs;
use std::path::{Path, PathBuf};
use reqwest::header::HeaderName;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENDPOINT_ENV};
use crate::errors::{CodequestError, CodequestResult};
use crate::structs::api_key::ApiKey;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::config::config::Config;
use crate::structs::search_endpoint::SearchEndpoint;
use crate::structs::search_settings::SearchSettings;

/// Looks up an environment variable; injected so resolution can be tested.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

const SAMPLE_CONFIG: &str = r#"# CodeQuest configuration

[api]
# Search endpoint; the question is sent as ?query=<question>
base_url = "https://7x377tr6i2.execute-api.us-east-1.amazonaws.com/Prod/code/search/"
query_param = "query"

# Header carrying the API key
api_key_header = "api_key"

# The key is read from this environment variable first, then from api_key below
api_key_env = "CODEQUEST_API_KEY"
# api_key = ""

# Fail before prompting when no key can be found
require_api_key = false

[output]
# Also save every answer as an untitled markdown file in this directory
# save_dir = "/home/user/codequest-answers"

# Rule width when the terminal size is unknown
rule_width = 80
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config from `path`, or from the default location when `path`
    /// is `None`. A missing default file yields the built-in defaults; a
    /// missing explicit file is an error.
    pub fn load(path: Option<&Path>, env: EnvLookup<'_>) -> CodequestResult<Config> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CodequestError::ConfigurationFileError {
                        path: path.display().to_string(),
                        reason: "file does not exist".to_string(),
                    });
                }
                Some(path.to_path_buf())
            }
            None => Self::default_config_path().filter(|p| p.exists()),
        };

        let mut config = match config_path {
            Some(config_path) => {
                log::info!("📋 Loading config from: {}", config_path.display());
                let content = fs::read_to_string(&config_path).map_err(|e| CodequestError::ConfigurationFileError {
                    path: config_path.display().to_string(),
                    reason: e.to_string(),
                })?;
                Self::parse(&content)?
            }
            None => {
                log::debug!("No config file found, using defaults");
                Config::default()
            }
        };

        Self::apply_env_overrides(&mut config, env);
        Ok(config)
    }

    pub fn parse(content: &str) -> CodequestResult<Config> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env_overrides(config: &mut Config, env: EnvLookup<'_>) {
        if let Some(endpoint) = env(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("Endpoint overridden by {ENDPOINT_ENV}");
            config.api.base_url = endpoint;
        }
    }

    /// Environment variable first, then the inline key, else empty.
    pub fn resolve_api_key(api: &ApiConfig, env: EnvLookup<'_>) -> CodequestResult<ApiKey> {
        let key = env(&api.api_key_env)
            .filter(|v| !v.is_empty())
            .or_else(|| api.api_key.clone().filter(|v| !v.is_empty()))
            .unwrap_or_default();

        if key.is_empty() && api.require_api_key {
            return Err(CodequestError::config_error(
                "an API key is required but none was found",
                Some("api.api_key"),
                Some(&format!("Export {} or set api.api_key in the config file", api.api_key_env)),
            ));
        }

        ApiKey::new(&key)
    }

    pub fn resolve_settings(config: &Config, env: EnvLookup<'_>) -> CodequestResult<SearchSettings> {
        let endpoint = SearchEndpoint::new(&config.api.base_url, &config.api.query_param)?;
        let api_key_header = Self::header_name(&config.api.api_key_header)?;
        let api_key = Self::resolve_api_key(&config.api, env)?;

        Ok(SearchSettings {
            endpoint,
            api_key_header,
            api_key,
            output: config.output.clone(),
        })
    }

    fn header_name(name: &str) -> CodequestResult<HeaderName> {
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            CodequestError::validation_error(
                "api.api_key_header",
                name,
                "must be a valid HTTP header name",
                Some("The default header is \"api_key\""),
            )
        })
    }

    /// Writes the sample config to `path` (or the default location) and
    /// returns where it went. Never overwrites an existing file.
    pub fn create_sample_config(path: Option<&Path>) -> CodequestResult<PathBuf> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path().ok_or_else(|| {
                CodequestError::system_error("locating home directory", "no home directory for the current user")
            })?,
        };

        if config_file_path.exists() {
            return Err(CodequestError::file_error(
                &config_file_path.display().to_string(),
                "create config",
                "file already exists",
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)
            .map_err(|e| CodequestError::file_error(&config_file_path.display().to_string(), "write", &e.to_string()))?;

        Ok(config_file_path)
    }

    /// Collects every problem instead of stopping at the first one.
    pub fn validate_config(config: &Config, env: EnvLookup<'_>) -> Result<(), Vec<CodequestError>> {
        let mut errors = Vec::new();

        if let Err(e) = SearchEndpoint::new(&config.api.base_url, &config.api.query_param) {
            errors.push(e);
        }

        if let Err(e) = Self::header_name(&config.api.api_key_header) {
            errors.push(e);
        }

        if config.api.api_key_env.trim().is_empty() {
            errors.push(CodequestError::validation_error(
                "api.api_key_env",
                &config.api.api_key_env,
                "must not be empty",
                None,
            ));
        }

        if let Err(e) = Self::resolve_api_key(&config.api, env) {
            errors.push(e);
        }

        if config.output.rule_width == 0 {
            errors.push(CodequestError::validation_error(
                "output.rule_width",
                "0",
                "must be greater than zero",
                None,
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
