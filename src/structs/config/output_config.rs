use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// When set, every answer is also written here as an untitled `.md` file.
    #[serde(default)]
    pub save_dir: Option<PathBuf>,

    /// Rule width used when the terminal size cannot be detected.
    #[serde(default = "ConfigHelper::default_rule_width")]
    pub rule_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_dir: None,
            rule_width: ConfigHelper::default_rule_width(),
        }
    }
}
