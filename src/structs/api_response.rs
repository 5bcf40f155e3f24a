use serde::Deserialize;
use serde_json::Value;
use crate::enums::search_error::SearchError;

/// Body returned by the search API. Unknown fields are ignored.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl ApiResponse {
    /// Only a JSON object can carry `markdown` or `errors`; any other value
    /// decodes to a response with neither. `null` and unparseable text fail.
    pub fn from_body(body: &str) -> Result<Self, SearchError> {
        match serde_json::from_str(body).map_err(SearchError::transport)? {
            Value::Object(fields) => serde_json::from_value(Value::Object(fields)).map_err(SearchError::transport),
            Value::Null => Err(SearchError::transport("response body is null")),
            _ => Ok(Self::default()),
        }
    }

    /// Reported errors win over markdown; empty markdown counts as no result.
    pub fn into_markdown(self) -> Result<Option<String>, SearchError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(SearchError::Application(errors));
        }

        Ok(self.markdown.filter(|markdown| !markdown.is_empty()))
    }
}
