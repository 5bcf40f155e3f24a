use url::{form_urlencoded, Url};
use crate::errors::{CodequestError, CodequestResult};
use crate::structs::query::Query;

/// Where search requests go and which query-string parameter carries the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoint {
    base_url: Url,
    query_param: String,
}

impl SearchEndpoint {
    pub fn new(base_url: &str, query_param: &str) -> CodequestResult<Self> {
        let base_url = Url::parse(base_url)?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(CodequestError::validation_error(
                "api.base_url",
                base_url.as_str(),
                "scheme must be http or https",
                None,
            ));
        }

        if query_param.trim().is_empty() {
            return Err(CodequestError::validation_error(
                "api.query_param",
                query_param,
                "must not be empty",
                Some("The default parameter name is \"query\""),
            ));
        }

        Ok(Self {
            base_url,
            query_param: query_param.to_string(),
        })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with its query string replaced by `<param>=<encoded query>`.
    pub fn request_url(&self, query: &Query) -> Url {
        let mut url = self.base_url.clone();
        let query_string = format!(
            "{}={}",
            encode_component(&self.query_param),
            encode_component(query.as_str())
        );
        url.set_query(Some(&query_string));
        url
    }
}

/// Percent-encodes a single query-string component. Spaces become `%20`
/// rather than `+` so that servers which only percent-decode still see them.
pub fn encode_component(value: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so every '+' left is a space.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
