use std::fmt;
use reqwest::header::HeaderValue;
use crate::errors::{CodequestError, CodequestResult};

/// API key sent with every search, already checked to be a valid header value.
/// May be empty when the API does not require one.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(HeaderValue);

impl ApiKey {
    pub fn new(key: &str) -> CodequestResult<Self> {
        let mut value = HeaderValue::from_str(key).map_err(|_| {
            CodequestError::validation_error("api.api_key", "***", "must only contain visible ASCII characters", None)
        })?;
        value.set_sensitive(true);
        Ok(Self(value))
    }

    pub const fn header_value(&self) -> &HeaderValue {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ApiKey {
    fn default() -> Self {
        Self(HeaderValue::from_static(""))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("ApiKey(<empty>)")
        } else {
            f.write_str("ApiKey(***)")
        }
    }
}
