use std::fmt;

/// A search question that is known to contain something besides whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Accepts raw input from a prompt or argument. `None` (cancelled) and
    /// blank input are rejected. Accepted text is kept exactly as typed.
    pub fn parse(raw: Option<String>) -> Option<Self> {
        raw.filter(|text| !text.trim().is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
