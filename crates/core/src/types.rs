use async_trait::async_trait;
use serde_json::{json, Value};
use std::fmt;

use crate::config::GeneralConfig;
use crate::error::IndexError;

/// Read-only count capability of the document index. Only the ban check
/// depends on it, so tests can substitute their own.
#[async_trait]
pub trait DocumentIndex: Send + Sync {
    async fn count(
        &self,
        index: &str,
        doc_type: &str,
        filter: &TermFilter,
    ) -> Result<u64, IndexError>;
}

/// Exact-match conjunction: every term must hold.
#[derive(Debug, Clone, PartialEq)]
pub struct TermFilter {
    pub must: Vec<(String, Value)>,
}

impl TermFilter {
    pub fn new() -> Self {
        Self { must: Vec::new() }
    }

    pub fn term(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.must.push((field.to_string(), value.into()));
        self
    }

    /// `domain == value AND banned == 1`
    pub fn banned_domain(domain: &str) -> Self {
        Self::new().term("domain", domain).term("banned", 1)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.must.iter().find(|(f, _)| f == field).map(|(_, v)| v)
    }

    /// Body for a `_count` request.
    pub fn to_query(&self) -> Value {
        let must: Vec<Value> = self
            .must
            .iter()
            .map(|(field, value)| json!({ "term": { field: value } }))
            .collect();

        json!({
            "query": {
                "constant_score": {
                    "filter": {
                        "bool": { "must": must }
                    }
                }
            }
        })
    }
}

impl Default for TermFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// What templates see as the deployment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_debug(debug: bool) -> Self {
        if debug {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_development_environment(general: &GeneralConfig) -> bool {
    general.debug
}

pub fn get_environment(general: &GeneralConfig) -> Environment {
    Environment::from_debug(general.debug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banned_domain_query_shape() {
        let q = TermFilter::banned_domain("msydqstlz2kzerdg.onion").to_query();
        let must = &q["query"]["constant_score"]["filter"]["bool"]["must"];

        assert_eq!(must[0]["term"]["domain"], "msydqstlz2kzerdg.onion");
        assert_eq!(must[1]["term"]["banned"], 1);
        assert_eq!(must.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_filter_lookup() {
        let f = TermFilter::banned_domain("example");
        assert_eq!(f.get("domain"), Some(&Value::from("example")));
        assert_eq!(f.get("title"), None);
    }

    #[test]
    fn test_environment_flags() {
        let dev = GeneralConfig { debug: true };
        let prod = GeneralConfig { debug: false };

        assert!(is_development_environment(&dev));
        assert!(!is_development_environment(&prod));
        assert_eq!(get_environment(&dev).as_str(), "development");
        assert_eq!(get_environment(&prod).to_string(), "production");
    }
}
