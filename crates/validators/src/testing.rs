//! In-memory stand-ins for the document index.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use ahmia_core::config::ElasticsearchConfig;
use ahmia_core::{DocumentIndex, IndexError, TermFilter};

pub fn es_config() -> ElasticsearchConfig {
    ElasticsearchConfig {
        url: "http://localhost:9200".to_string(),
        tor_index: "tor-test".to_string(),
        doc_type: "doc".to_string(),
        timeout_seconds: 1,
    }
}

/// Answers counts from a fixed set of banned domains and records every query.
pub struct FakeIndex {
    banned: Vec<String>,
    calls: Mutex<Vec<(String, String, TermFilter)>>,
}

impl FakeIndex {
    pub fn with_banned(domains: &[&str]) -> Self {
        Self {
            banned: domains.iter().map(|d| d.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String, TermFilter)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentIndex for FakeIndex {
    async fn count(
        &self,
        index: &str,
        doc_type: &str,
        filter: &TermFilter,
    ) -> Result<u64, IndexError> {
        self.calls
            .lock()
            .unwrap()
            .push((index.to_string(), doc_type.to_string(), filter.clone()));

        let wants_banned = filter.get("banned") == Some(&Value::from(1));
        let hit = match filter.get("domain").and_then(Value::as_str) {
            Some(domain) => wants_banned && self.banned.iter().any(|b| b == domain),
            None => false,
        };
        Ok(hit as u64)
    }
}

/// Every query fails as if the cluster were unreachable.
pub struct FailingIndex;

#[async_trait]
impl DocumentIndex for FailingIndex {
    async fn count(&self, _: &str, _: &str, _: &TermFilter) -> Result<u64, IndexError> {
        Err(IndexError::Transport("connection refused".to_string()))
    }
}
