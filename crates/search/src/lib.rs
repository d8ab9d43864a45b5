use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use ahmia_core::config::ElasticsearchConfig;
use ahmia_core::{DocumentIndex, IndexError, TermFilter};

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

/// Elasticsearch over HTTP, `_count` endpoint only.
pub struct ElasticsearchIndex {
    client: reqwest::Client,
    base_url: Url,
}

impl ElasticsearchIndex {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, IndexError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| IndexError::Config(format!("bad elasticsearch url {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(IndexError::Config(format!(
                "elasticsearch url {base_url} cannot be a base"
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IndexError::Config(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(cfg: &ElasticsearchConfig) -> Result<Self, IndexError> {
        Self::new(&cfg.url, Duration::from_secs(cfg.timeout_seconds))
    }

    /// `{base}/{index}/{doc_type}/_count`; an empty doc type is left out.
    fn count_url(&self, index: &str, doc_type: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(index);
            if !doc_type.is_empty() {
                segments.push(doc_type);
            }
            segments.push("_count");
        }
        url
    }
}

fn transport_error(e: reqwest::Error) -> IndexError {
    IndexError::Transport(e.to_string())
}

fn parse_count(body: &[u8]) -> Result<u64, IndexError> {
    serde_json::from_slice::<CountResponse>(body)
        .map(|r| r.count)
        .map_err(|e| IndexError::Decode(e.to_string()))
}

#[async_trait]
impl DocumentIndex for ElasticsearchIndex {
    async fn count(
        &self,
        index: &str,
        doc_type: &str,
        filter: &TermFilter,
    ) -> Result<u64, IndexError> {
        let url = self.count_url(index, doc_type);
        debug!(url = %url, "elasticsearch count");

        let resp = self
            .client
            .post(url)
            .json(&filter.to_query())
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(IndexError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body[..body.len().min(200)]).into_owned(),
            });
        }

        parse_count(&body)
    }
}
